//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (filesystem, HTTP, clipboard).

pub mod app_config;
pub mod clipboard;
pub mod credential_store;
pub mod generation;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use credential_store::{
    CredentialBackend, CredentialStore, FileCredentialBackend, MemoryCredentialBackend,
};
pub use generation::{GenerationService, HttpGenerationService};
