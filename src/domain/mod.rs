//! Domain types for replydesk
//! Credentials, generation requests and their classified outcomes.

pub mod credential;
pub mod error;
pub mod generation;

pub use credential::*;
pub use error::*;
pub use generation::*;
