//! Domain error types for replydesk.
//!
//! The `Display` text of each variant is the message shown to the user, so
//! the state machine can surface an error by simply formatting it.

use thiserror::Error;

/// Errors raised while accepting or storing a credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("API key cannot be empty!")]
    Empty,

    #[error("Invalid API key format. Gemini keys usually start with 'AI'")]
    InvalidFormat,

    #[error("Failed to store API key: {0}")]
    Storage(String),

    #[error("Failed to remove API key: {0}")]
    Removal(String),
}

/// Precondition failures of a submit. None of them costs a network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please set your Gemini API key first!")]
    MissingCredential,

    #[error("Email content must not be empty!")]
    EmptyContent,

    #[error("A reply is already being generated.")]
    AlreadyInFlight,
}

/// Failures reported by the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("generation service rejected the API key")]
    Unauthorized,

    #[error("generation service returned HTTP {0}")]
    Status(u16),

    #[error("generation service unreachable: {0}")]
    Transport(String),

    #[error("unreadable generation response: {0}")]
    Body(String),
}

impl GenerationError {
    pub fn is_auth(&self) -> bool {
        matches!(self, GenerationError::Unauthorized)
    }
}
