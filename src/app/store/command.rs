use std::time::Duration;

use crate::domain::{Credential, GenerationRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `previous` is the key the session held before, restored if the write
    /// fails.
    PersistCredential {
        credential: Credential,
        previous: Option<Credential>,
    },
    DeleteCredential {
        previous: Option<Credential>,
    },
    StartGeneration {
        request: Box<GenerationRequest>,
    },
    CopyToClipboard {
        text: String,
    },
    ScheduleCopiedReset {
        ticket: u64,
        after: Duration,
    },
}
