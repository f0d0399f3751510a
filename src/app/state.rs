use crate::domain::{Credential, GenerationOutcome, SubmitError, Tone};

/// All app state in one struct.
#[derive(Clone, Default)]
pub struct AppState {
    /// The accepted API key. Only the credential reducer writes it.
    pub credential: Option<Credential>,
    pub session: SessionState,
}

/// What the user sees for this session. Nothing here is persisted.
#[derive(Clone, Default)]
pub struct SessionState {
    pub modal_visible: bool,
    /// Contents of the key field in the modal.
    pub key_draft: String,
    /// Validation message shown inside the modal.
    pub status_message: Option<String>,

    pub email_content: String,
    pub tone: Tone,

    pub busy: bool,
    pub reply_text: String,
    pub error_message: Option<String>,

    pub copied: bool,
    /// Identifies the latest copy; older timer expiries carry stale tickets.
    pub copy_ticket: u64,

    pub last_outcome: Option<GenerationOutcome>,
    pub last_rejection: Option<SubmitError>,
}

impl AppState {
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Whether the generate control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.session.busy && self.has_credential() && !self.session.email_content.is_empty()
    }

    /// Cancel is only offered once a key exists.
    pub fn can_cancel_modal(&self) -> bool {
        self.has_credential()
    }

    /// Copy only makes sense once there is a reply.
    pub fn can_copy(&self) -> bool {
        !self.session.reply_text.is_empty()
    }
}
