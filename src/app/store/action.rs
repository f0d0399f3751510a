use crate::domain::{Credential, GenerationOutcome, Tone};

#[derive(Debug)]
pub enum Action {
    Credential(CredentialAction),
    Modal(ModalAction),
    Generate(GenerateAction),
    Clipboard(ClipboardAction),
    Async(AsyncAction),
}

#[derive(Debug)]
pub enum CredentialAction {
    /// Result of reading the persisted key at startup.
    Loaded(Option<Credential>),
    /// User is typing in the key field
    EditDraft(String),
    /// Accept the current draft
    Save,
    Remove,
}

#[derive(Debug)]
pub enum ModalAction {
    RequestChange,
    Cancel,
}

#[derive(Debug)]
pub enum GenerateAction {
    UpdateEmailContent(String),
    SelectTone(Tone),
    Submit,
}

#[derive(Debug)]
pub enum ClipboardAction {
    Copy,
}

#[derive(Debug)]
pub enum AsyncAction {
    GenerationFinished(GenerationOutcome),
    CredentialPersistFailed {
        attempted: Credential,
        previous: Option<Credential>,
        message: String,
    },
    CredentialRemoveFailed {
        previous: Option<Credential>,
        message: String,
    },
    CopiedExpired { ticket: u64 },
}
