use super::super::action::CredentialAction;
use super::super::command::Command;
use super::modal::{self, ModalEvent};
use crate::app::state::AppState;
use crate::domain::Credential;

pub fn reduce(state: &mut AppState, action: CredentialAction) -> Vec<Command> {
    match action {
        CredentialAction::Loaded(credential) => {
            state.credential = credential;
            if state.has_credential() {
                state.session.modal_visible = false;
            } else {
                modal::apply(state, ModalEvent::CredentialAbsent);
            }
            Vec::new()
        }
        CredentialAction::EditDraft(text) => {
            state.session.key_draft = text;
            state.session.status_message = None;
            Vec::new()
        }
        CredentialAction::Save => match Credential::parse(&state.session.key_draft) {
            Ok(credential) => {
                let previous = state.credential.replace(credential.clone());
                state.session.status_message = None;
                state.session.key_draft.clear();
                modal::apply(state, ModalEvent::CredentialSaved);
                vec![Command::PersistCredential {
                    credential,
                    previous,
                }]
            }
            Err(err) => {
                state.session.status_message = Some(err.to_string());
                Vec::new()
            }
        },
        CredentialAction::Remove => {
            let previous = state.credential.take();
            state.session.status_message = None;
            modal::apply(state, ModalEvent::CredentialAbsent);
            vec![Command::DeleteCredential { previous }]
        }
    }
}

/// The write behind a save failed: the session falls back to whatever key is
/// still on disk and the prompt reopens with the failed key in the field.
pub fn reduce_persist_failed(
    state: &mut AppState,
    attempted: Credential,
    previous: Option<Credential>,
    message: String,
) -> Vec<Command> {
    state.credential = previous;
    state.session.key_draft = attempted.expose().to_string();
    state.session.status_message = Some(message);
    let event = if state.has_credential() {
        ModalEvent::UserRequestsChange
    } else {
        ModalEvent::CredentialAbsent
    };
    modal::apply(state, event);
    Vec::new()
}

/// The stored key could not be deleted, so it is still what the next session
/// loads. Restore it and keep the prompt up with the error.
pub fn reduce_remove_failed(
    state: &mut AppState,
    previous: Option<Credential>,
    message: String,
) -> Vec<Command> {
    state.credential = previous;
    state.session.status_message = Some(message);
    modal::apply(state, ModalEvent::UserRequestsChange);
    Vec::new()
}
