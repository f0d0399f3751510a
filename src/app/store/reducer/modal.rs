use super::super::action::ModalAction;
use super::super::command::Command;
use crate::app::state::AppState;

/// Inputs to the key prompt's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    CredentialAbsent,
    CredentialSaved,
    UserRequestsChange,
    UserCancels,
    AuthRejectedByServer,
}

/// Next visibility of the prompt. Cancelling without a key is not allowed,
/// so it leaves the prompt as it was.
pub fn transition(visible: bool, has_credential: bool, event: ModalEvent) -> bool {
    match event {
        ModalEvent::CredentialAbsent
        | ModalEvent::UserRequestsChange
        | ModalEvent::AuthRejectedByServer => true,
        ModalEvent::CredentialSaved => false,
        ModalEvent::UserCancels if has_credential => false,
        ModalEvent::UserCancels => visible,
    }
}

pub fn apply(state: &mut AppState, event: ModalEvent) {
    let has_credential = state.has_credential();
    let next = transition(state.session.modal_visible, has_credential, event);
    if event == ModalEvent::UserCancels && !has_credential {
        log::debug!("Ignoring modal cancel: no API key stored");
    }
    state.session.modal_visible = next;
}

pub fn reduce(state: &mut AppState, action: ModalAction) -> Vec<Command> {
    match action {
        ModalAction::RequestChange => apply(state, ModalEvent::UserRequestsChange),
        ModalAction::Cancel => apply(state, ModalEvent::UserCancels),
    }
    Vec::new()
}
