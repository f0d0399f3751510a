pub mod clipboard;
pub mod credential;
pub mod generate;
pub mod modal;

use super::super::state::AppState;
use super::action::{Action, AsyncAction};
use super::command::Command;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Credential(action) => credential::reduce(state, action),
        Action::Modal(action) => modal::reduce(state, action),
        Action::Generate(action) => generate::reduce(state, action),
        Action::Clipboard(action) => clipboard::reduce(state, action),
        Action::Async(action) => reduce_async(state, action),
    }
}

fn reduce_async(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::GenerationFinished(outcome) => generate::reduce_finished(state, outcome),
        AsyncAction::CredentialPersistFailed {
            attempted,
            previous,
            message,
        } => credential::reduce_persist_failed(state, attempted, previous, message),
        AsyncAction::CredentialRemoveFailed { previous, message } => {
            credential::reduce_remove_failed(state, previous, message)
        }
        AsyncAction::CopiedExpired { ticket } => clipboard::reduce_expired(state, ticket),
    }
}
