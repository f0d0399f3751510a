use std::time::Duration;

use super::super::action::ClipboardAction;
use super::super::command::Command;
use crate::app::state::AppState;

/// How long the "copied" indicator stays up after the latest copy.
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(2000);

pub fn reduce(state: &mut AppState, action: ClipboardAction) -> Vec<Command> {
    match action {
        ClipboardAction::Copy => {
            if !state.can_copy() {
                return Vec::new();
            }
            state.session.copied = true;
            state.session.copy_ticket = state.session.copy_ticket.wrapping_add(1);
            vec![
                Command::CopyToClipboard {
                    text: state.session.reply_text.clone(),
                },
                Command::ScheduleCopiedReset {
                    ticket: state.session.copy_ticket,
                    after: COPIED_FEEDBACK,
                },
            ]
        }
    }
}

pub fn reduce_expired(state: &mut AppState, ticket: u64) -> Vec<Command> {
    if ticket == state.session.copy_ticket {
        state.session.copied = false;
    }
    Vec::new()
}
