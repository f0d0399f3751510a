//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{
    Action, AsyncAction, ClipboardAction, CredentialAction, GenerateAction, ModalAction,
};
pub use command::Command;
pub use reducer::clipboard::COPIED_FEEDBACK;
pub use reducer::modal::ModalEvent;
pub use reducer::reduce;

use super::ReplyApp;

impl ReplyApp {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }
}
