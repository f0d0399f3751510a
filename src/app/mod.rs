//! Application state and the reducer/runtime loop around it.
//!
//! Front ends feed user input in as [`Action`]s through
//! [`ReplyApp::dispatch`] and render from [`ReplyApp::state`]. Asynchronous
//! work (HTTP, timers) reports back over the action channel and is applied
//! by [`ReplyApp::poll_action_messages`] or [`ReplyApp::next_action`].

mod polling;
mod root;
mod state;
mod store;

pub use root::ReplyApp;
pub use state::{AppState, SessionState};
pub use store::{
    Action, AsyncAction, COPIED_FEEDBACK, ClipboardAction, Command, CredentialAction,
    GenerateAction, ModalAction, ModalEvent, reduce,
};
