use std::time::Duration;

use super::super::super::ReplyApp;
use crate::app::store::{Action, AsyncAction};

/// Fire-and-forget: a failed copy is logged, never surfaced.
pub fn copy_to_clipboard(app: &mut ReplyApp, text: &str) {
    if let Err(err) = app.clipboard.set_text(text) {
        log::warn!("Failed to copy reply to clipboard: {err:#}");
    }
}

pub fn schedule_copied_reset(app: &mut ReplyApp, ticket: u64, after: Duration) {
    let action_tx = app.action_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        let _ = action_tx
            .send(Action::Async(AsyncAction::CopiedExpired { ticket }))
            .await;
    });
}
