use super::super::super::ReplyApp;
use crate::app::store::{Action, AsyncAction};
use crate::domain::{GenerationOutcome, GenerationRequest};

/// Runs one request and always reports back exactly one outcome, even if the
/// service call panics.
pub fn start_generation(app: &mut ReplyApp, request: GenerationRequest) {
    let service = app.service.clone();
    let action_tx = app.action_tx.clone();

    tokio::spawn(async move {
        let call = tokio::spawn(async move { service.generate(&request).await });
        let outcome = match call.await {
            Ok(result) => GenerationOutcome::classify(result),
            Err(err) => {
                log::error!("Generation task failed: {err}");
                GenerationOutcome::TransientFailure
            }
        };

        let _ = action_tx
            .send(Action::Async(AsyncAction::GenerationFinished(outcome)))
            .await;
    });
}
