use super::super::action::GenerateAction;
use super::super::command::Command;
use super::modal::{self, ModalEvent};
use crate::app::state::AppState;
use crate::domain::{GenerationOutcome, GenerationRequest, SubmitError};

/// Checks run before anything leaves the process.
///
/// Blank content is checked before the key on purpose: an empty submission is
/// always reported as `EmptyContent`, with or without a stored key. A missing
/// key still reopens the prompt either way (see `reduce`).
pub fn check_submit(state: &AppState) -> Result<GenerationRequest, SubmitError> {
    if state.session.busy {
        return Err(SubmitError::AlreadyInFlight);
    }
    if state.session.email_content.trim().is_empty() {
        return Err(SubmitError::EmptyContent);
    }
    let Some(credential) = state.credential.clone() else {
        return Err(SubmitError::MissingCredential);
    };
    Ok(GenerationRequest {
        email_content: state.session.email_content.clone(),
        tone: state.session.tone,
        credential,
    })
}

pub fn reduce(state: &mut AppState, action: GenerateAction) -> Vec<Command> {
    match action {
        GenerateAction::UpdateEmailContent(text) => {
            state.session.email_content = text;
            Vec::new()
        }
        GenerateAction::SelectTone(tone) => {
            state.session.tone = tone;
            Vec::new()
        }
        GenerateAction::Submit => {
            state.session.last_rejection = None;
            match check_submit(state) {
                Ok(request) => {
                    state.session.last_outcome = None;
                    state.session.busy = true;
                    state.session.error_message = None;
                    state.session.reply_text.clear();
                    state.session.copied = false;
                    vec![Command::StartGeneration {
                        request: Box::new(request),
                    }]
                }
                Err(SubmitError::AlreadyInFlight) => {
                    log::debug!("Submit ignored: a request is already in flight");
                    state.session.last_rejection = Some(SubmitError::AlreadyInFlight);
                    Vec::new()
                }
                Err(err) => {
                    state.session.error_message = Some(err.to_string());
                    state.session.last_rejection = Some(err);
                    if !state.has_credential() {
                        modal::apply(state, ModalEvent::CredentialAbsent);
                    }
                    Vec::new()
                }
            }
        }
    }
}

pub fn reduce_finished(state: &mut AppState, outcome: GenerationOutcome) -> Vec<Command> {
    state.session.busy = false;
    state.session.error_message = outcome.error_message().map(str::to_string);
    match &outcome {
        GenerationOutcome::Success { reply_text } => {
            state.session.reply_text = reply_text.clone();
        }
        GenerationOutcome::AuthRejected => {
            modal::apply(state, ModalEvent::AuthRejectedByServer);
        }
        GenerationOutcome::TransientFailure => {}
    }
    state.session.last_outcome = Some(outcome);
    Vec::new()
}
