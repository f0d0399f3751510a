use super::super::super::ReplyApp;
use crate::app::store::{Action, AsyncAction};
use crate::domain::Credential;

pub fn persist_credential(
    app: &mut ReplyApp,
    credential: Credential,
    previous: Option<Credential>,
) {
    if let Err(err) = app.credentials.save(credential.expose()) {
        log::error!("Failed to persist API key {}: {}", credential, err);
        report(
            app,
            AsyncAction::CredentialPersistFailed {
                attempted: credential,
                previous,
                message: err.to_string(),
            },
        );
    }
}

pub fn delete_credential(app: &mut ReplyApp, previous: Option<Credential>) {
    if let Err(err) = app.credentials.remove() {
        log::error!("Failed to remove stored API key: {err}");
        report(
            app,
            AsyncAction::CredentialRemoveFailed {
                previous,
                message: err.to_string(),
            },
        );
    }
}

fn report(app: &ReplyApp, action: AsyncAction) {
    if let Err(err) = app.action_tx.try_send(Action::Async(action)) {
        log::error!("Dropped credential storage failure report: {err}");
    }
}
