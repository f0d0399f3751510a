//! Root app struct.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::{GenerationOutcome, SubmitError, Tone};
use crate::infra::{ClipboardSink, CredentialStore, GenerationService};

use super::state::AppState;
use super::store::{Action, CredentialAction, GenerateAction};

const ACTION_CHANNEL_CAPACITY: usize = 32;

/// Owns the state and the collaborators the runtime drives.
pub struct ReplyApp {
    pub state: AppState,

    pub credentials: Arc<CredentialStore>,
    pub service: Arc<dyn GenerationService>,
    pub clipboard: Arc<dyn ClipboardSink>,

    pub action_tx: mpsc::Sender<Action>,
    pub action_rx: mpsc::Receiver<Action>,
}

impl ReplyApp {
    /// Builds the app and loads the persisted key; without one the key
    /// prompt starts open.
    pub fn new(
        credentials: CredentialStore,
        service: Arc<dyn GenerationService>,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        let mut app = Self {
            state: AppState::default(),
            credentials: Arc::new(credentials),
            service,
            clipboard,
            action_tx,
            action_rx,
        };

        let stored = app.credentials.load();
        match &stored {
            Some(credential) => log::debug!("Loaded stored API key {credential}"),
            None => log::debug!("No stored API key"),
        }
        app.dispatch(Action::Credential(CredentialAction::Loaded(stored)));
        app
    }

    /// Sets the inputs, submits, and drives the action loop until the
    /// outcome of this submission has been applied.
    pub async fn submit(
        &mut self,
        email_content: impl Into<String>,
        tone: Tone,
    ) -> Result<GenerationOutcome, SubmitError> {
        self.dispatch(Action::Generate(GenerateAction::UpdateEmailContent(
            email_content.into(),
        )));
        self.dispatch(Action::Generate(GenerateAction::SelectTone(tone)));
        self.dispatch(Action::Generate(GenerateAction::Submit));

        if let Some(rejection) = self.state.session.last_rejection {
            return Err(rejection);
        }

        while self.state.session.busy {
            let Some(action) = self.action_rx.recv().await else {
                break;
            };
            self.dispatch(action);
        }

        Ok(self
            .state
            .session
            .last_outcome
            .clone()
            .unwrap_or(GenerationOutcome::TransientFailure))
    }
}
