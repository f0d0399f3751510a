use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::{GenerationError, GenerationRequest, ReplyPayload};

/// The external service that turns an email into a reply.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<ReplyPayload, GenerationError>;
}

/// Talks to `POST /api/email/generate` over HTTP.
///
/// No client timeout is set: a request resolves whenever the transport does.
pub struct HttpGenerationService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGenerationService {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("replydesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    async fn generate(&self, request: &GenerationRequest) -> Result<ReplyPayload, GenerationError> {
        log::debug!(
            "POST {} (tone={:?}, key={})",
            self.endpoint,
            request.tone.as_str(),
            request.credential
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request.wire_body())
            .send()
            .await
            .map_err(|err| {
                log::warn!("Generation request failed: {err}");
                GenerationError::Transport(err.to_string())
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("Generation service rejected key {}", request.credential);
            return Err(GenerationError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Generation service returned {status}: {body}");
            return Err(GenerationError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|err| {
            log::warn!("Failed to read generation response: {err}");
            GenerationError::Body(err.to_string())
        })?;
        log::debug!("Generation succeeded ({} bytes)", body.len());
        Ok(ReplyPayload::from_body(&body))
    }
}
