use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::credential::Credential;
use super::error::GenerationError;

pub const AUTH_REJECTED_MESSAGE: &str = "Invalid API key. Please check your Gemini API key.";
pub const TRANSIENT_FAILURE_MESSAGE: &str = "Failed to generate email reply. Please try again.";

/// Tone hint forwarded to the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    /// No preference; sent as an empty string.
    #[default]
    Unspecified,
    Professional,
    Casual,
    Friendly,
    Apologetic,
    Enthusiastic,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Unspecified,
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Apologetic,
        Tone::Enthusiastic,
    ];

    /// Wire value of the tone.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Unspecified => "",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Apologetic => "apologetic",
            Tone::Enthusiastic => "enthusiastic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Unspecified => "None",
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
            Tone::Apologetic => "Apologetic",
            Tone::Enthusiastic => "Enthusiastic",
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted.is_empty() || wanted == "none" {
            return Ok(Tone::Unspecified);
        }
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown tone '{s}', expected one of: none, professional, casual, friendly, apologetic, enthusiastic"
                )
            })
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One submission to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub email_content: String,
    pub tone: Tone,
    pub credential: Credential,
}

impl GenerationRequest {
    pub fn wire_body(&self) -> WireRequest<'_> {
        WireRequest {
            email_content: &self.email_content,
            tone: self.tone.as_str(),
            api_key: self.credential.expose(),
        }
    }
}

/// JSON body of `POST /api/email/generate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRequest<'a> {
    pub email_content: &'a str,
    pub tone: &'a str,
    pub api_key: &'a str,
}

/// Successful response body from the generation service.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyPayload {
    Text(String),
    Structured(serde_json::Value),
}

impl ReplyPayload {
    /// Interprets a raw 2xx body. A JSON string is unwrapped, any other JSON
    /// value stays structured, and a non-JSON body is plain text.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::String(text)) => ReplyPayload::Text(text),
            Ok(value) => ReplyPayload::Structured(value),
            Err(_) => ReplyPayload::Text(body.to_string()),
        }
    }

    /// Text shown to the user. Structured payloads render as two-space
    /// indented JSON; object keys come out sorted because serde_json's map is
    /// ordered (the `preserve_order` feature is not enabled).
    pub fn render(&self) -> String {
        match self {
            ReplyPayload::Text(text) => text.clone(),
            ReplyPayload::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

/// Classified result of one generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success { reply_text: String },
    AuthRejected,
    TransientFailure,
}

impl GenerationOutcome {
    pub fn classify(result: Result<ReplyPayload, GenerationError>) -> Self {
        match result {
            Ok(payload) => GenerationOutcome::Success {
                reply_text: payload.render(),
            },
            Err(err) if err.is_auth() => GenerationOutcome::AuthRejected,
            Err(_) => GenerationOutcome::TransientFailure,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            GenerationOutcome::Success { .. } => None,
            GenerationOutcome::AuthRejected => Some(AUTH_REJECTED_MESSAGE),
            GenerationOutcome::TransientFailure => Some(TRANSIENT_FAILURE_MESSAGE),
        }
    }
}
