//! Shared fixtures: a scripted generation service served over real HTTP.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Json, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::Value;

use replydesk::infra::ClipboardSink;

pub const GENERATE_PATH: &str = "/api/email/generate";

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl CannedResponse {
    pub fn text(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/plain; charset=utf-8",
            body: body.to_string(),
        }
    }

    pub fn json(value: Value) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: value.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.to_string(),
        }
    }
}

#[derive(Clone, Default)]
struct FakeState {
    responses: Arc<Mutex<VecDeque<CannedResponse>>>,
    received: Arc<Mutex<Vec<Value>>>,
}

/// A local stand-in for the generation service. Responses are served in the
/// order they were queued; once the queue is empty every call gets a 500.
pub struct FakeGenerationServer {
    addr: SocketAddr,
    state: FakeState,
}

impl FakeGenerationServer {
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        let state = FakeState {
            responses: Arc::new(Mutex::new(responses.into())),
            received: Arc::default(),
        };
        let router = Router::new()
            .route(GENERATE_PATH, post(handle_generate))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake server");
        let addr = listener.local_addr().expect("fake server address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url(), GENERATE_PATH)
    }

    /// JSON bodies received so far, oldest first.
    pub fn received(&self) -> Vec<Value> {
        self.state.received.lock().unwrap().clone()
    }
}

async fn handle_generate(State(state): State<FakeState>, Json(body): Json<Value>) -> Response {
    state.received.lock().unwrap().push(body);
    let canned = state
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| CannedResponse::status(500, "no response queued"));

    let status = StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, canned.content_type)], canned.body).into_response()
}

/// An address nothing is listening on.
pub async fn unreachable_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}{GENERATE_PATH}")
}

#[derive(Default)]
pub struct NullClipboard;

impl ClipboardSink for NullClipboard {
    fn set_text(&self, _text: &str) -> anyhow::Result<()> {
        Ok(())
    }
}
