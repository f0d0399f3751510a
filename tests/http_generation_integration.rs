//! HttpGenerationService against a local fake of the generation endpoint.

mod common;

use common::{CannedResponse, FakeGenerationServer, unreachable_endpoint};
use replydesk::domain::{Credential, GenerationError, GenerationRequest, ReplyPayload, Tone};
use replydesk::infra::{GenerationService, HttpGenerationService};
use serde_json::json;

fn request(content: &str, tone: Tone) -> GenerationRequest {
    GenerationRequest {
        email_content: content.to_string(),
        tone,
        credential: Credential::parse("AIzaSyTEST").unwrap(),
    }
}

#[tokio::test]
async fn test_posts_camel_case_body() {
    let server = FakeGenerationServer::start(vec![CannedResponse::text("ok")]).await;
    let service = HttpGenerationService::new(server.endpoint()).unwrap();

    service
        .generate(&request("Can we reschedule?", Tone::Professional))
        .await
        .unwrap();

    assert_eq!(
        server.received(),
        vec![json!({
            "emailContent": "Can we reschedule?",
            "tone": "professional",
            "apiKey": "AIzaSyTEST",
        })]
    );
}

#[tokio::test]
async fn test_unspecified_tone_sends_empty_string() {
    let server = FakeGenerationServer::start(vec![CannedResponse::text("ok")]).await;
    let service = HttpGenerationService::new(server.endpoint()).unwrap();

    service
        .generate(&request("Hello", Tone::Unspecified))
        .await
        .unwrap();

    assert_eq!(server.received()[0]["tone"], json!(""));
}

#[tokio::test]
async fn test_plain_text_body() {
    let server =
        FakeGenerationServer::start(vec![CannedResponse::text("Sure, happy to reschedule...")])
            .await;
    let service = HttpGenerationService::new(server.endpoint()).unwrap();

    let payload = service
        .generate(&request("Can we reschedule?", Tone::Professional))
        .await
        .unwrap();

    assert_eq!(
        payload,
        ReplyPayload::Text("Sure, happy to reschedule...".to_string())
    );
}

#[tokio::test]
async fn test_json_string_body_is_unwrapped() {
    let server = FakeGenerationServer::start(vec![CannedResponse::json(json!("Thanks!"))]).await;
    let service = HttpGenerationService::new(server.endpoint()).unwrap();

    let payload = service
        .generate(&request("Hi", Tone::Casual))
        .await
        .unwrap();

    assert_eq!(payload.render(), "Thanks!");
}

#[tokio::test]
async fn test_json_object_body_renders_indented() {
    let server = FakeGenerationServer::start(vec![CannedResponse::json(json!({
        "subject": "Re: meeting",
        "body": "Tuesday works.",
    }))])
    .await;
    let service = HttpGenerationService::new(server.endpoint()).unwrap();

    let payload = service
        .generate(&request("Hi", Tone::Friendly))
        .await
        .unwrap();

    assert_eq!(
        payload.render(),
        "{\n  \"body\": \"Tuesday works.\",\n  \"subject\": \"Re: meeting\"\n}"
    );
}

#[tokio::test]
async fn test_401_is_unauthorized() {
    let server =
        FakeGenerationServer::start(vec![CannedResponse::status(401, "invalid key")]).await;
    let service = HttpGenerationService::new(server.endpoint()).unwrap();

    let err = service
        .generate(&request("Hi", Tone::Professional))
        .await
        .unwrap_err();

    assert_eq!(err, GenerationError::Unauthorized);
    assert!(err.is_auth());
}

#[tokio::test]
async fn test_other_error_statuses_are_not_auth() {
    let server = FakeGenerationServer::start(vec![
        CannedResponse::status(500, "boom"),
        CannedResponse::status(403, "forbidden"),
        CannedResponse::status(429, "slow down"),
    ])
    .await;
    let service = HttpGenerationService::new(server.endpoint()).unwrap();

    for expected in [500, 403, 429] {
        let err = service
            .generate(&request("Hi", Tone::Professional))
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::Status(expected));
        assert!(!err.is_auth());
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let service = HttpGenerationService::new(unreachable_endpoint().await).unwrap();

    let err = service
        .generate(&request("Hi", Tone::Professional))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Transport(_)));
}
