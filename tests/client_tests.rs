//! Tests for the HTTP clip API client.

use std::time::Duration;

use clipform::client::{ClipApi, HttpClipApi};
use clipform::config::ClientConfig;
use clipform::error::{ClipError, FailureKind};
use clipform::request::{ClipRequest, ScheduleUnit, UploadSchedule};
use clipform::response::ClipPath;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> ClipRequest {
    ClipRequest::builder()
        .url("https://youtu.be/x")
        .subtitle_color("white")
        .build()
}

fn api(server: &MockServer) -> HttpClipApi {
    HttpClipApi::new(ClientConfig::new().with_base_url(server.uri()))
}

#[tokio::test]
async fn decodes_backend_clip_list_and_detailed_transcription() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clip"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Clip generated successfully",
            "path": ["clips/clip_0_v.mp4", "clips/clip_2_v.mp4"],
            "transcription": {
                "text": "hello world",
                "segments": [
                    {"start": 0.0, "end": 1.0, "text": "hello"},
                    {"start": 1.0, "end": 2.4, "text": "world"}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = api(&server).submit(&request()).await.unwrap();

    assert_eq!(
        response.path,
        ClipPath::Many(vec![
            "clips/clip_0_v.mp4".to_string(),
            "clips/clip_2_v.mp4".to_string()
        ])
    );
    assert_eq!(response.transcription.text(), "hello world");
    assert_eq!(response.transcription.segments().len(), 2);
}

#[tokio::test]
async fn sends_schedule_fields_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clip"))
        .and(body_json(json!({
            "url": "https://youtu.be/x",
            "subtitle_color": "white",
            "emojis": null,
            "effects": null,
            "schedule_interval": 6,
            "schedule_unit": "hours"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Clip generation and scheduling successful",
            "path": "clips/clip_0_v.mp4",
            "transcription": "hi"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = request();
    request.schedule = Some(UploadSchedule::new(6, ScheduleUnit::Hours));
    let response = api(&server).submit(&request).await.unwrap();

    assert_eq!(response.message, "Clip generation and scheduling successful");
}

#[tokio::test]
async fn non_2xx_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clip"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "URL is required"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = api(&server).submit(&request()).await.unwrap_err();

    assert!(matches!(&err, ClipError::Api { status: 400, message } if message == "URL is required"));
    assert_eq!(err.kind(), FailureKind::Application);
}

#[tokio::test]
async fn non_json_error_page_is_a_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clip"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = api(&server).submit(&request()).await.unwrap_err();

    assert!(matches!(err, ClipError::Serialization(_)));
}

#[tokio::test]
async fn configured_timeout_is_enforced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clip"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "late", "path": "p", "transcription": "t"}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let api = HttpClipApi::new(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(50)),
    );
    let err = api.submit(&request()).await.unwrap_err();

    assert!(matches!(err, ClipError::Timeout(50)));
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    let api = HttpClipApi::new(ClientConfig::new().with_base_url("http://127.0.0.1:1"));

    let err = api.submit(&request()).await.unwrap_err();

    assert!(matches!(err, ClipError::Network(_)));
    assert!(err.to_string().contains("error sending request"));

    let refused = std::net::TcpStream::connect("127.0.0.1:1").unwrap_err();
    assert_eq!(err.user_message(), refused.to_string());
}
