//! Wiremock integration tests for TimeTrackingClient.
//!
//! The time-tracking path is single-pass: every test asserts exactly one
//! upstream request, including the failure cases.

use bookgate::{GatewayError, TimeTrackingClient};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn entries_body() -> serde_json::Value {
    json!([
        {
            "id": "entry-1",
            "description": "code review",
            "timeInterval": {
                "start": "2026-08-26T09:00:00Z",
                "end": "2026-08-26T09:45:00Z",
                "duration": "PT45M"
            }
        },
        {
            "id": "entry-2",
            "description": "",
            "timeInterval": { "start": "2026-08-26T10:00:00Z" }
        }
    ])
}

#[tokio::test]
async fn fetches_time_entries_with_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workspaces/ws-1/user/user-1/time-entries"))
        .and(header("X-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = TimeTrackingClient::with_base_url("test-key", server.uri()).unwrap();
    let entries = client.time_entries("ws-1", "user-1").await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "entry-1");
    assert_eq!(entries[0].description, "code review");
    assert_eq!(entries[0].time_interval.duration.as_deref(), Some("PT45M"));
    // running timer: no end, no duration
    assert!(entries[1].time_interval.end.is_none());
    assert!(entries[1].time_interval.duration.is_none());
}

#[tokio::test]
async fn status_401_maps_to_unauthorized_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = TimeTrackingClient::with_base_url("bad-key", server.uri()).unwrap();
    let err = client.time_entries("ws-1", "user-1").await.unwrap_err();
    assert!(matches!(err, GatewayError::Unauthorized));
}

#[tokio::test]
async fn status_404_maps_to_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = TimeTrackingClient::with_base_url("test-key", server.uri()).unwrap();
    let err = client.time_entries("ws-1", "missing").await.unwrap_err();
    assert!(matches!(err, GatewayError::BadRequest { status: 404 }));
}

#[tokio::test]
async fn status_429_maps_to_overloaded_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "3"))
        .expect(1)
        .mount(&server)
        .await;

    let client = TimeTrackingClient::with_base_url("test-key", server.uri()).unwrap();
    let err = client.time_entries("ws-1", "user-1").await.unwrap_err();
    assert!(matches!(err, GatewayError::Overloaded { .. }));
    assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(3)));
}

#[tokio::test]
async fn status_500_maps_to_unavailable_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = TimeTrackingClient::with_base_url("test-key", server.uri()).unwrap();
    let err = client.time_entries("ws-1", "user-1").await.unwrap_err();
    assert!(matches!(
        err,
        GatewayError::UpstreamUnavailable { status: 500 }
    ));
}
