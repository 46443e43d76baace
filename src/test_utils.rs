//! Test utilities and fixtures for lrclib-provider tests.
//!
//! This module provides record factories and `wiremock` helpers so the real
//! `reqwest` client can be exercised without touching the network.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{json_server, request_target};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let server = json_server(200, r#"{"id":1}"#).await;
//!     let client = LrclibClient::with_base_url(reqwest::Client::new(), server.uri());
//!     // ... test logic
//!     assert_eq!(request_target(&server).await.as_deref(), Some("/api/get/1"));
//! }
//! ```

use std::time::Duration;

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::lrclib::dto::LyricsRecord;

/// Creates a record with metadata filled in and no lyric bodies.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let record = LyricsRecord {
///     plain_lyrics: Some("hello".to_string()),
///     ..mock_record(42)
/// };
/// ```
pub fn mock_record(id: u64) -> LyricsRecord {
    LyricsRecord {
        id,
        track_name: Some("Test Track".to_string()),
        artist_name: Some("Test Artist".to_string()),
        album_name: Some("Test Album".to_string()),
        duration: Some(180.0),
        instrumental: false,
        plain_lyrics: None,
        synced_lyrics: None,
    }
}

/// Creates a record carrying both plain and synced lyrics.
pub fn mock_record_with_lyrics(id: u64, plain: &str, synced: &str) -> LyricsRecord {
    LyricsRecord {
        plain_lyrics: Some(plain.to_string()),
        synced_lyrics: Some(synced.to_string()),
        ..mock_record(id)
    }
}

/// Mock server answering every GET with a fixed status and JSON body.
pub async fn json_server(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json"),
        )
        .mount(&server)
        .await;
    server
}

/// Mock server that holds every GET for a minute before answering.
pub async fn hanging_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(60)))
        .mount(&server)
        .await;
    server
}

/// Path and query of the first request the server received
pub async fn request_target(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await?;
    let url = &requests.first()?.url;
    Some(match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    })
}
