//! LRCLIB HTTP client
//!
//! Handles communication with the LRCLIB web service.
//! See: https://lrclib.net/docs
//!
//! Both endpoints we use return a single record. `/api/get` does an exact
//! signature match on track, artist, album and duration (LRCLIB allows
//! roughly two seconds of duration slack) and answers 404 when nothing
//! matches. `/api/get/{id}` looks a record up directly.
//!
//! The `reqwest::Client` is supplied by the caller so the host keeps
//! ownership of the connection pool.

use tokio_util::sync::CancellationToken;

use super::dto;

/// Public LRCLIB host
pub const BASE_URL: &str = "https://lrclib.net";

/// Errors from the LRCLIB HTTP layer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LrclibError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Request cancelled")]
    Cancelled,
}

/// Parameters for the `/api/get` signature lookup
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataQuery {
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    /// Track length in seconds
    pub duration_secs: f64,
}

impl MetadataQuery {
    /// Encode as a query string.
    ///
    /// Parameter order is fixed. `f64` Display never uses a locale separator
    /// and drops a zero fraction, so 180.0 is sent as `180`.
    pub fn to_query_string(&self) -> String {
        format!(
            "track_name={}&artist_name={}&album_name={}&duration={}",
            urlencoding::encode(&self.track_name),
            urlencoding::encode(&self.artist_name),
            urlencoding::encode(&self.album_name),
            self.duration_secs
        )
    }
}

/// LRCLIB API client
#[derive(Debug, Clone)]
pub struct LrclibClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LrclibClient {
    /// Create a client on top of a shared HTTP client
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Look up a record by track signature
    pub async fn get_by_metadata(
        &self,
        query: &MetadataQuery,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::LyricsRecord>, LrclibError> {
        let url = format!("{}/api/get?{}", self.base_url, query.to_query_string());
        self.get_record(&url, cancel).await
    }

    /// Look up a record by its LRCLIB id
    pub async fn get_by_id(
        &self,
        record_id: u64,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::LyricsRecord>, LrclibError> {
        let url = format!("{}/api/get/{}", self.base_url, record_id);
        self.get_record(&url, cancel).await
    }

    /// Race the request against cancellation.
    ///
    /// Dropping the losing request future aborts the connection.
    async fn get_record(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<dto::LyricsRecord>, LrclibError> {
        tracing::debug!("GET {}", url);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(LrclibError::Cancelled),
            result = self.send_request(url) => result,
        }
    }

    /// Send the HTTP request and parse the response
    async fn send_request(&self, url: &str) -> Result<Option<dto::LyricsRecord>, LrclibError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| LrclibError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LrclibError::Status(status.as_u16()));
        }

        response
            .json::<Option<dto::LyricsRecord>>()
            .await
            .map_err(|e| LrclibError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{hanging_server, json_server, request_target};
    use std::time::Duration;

    fn query() -> MetadataQuery {
        MetadataQuery {
            track_name: "Bohemian Rhapsody".to_string(),
            artist_name: "Queen".to_string(),
            album_name: "A Night at the Opera".to_string(),
            duration_secs: 354.5,
        }
    }

    #[test]
    fn test_client_creation() {
        let client = LrclibClient::new(reqwest::Client::new());
        assert_eq!(client.base_url, "https://lrclib.net");
    }

    #[test]
    fn test_query_string() {
        assert_eq!(
            query().to_query_string(),
            "track_name=Bohemian%20Rhapsody&artist_name=Queen\
             &album_name=A%20Night%20at%20the%20Opera&duration=354.5"
        );
    }

    #[test]
    fn test_query_string_whole_seconds_and_reserved_chars() {
        let q = MetadataQuery {
            track_name: "AC/DC & Me?".to_string(),
            artist_name: "Björk".to_string(),
            album_name: "100%".to_string(),
            duration_secs: 180.0,
        };
        assert_eq!(
            q.to_query_string(),
            "track_name=AC%2FDC%20%26%20Me%3F&artist_name=Bj%C3%B6rk&album_name=100%25&duration=180"
        );
    }

    #[tokio::test]
    async fn test_get_by_metadata_parses_record() {
        let server = json_server(
            200,
            r#"{"id":42,"trackName":"Song","artistName":"Artist","albumName":"Album",
                "duration":180.0,"instrumental":false,"plainLyrics":"hello","syncedLyrics":null}"#,
        )
        .await;
        let client = LrclibClient::with_base_url(reqwest::Client::new(), server.uri());

        let record = client
            .get_by_metadata(&query(), &CancellationToken::new())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.id, 42);
        assert_eq!(record.plain(), Some("hello"));
        assert_eq!(
            request_target(&server).await.as_deref(),
            Some(
                "/api/get?track_name=Bohemian%20Rhapsody&artist_name=Queen\
                 &album_name=A%20Night%20at%20the%20Opera&duration=354.5"
            )
        );
    }

    #[tokio::test]
    async fn test_get_by_id_path() {
        let server = json_server(200, r#"{"id":3396226}"#).await;
        let client = LrclibClient::with_base_url(reqwest::Client::new(), server.uri());

        let record = client
            .get_by_id(3396226, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(record.map(|r| r.id), Some(3396226));
        assert_eq!(
            request_target(&server).await.as_deref(),
            Some("/api/get/3396226")
        );
    }

    #[tokio::test]
    async fn test_null_body_is_none() {
        let server = json_server(200, "null").await;
        let client = LrclibClient::with_base_url(reqwest::Client::new(), server.uri());

        let record = client.get_by_id(1, &CancellationToken::new()).await.unwrap();

        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let server = json_server(
            404,
            r#"{"code":404,"name":"TrackNotFound","message":"Failed to find specified track"}"#,
        )
        .await;
        let client = LrclibClient::with_base_url(reqwest::Client::new(), server.uri());

        let result = client.get_by_metadata(&query(), &CancellationToken::new()).await;

        assert_eq!(result, Err(LrclibError::Status(404)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let server = json_server(200, "<html>oops</html>").await;
        let client = LrclibClient::with_base_url(reqwest::Client::new(), server.uri());

        let result = client.get_by_id(1, &CancellationToken::new()).await;

        assert!(matches!(result, Err(LrclibError::Parse(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client =
            LrclibClient::with_base_url(reqwest::Client::new(), format!("http://{}", addr));

        let result = client.get_by_id(1, &CancellationToken::new()).await;

        assert!(matches!(result, Err(LrclibError::Network(_))));
    }

    #[tokio::test]
    async fn test_cancel_aborts_hung_request() {
        let server = hanging_server().await;
        let client = LrclibClient::with_base_url(reqwest::Client::new(), server.uri());
        let cancel = CancellationToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let result = tokio::time::timeout(Duration::from_secs(5), client.get_by_id(1, &cancel))
            .await
            .expect("cancellation should end the request promptly");

        assert_eq!(result, Err(LrclibError::Cancelled));
    }

    #[tokio::test]
    async fn test_already_cancelled_skips_request() {
        let server = json_server(200, r#"{"id":1}"#).await;
        let client = LrclibClient::with_base_url(reqwest::Client::new(), server.uri());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = client.get_by_id(1, &cancel).await;

        assert_eq!(result, Err(LrclibError::Cancelled));
    }
}
