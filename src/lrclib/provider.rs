//! LRCLIB implementation of the host lyric-provider contract.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::adapter;
use super::client::{LrclibClient, LrclibError, MetadataQuery};
use super::id::{InvalidLyricId, LyricId};
use super::traits::LrclibApi;
use crate::provider::{
    LyricDocument, LyricProvider, LyricSearchRequest, ProviderError, RemoteLyricInfo,
    ticks_to_seconds,
};

/// Default display name
pub const DEFAULT_NAME: &str = "LrcLib";

/// Lyric provider backed by LRCLIB
pub struct LrclibProvider<A = LrclibClient> {
    name: String,
    api: A,
}

impl LrclibProvider<LrclibClient> {
    /// Create a provider using the host's HTTP client
    pub fn new(name: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self::with_api(name, LrclibClient::new(http_client))
    }
}

impl<A: LrclibApi> LrclibProvider<A> {
    /// Create a provider over any LRCLIB API implementation
    pub fn with_api(name: impl Into<String>, api: A) -> Self {
        Self {
            name: name.into(),
            api,
        }
    }

    /// Validate the request and build the signature query.
    ///
    /// Returns `None` (after logging why) when a required field is missing.
    fn metadata_query(request: &LyricSearchRequest) -> Option<MetadataQuery> {
        let Some(artist) = request.primary_artist() else {
            tracing::info!("Artist name is empty, skipping LRCLIB lookup");
            return None;
        };

        let Some(song) = request.song_name.as_deref().filter(|s| !s.is_empty()) else {
            tracing::info!("Song name is empty, skipping LRCLIB lookup");
            return None;
        };

        let Some(album) = request.album_name.as_deref().filter(|s| !s.is_empty()) else {
            tracing::info!("Album name is empty, skipping LRCLIB lookup");
            return None;
        };

        let Some(ticks) = request.duration_ticks else {
            tracing::info!("Duration is missing, skipping LRCLIB lookup");
            return None;
        };

        Some(MetadataQuery {
            track_name: song.to_string(),
            artist_name: artist.to_string(),
            album_name: album.to_string(),
            duration_secs: ticks_to_seconds(ticks),
        })
    }
}

#[async_trait]
impl<A: LrclibApi> LyricProvider for LrclibProvider<A> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn search(
        &self,
        request: &LyricSearchRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteLyricInfo>, ProviderError> {
        let Some(query) = Self::metadata_query(request) else {
            return Ok(Vec::new());
        };

        match self.api.get_by_metadata(&query, cancel).await {
            Ok(Some(record)) => Ok(adapter::to_search_results(&record, &self.name)),
            Ok(None) => Ok(Vec::new()),
            Err(LrclibError::Cancelled) => Err(ProviderError::Cancelled),
            Err(e) => {
                tracing::debug!(
                    "LRCLIB lookup failed for {} - {} - {}: {}",
                    query.artist_name,
                    query.album_name,
                    query.track_name,
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn fetch(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<LyricDocument, ProviderError> {
        let lyric_id = match id.parse::<LyricId>() {
            Ok(lyric_id) => lyric_id,
            Err(InvalidLyricId::UnknownVariant(_)) => {
                return Err(ProviderError::NotFound(id.to_string()));
            }
            Err(reason) => {
                return Err(ProviderError::InvalidId {
                    id: id.to_string(),
                    reason,
                });
            }
        };

        let record = match self.api.get_by_id(lyric_id.record_id, cancel).await {
            Ok(record) => record,
            Err(LrclibError::Cancelled) => return Err(ProviderError::Cancelled),
            Err(e) => {
                tracing::debug!("LRCLIB fetch failed for {}: {}", id, e);
                None
            }
        };

        record
            .as_ref()
            .and_then(|record| adapter::to_document(record, lyric_id.variant))
            .ok_or_else(|| ProviderError::NotFound(id.to_string()))
    }
}
