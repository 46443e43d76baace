//! Trait definition for the LRCLIB client.
//!
//! The provider is generic over [`LrclibApi`] so tests can substitute a mock
//! and assert on what was (or was not) requested.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::client::{LrclibClient, LrclibError, MetadataQuery};
use super::dto::LyricsRecord;

/// Lookups the provider needs from LRCLIB.
#[async_trait]
pub trait LrclibApi: Send + Sync {
    /// Look up a record by track signature.
    async fn get_by_metadata(
        &self,
        query: &MetadataQuery,
        cancel: &CancellationToken,
    ) -> Result<Option<LyricsRecord>, LrclibError>;

    /// Look up a record by id.
    async fn get_by_id(
        &self,
        record_id: u64,
        cancel: &CancellationToken,
    ) -> Result<Option<LyricsRecord>, LrclibError>;
}

#[async_trait]
impl LrclibApi for LrclibClient {
    async fn get_by_metadata(
        &self,
        query: &MetadataQuery,
        cancel: &CancellationToken,
    ) -> Result<Option<LyricsRecord>, LrclibError> {
        self.get_by_metadata(query, cancel).await
    }

    async fn get_by_id(
        &self,
        record_id: u64,
        cancel: &CancellationToken,
    ) -> Result<Option<LyricsRecord>, LrclibError> {
        self.get_by_id(record_id, cancel).await
    }
}
