//! Lyric provider contract exposed to the host media server.
//!
//! The host calls [`LyricProvider::search`] with whatever track metadata it
//! has, shows the returned candidates, and later calls
//! [`LyricProvider::fetch`] with the id of the candidate it wants.
//! Implementations hold no state between the two calls; the id is the only
//! thing that carries over.
//!
//! # Example
//!
//! ```ignore
//! use lrclib_provider::provider::{LyricProvider, LyricSearchRequest};
//! use tokio_util::sync::CancellationToken;
//!
//! let cancel = CancellationToken::new();
//! let results = provider.search(&request, &cancel).await?;
//! if let Some(first) = results.first() {
//!     let doc = provider.fetch(&first.id, &cancel).await?;
//!     println!("{} bytes of {}", doc.content.len(), doc.format);
//! }
//! ```

mod domain;

pub use domain::{
    LyricDocument, LyricFormat, LyricMetadata, LyricSearchRequest, RemoteLyricInfo,
    TICKS_PER_SECOND, seconds_to_ticks, ticks_to_seconds,
};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::lrclib::InvalidLyricId;

/// Errors surfaced to the host.
///
/// Upstream details (status codes, network errors) never appear here; a
/// failed lookup is reported as `NotFound` regardless of cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("Lyrics not found: {0}")]
    NotFound(String),

    #[error("Invalid lyric id {id:?}: {reason}")]
    InvalidId {
        id: String,
        #[source]
        reason: InvalidLyricId,
    },

    #[error("Lyric lookup cancelled")]
    Cancelled,
}

/// A source of lyrics the host can query.
#[async_trait]
pub trait LyricProvider: Send + Sync {
    /// Display name shown by the host
    fn name(&self) -> &str;

    /// Find lyric candidates for a track.
    ///
    /// Missing metadata and upstream failures yield an empty list. The only
    /// error is [`ProviderError::Cancelled`].
    async fn search(
        &self,
        request: &LyricSearchRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<RemoteLyricInfo>, ProviderError>;

    /// Fetch the lyric body for an id previously returned by `search`.
    async fn fetch(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<LyricDocument, ProviderError>;
}
