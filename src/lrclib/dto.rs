//! LRCLIB API Data Transfer Objects
//!
//! These types match what the LRCLIB `/api/get` endpoints return.
//! DO NOT use these types outside the lrclib module - convert to host types
//! in `adapter.rs`.
//!
//! API Reference: https://lrclib.net/docs

use serde::{Deserialize, Serialize};

/// A single lyrics record, returned by both `/api/get` and `/api/get/{id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsRecord {
    /// LRCLIB record ID
    pub id: u64,
    pub track_name: Option<String>,
    pub artist_name: Option<String>,
    pub album_name: Option<String>,
    /// Track duration in seconds
    pub duration: Option<f64>,
    /// Whether the track is marked instrumental (no lyric bodies)
    #[serde(default)]
    pub instrumental: bool,
    pub plain_lyrics: Option<String>,
    /// LRC-formatted lyrics
    pub synced_lyrics: Option<String>,
}

impl LyricsRecord {
    /// Plain lyrics, if present and non-empty
    pub fn plain(&self) -> Option<&str> {
        non_empty(self.plain_lyrics.as_deref())
    }

    /// Synced lyrics, if present and non-empty
    pub fn synced(&self) -> Option<&str> {
        non_empty(self.synced_lyrics.as_deref())
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
