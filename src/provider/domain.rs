//! Host-side lyric types.
//!
//! These mirror what a media server's lyric-provider extension point hands us
//! and expects back. Nothing here knows about LRCLIB; the `lrclib` module
//! converts its DTOs into these types.

use serde::Serialize;

/// Host duration unit: one tick is 100 nanoseconds.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Convert host ticks to fractional seconds.
pub fn ticks_to_seconds(ticks: i64) -> f64 {
    ticks as f64 / TICKS_PER_SECOND as f64
}

/// Convert fractional seconds to host ticks, rounding to the nearest tick.
pub fn seconds_to_ticks(seconds: f64) -> i64 {
    (seconds * TICKS_PER_SECOND as f64).round() as i64
}

/// Track metadata the host supplies when asking for lyrics
#[derive(Debug, Clone, Default)]
pub struct LyricSearchRequest {
    /// Candidate artist names; only the first is used
    pub artist_names: Vec<String>,
    /// Track title
    pub song_name: Option<String>,
    /// Album title
    pub album_name: Option<String>,
    /// Track length in ticks
    pub duration_ticks: Option<i64>,
}

impl LyricSearchRequest {
    /// First artist name, if present and non-empty
    pub fn primary_artist(&self) -> Option<&str> {
        self.artist_names
            .first()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// A lyric candidate returned from search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteLyricInfo {
    /// Opaque id to hand back to `fetch`
    pub id: String,
    /// Display name of the provider that produced this result
    pub provider_name: String,
    pub metadata: LyricMetadata,
}

/// Descriptive metadata attached to a search result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LyricMetadata {
    pub album: String,
    pub artist: String,
    pub title: String,
    /// Track length in ticks (0 when unknown)
    pub length_ticks: i64,
    /// Whether the lyrics carry per-line timestamps
    pub is_synced: bool,
}

/// Lyric payload format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LyricFormat {
    /// Timestamped LRC lines
    Lrc,
    /// Plain text
    Txt,
}

impl LyricFormat {
    /// Format string as the host expects it (also the file extension)
    pub fn as_str(self) -> &'static str {
        match self {
            LyricFormat::Lrc => "lrc",
            LyricFormat::Txt => "txt",
        }
    }
}

impl std::fmt::Display for LyricFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full lyric payload returned from fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricDocument {
    pub format: LyricFormat,
    /// UTF-8 encoded lyric text
    pub content: Vec<u8>,
}

impl LyricDocument {
    pub fn new(format: LyricFormat, text: impl Into<String>) -> Self {
        Self {
            format,
            content: text.into().into_bytes(),
        }
    }

    /// Borrow the payload as text
    pub fn text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.content)
    }
}
