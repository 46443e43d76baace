//! Lyric identifiers handed to the host.
//!
//! A search result id names an LRCLIB record and which of its two lyric
//! bodies it refers to. On the wire it is `"{record_id}_{variant}"`, e.g.
//! `"3396226_synced"`.

use std::fmt;
use std::str::FromStr;

/// Which lyric body of a record an id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LyricVariant {
    Plain,
    Synced,
}

impl LyricVariant {
    /// Iteration order used when building search results
    pub const ALL: [LyricVariant; 2] = [LyricVariant::Plain, LyricVariant::Synced];

    pub fn suffix(self) -> &'static str {
        match self {
            LyricVariant::Plain => "plain",
            LyricVariant::Synced => "synced",
        }
    }

    pub fn is_synced(self) -> bool {
        matches!(self, LyricVariant::Synced)
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| suffix.eq_ignore_ascii_case(variant.suffix()))
    }
}

/// Parsed form of a lyric id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LyricId {
    pub record_id: u64,
    pub variant: LyricVariant,
}

impl LyricId {
    pub fn new(record_id: u64, variant: LyricVariant) -> Self {
        Self { record_id, variant }
    }
}

impl fmt::Display for LyricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.record_id, self.variant.suffix())
    }
}

/// Reasons a lyric id string could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLyricId {
    #[error("missing '_' separator")]
    MissingSeparator,

    #[error("record id {0:?} is not a number")]
    NonNumericRecord(String),

    /// Well-formed id whose suffix names no known variant
    #[error("unknown lyric variant {0:?}")]
    UnknownVariant(String),
}

impl FromStr for LyricId {
    type Err = InvalidLyricId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (record, suffix) = s.split_once('_').ok_or(InvalidLyricId::MissingSeparator)?;

        // `u64::from_str` also takes a leading '+', which would not round-trip
        let record_id = Some(record)
            .filter(|r| !r.is_empty() && r.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|r| r.parse::<u64>().ok())
            .ok_or_else(|| InvalidLyricId::NonNumericRecord(record.to_string()))?;

        let variant = LyricVariant::from_suffix(suffix)
            .ok_or_else(|| InvalidLyricId::UnknownVariant(suffix.to_string()))?;

        Ok(LyricId { record_id, variant })
    }
}
