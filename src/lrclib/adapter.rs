//! Adapter layer: Convert LRCLIB DTOs to host types
//!
//! This is the ONLY place where `dto` types become `provider` types.

use super::dto::LyricsRecord;
use super::id::{LyricId, LyricVariant};
use crate::provider::{LyricDocument, LyricFormat, LyricMetadata, RemoteLyricInfo, seconds_to_ticks};

/// Lyric body of the given variant, if non-empty
fn lyrics_for(record: &LyricsRecord, variant: LyricVariant) -> Option<&str> {
    match variant {
        LyricVariant::Plain => record.plain(),
        LyricVariant::Synced => record.synced(),
    }
}

/// One search result per non-empty lyric body, plain first
pub fn to_search_results(record: &LyricsRecord, provider_name: &str) -> Vec<RemoteLyricInfo> {
    let length_ticks = record.duration.map(seconds_to_ticks).unwrap_or(0);

    LyricVariant::ALL
        .into_iter()
        .filter(|&variant| lyrics_for(record, variant).is_some())
        .map(|variant| RemoteLyricInfo {
            id: LyricId::new(record.id, variant).to_string(),
            provider_name: provider_name.to_string(),
            metadata: LyricMetadata {
                album: record.album_name.clone().unwrap_or_default(),
                artist: record.artist_name.clone().unwrap_or_default(),
                title: record.track_name.clone().unwrap_or_default(),
                length_ticks,
                is_synced: variant.is_synced(),
            },
        })
        .collect()
}

/// Lyric document for the requested variant, if the record has that body
pub fn to_document(record: &LyricsRecord, variant: LyricVariant) -> Option<LyricDocument> {
    let format = match variant {
        LyricVariant::Plain => LyricFormat::Txt,
        LyricVariant::Synced => LyricFormat::Lrc,
    };
    lyrics_for(record, variant).map(|text| LyricDocument::new(format, text))
}
