//! LRCLIB lyric provider for media servers.
//!
//! Looks up plain and time-synced lyrics on https://lrclib.net by track
//! metadata and serves them through the host-facing
//! [`LyricProvider`](provider::LyricProvider) contract. Stateless: every call
//! is a single request to LRCLIB.

pub mod cli;
pub mod config;
pub mod error;
pub mod lrclib;
pub mod provider;
#[cfg(test)]
pub mod test_utils;

pub use lrclib::LrclibProvider;
pub use provider::{LyricDocument, LyricProvider, LyricSearchRequest, ProviderError, RemoteLyricInfo};
