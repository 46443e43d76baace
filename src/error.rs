//! Crate-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`ProviderError`], [`LrclibError`](crate::lrclib::LrclibError),
//! [`ConfigError`]); this module aggregates them for callers that drive the
//! provider end to end. The binary uses `anyhow` on top.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::provider::ProviderError;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Lyric provider error
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Failed to write lyrics to disk
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether this is the host-visible "no lyrics" outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Provider(ProviderError::NotFound(_)))
    }
}
