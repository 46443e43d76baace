//! CLI command definitions and dispatch.
//!
//! The binary drives the provider the same way a host would:
//! - `search`: look up lyric candidates by track metadata
//! - `fetch`: download the lyric body for a candidate id

mod fetch;
mod search;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::config;
use crate::lrclib::LrclibProvider;
use crate::provider::{LyricSearchRequest, seconds_to_ticks};

pub use fetch::cmd_fetch;
pub use search::cmd_search;

/// LRCLIB lyric provider CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true, env = "LRCLIB_PROVIDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search for lyrics by track metadata
    Search {
        /// Artist name (repeatable; the first one is used)
        #[arg(short, long = "artist")]
        artists: Vec<String>,
        /// Track title
        #[arg(short, long)]
        title: Option<String>,
        /// Album title
        #[arg(short = 'l', long)]
        album: Option<String>,
        /// Track length in seconds
        #[arg(short, long, value_parser = parse_duration)]
        duration: Option<f64>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch lyrics for a search result id (e.g. 3396226_synced)
    Fetch {
        /// Result id from `search`
        id: String,
        /// Write lyrics to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load(),
    };

    let provider = LrclibProvider::new(config.provider.name.clone(), config.http.build_client()?);
    let rt = Runtime::new()?;

    let cancel = CancellationToken::new();
    rt.spawn(cancel_on_ctrl_c(cancel.clone()));

    match &cli.command {
        Commands::Search {
            artists,
            title,
            album,
            duration,
            json,
        } => {
            let request = LyricSearchRequest {
                artist_names: artists.clone(),
                song_name: title.clone(),
                album_name: album.clone(),
                duration_ticks: duration.map(seconds_to_ticks),
            };
            cmd_search(&rt, &provider, &request, *json, &cancel)
        }
        Commands::Fetch { id, output } => cmd_fetch(&rt, &provider, id, output.as_deref(), &cancel),
    }
}

/// Parse a track length, rejecting NaN, infinities and negative values
fn parse_duration(s: &str) -> Result<f64, String> {
    let secs: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if secs.is_finite() && secs >= 0.0 {
        Ok(secs)
    } else {
        Err(format!("expected a non-negative number of seconds, got {}", s))
    }
}

/// Cancel in-flight lookups on Ctrl-C
async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Interrupted, cancelling lookup");
        cancel.cancel();
    }
}
