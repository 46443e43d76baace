//! Lyric search command.

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::provider::{LyricProvider, LyricSearchRequest, TICKS_PER_SECOND};

/// Search for lyrics matching the given track metadata
pub fn cmd_search(
    rt: &Runtime,
    provider: &dyn LyricProvider,
    request: &LyricSearchRequest,
    json: bool,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    rt.block_on(async {
        let results = provider.search(request, cancel).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }

        if results.is_empty() {
            println!("✗ No lyrics found.");
            return Ok(());
        }

        println!("✓ {} result(s) from {}", results.len(), provider.name());
        for result in &results {
            let meta = &result.metadata;
            println!();
            println!("  Id:     {}", result.id);
            println!("  Synced: {}", if meta.is_synced { "yes" } else { "no" });
            println!("  Title:  {}", meta.title);
            println!("  Artist: {}", meta.artist);
            println!("  Album:  {}", meta.album);
            println!("  Length: {}", format_length(meta.length_ticks));
        }

        Ok(())
    })
}

/// Format a tick count as `m:ss`
pub(crate) fn format_length(ticks: i64) -> String {
    let total_secs = ticks / TICKS_PER_SECOND;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
