//! Lyric fetch command.

use std::io::Write;
use std::path::Path;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::provider::{LyricDocument, LyricProvider};

/// Fetch the lyric body for a search result id
pub fn cmd_fetch(
    rt: &Runtime,
    provider: &dyn LyricProvider,
    id: &str,
    output: Option<&Path>,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    rt.block_on(async {
        let doc = fetch_document(provider, id, cancel).await?;
        write_document(&doc, output)?;
        eprintln!("✓ Fetched {} lyrics ({} bytes)", doc.format, doc.content.len());
        Ok(())
    })
}

/// Fetch a document, turning "no lyrics" into a readable CLI error
pub(crate) async fn fetch_document(
    provider: &dyn LyricProvider,
    id: &str,
    cancel: &CancellationToken,
) -> anyhow::Result<LyricDocument> {
    match provider.fetch(id, cancel).await.map_err(Error::from) {
        Ok(doc) => Ok(doc),
        Err(e) if e.is_not_found() => anyhow::bail!("No lyrics found for {}", id),
        Err(e) => Err(e.into()),
    }
}

/// Write the payload to a file, or to stdout when no path is given
pub(crate) fn write_document(doc: &LyricDocument, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, &doc.content).map_err(|e| Error::write(path, e)),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&doc.content)?;
            if !doc.content.ends_with(b"\n") {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}
