//! lrclib-provider - look up plain and synced lyrics on LRCLIB.
//!
//! Runs the lyric provider from the command line, the same way a host media
//! server would call it.

use clap::Parser;
use lrclib_provider::cli;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so lyrics on stdout stay clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("lrclib_provider=info".parse()?))
        .init();

    cli::run_command(&args)
}
