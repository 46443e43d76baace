//! Command-line interface for lrclib-provider.
//!
//! This module provides CLI commands for searching and fetching lyrics
//! without a host media server.

mod commands;

pub use commands::{Cli, Commands, run_command};
