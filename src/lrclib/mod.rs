//! LRCLIB lyric provider.
//!
//! # Architecture
//!
//! - **DTOs** (`dto.rs`) - Exact API response shapes
//! - **Client** (`client.rs`) - HTTP requests against lrclib.net
//! - **Adapter** (`adapter.rs`) - Convert DTOs to host lyric types
//! - **Ids** (`id.rs`) - The `"{record}_{variant}"` identifier handed to the host
//! - **Provider** (`provider.rs`) - The [`LyricProvider`](crate::provider::LyricProvider)
//!   implementation the host calls
//!
//! API docs: https://lrclib.net/docs

mod adapter;
mod client;
pub mod dto;
mod id;
mod provider;
pub mod traits;

pub use client::{BASE_URL, LrclibClient, LrclibError, MetadataQuery};
pub use id::{InvalidLyricId, LyricId, LyricVariant};
pub use provider::{DEFAULT_NAME, LrclibProvider};
pub use traits::LrclibApi;
