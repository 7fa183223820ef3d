//! Deezer source adapter.
//!
//! Deezer's public API needs no credentials, so it is the first stage of most
//! fallback chains: search across all categories, charts, and detail lookups.
//! Only 30-second preview clips are playable.

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::DeezerClient;
