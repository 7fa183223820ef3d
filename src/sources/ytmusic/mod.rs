//! YouTube Music source adapter.
//!
//! Talks to a self-hosted ytmusicapi bridge rather than YouTube directly,
//! so the whole adapter is optional: when no bridge URL is configured every
//! call reports missing credentials and the aggregator moves down its
//! fallback chain.

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::YtMusicClient;
