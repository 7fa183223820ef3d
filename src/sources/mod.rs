//! Source adapters - one module per external music API.
//!
//! # Architecture
//!
//! Each adapter follows the same layering:
//! - **DTOs** (`dto.rs`) - Exact upstream API response shapes
//! - **Adapters** (`adapter.rs`) - Convert DTOs to canonical [`crate::model`] entities
//! - **Clients** (`client.rs`) - HTTP clients for the external APIs
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. We can swap sources without changing aggregator logic
//!
//! Clients return typed [`SourceError`]s; they never swallow failures. The
//! fail-soft policy (a broken upstream degrades results, never crashes the
//! caller) lives one level up in the aggregator, which records the error and
//! substitutes an empty list.

pub mod archive;
pub mod ccmixter;
pub mod deezer;
pub mod jamendo;
pub mod lastfm;
pub mod musicbrainz;
pub mod radio;
pub mod traits;
pub mod ytmusic;

use std::time::Duration;

pub use traits::{AlbumSource, ArtistSource, PlaylistSource, TrackSource};

/// Errors a source adapter can produce.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("API error: {0}")]
    Api(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("rate limited - try again later")]
    RateLimited,

    #[error("not found")]
    NotFound,

    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),
}

impl SourceError {
    /// Map a reqwest error, folding client timeouts into [`SourceError::Timeout`]
    /// so a hung upstream reads as "empty result, fall back".
    pub fn from_http(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SourceError::Timeout
        } else {
            SourceError::Network(e.to_string())
        }
    }

    /// Map an HTTP status to an error, for clients after `is_success` fails.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status {
            reqwest::StatusCode::NOT_FOUND => SourceError::NotFound,
            reqwest::StatusCode::TOO_MANY_REQUESTS => SourceError::RateLimited,
            _ => SourceError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )),
        }
    }
}

/// User agent sent to every upstream; MusicBrainz in particular requires one.
pub const USER_AGENT: &str = concat!(
    "Fonos/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/fonos-player)"
);

/// Build the shared HTTP client handed to every adapter.
///
/// One client, cloned per adapter (reqwest clients are cheap handles over a
/// shared pool). The per-request timeout is the only cancellation mechanism
/// in the system: without it a hung upstream would block its code path
/// indefinitely.
pub fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .timeout(timeout)
        .build()
        .expect("Failed to build HTTP client")
}
