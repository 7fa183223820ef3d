//! Last.fm API Data Transfer Objects
//!
//! These types match EXACTLY what `track.getInfo` returns. Last.fm reports
//! failures as HTTP 200 with an `{"error": code, "message": ...}` body.
//!
//! API Reference: https://www.last.fm/api/show/track.getInfo

use serde::Deserialize;

/// `?method=track.getInfo` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackInfoResponse {
    pub track: TrackInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackInfo {
    pub name: String,
    pub artist: TrackArtist,
    pub album: Option<TrackAlbum>,
    /// Milliseconds, as a string ("0" when unknown).
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub title: String,
    #[serde(default)]
    pub image: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    /// URL lives under the `#text` key.
    #[serde(rename = "#text")]
    pub url: String,
    #[serde(default)]
    pub size: String,
}

/// Error body Last.fm returns with HTTP 200.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: u32,
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
