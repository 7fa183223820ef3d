//! Deezer API Data Transfer Objects
//!
//! These types match EXACTLY what the Deezer API returns.
//! DO NOT use these types outside the deezer module - convert to model types.
//!
//! API Reference: https://developers.deezer.com/api
//!
//! Deezer reports errors as HTTP 200 with an `{"error": {...}}` body, so the
//! client probes for that shape before deserializing the expected one.

use serde::Deserialize;

/// `{"data": [...]}` list wrapper used by search, charts, and sub-resources.
#[derive(Debug, Clone, Deserialize)]
pub struct DataList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Error body, delivered with HTTP 200.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    pub code: i64,
}

/// Track from search, charts, and `/track/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeezerTrack {
    pub id: u64,
    pub title: String,
    /// Duration in whole seconds.
    #[serde(default)]
    pub duration: u64,
    /// Popularity signal, roughly 0..=1_000_000.
    #[serde(default)]
    pub rank: u64,
    /// 30-second MP3 preview URL.
    #[serde(default)]
    pub preview: String,
    /// Only present on `/track/{id}`.
    pub release_date: Option<String>,
    pub artist: Option<DeezerArtist>,
    pub album: Option<DeezerAlbum>,
}

/// Artist from search, charts, `/artist/{id}`, and embedded credits.
#[derive(Debug, Clone, Deserialize)]
pub struct DeezerArtist {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub picture_medium: String,
    #[serde(default)]
    pub picture_big: String,
    /// Follower count; only present on artist objects, not embedded credits.
    #[serde(default)]
    pub nb_fan: u64,
}

/// Album from search, charts, `/album/{id}`, and embedded refs.
#[derive(Debug, Clone, Deserialize)]
pub struct DeezerAlbum {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub cover_medium: String,
    #[serde(default)]
    pub cover_big: String,
    pub release_date: Option<String>,
    #[serde(default)]
    pub nb_tracks: u32,
    pub artist: Option<DeezerArtist>,
    /// Only present on `/album/{id}`.
    pub tracks: Option<DataList<DeezerTrack>>,
    pub genres: Option<DataList<DeezerGenre>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeezerGenre {
    pub name: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
