//! Last.fm HTTP client
//!
//! Handles communication with the Last.fm web service.
//! See: https://www.last.fm/api
//!
//! Requires an API key; without one every call fails with
//! [`SourceError::MissingCredentials`] and the aggregator simply skips the
//! enhancement step.

use super::dto;
use crate::sources::SourceError;

/// Canonical metadata for a track, as Last.fm knows it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackInfo {
    pub name: String,
    pub artist: String,
    pub album: Option<String>,
    /// Album art URLs, largest first.
    pub image_urls: Vec<String>,
    pub duration_ms: u64,
}

/// Last.fm API client
pub struct LastFmClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LastFmClient {
    pub fn new(http_client: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            http_client,
            base_url: "https://ws.audioscrobbler.com/2.0/".to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up canonical metadata for an artist/track pair.
    pub async fn track_info(&self, artist: &str, track: &str) -> Result<TrackInfo, SourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SourceError::MissingCredentials("lastfm api key"))?;

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("method", "track.getInfo"),
                ("api_key", api_key),
                ("artist", artist),
                ("track", track),
                ("autocorrect", "1"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(SourceError::from_http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::from_status(status));
        }

        // Failures come back as HTTP 200 with an error body
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        if body.get("error").is_some() {
            let error: dto::ApiError = serde_json::from_value(body)
                .map_err(|e| SourceError::Parse(e.to_string()))?;
            return Err(match error.error {
                6 => SourceError::NotFound,
                29 => SourceError::RateLimited,
                _ => SourceError::Api(error.message),
            });
        }

        let parsed: dto::TrackInfoResponse =
            serde_json::from_value(body).map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(to_track_info(parsed.track))
    }
}

fn to_track_info(raw: dto::TrackInfo) -> TrackInfo {
    let (album, image_urls) = match raw.album {
        Some(album) => {
            // Last.fm lists sizes smallest first; we want largest first
            let mut urls: Vec<String> = album
                .image
                .into_iter()
                .map(|i| i.url)
                .filter(|u| !u.is_empty())
                .collect();
            urls.reverse();
            (Some(album.title), urls)
        }
        None => (None, vec![]),
    };

    TrackInfo {
        name: raw.name,
        artist: raw.artist.name,
        album,
        image_urls,
        duration_ms: raw.duration.parse().unwrap_or(0),
    }
}
