//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header (set on the shared
//! HTTP client) and rate limits to 1 req/sec. The client enforces the limit
//! itself by spacing requests off the previous request's timestamp, so
//! callers never have to remember to sleep.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::dto;
use crate::model::{Artist, Source};
use crate::sources::traits::ArtistSource;
use crate::sources::SourceError;

/// Minimum spacing between requests (the documented limit is 1/sec).
const REQUEST_SPACING: Duration = Duration::from_millis(1100);

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
    last_request: Mutex<Option<Instant>>,
}

impl MusicBrainzClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: "https://musicbrainz.org/ws/2".to_string(),
            last_request: Mutex::new(None),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            last_request: Mutex::new(None),
        }
    }

    pub async fn search_artists(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Artist>, SourceError> {
        self.throttle().await;

        let response = self
            .http_client
            .get(format!("{}/artist", self.base_url))
            .query(&[
                ("query", query),
                ("fmt", "json"),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await
            .map_err(SourceError::from_http)?;

        let status = response.status();
        if !status.is_success() {
            if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
                // MusicBrainz answers 503 when the rate limit is exceeded
                return Err(SourceError::RateLimited);
            }
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(SourceError::Api(error.error));
            }
            return Err(SourceError::from_status(status));
        }

        let parsed = response
            .json::<dto::ArtistSearchResponse>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(parsed.artists.into_iter().map(to_artist).collect())
    }

    /// Wait until a full spacing interval has passed since the last request.
    async fn throttle(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(at) = *last {
            let elapsed = at.elapsed();
            if elapsed < REQUEST_SPACING {
                tokio::time::sleep(REQUEST_SPACING - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[async_trait]
impl ArtistSource for MusicBrainzClient {
    fn source(&self) -> Source {
        Source::MusicBrainz
    }

    async fn search_artists(&self, query: &str, limit: usize) -> Result<Vec<Artist>, SourceError> {
        MusicBrainzClient::search_artists(self, query, limit).await
    }
}

fn to_artist(raw: dto::MbArtist) -> Artist {
    // Tags sorted by vote count; drop zero/negative-voted noise
    let mut tags = raw.tags;
    tags.sort_by(|a, b| b.count.cmp(&a.count));
    let genres: Vec<String> = tags
        .into_iter()
        .filter(|t| t.count > 0)
        .take(5)
        .map(|t| t.name)
        .collect();

    Artist {
        id: Source::MusicBrainz.id(&raw.id),
        name: raw.name,
        image_urls: vec![], // MusicBrainz has no artist imagery
        genres,
        followers: 0,
        popularity: raw.score.min(100),
        source: Source::MusicBrainz,
    }
}
