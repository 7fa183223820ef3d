//! Deezer HTTP client
//!
//! Handles communication with the public Deezer API.
//! See: https://developers.deezer.com/api
//!
//! No credentials required. Deezer returns failures as HTTP 200 with an
//! `{"error": ...}` body, so every response is probed for that shape before
//! being deserialized into the expected one.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{adapter, dto};
use crate::model::{Album, AlbumDetail, Artist, Source, Track};
use crate::sources::traits::{AlbumSource, ArtistSource, TrackSource};
use crate::sources::SourceError;

/// Deezer API client
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: "https://api.deezer.com".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Track>, SourceError> {
        let list: dto::DataList<dto::DeezerTrack> =
            self.get("/search", &[("q", query), ("limit", &limit.to_string())])
                .await?;
        Ok(list.data.into_iter().map(adapter::to_track).collect())
    }

    pub async fn search_artists(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Artist>, SourceError> {
        let list: dto::DataList<dto::DeezerArtist> = self
            .get(
                "/search/artist",
                &[("q", query), ("limit", &limit.to_string())],
            )
            .await?;
        Ok(list.data.into_iter().map(adapter::to_artist).collect())
    }

    pub async fn search_albums(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Album>, SourceError> {
        let list: dto::DataList<dto::DeezerAlbum> = self
            .get(
                "/search/album",
                &[("q", query), ("limit", &limit.to_string())],
            )
            .await?;
        Ok(list.data.into_iter().map(adapter::to_album).collect())
    }

    /// Exact-match lookup using Deezer's fielded search syntax.
    pub async fn find_exact(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Option<Track>, SourceError> {
        let query = format!("artist:\"{artist}\" track:\"{title}\"");
        let mut tracks = self.search_tracks(&query, 1).await?;
        Ok(tracks.drain(..).next())
    }

    pub async fn chart_tracks(&self, limit: usize) -> Result<Vec<Track>, SourceError> {
        let list: dto::DataList<dto::DeezerTrack> = self
            .get("/chart/0/tracks", &[("limit", &limit.to_string())])
            .await?;
        Ok(list.data.into_iter().map(adapter::to_track).collect())
    }

    pub async fn chart_albums(&self, limit: usize) -> Result<Vec<Album>, SourceError> {
        let list: dto::DataList<dto::DeezerAlbum> = self
            .get("/chart/0/albums", &[("limit", &limit.to_string())])
            .await?;
        Ok(list.data.into_iter().map(adapter::to_album).collect())
    }

    pub async fn chart_artists(&self, limit: usize) -> Result<Vec<Artist>, SourceError> {
        let list: dto::DataList<dto::DeezerArtist> = self
            .get("/chart/0/artists", &[("limit", &limit.to_string())])
            .await?;
        Ok(list.data.into_iter().map(adapter::to_artist).collect())
    }

    /// Track detail by raw (unprefixed) Deezer id.
    pub async fn track(&self, raw_id: &str) -> Result<Track, SourceError> {
        let raw: dto::DeezerTrack = self.get(&format!("/track/{raw_id}"), &[]).await?;
        Ok(adapter::to_track(raw))
    }

    /// Artist detail by raw (unprefixed) Deezer id.
    pub async fn artist(&self, raw_id: &str) -> Result<Artist, SourceError> {
        let raw: dto::DeezerArtist = self.get(&format!("/artist/{raw_id}"), &[]).await?;
        Ok(adapter::to_artist(raw))
    }

    /// Album detail (including track listing) by raw Deezer id.
    pub async fn album(&self, raw_id: &str) -> Result<AlbumDetail, SourceError> {
        let raw: dto::DeezerAlbum = self.get(&format!("/album/{raw_id}"), &[]).await?;
        Ok(adapter::to_album_detail(raw))
    }

    pub async fn artist_top_tracks(
        &self,
        raw_id: &str,
        limit: usize,
    ) -> Result<Vec<Track>, SourceError> {
        let list: dto::DataList<dto::DeezerTrack> = self
            .get(
                &format!("/artist/{raw_id}/top"),
                &[("limit", &limit.to_string())],
            )
            .await?;
        Ok(list.data.into_iter().map(adapter::to_track).collect())
    }

    pub async fn artist_albums(
        &self,
        raw_id: &str,
        limit: usize,
    ) -> Result<Vec<Album>, SourceError> {
        let list: dto::DataList<dto::DeezerAlbum> = self
            .get(
                &format!("/artist/{raw_id}/albums"),
                &[("limit", &limit.to_string())],
            )
            .await?;
        Ok(list.data.into_iter().map(adapter::to_album).collect())
    }

    /// Send a GET and parse, probing for Deezer's HTTP-200 error body.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, SourceError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .send()
            .await
            .map_err(SourceError::from_http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::from_status(status));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        if body.get("error").is_some() {
            let envelope: dto::ErrorEnvelope = serde_json::from_value(body)
                .map_err(|e| SourceError::Parse(e.to_string()))?;
            return Err(match envelope.error.code {
                // Quota / rate-limit code per API docs
                4 => SourceError::RateLimited,
                800 => SourceError::NotFound,
                _ => SourceError::Api(envelope.error.message),
            });
        }

        serde_json::from_value(body).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

#[async_trait]
impl TrackSource for DeezerClient {
    fn source(&self) -> Source {
        Source::Deezer
    }

    async fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<Track>, SourceError> {
        DeezerClient::search_tracks(self, query, limit).await
    }

    async fn featured_tracks(&self, limit: usize) -> Result<Vec<Track>, SourceError> {
        DeezerClient::chart_tracks(self, limit).await
    }
}

#[async_trait]
impl ArtistSource for DeezerClient {
    fn source(&self) -> Source {
        Source::Deezer
    }

    async fn search_artists(&self, query: &str, limit: usize) -> Result<Vec<Artist>, SourceError> {
        DeezerClient::search_artists(self, query, limit).await
    }
}

#[async_trait]
impl AlbumSource for DeezerClient {
    fn source(&self) -> Source {
        Source::Deezer
    }

    async fn search_albums(&self, query: &str, limit: usize) -> Result<Vec<Album>, SourceError> {
        DeezerClient::search_albums(self, query, limit).await
    }
}

impl std::fmt::Debug for DeezerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeezerClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
