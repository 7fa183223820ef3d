//! Jamendo HTTP client
//!
//! Handles communication with the Jamendo v3.0 web service.
//! See: https://developer.jamendo.com/v3.0
//!
//! Jamendo requires a client id on every call and reports some failures as
//! HTTP 200 with an error code inside the response envelope.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{adapter, dto};
use crate::model::{Album, Playlist, PlaylistDetail, Source, Track};
use crate::sources::traits::{AlbumSource, PlaylistSource, TrackSource};
use crate::sources::SourceError;

/// Jamendo API client
pub struct JamendoClient {
    http_client: reqwest::Client,
    base_url: String,
    client_id: Option<String>,
}

impl JamendoClient {
    pub fn new(http_client: reqwest::Client, client_id: Option<String>) -> Self {
        Self {
            http_client,
            base_url: "https://api.jamendo.com/v3.0".to_string(),
            client_id,
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>, client_id: Option<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            client_id,
        }
    }

    pub async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Track>, SourceError> {
        let results = self
            .request::<dto::JamendoTrack>(
                "/tracks/",
                &[("search", query), ("include", "musicinfo")],
                limit,
            )
            .await?;
        Ok(results.into_iter().map(adapter::to_track).collect())
    }

    /// Most popular tracks this month, used for home/charts fallbacks.
    pub async fn featured_tracks(&self, limit: usize) -> Result<Vec<Track>, SourceError> {
        let results = self
            .request::<dto::JamendoTrack>(
                "/tracks/",
                &[
                    ("order", "popularity_month"),
                    ("featured", "1"),
                    ("include", "musicinfo"),
                ],
                limit,
            )
            .await?;
        Ok(results.into_iter().map(adapter::to_track).collect())
    }

    pub async fn search_albums(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Album>, SourceError> {
        let results = self
            .request::<dto::JamendoAlbum>("/albums/", &[("namesearch", query)], limit)
            .await?;
        Ok(results.into_iter().map(adapter::to_album).collect())
    }

    pub async fn search_playlists(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Playlist>, SourceError> {
        let results = self
            .request::<dto::JamendoPlaylist>("/playlists/", &[("namesearch", query)], limit)
            .await?;
        Ok(results.into_iter().map(adapter::to_playlist).collect())
    }

    /// Recently created playlists, used for the home feed.
    pub async fn featured_playlists(&self, limit: usize) -> Result<Vec<Playlist>, SourceError> {
        let results = self
            .request::<dto::JamendoPlaylist>("/playlists/", &[("order", "creationdate_desc")], limit)
            .await?;
        Ok(results.into_iter().map(adapter::to_playlist).collect())
    }

    /// Playlist detail with its track listing.
    pub async fn playlist(&self, raw_id: &str) -> Result<PlaylistDetail, SourceError> {
        let results: Vec<dto::JamendoPlaylistTracks> = self
            .request("/playlists/tracks", &[("id", raw_id)], 1)
            .await?;
        results
            .into_iter()
            .next()
            .map(adapter::to_playlist_detail)
            .ok_or(SourceError::NotFound)
    }

    /// Playlists matching a genre tag, for genre browsing.
    pub async fn genre_playlists(
        &self,
        genre: &str,
        limit: usize,
    ) -> Result<Vec<Playlist>, SourceError> {
        self.search_playlists(genre, limit).await
    }

    /// Send a request and unwrap the Jamendo envelope.
    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        limit: usize,
    ) -> Result<Vec<T>, SourceError> {
        let client_id = self
            .client_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(SourceError::MissingCredentials("jamendo client id"))?;

        let limit = limit.to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("client_id", client_id),
            ("format", "json"),
            ("limit", &limit),
        ];
        query.extend_from_slice(params);

        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .query(&query)
            .send()
            .await
            .map_err(SourceError::from_http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::from_status(status));
        }

        let envelope = response
            .json::<dto::Envelope<T>>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        if !envelope.headers.is_success() {
            return Err(SourceError::Api(envelope.headers.error_message));
        }

        Ok(envelope.results)
    }
}

#[async_trait]
impl TrackSource for JamendoClient {
    fn source(&self) -> Source {
        Source::Jamendo
    }

    async fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<Track>, SourceError> {
        JamendoClient::search_tracks(self, query, limit).await
    }

    async fn featured_tracks(&self, limit: usize) -> Result<Vec<Track>, SourceError> {
        JamendoClient::featured_tracks(self, limit).await
    }
}

#[async_trait]
impl AlbumSource for JamendoClient {
    fn source(&self) -> Source {
        Source::Jamendo
    }

    async fn search_albums(&self, query: &str, limit: usize) -> Result<Vec<Album>, SourceError> {
        JamendoClient::search_albums(self, query, limit).await
    }
}

#[async_trait]
impl PlaylistSource for JamendoClient {
    fn source(&self) -> Source {
        Source::Jamendo
    }

    async fn search_playlists(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Playlist>, SourceError> {
        JamendoClient::search_playlists(self, query, limit).await
    }
}
