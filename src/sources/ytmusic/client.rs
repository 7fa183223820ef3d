//! YouTube Music bridge HTTP client
//!
//! Talks to a self-hosted ytmusicapi bridge. The bridge URL comes from
//! config; with no URL configured every method fails fast with
//! [`SourceError::MissingCredentials`] so the aggregator can skip this
//! source without a network round trip.

use serde::de::DeserializeOwned;

use super::{adapter, dto};
use crate::model::{Album, AlbumDetail, Artist, Lyrics, Playlist, PlaylistDetail, SearchResults, Track};
use crate::sources::SourceError;

/// YouTube Music bridge client
pub struct YtMusicClient {
    http_client: reqwest::Client,
    base_url: Option<String>,
}

impl YtMusicClient {
    pub fn new(http_client: reqwest::Client, base_url: Option<String>) -> Self {
        Self {
            http_client,
            base_url: base_url
                .filter(|u| !u.is_empty())
                .map(|u| u.trim_end_matches('/').to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Bucketed search across all entity kinds.
    pub async fn search(&self, query: &str, limit: usize) -> Result<SearchResults, SourceError> {
        let parsed: dto::SearchResponse = self
            .request("/search", &[("q", query), ("limit", &limit.to_string())])
            .await?;

        Ok(SearchResults {
            tracks: parsed.tracks.into_iter().map(adapter::to_track).collect(),
            artists: parsed.artists.into_iter().map(adapter::to_artist).collect(),
            albums: parsed.albums.into_iter().map(adapter::to_album).collect(),
            playlists: parsed
                .playlists
                .into_iter()
                .map(adapter::to_playlist)
                .collect(),
        })
    }

    /// Look up the single best match for an artist/track pair.
    pub async fn find_exact(&self, artist: &str, track: &str) -> Result<Option<Track>, SourceError> {
        let parsed: dto::SearchResponse = self
            .request("/find", &[("artist", artist), ("track", track)])
            .await?;
        Ok(parsed.tracks.into_iter().next().map(adapter::to_track))
    }

    pub async fn track(&self, video_id: &str) -> Result<Track, SourceError> {
        let parsed: dto::YtTrack = self.request(&format!("/track/{video_id}"), &[]).await?;
        Ok(adapter::to_track(parsed))
    }

    pub async fn artist(&self, browse_id: &str) -> Result<Artist, SourceError> {
        let parsed: dto::YtArtist = self.request(&format!("/artist/{browse_id}"), &[]).await?;
        Ok(adapter::to_artist(parsed))
    }

    pub async fn artist_top_tracks(
        &self,
        browse_id: &str,
        limit: usize,
    ) -> Result<Vec<Track>, SourceError> {
        let parsed: Vec<dto::YtTrack> = self
            .request(
                &format!("/artist/{browse_id}/top-tracks"),
                &[("limit", &limit.to_string())],
            )
            .await?;
        Ok(parsed.into_iter().map(adapter::to_track).collect())
    }

    pub async fn artist_albums(&self, browse_id: &str) -> Result<Vec<Album>, SourceError> {
        let parsed: Vec<dto::YtAlbum> = self
            .request(&format!("/artist/{browse_id}/albums"), &[])
            .await?;
        Ok(parsed.into_iter().map(adapter::to_album).collect())
    }

    pub async fn album(&self, browse_id: &str) -> Result<AlbumDetail, SourceError> {
        let parsed: dto::YtAlbum = self.request(&format!("/album/{browse_id}"), &[]).await?;
        Ok(adapter::to_album_detail(parsed))
    }

    pub async fn playlist(&self, playlist_id: &str) -> Result<PlaylistDetail, SourceError> {
        let parsed: dto::YtPlaylist = self
            .request(&format!("/playlist/{playlist_id}"), &[])
            .await?;
        Ok(adapter::to_playlist_detail(parsed))
    }

    /// Timed or plain lyrics for a video, when YouTube has them.
    pub async fn lyrics(&self, video_id: &str) -> Result<Lyrics, SourceError> {
        let parsed: dto::LyricsResponse =
            self.request(&format!("/lyrics/{video_id}"), &[]).await?;
        match parsed.lyrics {
            Some(lyrics) => Ok(Lyrics {
                lyrics,
                attribution: parsed.source,
            }),
            None => Err(SourceError::NotFound),
        }
    }

    /// Chart tracks and artists for the home feed.
    pub async fn charts(&self, limit: usize) -> Result<(Vec<Track>, Vec<Artist>), SourceError> {
        let parsed: dto::ChartsResponse = self
            .request("/charts", &[("limit", &limit.to_string())])
            .await?;
        Ok((
            parsed.tracks.into_iter().map(adapter::to_track).collect(),
            parsed.artists.into_iter().map(adapter::to_artist).collect(),
        ))
    }

    pub async fn new_releases(&self, limit: usize) -> Result<Vec<Album>, SourceError> {
        let parsed: Vec<dto::YtAlbum> = self
            .request("/new-releases", &[("limit", &limit.to_string())])
            .await?;
        Ok(parsed.into_iter().map(adapter::to_album).collect())
    }

    /// Curated playlists for a mood/genre category.
    pub async fn genre_playlists(&self, genre_id: &str) -> Result<Vec<Playlist>, SourceError> {
        let parsed: Vec<dto::YtPlaylist> =
            self.request(&format!("/genre/{genre_id}"), &[]).await?;
        Ok(parsed.into_iter().map(adapter::to_playlist).collect())
    }

    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SourceError> {
        let base = self
            .base_url
            .as_deref()
            .ok_or(SourceError::MissingCredentials("ytmusic bridge url"))?;

        let response = self
            .http_client
            .get(format!("{base}{path}"))
            .query(query)
            .send()
            .await
            .map_err(SourceError::from_http)?;

        let status = response.status();
        if !status.is_success() {
            if let Ok(body) = response.json::<dto::ErrorBody>().await {
                return Err(match status {
                    reqwest::StatusCode::NOT_FOUND => SourceError::NotFound,
                    _ => SourceError::Api(match body.details {
                        Some(details) => format!("{}: {details}", body.error),
                        None => body.error,
                    }),
                });
            }
            return Err(SourceError::from_status(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}
