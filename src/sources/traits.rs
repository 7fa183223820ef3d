//! Trait definitions for source adapters.
//!
//! These traits are the seam between the aggregator's fan-out/fallback logic
//! and the concrete HTTP clients. Production code passes the real clients;
//! tests substitute the mocks below to exercise merge order, fallback chains,
//! and degradation reporting without any network.

use async_trait::async_trait;

use super::SourceError;
use crate::model::{Album, Artist, Playlist, Source, Track};

/// A source that can search for and feature tracks.
#[async_trait]
pub trait TrackSource: Send + Sync {
    fn source(&self) -> Source;

    async fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<Track>, SourceError>;

    /// Editorially featured or most-popular tracks, for home/charts feeds.
    async fn featured_tracks(&self, limit: usize) -> Result<Vec<Track>, SourceError>;
}

/// A source that can search for artists.
#[async_trait]
pub trait ArtistSource: Send + Sync {
    fn source(&self) -> Source;

    async fn search_artists(&self, query: &str, limit: usize) -> Result<Vec<Artist>, SourceError>;
}

/// A source that can search for albums.
#[async_trait]
pub trait AlbumSource: Send + Sync {
    fn source(&self) -> Source;

    async fn search_albums(&self, query: &str, limit: usize) -> Result<Vec<Album>, SourceError>;
}

/// A source that can search for playlists.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    fn source(&self) -> Source;

    async fn search_playlists(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Playlist>, SourceError>;
}
