//! Multi-source aggregation: fan-out, merge, fallback.
//!
//! [`MusicAggregator`] owns one client per upstream source plus the result
//! caches, and exposes the operations the CLI renders. Two shapes of
//! operation:
//!
//! - **List operations** (search, home, charts, ...) never fail. Each
//!   returns an [`Outcome`] whose degradation list records which sources
//!   broke and why; a broken source contributes an empty list. Sequential
//!   fallback chains end in hardcoded mock data so feeds stay renderable
//!   with zero working upstreams.
//! - **Detail lookups** (one track, one album, ...) return
//!   [`crate::error::Result`], because there is no useful empty value to
//!   degrade to. The id prefix routes each lookup to the adapter that
//!   minted the id.
//!
//! Results are cached per shape with single-flight TTL caches; degraded
//! outcomes are returned to the caller but never cached, so the next
//! request retries the broken source.

pub mod fallback;
pub mod titles;

mod browse;
mod service;

use serde::Serialize;

use crate::cache::{CacheOutcome, TtlCache};
use crate::config::Config;
use crate::history::HistoryStore;
use crate::model::{Album, HomeFeed, Playlist, SearchResults, Source, Track};
use crate::sources::archive::ArchiveClient;
use crate::sources::ccmixter::CcMixterClient;
use crate::sources::deezer::DeezerClient;
use crate::sources::jamendo::JamendoClient;
use crate::sources::lastfm::LastFmClient;
use crate::sources::musicbrainz::MusicBrainzClient;
use crate::sources::radio::RadioBrowserClient;
use crate::sources::ytmusic::YtMusicClient;
use crate::sources::{self, SourceError};

/// The synthetic playlist backed by the local saved-tracks store.
pub const LIKED_SONGS_ID: &str = "liked-songs";

/// Record of a source that failed during a list operation.
#[derive(Debug, Clone, Serialize)]
pub struct Degradation {
    pub source: Source,
    pub reason: String,
}

impl Degradation {
    pub fn new(source: Source, error: &SourceError) -> Self {
        // MissingCredentials is an expected steady state for optional
        // sources, not worth a warning on every request
        if matches!(error, SourceError::MissingCredentials(_)) {
            tracing::debug!(%source, %error, "source skipped");
        } else {
            tracing::warn!(%source, %error, "source degraded");
        }
        Self {
            source,
            reason: error.to_string(),
        }
    }
}

/// Data plus the degradation trail that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome<T> {
    pub data: T,
    pub degradations: Vec<Degradation>,
}

impl<T> Outcome<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            degradations: vec![],
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }
}

/// Cached outcomes come back with a clean degradation trail; only the data
/// itself is cached, and only when the trail was empty.
impl<T: Clone> CacheOutcome<T> for Outcome<T> {
    fn from_cached(value: T) -> Self {
        Outcome::ok(value)
    }

    fn cache_value(&self) -> Option<T> {
        Some(self.data.clone())
    }
}

/// Owns the source clients, the caches, and the local store.
pub struct MusicAggregator {
    jamendo: JamendoClient,
    deezer: DeezerClient,
    archive: ArchiveClient,
    ccmixter: CcMixterClient,
    musicbrainz: MusicBrainzClient,
    radio: RadioBrowserClient,
    ytmusic: YtMusicClient,
    lastfm: LastFmClient,

    store: HistoryStore,

    search_cache: TtlCache<SearchResults>,
    home_cache: TtlCache<HomeFeed>,
    track_list_cache: TtlCache<Vec<Track>>,
    album_list_cache: TtlCache<Vec<Album>>,
    playlist_list_cache: TtlCache<Vec<Playlist>>,
}

impl MusicAggregator {
    /// Build all clients over one shared HTTP client.
    pub fn new(config: &Config, store: HistoryStore) -> Self {
        let http = sources::http_client(config.network.timeout());
        let ttl = config.cache.ttl();
        let capacity = config.cache.capacity;

        Self {
            jamendo: JamendoClient::new(http.clone(), config.credentials.jamendo_client_id.clone()),
            deezer: DeezerClient::new(http.clone()),
            archive: ArchiveClient::new(http.clone()),
            ccmixter: CcMixterClient::new(http.clone()),
            musicbrainz: MusicBrainzClient::new(http.clone()),
            radio: RadioBrowserClient::new(http.clone()),
            ytmusic: YtMusicClient::new(http.clone(), config.credentials.ytmusic_base_url.clone()),
            lastfm: LastFmClient::new(http, config.credentials.lastfm_api_key.clone()),
            store,
            search_cache: TtlCache::new(ttl, capacity),
            home_cache: TtlCache::new(ttl, capacity),
            track_list_cache: TtlCache::new(ttl, capacity),
            album_list_cache: TtlCache::new(ttl, capacity),
            playlist_list_cache: TtlCache::new(ttl, capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_cache_bridge() {
        let outcome: Outcome<Vec<u8>> = Outcome::ok(vec![1, 2]);
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.cache_value(), Some(vec![1, 2]));

        let restored: Outcome<Vec<u8>> = Outcome::from_cached(vec![3]);
        assert_eq!(restored.data, vec![3]);
        assert!(restored.degradations.is_empty());
    }

    #[test]
    fn test_degradation_records_reason() {
        let d = Degradation::new(Source::Deezer, &SourceError::Timeout);
        assert_eq!(d.source, Source::Deezer);
        assert_eq!(d.reason, "request timed out");
    }
}
