//! Search, detail lookups, and metadata enhancement.

use futures::future;

use super::{fallback, titles, Degradation, MusicAggregator, Outcome, LIKED_SONGS_ID};
use crate::error::{Error, Result};
use crate::model::{
    Album, AlbumDetail, Artist, Lyrics, Playlist, PlaylistDetail, SearchKind, SearchResults,
    Source, Track,
};
use crate::sources::{AlbumSource, ArtistSource, PlaylistSource, SourceError, TrackSource};

impl MusicAggregator {
    /// Multi-source search.
    ///
    /// An empty query short-circuits to empty results. `All` splits the
    /// limit across the four categories and fans them out concurrently;
    /// a single-category kind leaves the other lists empty.
    pub async fn search(&self, query: &str, kind: SearchKind, limit: usize) -> Outcome<SearchResults> {
        let query = query.trim();
        if query.is_empty() || limit == 0 {
            return Outcome::ok(SearchResults::default());
        }

        let key = format!("search:{kind:?}:{limit}:{}", query.to_lowercase());
        self.search_cache
            .get_or_compute(&key, || async {
                let outcome = self.search_upstream(query, kind, limit).await;
                let cacheable = !outcome.is_degraded();
                (outcome, cacheable)
            })
            .await
    }

    async fn search_upstream(
        &self,
        query: &str,
        kind: SearchKind,
        limit: usize,
    ) -> Outcome<SearchResults> {
        let cap = per_category_cap(kind, limit);
        let want = |k: SearchKind| kind == SearchKind::All || kind == k;
        let mut degradations = Vec::new();

        // One bucketed call covers every category this source serves
        let mut yt = SearchResults::default();
        if self.ytmusic.is_configured() {
            match self.ytmusic.search(query, cap).await {
                Ok(results) => yt = results,
                Err(e) => degradations.push(Degradation::new(Source::YtMusic, &e)),
            }
        }
        // The bucketed response covers all categories; a single-category
        // search must not leak the other buckets into its results
        retain_kind(&mut yt, kind);

        let ((tracks, dt), (artists, da), (albums, dal), (playlists, dp)) = tokio::join!(
            async {
                if !want(SearchKind::Tracks) {
                    return (vec![], vec![]);
                }
                let primary: [&dyn TrackSource; 2] = [&self.deezer, &self.jamendo];
                let secondary: [&dyn TrackSource; 2] = [&self.archive, &self.ccmixter];
                chained_tracks(&primary, &secondary, query, cap).await
            },
            async {
                if !want(SearchKind::Artists) {
                    return (vec![], vec![]);
                }
                let sources: [&dyn ArtistSource; 2] = [&self.deezer, &self.musicbrainz];
                artist_stage(&sources, query, cap).await
            },
            async {
                if !want(SearchKind::Albums) {
                    return (vec![], vec![]);
                }
                let sources: [&dyn AlbumSource; 2] = [&self.deezer, &self.jamendo];
                album_stage(&sources, query, cap).await
            },
            async {
                if !want(SearchKind::Playlists) {
                    return (vec![], vec![]);
                }
                let sources: [&dyn PlaylistSource; 1] = [&self.jamendo];
                playlist_stage(&sources, query, cap).await
            },
        );
        degradations.extend(dt);
        degradations.extend(da);
        degradations.extend(dal);
        degradations.extend(dp);

        let mut results = SearchResults {
            tracks: merged(yt.tracks, tracks, cap),
            artists: merged(yt.artists, artists, cap),
            albums: merged(yt.albums, albums, cap),
            playlists: merged(yt.playlists, playlists, cap),
        };

        // Last stage of the track chain: never serve an empty track list
        if want(SearchKind::Tracks) && results.tracks.is_empty() {
            tracing::debug!(query, "all track sources empty, serving fallback catalog");
            results.tracks = fallback::mock_tracks();
            results.tracks.truncate(cap);
        }

        Outcome {
            data: results,
            degradations,
        }
    }

    /// Exact artist/title match, for resolving scraped names to playable
    /// entities. Prefers the richer source when it is configured.
    pub async fn find_exact(&self, artist: &str, title: &str) -> Result<Option<Track>> {
        if self.ytmusic.is_configured() {
            return Ok(self.ytmusic.find_exact(artist, title).await?);
        }
        Ok(self.deezer.find_exact(artist, title).await?)
    }

    // ------------------------------------------------------------------
    // Detail lookups, routed by id prefix
    // ------------------------------------------------------------------

    pub async fn track(&self, id: &str) -> Result<Track> {
        match split(id)? {
            (Source::Deezer, raw) => Ok(self.deezer.track(raw).await?),
            (Source::YtMusic, raw) => Ok(self.ytmusic.track(raw).await?),
            (Source::Mock, _) => fallback::mock_track(id).ok_or(Error::Source(SourceError::NotFound)),
            (source, _) => Err(Error::Unsupported {
                origin: source,
                entity: "track",
            }),
        }
    }

    pub async fn artist(&self, id: &str) -> Result<Artist> {
        match split(id)? {
            (Source::Deezer, raw) => Ok(self.deezer.artist(raw).await?),
            (Source::YtMusic, raw) => Ok(self.ytmusic.artist(raw).await?),
            (Source::Mock, _) => {
                fallback::mock_artist(id).ok_or(Error::Source(SourceError::NotFound))
            }
            (source, _) => Err(Error::Unsupported {
                origin: source,
                entity: "artist",
            }),
        }
    }

    pub async fn artist_top_tracks(&self, id: &str, limit: usize) -> Result<Vec<Track>> {
        match split(id)? {
            (Source::Deezer, raw) => Ok(self.deezer.artist_top_tracks(raw, limit).await?),
            (Source::YtMusic, raw) => Ok(self.ytmusic.artist_top_tracks(raw, limit).await?),
            (Source::Mock, _) => {
                let mut tracks: Vec<Track> = fallback::mock_tracks()
                    .into_iter()
                    .filter(|t| t.artists.iter().any(|a| a.id == id))
                    .collect();
                tracks.truncate(limit);
                Ok(tracks)
            }
            (source, _) => Err(Error::Unsupported {
                origin: source,
                entity: "top tracks",
            }),
        }
    }

    pub async fn artist_albums(&self, id: &str, limit: usize) -> Result<Vec<Album>> {
        match split(id)? {
            (Source::Deezer, raw) => Ok(self.deezer.artist_albums(raw, limit).await?),
            (Source::YtMusic, raw) => {
                let mut albums = self.ytmusic.artist_albums(raw).await?;
                albums.truncate(limit);
                Ok(albums)
            }
            (Source::Mock, _) => Ok(fallback::mock_albums()
                .into_iter()
                .filter(|a| a.artists.iter().any(|c| c.id == id))
                .take(limit)
                .collect()),
            (source, _) => Err(Error::Unsupported {
                origin: source,
                entity: "albums",
            }),
        }
    }

    pub async fn album(&self, id: &str) -> Result<AlbumDetail> {
        match split(id)? {
            (Source::Deezer, raw) => Ok(self.deezer.album(raw).await?),
            (Source::YtMusic, raw) => Ok(self.ytmusic.album(raw).await?),
            (Source::Mock, _) => {
                fallback::mock_album_detail(id).ok_or(Error::Source(SourceError::NotFound))
            }
            (source, _) => Err(Error::Unsupported {
                origin: source,
                entity: "album",
            }),
        }
    }

    /// Playlist detail. `liked-songs` is synthesized from the local
    /// saved-tracks store and always resolves, even with no upstream.
    pub async fn playlist(&self, id: &str) -> Result<PlaylistDetail> {
        if id == LIKED_SONGS_ID {
            return Ok(self.liked_songs());
        }
        match split(id)? {
            (Source::Jamendo, raw) => Ok(self.jamendo.playlist(raw).await?),
            (Source::YtMusic, raw) => Ok(self.ytmusic.playlist(raw).await?),
            (Source::Mock, _) => {
                fallback::mock_playlist_detail(id).ok_or(Error::Source(SourceError::NotFound))
            }
            (source, _) => Err(Error::Unsupported {
                origin: source,
                entity: "playlist",
            }),
        }
    }

    pub async fn lyrics(&self, id: &str) -> Result<Lyrics> {
        match split(id)? {
            (Source::YtMusic, raw) => Ok(self.ytmusic.lyrics(raw).await?),
            (source, _) => Err(Error::Unsupported {
                origin: source,
                entity: "lyrics",
            }),
        }
    }

    fn liked_songs(&self) -> PlaylistDetail {
        let tracks = self.store.saved_tracks();
        PlaylistDetail {
            playlist: Playlist {
                id: LIKED_SONGS_ID.to_string(),
                name: "Liked Songs".to_string(),
                description: "Tracks you saved".to_string(),
                image_urls: vec![],
                track_count: tracks.len() as u32,
                owner: None,
                source: Source::Mock,
            },
            tracks,
        }
    }

    // ------------------------------------------------------------------
    // Enhancement
    // ------------------------------------------------------------------

    /// Best-effort metadata cleanup for scraped display names.
    ///
    /// Strips video junk from the title, guesses an artist split when the
    /// credited artist is a placeholder, then asks Last.fm for canonical
    /// spellings and artwork. Every failure path returns the track with at
    /// worst a cleaned-up title; this never errors.
    pub async fn enhance_track(&self, mut track: Track) -> Track {
        let cleaned = titles::clean_title(&track.name);

        let credited = track.artist_name().to_string();
        let (artist, title) = match titles::split_artist_title(&cleaned) {
            // Only trust the split when the existing credit is junk
            Some((a, t)) if titles::looks_generic(&credited) => (a, t),
            _ => (credited, cleaned.clone()),
        };

        track.name = title.clone();
        if titles::looks_generic(&artist) {
            return track;
        }
        if track.artists.is_empty() {
            track.artists = vec![crate::model::EntityRef::new("", artist.clone())];
        }
        if !self.lastfm.is_configured() {
            return track;
        }

        match self.lastfm.track_info(&artist, &title).await {
            Ok(info) => {
                track.name = info.name;
                if let Some(first) = track.artists.first_mut() {
                    first.name = info.artist;
                }
                if track.duration_ms == 0 {
                    track.duration_ms = info.duration_ms;
                }
                match (&mut track.album, info.album) {
                    (Some(album), _) if album.image_urls.is_empty() => {
                        album.image_urls = info.image_urls;
                    }
                    (None, Some(name)) => {
                        track.album = Some(crate::model::AlbumRef {
                            id: String::new(),
                            name,
                            image_urls: info.image_urls,
                        });
                    }
                    _ => {}
                }
                track
            }
            Err(e) => {
                tracing::debug!(error = %e, "enhancement lookup failed, keeping cleaned title");
                track
            }
        }
    }
}

/// How many results each category may contribute.
fn per_category_cap(kind: SearchKind, limit: usize) -> usize {
    match kind {
        SearchKind::All => limit.div_ceil(4),
        _ => limit,
    }
}

/// Drop result buckets outside the requested category.
fn retain_kind(results: &mut SearchResults, kind: SearchKind) {
    if kind == SearchKind::All {
        return;
    }
    if kind != SearchKind::Tracks {
        results.tracks.clear();
    }
    if kind != SearchKind::Artists {
        results.artists.clear();
    }
    if kind != SearchKind::Albums {
        results.albums.clear();
    }
    if kind != SearchKind::Playlists {
        results.playlists.clear();
    }
}

fn split(id: &str) -> Result<(Source, &str)> {
    Source::split_id(id).ok_or_else(|| Error::UnknownId(id.to_string()))
}

fn merged<T>(first: Vec<T>, rest: Vec<T>, cap: usize) -> Vec<T> {
    let mut out = first;
    out.extend(rest);
    out.truncate(cap);
    out
}

/// Fan a query out to every source in a stage concurrently.
///
/// Results merge in the slice's declaration order regardless of which
/// upstream answered first; failures become degradation entries.
async fn track_stage(
    sources: &[&dyn TrackSource],
    query: &str,
    cap: usize,
) -> (Vec<Track>, Vec<Degradation>) {
    let settled = future::join_all(sources.iter().map(|s| s.search_tracks(query, cap))).await;
    collect_stage(sources.iter().map(|s| s.source()), settled, cap)
}

/// Sequential two-stage track chain: the secondary stage is only queried
/// when the primary stage produced nothing, to spare quota.
async fn chained_tracks(
    primary: &[&dyn TrackSource],
    secondary: &[&dyn TrackSource],
    query: &str,
    cap: usize,
) -> (Vec<Track>, Vec<Degradation>) {
    let (tracks, mut degradations) = track_stage(primary, query, cap).await;
    if !tracks.is_empty() {
        return (tracks, degradations);
    }

    let (tracks, more) = track_stage(secondary, query, cap).await;
    degradations.extend(more);
    (tracks, degradations)
}

async fn artist_stage(
    sources: &[&dyn ArtistSource],
    query: &str,
    cap: usize,
) -> (Vec<Artist>, Vec<Degradation>) {
    let settled = future::join_all(sources.iter().map(|s| s.search_artists(query, cap))).await;
    collect_stage(sources.iter().map(|s| s.source()), settled, cap)
}

async fn album_stage(
    sources: &[&dyn AlbumSource],
    query: &str,
    cap: usize,
) -> (Vec<Album>, Vec<Degradation>) {
    let settled = future::join_all(sources.iter().map(|s| s.search_albums(query, cap))).await;
    collect_stage(sources.iter().map(|s| s.source()), settled, cap)
}

async fn playlist_stage(
    sources: &[&dyn PlaylistSource],
    query: &str,
    cap: usize,
) -> (Vec<Playlist>, Vec<Degradation>) {
    let settled = future::join_all(sources.iter().map(|s| s.search_playlists(query, cap))).await;
    collect_stage(sources.iter().map(|s| s.source()), settled, cap)
}

fn collect_stage<T>(
    sources: impl Iterator<Item = Source>,
    settled: Vec<std::result::Result<Vec<T>, SourceError>>,
    cap: usize,
) -> (Vec<T>, Vec<Degradation>) {
    let mut merged = Vec::new();
    let mut degradations = Vec::new();
    for (source, result) in sources.zip(settled) {
        match result {
            Ok(items) => merged.extend(items),
            Err(e) => degradations.push(Degradation::new(source, &e)),
        }
    }
    merged.truncate(cap);
    (merged, degradations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::history::HistoryStore;
    use crate::sources::traits::mocks::{MockArtists, MockTracks};

    fn temp_aggregator() -> (tempfile::TempDir, MusicAggregator) {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::with_dir(dir.path());
        let aggregator = MusicAggregator::new(&Config::default(), store);
        (dir, aggregator)
    }

    /// Aggregator whose keyless clients point at a dead local port, so
    /// every upstream stage fails without touching the network.
    fn offline_aggregator() -> (tempfile::TempDir, MusicAggregator) {
        use crate::sources::archive::ArchiveClient;
        use crate::sources::ccmixter::CcMixterClient;
        use crate::sources::deezer::DeezerClient;
        use crate::sources::musicbrainz::MusicBrainzClient;

        let (dir, mut aggregator) = temp_aggregator();
        aggregator.deezer = DeezerClient::with_base_url("http://127.0.0.1:9");
        aggregator.archive = ArchiveClient::with_base_url("http://127.0.0.1:9");
        aggregator.ccmixter = CcMixterClient::with_base_url("http://127.0.0.1:9");
        aggregator.musicbrainz = MusicBrainzClient::with_base_url("http://127.0.0.1:9");
        (dir, aggregator)
    }

    #[test]
    fn test_per_category_cap() {
        assert_eq!(per_category_cap(SearchKind::All, 20), 5);
        assert_eq!(per_category_cap(SearchKind::All, 10), 3);
        assert_eq!(per_category_cap(SearchKind::All, 1), 1);
        assert_eq!(per_category_cap(SearchKind::Tracks, 20), 20);
    }

    #[tokio::test]
    async fn test_stage_merges_in_declaration_order() {
        let a = MockTracks::with_tracks(Source::Deezer, &["D1", "D2"]);
        let b = MockTracks::with_tracks(Source::Jamendo, &["J1"]);
        let sources: [&dyn TrackSource; 2] = [&a, &b];

        let (tracks, degradations) = track_stage(&sources, "x", 10).await;
        let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["D1", "D2", "J1"]);
        assert!(degradations.is_empty());
    }

    #[tokio::test]
    async fn test_stage_failure_degrades_to_empty() {
        let broken = MockTracks::failing(Source::Deezer, SourceError::Timeout);
        let ok = MockTracks::with_tracks(Source::Jamendo, &["J1"]);
        let sources: [&dyn TrackSource; 2] = [&broken, &ok];

        let (tracks, degradations) = track_stage(&sources, "x", 10).await;
        assert_eq!(tracks.len(), 1);
        assert_eq!(degradations.len(), 1);
        assert_eq!(degradations[0].source, Source::Deezer);
    }

    #[tokio::test]
    async fn test_stage_respects_cap() {
        let a = MockTracks::with_tracks(Source::Deezer, &["1", "2", "3"]);
        let b = MockTracks::with_tracks(Source::Jamendo, &["4", "5"]);
        let sources: [&dyn TrackSource; 2] = [&a, &b];

        let (tracks, _) = track_stage(&sources, "x", 4).await;
        assert_eq!(tracks.len(), 4);
    }

    #[tokio::test]
    async fn test_secondary_stage_skipped_when_primary_answers() {
        let primary_src = MockTracks::with_tracks(Source::Deezer, &["D1"]);
        let secondary_src = MockTracks::with_tracks(Source::Archive, &["A1"]);
        let primary: [&dyn TrackSource; 1] = [&primary_src];
        let secondary: [&dyn TrackSource; 1] = [&secondary_src];

        let (tracks, _) = chained_tracks(&primary, &secondary, "x", 10).await;
        let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["D1"]);
    }

    #[tokio::test]
    async fn test_chain_falls_through_to_secondary() {
        let primary_src = MockTracks::failing(Source::Deezer, SourceError::RateLimited);
        let secondary_src = MockTracks::with_tracks(Source::Archive, &["A1"]);
        let primary: [&dyn TrackSource; 1] = [&primary_src];
        let secondary: [&dyn TrackSource; 1] = [&secondary_src];

        let (tracks, degradations) = chained_tracks(&primary, &secondary, "x", 10).await;
        assert_eq!(tracks[0].name, "A1");
        assert_eq!(degradations.len(), 1);
    }

    #[tokio::test]
    async fn test_artist_stage_uses_mocks() {
        let a = MockArtists::with_artists(Source::Deezer, &["Cher"]);
        let b = MockArtists::failing(Source::MusicBrainz, SourceError::Timeout);
        let sources: [&dyn ArtistSource; 2] = [&a, &b];

        let (artists, degradations) = artist_stage(&sources, "cher", 5).await;
        assert_eq!(artists.len(), 1);
        assert_eq!(degradations[0].source, Source::MusicBrainz);
    }

    #[tokio::test]
    async fn test_empty_query_short_circuits() {
        let (_dir, aggregator) = temp_aggregator();
        let outcome = aggregator.search("   ", SearchKind::All, 10).await;
        assert!(outcome.data.is_empty());
        assert!(!outcome.is_degraded());
    }

    #[test]
    fn test_retain_kind_drops_other_buckets() {
        let mut results = SearchResults {
            tracks: vec![Track::default()],
            artists: vec![Artist::default()],
            albums: vec![Album::default()],
            playlists: vec![Playlist::default()],
        };
        retain_kind(&mut results, SearchKind::Artists);
        assert!(results.tracks.is_empty());
        assert_eq!(results.artists.len(), 1);
        assert!(results.albums.is_empty());
        assert!(results.playlists.is_empty());
    }

    #[test]
    fn test_retain_kind_keeps_everything_for_all() {
        let mut results = SearchResults {
            tracks: vec![Track::default()],
            artists: vec![Artist::default()],
            albums: vec![],
            playlists: vec![Playlist::default()],
        };
        retain_kind(&mut results, SearchKind::All);
        assert_eq!(results.tracks.len(), 1);
        assert_eq!(results.artists.len(), 1);
        assert_eq!(results.playlists.len(), 1);
    }

    #[tokio::test]
    async fn test_single_category_search_leaves_other_lists_empty() {
        let (_dir, aggregator) = offline_aggregator();

        let outcome = aggregator.search("anything", SearchKind::Artists, 10).await;
        assert!(outcome.data.tracks.is_empty());
        assert!(outcome.data.albums.is_empty());
        assert!(outcome.data.playlists.is_empty());
    }

    #[tokio::test]
    async fn test_track_search_serves_catalog_when_all_stages_fail() {
        let (_dir, aggregator) = offline_aggregator();

        let outcome = aggregator.search("no upstream", SearchKind::Tracks, 8).await;
        assert!(!outcome.data.tracks.is_empty());
        assert!(outcome.data.tracks.iter().all(|t| t.source == Source::Mock));
        assert!(outcome.is_degraded());
    }

    #[tokio::test]
    async fn test_liked_songs_always_resolves() {
        let (_dir, aggregator) = temp_aggregator();

        let detail = aggregator.playlist(LIKED_SONGS_ID).await.unwrap();
        assert_eq!(detail.playlist.id, LIKED_SONGS_ID);
        assert!(detail.tracks.is_empty());

        let track = fallback::mock_tracks().remove(0);
        aggregator.store.save_track(&track).unwrap();
        let detail = aggregator.playlist(LIKED_SONGS_ID).await.unwrap();
        assert_eq!(detail.tracks.len(), 1);
        assert_eq!(detail.playlist.track_count, 1);
    }

    #[tokio::test]
    async fn test_mock_detail_lookups_are_local() {
        let (_dir, aggregator) = temp_aggregator();

        let track = aggregator.track("mock_1").await.unwrap();
        assert_eq!(track.name, "Midnight Drive");

        let detail = aggregator.album("mock_b1").await.unwrap();
        assert!(!detail.tracks.is_empty());

        let top = aggregator.artist_top_tracks("mock_a1", 5).await.unwrap();
        assert!(top.iter().all(|t| t.artist_name() == "Neon Harbor"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_rejected() {
        let (_dir, aggregator) = temp_aggregator();
        assert!(matches!(
            aggregator.track("spotify_123").await,
            Err(Error::UnknownId(_))
        ));
        assert!(matches!(
            aggregator.lyrics("deezer_1").await,
            Err(Error::Unsupported { .. })
        ));
    }

    #[tokio::test]
    async fn test_enhance_cleans_title_without_lastfm() {
        let (_dir, aggregator) = temp_aggregator();

        // No Last.fm key configured: enhancement degrades to title cleanup
        let track = Track {
            id: Source::RadioBrowser.id("s1"),
            name: "Daft Punk - One More Time (Official Video)".to_string(),
            source: Source::RadioBrowser,
            ..Default::default()
        };
        let enhanced = aggregator.enhance_track(track).await;
        assert_eq!(enhanced.name, "One More Time");
        assert_eq!(enhanced.artist_name(), "Daft Punk");
    }

    #[tokio::test]
    async fn test_enhance_keeps_credited_artist() {
        let (_dir, aggregator) = temp_aggregator();

        // A real artist credit is never overwritten by the title guess
        let track = Track {
            id: Source::Jamendo.id("1"),
            name: "Someone - Something [HD]".to_string(),
            artists: vec![crate::model::EntityRef::new("jamendo_7", "TriFace")],
            source: Source::Jamendo,
            ..Default::default()
        };
        let enhanced = aggregator.enhance_track(track).await;
        assert_eq!(enhanced.name, "Someone - Something");
        assert_eq!(enhanced.artist_name(), "TriFace");
    }
}
