//! Browse surfaces: home feed, charts, new releases, genres, stations.
//!
//! Every section here runs a sequential fallback chain that ends in the
//! hardcoded catalog, so a browse screen always has something to render.
//! Chains are sequential on purpose: the next source is only queried when
//! the one before it produced nothing, which spares rate-limited quota.

use super::{fallback, Degradation, MusicAggregator, Outcome};
use crate::model::{Album, Artist, EntityRef, HomeFeed, Playlist, Source, Track};

impl MusicAggregator {
    /// Composed home feed; the four sections are fetched concurrently.
    pub async fn home(&self) -> Outcome<HomeFeed> {
        self.home_cache
            .get_or_compute("home", || async {
                let ((trending, d1), (featured_playlists, d2), (new_releases, d3), (popular_artists, d4)) = tokio::join!(
                    self.trending_chain(20),
                    self.featured_playlist_chain(12),
                    self.new_release_chain(12),
                    self.popular_artist_chain(10),
                );

                let mut degradations = d1;
                degradations.extend(d2);
                degradations.extend(d3);
                degradations.extend(d4);

                let outcome = Outcome {
                    data: HomeFeed {
                        trending,
                        featured_playlists,
                        new_releases,
                        popular_artists,
                    },
                    degradations,
                };
                let cacheable = !outcome.is_degraded();
                (outcome, cacheable)
            })
            .await
    }

    pub async fn charts(&self, limit: usize) -> Outcome<Vec<Track>> {
        let key = format!("charts:{limit}");
        self.track_list_cache
            .get_or_compute(&key, || async {
                let (tracks, degradations) = self.trending_chain(limit).await;
                let outcome = Outcome {
                    data: tracks,
                    degradations,
                };
                let cacheable = !outcome.is_degraded();
                (outcome, cacheable)
            })
            .await
    }

    pub async fn new_releases(&self, limit: usize) -> Outcome<Vec<Album>> {
        let key = format!("releases:{limit}");
        self.album_list_cache
            .get_or_compute(&key, || async {
                let (albums, degradations) = self.new_release_chain(limit).await;
                let outcome = Outcome {
                    data: albums,
                    degradations,
                };
                let cacheable = !outcome.is_degraded();
                (outcome, cacheable)
            })
            .await
    }

    /// The browsable genre categories. A fixed editorial list, not derived
    /// from any upstream.
    pub fn genres() -> Vec<EntityRef> {
        [
            ("pop", "Pop"),
            ("rock", "Rock"),
            ("electronic", "Electronic"),
            ("hiphop", "Hip-Hop"),
            ("jazz", "Jazz"),
            ("classical", "Classical"),
            ("ambient", "Ambient"),
            ("metal", "Metal"),
            ("folk", "Folk"),
            ("blues", "Blues"),
            ("latin", "Latin"),
            ("soundtrack", "Soundtrack"),
        ]
        .into_iter()
        .map(|(id, name)| EntityRef::new(id, name))
        .collect()
    }

    /// Themed playlists for a genre category.
    pub async fn genre_playlists(&self, genre: &str) -> Outcome<Vec<Playlist>> {
        let genre = genre.trim().to_lowercase();
        let key = format!("genre:{genre}");
        self.playlist_list_cache
            .get_or_compute(&key, || async {
                let (playlists, degradations) = self.genre_playlist_chain(&genre, 12).await;
                let outcome = Outcome {
                    data: playlists,
                    degradations,
                };
                let cacheable = !outcome.is_degraded();
                (outcome, cacheable)
            })
            .await
    }

    /// Radio station search. Stations come from a single directory, so
    /// there is no fallback chain: a broken directory degrades to an empty
    /// list rather than fake stations nobody can tune into.
    pub async fn stations(&self, query: &str, limit: usize) -> Outcome<Vec<Track>> {
        let key = format!("stations:{limit}:{}", query.to_lowercase());
        self.track_list_cache
            .get_or_compute(&key, || async {
                match self.radio.search_stations(query, limit).await {
                    Ok(stations) => (Outcome::ok(stations), true),
                    Err(e) => (
                        Outcome {
                            data: vec![],
                            degradations: vec![Degradation::new(Source::RadioBrowser, &e)],
                        },
                        false,
                    ),
                }
            })
            .await
    }

    // ------------------------------------------------------------------
    // Section chains
    // ------------------------------------------------------------------

    async fn trending_chain(&self, limit: usize) -> (Vec<Track>, Vec<Degradation>) {
        let mut degradations = Vec::new();

        if self.ytmusic.is_configured() {
            match self.ytmusic.charts(limit).await {
                Ok((tracks, _)) if !tracks.is_empty() => {
                    return (capped(tracks, limit), degradations);
                }
                Ok(_) => {}
                Err(e) => degradations.push(Degradation::new(Source::YtMusic, &e)),
            }
        }

        match self.deezer.chart_tracks(limit).await {
            Ok(tracks) if !tracks.is_empty() => return (capped(tracks, limit), degradations),
            Ok(_) => {}
            Err(e) => degradations.push(Degradation::new(Source::Deezer, &e)),
        }

        match self.jamendo.featured_tracks(limit).await {
            Ok(tracks) if !tracks.is_empty() => return (capped(tracks, limit), degradations),
            Ok(_) => {}
            Err(e) => degradations.push(Degradation::new(Source::Jamendo, &e)),
        }

        (capped(fallback::mock_tracks(), limit), degradations)
    }

    async fn featured_playlist_chain(&self, limit: usize) -> (Vec<Playlist>, Vec<Degradation>) {
        let mut degradations = Vec::new();

        match self.jamendo.featured_playlists(limit).await {
            Ok(playlists) if !playlists.is_empty() => {
                return (capped(playlists, limit), degradations);
            }
            Ok(_) => {}
            Err(e) => degradations.push(Degradation::new(Source::Jamendo, &e)),
        }

        (capped(fallback::mock_playlists(), limit), degradations)
    }

    async fn new_release_chain(&self, limit: usize) -> (Vec<Album>, Vec<Degradation>) {
        let mut degradations = Vec::new();

        if self.ytmusic.is_configured() {
            match self.ytmusic.new_releases(limit).await {
                Ok(albums) if !albums.is_empty() => return (capped(albums, limit), degradations),
                Ok(_) => {}
                Err(e) => degradations.push(Degradation::new(Source::YtMusic, &e)),
            }
        }

        match self.deezer.chart_albums(limit).await {
            Ok(albums) if !albums.is_empty() => return (capped(albums, limit), degradations),
            Ok(_) => {}
            Err(e) => degradations.push(Degradation::new(Source::Deezer, &e)),
        }

        (capped(fallback::mock_albums(), limit), degradations)
    }

    async fn popular_artist_chain(&self, limit: usize) -> (Vec<Artist>, Vec<Degradation>) {
        let mut degradations = Vec::new();

        match self.deezer.chart_artists(limit).await {
            Ok(artists) if !artists.is_empty() => return (capped(artists, limit), degradations),
            Ok(_) => {}
            Err(e) => degradations.push(Degradation::new(Source::Deezer, &e)),
        }

        (capped(fallback::mock_artists(), limit), degradations)
    }

    async fn genre_playlist_chain(
        &self,
        genre: &str,
        limit: usize,
    ) -> (Vec<Playlist>, Vec<Degradation>) {
        let mut degradations = Vec::new();

        if self.ytmusic.is_configured() {
            match self.ytmusic.genre_playlists(genre).await {
                Ok(playlists) if !playlists.is_empty() => {
                    return (capped(playlists, limit), degradations);
                }
                Ok(_) => {}
                Err(e) => degradations.push(Degradation::new(Source::YtMusic, &e)),
            }
        }

        match self.jamendo.genre_playlists(genre, limit).await {
            Ok(playlists) if !playlists.is_empty() => {
                return (capped(playlists, limit), degradations);
            }
            Ok(_) => {}
            Err(e) => degradations.push(Degradation::new(Source::Jamendo, &e)),
        }

        (capped(fallback::mock_playlists(), limit), degradations)
    }
}

fn capped<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}
