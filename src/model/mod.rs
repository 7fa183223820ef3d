//! Canonical music entities.
//!
//! These types are OUR types - they don't change when external APIs change.
//! Every source adapter converts its raw JSON into these shapes, and nothing
//! outside an adapter module ever sees an upstream DTO.
//!
//! Entity ids are globally unique because each adapter prefixes the raw
//! upstream id with its source tag (`"jamendo_123"`, `"deezer_456"`).

use serde::{Deserialize, Serialize};

/// Where a normalized entity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Jamendo,
    Deezer,
    Archive,
    CcMixter,
    MusicBrainz,
    RadioBrowser,
    YtMusic,
    LastFm,
    /// Hardcoded fallback data, used when every upstream stage fails.
    Mock,
}

impl Source {
    /// Stable tag used as the id prefix for this source.
    pub fn tag(self) -> &'static str {
        match self {
            Source::Jamendo => "jamendo",
            Source::Deezer => "deezer",
            Source::Archive => "archive",
            Source::CcMixter => "ccmixter",
            Source::MusicBrainz => "musicbrainz",
            Source::RadioBrowser => "radio",
            Source::YtMusic => "ytmusic",
            Source::LastFm => "lastfm",
            Source::Mock => "mock",
        }
    }

    /// Build the globally-unique prefixed id for a raw upstream id.
    pub fn id(self, raw: impl std::fmt::Display) -> String {
        format!("{}_{}", self.tag(), raw)
    }

    /// Recover the source from a prefixed id, plus the raw remainder.
    ///
    /// Used by detail lookups to route an opaque id back to the adapter
    /// that minted it.
    pub fn split_id(id: &str) -> Option<(Source, &str)> {
        let (tag, raw) = id.split_once('_')?;
        let source = match tag {
            "jamendo" => Source::Jamendo,
            "deezer" => Source::Deezer,
            "archive" => Source::Archive,
            "ccmixter" => Source::CcMixter,
            "musicbrainz" => Source::MusicBrainz,
            "radio" => Source::RadioBrowser,
            "ytmusic" => Source::YtMusic,
            "lastfm" => Source::LastFm,
            "mock" => Source::Mock,
            _ => return None,
        };
        Some((source, raw))
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Mock
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Lightweight `{id, name}` reference to an artist or other entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
    pub name: String,
}

impl EntityRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Album reference carried on a track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumRef {
    pub id: String,
    pub name: String,
    /// Cover image URLs, largest first.
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// A playable or browsable track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Source-prefixed id, globally unique across adapters.
    pub id: String,
    pub name: String,
    /// Ordered artist credits; first entry is the primary artist.
    #[serde(default)]
    pub artists: Vec<EntityRef>,
    pub album: Option<AlbumRef>,
    pub duration_ms: u64,
    /// Full-length stream URL, when the source offers one.
    pub audio_url: Option<String>,
    /// Short preview clip URL (e.g. Deezer 30s previews).
    pub preview_url: Option<String>,
    pub source: Source,
    /// 0-100; synthetic for sources without a real popularity signal.
    pub popularity: u8,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Track {
    /// Primary artist display name, or an empty string when uncredited.
    pub fn artist_name(&self) -> &str {
        self.artists.first().map(|a| a.name.as_str()).unwrap_or("")
    }
}

/// A browsable artist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub followers: u64,
    pub popularity: u8,
    pub source: Source,
}

/// A browsable album.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<EntityRef>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Upstream date string, typically `YYYY-MM-DD` or just `YYYY`.
    pub release_date: Option<String>,
    pub year: Option<i32>,
    pub track_count: u32,
    pub source: Source,
}

impl Album {
    /// Parse the year out of a release date string (`YYYY`, `YYYY-MM`, ...).
    pub fn year_from_date(date: &str) -> Option<i32> {
        date.split('-').next()?.parse().ok()
    }
}

/// A browsable playlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub track_count: u32,
    pub owner: Option<String>,
    pub source: Source,
}

/// Lyrics for a track, when a source has them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lyrics {
    pub lyrics: String,
    /// Attribution line required by some lyrics providers.
    pub attribution: Option<String>,
}

/// Which entity categories a search should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchKind {
    All,
    Tracks,
    Artists,
    Albums,
    Playlists,
}

/// The four category lists a search produces.
///
/// Single-category searches leave the other three lists empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub tracks: Vec<Track>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub playlists: Vec<Playlist>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
            && self.artists.is_empty()
            && self.albums.is_empty()
            && self.playlists.is_empty()
    }

    pub fn total(&self) -> usize {
        self.tracks.len() + self.artists.len() + self.albums.len() + self.playlists.len()
    }
}

/// Composed home feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeFeed {
    pub trending: Vec<Track>,
    pub featured_playlists: Vec<Playlist>,
    pub new_releases: Vec<Album>,
    pub popular_artists: Vec<Artist>,
}

/// Album detail with its track listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumDetail {
    pub album: Album,
    pub tracks: Vec<Track>,
}

/// Playlist detail with its track listing.
///
/// `tracks` is always present, never null - a playlist whose upstream
/// lookup failed still renders as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistDetail {
    pub playlist: Playlist,
    pub tracks: Vec<Track>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_prefix_format() {
        assert_eq!(Source::Jamendo.id(123), "jamendo_123");
        assert_eq!(Source::Deezer.id("456"), "deezer_456");
        assert_eq!(Source::Archive.id("gd1977-05-08"), "archive_gd1977-05-08");
    }

    #[test]
    fn test_split_id_round_trip() {
        // Re-reading the id must reproduce the source tag for every adapter
        for source in [
            Source::Jamendo,
            Source::Deezer,
            Source::Archive,
            Source::CcMixter,
            Source::MusicBrainz,
            Source::RadioBrowser,
            Source::YtMusic,
            Source::LastFm,
            Source::Mock,
        ] {
            let id = source.id("raw-42");
            let (parsed, raw) = Source::split_id(&id).expect("prefixed id should split");
            assert_eq!(parsed, source);
            assert_eq!(raw, "raw-42");
        }
    }

    #[test]
    fn test_split_id_unknown_prefix() {
        assert!(Source::split_id("spotify_123").is_none());
        assert!(Source::split_id("noseparator").is_none());
    }

    #[test]
    fn test_split_id_raw_with_underscores() {
        let (source, raw) = Source::split_id("archive_live_at_leeds").unwrap();
        assert_eq!(source, Source::Archive);
        assert_eq!(raw, "live_at_leeds");
    }

    #[test]
    fn test_year_from_date() {
        assert_eq!(Album::year_from_date("1975-10-31"), Some(1975));
        assert_eq!(Album::year_from_date("1975"), Some(1975));
        assert_eq!(Album::year_from_date("unknown"), None);
    }

    #[test]
    fn test_search_results_total() {
        let mut results = SearchResults::default();
        assert!(results.is_empty());

        results.tracks.push(Track {
            id: Source::Mock.id(1),
            name: "Song".to_string(),
            ..Default::default()
        });
        assert!(!results.is_empty());
        assert_eq!(results.total(), 1);
    }

    #[test]
    fn test_track_serializes_with_source_tag() {
        let track = Track {
            id: Source::Jamendo.id(9),
            name: "Song".to_string(),
            source: Source::Jamendo,
            ..Default::default()
        };
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["source"], "jamendo");
        assert_eq!(json["id"], "jamendo_9");
    }
}
