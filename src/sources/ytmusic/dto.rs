//! YouTube Music bridge Data Transfer Objects
//!
//! These types match EXACTLY what our ytmusicapi bridge serves. The bridge
//! normalizes the upstream's wildly inconsistent shapes into snake_case
//! JSON, which is why these are tidier than the other adapters' DTOs.
//!
//! DO NOT use these types outside the ytmusic module - convert to model
//! types.

use serde::Deserialize;

/// `{id?, name}` credit as the bridge reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct YtRef {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YtTrack {
    pub video_id: String,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<YtRef>,
    pub album: Option<YtRef>,
    #[serde(default)]
    pub duration_seconds: u64,
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YtArtist {
    pub browse_id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
    /// Display string like "12.3M subscribers"; absent on search results.
    pub subscribers: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YtAlbum {
    pub browse_id: String,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<YtRef>,
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
    pub year: Option<String>,
    #[serde(default)]
    pub track_count: u32,
    /// Present only on album detail responses.
    #[serde(default)]
    pub tracks: Vec<YtTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YtPlaylist {
    pub playlist_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
    #[serde(default)]
    pub track_count: u32,
    pub author: Option<String>,
    /// Present only on playlist detail responses.
    #[serde(default)]
    pub tracks: Vec<YtTrack>,
}

/// `/search` response, pre-bucketed by the bridge.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Vec<YtTrack>,
    #[serde(default)]
    pub artists: Vec<YtArtist>,
    #[serde(default)]
    pub albums: Vec<YtAlbum>,
    #[serde(default)]
    pub playlists: Vec<YtPlaylist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartsResponse {
    #[serde(default)]
    pub tracks: Vec<YtTrack>,
    #[serde(default)]
    pub artists: Vec<YtArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LyricsResponse {
    pub lyrics: Option<String>,
    /// Provider attribution string the bridge passes through.
    pub source: Option<String>,
}

/// Error body the bridge returns with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the bridge serves.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "tracks": [{
                "video_id": "dQw4w9WgXcQ",
                "title": "Never Gonna Give You Up",
                "artists": [{"id": "UCuAXFkgsw1L7xaCfnd5JJOw", "name": "Rick Astley"}],
                "album": {"id": "MPREb_abc", "name": "Whenever You Need Somebody"},
                "duration_seconds": 213,
                "thumbnails": [{"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg", "width": 120, "height": 90}]
            }],
            "artists": [{
                "browse_id": "UCuAXFkgsw1L7xaCfnd5JJOw",
                "name": "Rick Astley",
                "thumbnails": [],
                "subscribers": "2.1M subscribers"
            }],
            "albums": [],
            "playlists": []
        }"#;

        let parsed: SearchResponse = serde_json::from_str(json).expect("Should parse search");
        assert_eq!(parsed.tracks.len(), 1);
        let track = &parsed.tracks[0];
        assert_eq!(track.video_id, "dQw4w9WgXcQ");
        assert_eq!(track.duration_seconds, 213);
        assert_eq!(track.artists[0].name, "Rick Astley");
        assert_eq!(parsed.artists[0].subscribers.as_deref(), Some("2.1M subscribers"));
    }

    #[test]
    fn test_parse_album_detail_with_tracks() {
        let json = r#"{
            "browse_id": "MPREb_abc",
            "title": "Whenever You Need Somebody",
            "artists": [{"id": null, "name": "Rick Astley"}],
            "thumbnails": [{"url": "https://img/cover.jpg", "width": 544, "height": 544}],
            "year": "1987",
            "track_count": 10,
            "tracks": [{"video_id": "v1", "title": "Track One", "duration_seconds": 200}]
        }"#;

        let album: YtAlbum = serde_json::from_str(json).expect("Should parse album");
        assert_eq!(album.year.as_deref(), Some("1987"));
        assert_eq!(album.tracks.len(), 1);
        assert!(album.tracks[0].album.is_none());
    }

    #[test]
    fn test_parse_lyrics_absent() {
        let json = r#"{"lyrics": null, "source": null}"#;
        let parsed: LyricsResponse = serde_json::from_str(json).expect("Should parse");
        assert!(parsed.lyrics.is_none());
    }

    #[test]
    fn test_parse_error_body() {
        let json = r#"{"error": "not found", "details": "unknown videoId"}"#;
        let parsed: ErrorBody = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(parsed.error, "not found");
    }
}
