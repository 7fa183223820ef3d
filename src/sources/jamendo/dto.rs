//! Jamendo API Data Transfer Objects
//!
//! These types match EXACTLY what the Jamendo v3.0 API returns.
//! DO NOT use these types outside the jamendo module - convert to model types.
//!
//! API Reference: https://developer.jamendo.com/v3.0
//!
//! Every endpoint wraps its payload in the same `{headers, results}` envelope;
//! request failures can still come back as HTTP 200 with an error code in the
//! headers, so the client checks `headers.code` as well as the HTTP status.

use serde::Deserialize;

/// Common response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub headers: Headers,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Headers {
    pub status: String,
    pub code: i32,
    #[serde(default)]
    pub error_message: String,
}

impl Headers {
    pub fn is_success(&self) -> bool {
        self.status == "success" && self.code == 0
    }
}

/// Track from `/tracks`.
#[derive(Debug, Clone, Deserialize)]
pub struct JamendoTrack {
    pub id: String,
    pub name: String,
    /// Duration in whole seconds.
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub album_id: String,
    #[serde(default)]
    pub album_name: String,
    #[serde(default)]
    pub album_image: String,
    /// Streamable MP3 URL.
    #[serde(default)]
    pub audio: String,
    #[serde(default)]
    pub audiodownload: String,
    #[serde(default)]
    pub image: String,
    pub musicinfo: Option<MusicInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MusicInfo {
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tags {
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Album from `/albums`.
#[derive(Debug, Clone, Deserialize)]
pub struct JamendoAlbum {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub releasedate: String,
}

/// Playlist from `/playlists`.
#[derive(Debug, Clone, Deserialize)]
pub struct JamendoPlaylist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
}

/// Playlist with its track listing, from `/playlists/tracks`.
#[derive(Debug, Clone, Deserialize)]
pub struct JamendoPlaylistTracks {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub tracks: Vec<JamendoTrack>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_track_envelope() {
        let json = r#"{
            "headers": {
                "status": "success",
                "code": 0,
                "error_message": "",
                "warnings": "",
                "results_count": 1
            },
            "results": [{
                "id": "168",
                "name": "J'm'e FPM",
                "duration": 183,
                "artist_id": "7",
                "artist_name": "TriFace",
                "artist_idstr": "triface",
                "album_name": "Premiers Jets",
                "album_id": "24",
                "license_ccurl": "http://creativecommons.org/licenses/by-nc/2.0/",
                "position": 1,
                "releasedate": "2004-12-17",
                "album_image": "https://usercontent.jamendo.com?type=album&id=24&width=300",
                "audio": "https://prod-1.storage.jamendo.com/?trackid=168&format=mp31",
                "audiodownload": "https://prod-1.storage.jamendo.com/download/track/168/mp32/",
                "prourl": "",
                "shorturl": "https://jamen.do/t/168",
                "shareurl": "https://www.jamendo.com/track/168",
                "image": "https://usercontent.jamendo.com?type=album&id=24&width=300",
                "musicinfo": {
                    "vocalinstrumental": "vocal",
                    "speed": "medium",
                    "tags": {
                        "genres": ["pop", "rock"],
                        "instruments": [],
                        "vartags": ["engage"]
                    }
                }
            }]
        }"#;

        let envelope: Envelope<JamendoTrack> =
            serde_json::from_str(json).expect("Should parse track envelope");

        assert!(envelope.headers.is_success());
        assert_eq!(envelope.results.len(), 1);

        let track = &envelope.results[0];
        assert_eq!(track.id, "168");
        assert_eq!(track.duration, 183);
        assert_eq!(track.artist_name, "TriFace");
        assert!(track.audio.contains("trackid=168"));
        let tags = track.musicinfo.as_ref().unwrap().tags.as_ref().unwrap();
        assert_eq!(tags.genres, vec!["pop", "rock"]);
    }

    #[test]
    fn test_parse_error_envelope() {
        // Jamendo reports bad credentials as HTTP 200 with an error header
        let json = r#"{
            "headers": {
                "status": "failed",
                "code": 5,
                "error_message": "Your credential is not authorized."
            },
            "results": []
        }"#;

        let envelope: Envelope<JamendoTrack> =
            serde_json::from_str(json).expect("Should parse error envelope");

        assert!(!envelope.headers.is_success());
        assert_eq!(envelope.headers.code, 5);
        assert!(envelope.headers.error_message.contains("not authorized"));
    }

    #[test]
    fn test_parse_album_and_playlist() {
        let album_json = r#"{
            "id": "24",
            "name": "Premiers Jets",
            "releasedate": "2004-12-17",
            "artist_id": "7",
            "artist_name": "TriFace",
            "image": "https://usercontent.jamendo.com?type=album&id=24&width=300",
            "zip": "https://prod-1.storage.jamendo.com/download/a24/mp32/"
        }"#;
        let album: JamendoAlbum = serde_json::from_str(album_json).expect("Should parse album");
        assert_eq!(album.name, "Premiers Jets");
        assert_eq!(album.releasedate, "2004-12-17");

        let playlist_json = r#"{
            "id": "100268",
            "name": "Chill Mix",
            "creationdate": "2010-01-21",
            "user_id": "972174",
            "user_name": "claudod",
            "zip": ""
        }"#;
        let playlist: JamendoPlaylist =
            serde_json::from_str(playlist_json).expect("Should parse playlist");
        assert_eq!(playlist.user_name, "claudod");
    }

    #[test]
    fn test_parse_playlist_tracks() {
        let json = r#"{
            "id": "100268",
            "name": "Chill Mix",
            "creationdate": "2010-01-21",
            "user_id": "972174",
            "user_name": "claudod",
            "zip": "",
            "tracks": [{
                "id": "168",
                "name": "J'm'e FPM",
                "duration": 183,
                "artist_id": "7",
                "artist_name": "TriFace",
                "audio": "https://prod-1.storage.jamendo.com/?trackid=168&format=mp31",
                "position": "1"
            }]
        }"#;

        let playlist: JamendoPlaylistTracks =
            serde_json::from_str(json).expect("Should parse playlist tracks");
        assert_eq!(playlist.tracks.len(), 1);
        assert_eq!(playlist.tracks[0].artist_name, "TriFace");
    }

    #[test]
    fn test_parse_track_with_missing_optionals() {
        let json = r#"{"id": "1", "name": "Bare"}"#;
        let track: JamendoTrack = serde_json::from_str(json).expect("Should parse bare track");
        assert_eq!(track.duration, 0);
        assert!(track.musicinfo.is_none());
        assert!(track.audio.is_empty());
    }
}
