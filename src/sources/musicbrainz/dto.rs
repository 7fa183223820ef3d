//! MusicBrainz API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz artist search returns.
//! DO NOT use these types outside the musicbrainz module - convert to model
//! types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search

use serde::Deserialize;

/// `/ws/2/artist?query=...&fmt=json` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSearchResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default = "Vec::new")]
    pub artists: Vec<MbArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MbArtist {
    /// MusicBrainz artist MBID.
    pub id: String,
    pub name: String,
    /// Search relevance 0-100.
    #[serde(default)]
    pub score: u8,
    /// Artist type (Person, Group, etc.)
    #[serde(rename = "type")]
    pub artist_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    /// Vote count; negative totals are possible.
    #[serde(default)]
    pub count: i64,
    pub name: String,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_artist_search() {
        let json = r#"{
            "created": "2024-01-15T10:00:00.000Z",
            "count": 1,
            "offset": 0,
            "artists": [{
                "id": "0383dadf-2a4e-4d10-a46a-e9e041da8eb3",
                "type": "Group",
                "type-id": "e431f5f6-b5d2-343d-8b36-72607fffb74b",
                "score": 100,
                "name": "Queen",
                "sort-name": "Queen",
                "country": "GB",
                "tags": [
                    {"count": 12, "name": "rock"},
                    {"count": 7, "name": "glam rock"},
                    {"count": -1, "name": "pop"}
                ]
            }]
        }"#;

        let parsed: ArtistSearchResponse =
            serde_json::from_str(json).expect("Should parse artist search");

        assert_eq!(parsed.count, 1);
        let artist = &parsed.artists[0];
        assert_eq!(artist.name, "Queen");
        assert_eq!(artist.score, 100);
        assert_eq!(artist.artist_type.as_deref(), Some("Group"));
        assert_eq!(artist.tags.len(), 3);
        assert_eq!(artist.tags[2].count, -1);
    }

    #[test]
    fn test_parse_minimal_artist() {
        let json = r#"{"id": "abc", "name": "Solo Act"}"#;
        let artist: MbArtist = serde_json::from_str(json).expect("Should parse minimal artist");
        assert_eq!(artist.score, 0);
        assert!(artist.tags.is_empty());
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{"error": "Invalid query", "help": "..."}"#;
        let error: ApiError = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.error, "Invalid query");
    }
}
