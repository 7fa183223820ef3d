//! Radio-Browser API Data Transfer Objects
//!
//! These types match EXACTLY what the Radio-Browser station search returns:
//! a bare JSON array of station records.
//!
//! API Reference: https://api.radio-browser.info

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Station {
    pub stationuuid: String,
    pub name: String,
    /// Stream URL after following playlist redirects.
    #[serde(default)]
    pub url_resolved: String,
    #[serde(default)]
    pub favicon: String,
    /// Comma-separated tag string.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub votes: u64,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_station_array() {
        let json = r#"[{
            "changeuuid": "c8a52ab2-1fd5-4a43-b1e5-9d8ed454f5a5",
            "stationuuid": "962cc6df-0601-11e8-ae97-52543be04c81",
            "name": "SomaFM Groove Salad",
            "url": "http://somafm.com/groovesalad.pls",
            "url_resolved": "https://ice2.somafm.com/groovesalad-128-mp3",
            "homepage": "https://www.somafm.com/",
            "favicon": "https://somafm.com/img3/groovesalad-400.jpg",
            "tags": "ambient,chillout,downtempo",
            "country": "The United States Of America",
            "countrycode": "US",
            "votes": 2483,
            "codec": "MP3",
            "bitrate": 128
        }]"#;

        let stations: Vec<Station> = serde_json::from_str(json).expect("Should parse stations");
        assert_eq!(stations.len(), 1);

        let station = &stations[0];
        assert_eq!(station.name, "SomaFM Groove Salad");
        assert!(station.url_resolved.contains("groovesalad"));
        assert_eq!(station.votes, 2483);
    }

    #[test]
    fn test_parse_minimal_station() {
        let json = r#"{"stationuuid": "abc", "name": "Tiny FM"}"#;
        let station: Station = serde_json::from_str(json).expect("Should parse minimal station");
        assert!(station.url_resolved.is_empty());
        assert_eq!(station.votes, 0);
    }
}
