//! Radio-Browser HTTP client
//!
//! Handles communication with a Radio-Browser mirror.
//! See: https://api.radio-browser.info
//!
//! Stations map onto tracks with a stream URL and no duration; the favicon
//! stands in for cover art.

use super::dto;
use crate::model::{AlbumRef, Source, Track};
use crate::sources::SourceError;

/// Radio-Browser API client
pub struct RadioBrowserClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl RadioBrowserClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: "https://de1.api.radio-browser.info/json".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search stations by name, most-voted first.
    pub async fn search_stations(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Track>, SourceError> {
        let response = self
            .http_client
            .get(format!("{}/stations/search", self.base_url))
            .query(&[
                ("name", query),
                ("limit", &limit.to_string()),
                ("order", "votes"),
                ("reverse", "true"),
                ("hidebroken", "true"),
            ])
            .send()
            .await
            .map_err(SourceError::from_http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::from_status(status));
        }

        let stations = response
            .json::<Vec<dto::Station>>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(stations.into_iter().map(to_track).collect())
    }
}

fn to_track(station: dto::Station) -> Track {
    let id = Source::RadioBrowser.id(&station.stationuuid);
    let genres = station
        .tags
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    // The favicon is the only artwork a station has; carry it on a
    // self-referential album entry so renderers find it where they expect it
    let album = (!station.favicon.is_empty()).then(|| AlbumRef {
        id: id.clone(),
        name: station.name.clone(),
        image_urls: vec![station.favicon],
    });

    Track {
        id,
        name: station.name,
        artists: vec![],
        album,
        duration_ms: 0, // live streams have no duration
        audio_url: (!station.url_resolved.is_empty()).then_some(station.url_resolved),
        preview_url: None,
        source: Source::RadioBrowser,
        popularity: (station.votes / 50).min(100) as u8,
        genres,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_mapping() {
        let track = to_track(dto::Station {
            stationuuid: "962cc6df-0601-11e8-ae97-52543be04c81".to_string(),
            name: "SomaFM Groove Salad".to_string(),
            url_resolved: "https://ice2.somafm.com/groovesalad-128-mp3".to_string(),
            favicon: "https://somafm.com/img3/groovesalad-400.jpg".to_string(),
            tags: "ambient, chillout".to_string(),
            country: "US".to_string(),
            votes: 2483,
        });

        assert_eq!(track.id, "radio_962cc6df-0601-11e8-ae97-52543be04c81");
        assert_eq!(track.source, Source::RadioBrowser);
        assert_eq!(track.genres, vec!["ambient", "chillout"]);
        assert_eq!(track.duration_ms, 0);
        assert_eq!(track.popularity, 49);

        // Favicon surfaces as the station's artwork
        let album = track.album.expect("favicon should map to artwork");
        assert_eq!(album.name, "SomaFM Groove Salad");
        assert_eq!(
            album.image_urls,
            vec!["https://somafm.com/img3/groovesalad-400.jpg"]
        );
    }

    #[test]
    fn test_votes_cap_at_100() {
        let track = to_track(dto::Station {
            stationuuid: "x".to_string(),
            name: "Big FM".to_string(),
            url_resolved: String::new(),
            favicon: String::new(),
            tags: String::new(),
            country: String::new(),
            votes: 1_000_000,
        });
        assert_eq!(track.popularity, 100);
        assert!(track.audio_url.is_none());
        assert!(track.album.is_none()); // no favicon, no artwork
    }
}
