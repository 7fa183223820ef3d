//! Archive.org HTTP client
//!
//! Queries the advanced-search endpoint over the open audio collections and
//! maps item documents into tracks. The query string uses Lucene syntax, so
//! it is built by hand with explicit encoding rather than `.query()`.

use async_trait::async_trait;

use super::dto;
use crate::model::{EntityRef, Source, Track};
use crate::sources::traits::TrackSource;
use crate::sources::SourceError;

/// Collections searched; both are freely streamable audio.
const COLLECTIONS: &str = "(collection:(opensource_audio) OR collection:(etree))";

/// Archive.org search client
pub struct ArchiveClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ArchiveClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: "https://archive.org".to_string(),
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
        let lucene = format!("{COLLECTIONS} AND title:({query})");
        self.run_query(&lucene, limit).await
    }

    /// Most-downloaded items, used when a search stage needs filler.
    pub async fn featured_tracks(&self, limit: usize) -> Result<Vec<Track>, SourceError> {
        self.run_query(COLLECTIONS, limit).await
    }

    async fn run_query(&self, lucene: &str, limit: usize) -> Result<Vec<Track>, SourceError> {
        // Lucene operators must survive encoding, so the q parameter is
        // encoded by hand and the rest appended as plain pairs.
        let url = format!(
            "{}/advancedsearch.php?q={}&fl[]=identifier&fl[]=title&fl[]=creator&fl[]=downloads&sort[]=downloads+desc&rows={}&page=1&output=json",
            self.base_url,
            urlencoding::encode(lucene),
            limit
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(SourceError::from_http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::from_status(status));
        }

        let parsed = response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(parsed
            .response
            .docs
            .into_iter()
            .map(|doc| self.to_track(doc))
            .collect())
    }

    fn to_track(&self, doc: dto::Doc) -> Track {
        let artists = doc
            .creator
            .as_ref()
            .and_then(|c| c.first())
            .map(|name| vec![EntityRef::new(Source::Archive.id(name), name)])
            .unwrap_or_default();

        Track {
            id: Source::Archive.id(&doc.identifier),
            name: doc.title.unwrap_or_else(|| doc.identifier.clone()),
            artists,
            album: None,
            duration_ms: 0, // not in search docs; only the item files API has it
            audio_url: Some(format!("https://archive.org/download/{}", doc.identifier)),
            preview_url: None,
            source: Source::Archive,
            popularity: downloads_to_popularity(doc.downloads),
            genres: vec![],
        }
    }
}

#[async_trait]
impl TrackSource for ArchiveClient {
    fn source(&self) -> Source {
        Source::Archive
    }

    async fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<Track>, SourceError> {
        ArchiveClient::search_tracks(self, query, limit).await
    }

    async fn featured_tracks(&self, limit: usize) -> Result<Vec<Track>, SourceError> {
        ArchiveClient::featured_tracks(self, limit).await
    }
}

fn downloads_to_popularity(downloads: u64) -> u8 {
    match downloads {
        0..=100 => 5,
        101..=1_000 => 15,
        1_001..=10_000 => 30,
        10_001..=100_000 => 55,
        100_001..=1_000_000 => 75,
        _ => 95,
    }
}
