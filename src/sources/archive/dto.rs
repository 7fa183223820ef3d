//! Archive.org advanced-search Data Transfer Objects
//!
//! These types match EXACTLY what the advancedsearch endpoint returns.
//! API Reference: https://archive.org/advancedsearch.php
//!
//! Archive metadata is user-submitted and loosely typed: `creator` may be a
//! single string or an array, and most fields can be absent entirely.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
    #[serde(default = "Vec::new")]
    pub docs: Vec<Doc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Doc {
    pub identifier: String,
    pub title: Option<String>,
    pub creator: Option<OneOrMany>,
    #[serde(default)]
    pub downloads: u64,
}

/// Loose field that is sometimes a scalar, sometimes an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// First value, for display.
    pub fn first(&self) -> Option<&str> {
        match self {
            OneOrMany::One(s) => Some(s.as_str()),
            OneOrMany::Many(v) => v.first().map(|s| s.as_str()),
        }
    }
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "responseHeader": {"status": 0, "QTime": 12},
            "response": {
                "numFound": 2,
                "start": 0,
                "docs": [
                    {
                        "identifier": "gd1977-05-08.sbd.hicks.4982",
                        "title": "Grateful Dead Live at Barton Hall",
                        "creator": "Grateful Dead",
                        "downloads": 1543208
                    },
                    {
                        "identifier": "compilation-xyz",
                        "title": "Various Sessions",
                        "creator": ["Artist One", "Artist Two"]
                    }
                ]
            }
        }"#;

        let parsed: SearchResponse = serde_json::from_str(json).expect("Should parse search");
        assert_eq!(parsed.response.num_found, 2);

        let first = &parsed.response.docs[0];
        assert_eq!(first.identifier, "gd1977-05-08.sbd.hicks.4982");
        assert_eq!(first.creator.as_ref().unwrap().first(), Some("Grateful Dead"));
        assert_eq!(first.downloads, 1543208);

        let second = &parsed.response.docs[1];
        assert_eq!(second.creator.as_ref().unwrap().first(), Some("Artist One"));
        assert_eq!(second.downloads, 0);
    }

    #[test]
    fn test_parse_doc_with_only_identifier() {
        let json = r#"{"identifier": "bare-item"}"#;
        let doc: Doc = serde_json::from_str(json).expect("Should parse bare doc");
        assert!(doc.title.is_none());
        assert!(doc.creator.is_none());
    }
}
