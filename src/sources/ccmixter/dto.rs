//! ccMixter query API Data Transfer Objects
//!
//! These types match EXACTLY what `ccmixter.org/api/query?f=json` returns:
//! a bare JSON array of upload records, each with a files list.
//!
//! API Reference: http://ccmixter.org/query-api

use serde::Deserialize;

/// One remix upload.
#[derive(Debug, Clone, Deserialize)]
pub struct Upload {
    pub upload_id: u64,
    pub upload_name: String,
    #[serde(default)]
    pub user_name: String,
    /// Comma-separated tag string, e.g. `"chill,downtempo,instrumental"`.
    #[serde(default)]
    pub upload_tags: String,
    #[serde(default = "Vec::new")]
    pub files: Vec<UploadFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadFile {
    #[serde(default)]
    pub download_url: String,
    pub file_format_info: Option<FormatInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatInfo {
    #[serde(rename = "format-name", default)]
    pub format_name: String,
}

impl Upload {
    /// Prefer an MP3 file; fall back to the first file with any URL.
    pub fn best_download_url(&self) -> Option<&str> {
        self.files
            .iter()
            .find(|f| {
                !f.download_url.is_empty()
                    && f.file_format_info
                        .as_ref()
                        .is_some_and(|info| info.format_name.contains("mp3"))
            })
            .or_else(|| self.files.iter().find(|f| !f.download_url.is_empty()))
            .map(|f| f.download_url.as_str())
    }

    pub fn tag_list(&self) -> Vec<String> {
        self.upload_tags
            .split(',')
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
