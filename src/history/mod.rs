//! Local listening history and saved tracks.
//!
//! File-backed JSON store under the OS data directory. Two files:
//! - `recently_played.json`: newest-first play history, capped at
//!   [`MAX_RECENT`] entries, one entry per track id.
//! - `saved_tracks.json`: the user's library, uncapped.
//!
//! Reads are fail-soft: a missing or corrupt file is treated as an empty
//! list (logged, never an error). Writes go through a temp file plus rename
//! so a crash mid-write can't corrupt the store.

use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Track;

/// Maximum entries kept in the recently-played list.
pub const MAX_RECENT: usize = 50;

/// A play-history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayedTrack {
    pub track: Track,
    /// RFC 3339 timestamp of when playback started.
    pub played_at: String,
}

/// File-backed history and saved-tracks store.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    /// Store under the OS data directory (`~/.local/share/fonos` on Linux).
    pub fn new() -> Option<Self> {
        dirs::data_dir().map(|d| Self {
            dir: d.join("fonos"),
        })
    }

    /// Store under an explicit directory. Tests use this with a temp dir.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    // ------------------------------------------------------------------
    // Recently played
    // ------------------------------------------------------------------

    /// Record a play: dedupe by id, prepend, cap at [`MAX_RECENT`].
    pub fn add_recently_played(&self, track: &Track) -> Result<()> {
        let mut entries = self.read_recent();
        entries.retain(|e| e.track.id != track.id);
        entries.insert(
            0,
            PlayedTrack {
                track: track.clone(),
                played_at: Utc::now().to_rfc3339(),
            },
        );
        entries.truncate(MAX_RECENT);
        self.write(Self::RECENT_FILE, &entries)
    }

    /// Newest-first play history, at most `limit` entries.
    pub fn recently_played(&self, limit: usize) -> Vec<PlayedTrack> {
        let mut entries = self.read_recent();
        entries.truncate(limit);
        entries
    }

    pub fn clear_recently_played(&self) -> Result<()> {
        self.write(Self::RECENT_FILE, &Vec::<PlayedTrack>::new())
    }

    // ------------------------------------------------------------------
    // Saved tracks
    // ------------------------------------------------------------------

    /// Add a track to the library. Saving twice is a no-op.
    pub fn save_track(&self, track: &Track) -> Result<()> {
        let mut tracks = self.saved_tracks();
        if tracks.iter().any(|t| t.id == track.id) {
            return Ok(());
        }
        tracks.insert(0, track.clone());
        self.write(Self::SAVED_FILE, &tracks)
    }

    pub fn remove_saved(&self, id: &str) -> Result<()> {
        let mut tracks = self.saved_tracks();
        tracks.retain(|t| t.id != id);
        self.write(Self::SAVED_FILE, &tracks)
    }

    /// Saved tracks, newest saves first.
    pub fn saved_tracks(&self) -> Vec<Track> {
        self.read_list(Self::SAVED_FILE)
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved_tracks().iter().any(|t| t.id == id)
    }

    // ------------------------------------------------------------------
    // File plumbing
    // ------------------------------------------------------------------

    const RECENT_FILE: &'static str = "recently_played.json";
    const SAVED_FILE: &'static str = "saved_tracks.json";

    fn read_recent(&self) -> Vec<PlayedTrack> {
        self.read_list(Self::RECENT_FILE)
    }

    /// Read a JSON list, treating missing or corrupt files as empty.
    fn read_list<T: serde::de::DeserializeOwned>(&self, file: &str) -> Vec<T> {
        let path = self.dir.join(file);
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return vec![],
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", path, e);
                return vec![];
            }
        };
        match serde_json::from_str(&contents) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Corrupt store file {:?}, treating as empty: {}", path, e);
                vec![]
            }
        }
    }

    /// Write atomically (write to temp, then rename).
    fn write<T: Serialize>(&self, file: &str, list: &[T]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file);
        let contents =
            serde_json::to_string_pretty(list).map_err(|e| Error::Store(e.to_string()))?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, contents)?;
        std::fs::rename(&temp_path, &path)?;
        Ok(())
    }
}
