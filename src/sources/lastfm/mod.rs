//! Last.fm source adapter.
//!
//! Used only for metadata enhancement: given an artist and track name,
//! `track.getInfo` returns canonical spellings and album art that the
//! originating source (typically a scraped radio title) lacks.

pub mod client;
pub mod dto;

pub use client::{LastFmClient, TrackInfo};
