//! MusicBrainz source adapter.
//!
//! Artist search against the open MusicBrainz database. MusicBrainz has no
//! audio, so it only contributes to the artist category.

pub mod client;
pub mod dto;

pub use client::MusicBrainzClient;
