//! Archive.org source adapter.
//!
//! Searches the Internet Archive's open audio collections. Used as a
//! secondary stage in the track fallback chain when the primary sources
//! return nothing.

pub mod client;
pub mod dto;

pub use client::ArchiveClient;
