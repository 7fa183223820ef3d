//! ccMixter source adapter.
//!
//! Community remix uploads with direct MP3 downloads. Secondary stage of the
//! track fallback chain alongside Archive.org.

pub mod client;
pub mod dto;

pub use client::CcMixterClient;
