//! Radio-Browser source adapter.
//!
//! Community radio station directory. Stations are surfaced as endlessly
//! playable tracks through the dedicated `stations` operation rather than
//! being mixed into track search results.

pub mod client;
pub mod dto;

pub use client::RadioBrowserClient;
