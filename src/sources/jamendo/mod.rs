//! Jamendo source adapter.
//!
//! Jamendo hosts Creative Commons music with full-length streams, which makes
//! it the primary source for playable track URLs. Requires a (free) client id.

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::JamendoClient;
