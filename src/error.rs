//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while CLI/main
//! uses `anyhow` for convenient error propagation.
//!
//! List-shaped aggregator operations never surface these: upstream failures
//! degrade to empty lists there. Detail lookups (a single track, album,
//! playlist) do fail, because there is no sensible empty value to degrade to.

use crate::model::Source;
use crate::sources::SourceError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Upstream source error
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// An id whose prefix maps to no known source
    #[error("Unrecognized id: {0}")]
    UnknownId(String),

    /// The id's source cannot serve this kind of lookup
    // The field cannot be called `source`: thiserror would treat it as the
    // error cause and demand `std::error::Error` of it.
    #[error("{origin} has no {entity} lookup")]
    Unsupported {
        origin: Source,
        entity: &'static str,
    },

    /// Local history/saved-tracks store error
    #[error("Store error: {0}")]
    Store(String),
}
