//! Error types for the listing engine.
//!
//! Loading the upstream dataset is the only operation in the system that
//! can fail; everything downstream of a loaded (or empty) directory is
//! infallible by construction.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// Errors raised while fetching and decoding the upstream dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The HTTP request itself failed (connect, timeout, transport).
    #[error("upstream dataset request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream endpoint answered with a non-success status.
    #[error("upstream dataset returned HTTP {status} from {url}")]
    UpstreamStatus { url: String, status: u16 },

    /// The response body was not a JSON array of doctor records.
    #[error("upstream dataset is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for load operations.
pub type LoadResult<T> = Result<T, LoadError>;
