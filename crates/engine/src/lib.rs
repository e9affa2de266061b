//! Vaidya Doctor Directory Listing Engine
//!
//! This crate implements the behavior behind the doctor listing page: a
//! filter/sort pipeline over an immutable, once-loaded dataset, a name
//! suggestion engine, a bidirectional codec between filter state and the
//! page's URL query string, and an explicit browse-session state machine
//! that models browser history (push on committed changes, restore without
//! push on back/forward).
//!
//! # Design
//!
//! The listing is a pure function of the loaded dataset and four committed
//! parameters (search term, consultation mode, specialty selection, sort
//! key). Nothing here mutates the dataset; every view is recomputed from
//! scratch, so identical inputs always produce the identical ordered output.
//!
//! The URL query string is the single persistence mechanism. [`query::encode`]
//! produces the canonical form of a state and [`query::decode`] accepts any
//! form, mapping absent or unreadable parameters to their defaults. Decoding
//! has no failure mode.
//!
//! # Architecture
//!
//! - [`directory`] - The loaded dataset and specialty discovery
//! - [`filter`] - Committed filter state and the listing pipeline
//! - [`suggest`] - Name suggestions for the in-progress search text
//! - [`query`] - URL query-string codec
//! - [`session`] - Browse session and history state machine
//! - [`loader`] - Upstream dataset fetch with degraded-empty fallback
//! - [`error`] - Error types

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod directory;
pub mod error;
pub mod filter;
pub mod loader;
pub mod query;
pub mod session;
pub mod suggest;

// Re-export commonly used types
pub use directory::Directory;
pub use error::{LoadError, LoadResult};
pub use filter::{FilterState, apply};
pub use loader::{DirectorySource, HttpSource, load_or_empty};
pub use session::{BrowseSession, History};
pub use suggest::{MAX_SUGGESTIONS, suggest};
