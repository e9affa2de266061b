//! HTTP request handlers for the listing API.
//!
//! This module contains handlers for all listing interactions:
//!
//! - [`listing`] - Filtered, sorted doctor listing
//! - [`suggest`] - Name autocomplete suggestions
//! - [`specialties`] - Specialty catalogue for filter controls
//! - [`health`] - Health check endpoints

pub mod health;
pub mod listing;
pub mod specialties;
pub mod suggest;

// Re-export handlers for convenience
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use listing::listing_handler;
pub use specialties::specialties_handler;
pub use suggest::suggest_handler;
