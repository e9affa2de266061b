//! Response envelopes for the listing API.
//!
//! This module provides the typed response bodies the handlers serialize:
//!
//! - [`listing`] - The filtered listing with its canonical self link
//! - [`suggest`] - Name suggestions for an in-progress query
//! - [`specialties`] - The distinct specialty list

pub mod listing;
pub mod specialties;
pub mod suggest;

pub use listing::{ListingLink, ListingResponse};
pub use specialties::SpecialtiesResponse;
pub use suggest::SuggestResponse;
