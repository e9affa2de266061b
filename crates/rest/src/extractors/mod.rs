//! Axum extractors for listing requests.
//!
//! This module provides custom Axum extractors for the listing API:
//!
//! - [`ListingQuery`] - Decode the committed filter state from the query string
//! - [`SuggestQuery`] - Read the in-progress search text for suggestions
//!
//! Both extractors are infallible: a request URL is never rejected, it is
//! decoded as far as it can be read and defaults fill the rest.

mod listing_query;
mod suggest_query;

pub use listing_query::ListingQuery;
pub use suggest_query::SuggestQuery;
