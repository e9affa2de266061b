//! Listing query extractor.
//!
//! Decodes the committed filter state from the request query string.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use vaidya_engine::{FilterState, query};

/// Axum extractor for the listing filter state.
///
/// Wraps [`vaidya_engine::query::decode`], so it inherits the codec's
/// contract: absent parameters default, the first occurrence of a duplicate
/// wins, unknown parameters and unrecognized codes are ignored. The
/// rejection type is [`Infallible`] because decoding a query string cannot
/// fail; a garbage URL is just the default listing.
///
/// # Example
///
/// ```rust,ignore
/// use vaidya_rest::extractors::ListingQuery;
///
/// async fn listing_handler(ListingQuery(filter): ListingQuery) {
///     println!("search term: {}", filter.search_term);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListingQuery(pub FilterState);

impl ListingQuery {
    /// Decodes a raw query string (no leading `?` required).
    pub fn from_query(query: &str) -> Self {
        Self(query::decode(query))
    }
}

impl<S> FromRequestParts<S> for ListingQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_query(parts.uri.query().unwrap_or("")))
    }
}
