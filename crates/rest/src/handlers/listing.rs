//! Listing endpoint handler.
//!
//! Serves the filtered, sorted doctor listing. The query-string schema is
//! the same one a browser address bar carries, so any listing URL can be
//! bookmarked, shared, and reloaded to the identical view.

use axum::{Json, extract::State};
use tracing::debug;

use vaidya_engine::{FilterState, apply, query};

use crate::extractors::ListingQuery;
use crate::responses::ListingResponse;
use crate::state::AppState;

/// Handler for the listing endpoint.
///
/// # HTTP Request
///
/// `GET [base]/doctors?search&consultationMode&specialties&sortBy`
///
/// # Response
///
/// Always `200 OK`: an unreadable query string decodes to the default
/// listing rather than an error. The response's `self` link carries the
/// canonical re-encoding of whatever state was decoded.
pub async fn listing_handler(
    State(state): State<AppState>,
    ListingQuery(filter): ListingQuery,
) -> Json<ListingResponse> {
    debug!(
        search = %filter.search_term,
        mode = ?filter.consultation_mode,
        specialties = filter.specialties.len(),
        sort = ?filter.sort_by,
        "processing listing request"
    );

    let results: Vec<_> = apply(state.directory().doctors(), &filter)
        .into_iter()
        .cloned()
        .collect();
    let self_url = listing_url(state.base_url(), &filter);

    Json(ListingResponse::new(results, self_url))
}

/// Builds the canonical listing URL for a filter state.
fn listing_url(base_url: &str, filter: &FilterState) -> String {
    let query = query::encode(filter);
    if query.is_empty() {
        format!("{}/doctors", base_url)
    } else {
        format!("{}/doctors?{}", base_url, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaidya_model::SortKey;

    #[test]
    fn test_listing_url_default_state_has_no_query() {
        let url = listing_url("http://localhost:8080", &FilterState::default());
        assert_eq!(url, "http://localhost:8080/doctors");
    }

    #[test]
    fn test_listing_url_re_encodes_canonically() {
        let filter = FilterState::new().with_search("asha").with_sort(SortKey::Fees);
        let url = listing_url("http://localhost:8080", &filter);
        assert_eq!(url, "http://localhost:8080/doctors?search=asha&sortBy=fees");
    }

    #[test]
    fn test_listing_url_decoded_query_round_trips() {
        // A messy client URL canonicalizes through decode + re-encode.
        let filter = query::decode("?sortBy=fees&bogus=1&search=rao");
        let url = listing_url("http://localhost:8080", &filter);
        assert_eq!(url, "http://localhost:8080/doctors?search=rao&sortBy=fees");
    }
}
