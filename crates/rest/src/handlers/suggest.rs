//! Name suggestion endpoint handler.

use axum::{Json, extract::State};
use tracing::debug;

use vaidya_engine::suggest;

use crate::extractors::SuggestQuery;
use crate::responses::SuggestResponse;
use crate::state::AppState;

/// Handler for the name suggestion endpoint.
///
/// # HTTP Request
///
/// `GET [base]/doctors/_suggest?q=<partial name>`
///
/// # Response
///
/// At most three matching names in dataset order. An empty or missing `q`
/// yields an empty list, never the full directory.
pub async fn suggest_handler(
    State(state): State<AppState>,
    SuggestQuery { q }: SuggestQuery,
) -> Json<SuggestResponse> {
    debug!(q = %q, "processing suggestion request");

    let names = suggest(state.directory().doctors(), &q)
        .into_iter()
        .map(|d| d.name.clone())
        .collect();
    Json(SuggestResponse::new(names))
}
