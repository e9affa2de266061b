//! Specialty catalogue endpoint handler.

use axum::{Json, extract::State};

use crate::responses::SpecialtiesResponse;
use crate::state::AppState;

/// Handler for the specialty catalogue endpoint.
///
/// # HTTP Request
///
/// `GET [base]/specialties`
///
/// # Response
///
/// Every distinct specialty in the directory, in first-appearance order.
/// Clients render these as filter checkboxes.
pub async fn specialties_handler(State(state): State<AppState>) -> Json<SpecialtiesResponse> {
    Json(SpecialtiesResponse::new(
        state.directory().specialties().to_vec(),
    ))
}
