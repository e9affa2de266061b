//! Listing route configuration.
//!
//! Defines all routes for the doctor listing API.

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Creates all listing API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Listing
/// - `GET /doctors` - Filtered, sorted doctor listing
/// - `GET /doctors/_suggest` - Name autocomplete suggestions
/// - `GET /specialties` - Specialty catalogue
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler))
        .route("/_liveness", get(handlers::health::liveness_handler))
        .route("/_readiness", get(handlers::health::readiness_handler))
        // Listing routes
        .route("/doctors", get(handlers::listing_handler))
        .route("/doctors/_suggest", get(handlers::suggest_handler))
        .route("/specialties", get(handlers::specialties_handler))
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    // Route tests will be in integration tests
}
