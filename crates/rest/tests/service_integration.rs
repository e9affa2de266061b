//! Integration tests for the service-level endpoints.
//!
//! Tests everything around the listing itself:
//! - Health, liveness and readiness probes
//! - Degraded operation over an empty directory
//! - CORS configuration
//! - Unknown routes

mod common;

use axum::http::header::ORIGIN;
use axum::http::{HeaderValue, StatusCode};

use common::fixtures;
use common::harness::ListingTestHarness;
use vaidya_rest::ServerConfig;

// =============================================================================
// Health Probes
// =============================================================================

mod health_probes {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_loaded_doctor_count() {
        let harness = ListingTestHarness::new();

        let body = harness.get_json("/health").await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["doctors"], 5);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_health_stays_healthy_over_an_empty_directory() {
        let harness = ListingTestHarness::empty();

        let body = harness.get_json("/health").await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["doctors"], 0);
        assert!(body["loaded_at"].is_null());
    }

    #[tokio::test]
    async fn test_liveness_answers_ok() {
        let harness = ListingTestHarness::new();

        let response = harness.get("/_liveness").await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_readiness_distinguishes_loaded_from_empty() {
        let loaded = ListingTestHarness::new();
        let empty = ListingTestHarness::empty();

        let loaded_body = loaded.get_json("/_readiness").await;
        let empty_body = empty.get_json("/_readiness").await;

        assert_eq!(loaded_body["status"], "ready");
        assert_eq!(loaded_body["checks"]["directory"], "loaded");
        assert_eq!(empty_body["status"], "ready");
        assert_eq!(empty_body["checks"]["directory"], "empty");
    }
}

// =============================================================================
// Degraded Operation
// =============================================================================

mod degraded_operation {
    use super::*;

    #[tokio::test]
    async fn test_empty_directory_serves_empty_listings_not_errors() {
        let harness = ListingTestHarness::empty();

        let body = harness.get_json("/doctors?search=rao&sortBy=fees").await;

        assert_eq!(body["total"], 0);
        assert_eq!(body["doctors"], serde_json::json!([]));
        assert_eq!(
            ListingTestHarness::self_link(&body),
            "http://localhost:8080/doctors?search=rao&sortBy=fees"
        );
    }

    #[tokio::test]
    async fn test_empty_directory_has_no_specialties_or_suggestions() {
        let harness = ListingTestHarness::empty();

        let specialties = harness.get_json("/specialties").await;
        let suggestions = harness.get_json("/doctors/_suggest?q=a").await;

        assert_eq!(specialties["total"], 0);
        assert_eq!(suggestions["total"], 0);
    }
}

// =============================================================================
// CORS
// =============================================================================

mod cors {
    use super::*;

    #[tokio::test]
    async fn test_cors_headers_present_when_enabled() {
        let config = ServerConfig {
            enable_cors: true,
            ..ServerConfig::for_testing()
        };
        let harness = ListingTestHarness::with_config(fixtures::sample_directory(), config);

        let response = harness
            .server
            .get("/doctors")
            .add_header(ORIGIN, HeaderValue::from_static("http://listing.example.com"))
            .await;

        response.assert_status_ok();
        let allow_origin = response
            .headers()
            .get("access-control-allow-origin")
            .expect("CORS response carries allow-origin");
        assert_eq!(allow_origin, "*");
    }

    #[tokio::test]
    async fn test_cors_headers_absent_when_disabled() {
        let harness = ListingTestHarness::new();

        let response = harness
            .server
            .get("/doctors")
            .add_header(ORIGIN, HeaderValue::from_static("http://listing.example.com"))
            .await;

        response.assert_status_ok();
        assert!(
            response
                .headers()
                .get("access-control-allow-origin")
                .is_none()
        );
    }
}

// =============================================================================
// Unknown Routes
// =============================================================================

mod unknown_routes {
    use super::*;

    #[tokio::test]
    async fn test_unknown_path_answers_not_found() {
        let harness = ListingTestHarness::new();

        let response = harness.get("/patients").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_to_listing_is_not_allowed() {
        let harness = ListingTestHarness::new();

        let response = harness.server.post("/doctors").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
