//! # vaidya-rest - Doctor Listing HTTP API
//!
//! This crate provides the HTTP layer of the Vaidya Doctor Search service.
//! It serves a filter/sort/search pipeline over an in-memory doctor
//! directory, with a query-string schema designed to mirror what a browser
//! address bar carries: any listing URL can be bookmarked, shared, and
//! reloaded to the identical view.
//!
//! ## Features
//!
//! - **Listing**: Name search, consultation mode filter, multi-select
//!   specialty filter, and fee/experience sorting in one fixed pipeline
//! - **Suggestions**: Name autocomplete capped at three entries
//! - **Tolerant URLs**: Hand-edited or stale query strings decode to the
//!   nearest valid view instead of an error
//! - **Canonical self links**: Every listing response re-encodes its state
//!   so clients converge on one URL per view
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vaidya_engine::{HttpSource, load_or_empty};
//! use vaidya_rest::{ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!
//!     // Fetch the dataset once; serve an empty directory on failure.
//!     let source = HttpSource::new(&config.data_url);
//!     let directory = load_or_empty(&source).await;
//!
//!     // Create the Axum application
//!     let app = create_app_with_config(directory, config.clone());
//!
//!     // Start the server
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! The server exposes the following endpoints:
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | listing | GET | `/doctors?search&consultationMode&specialties&sortBy` |
//! | suggestions | GET | `/doctors/_suggest?q=<partial name>` |
//! | specialty catalogue | GET | `/specialties` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//! | readiness | GET | `/_readiness` |
//!
//! ## Query Parameters
//!
//! The listing endpoint understands four parameters, emitted in this
//! canonical order and omitted when at their defaults:
//!
//! | Parameter | Values | Effect |
//! |-----------|--------|--------|
//! | `search` | free text | Case-insensitive substring match on names |
//! | `consultationMode` | `video-consult`, `in-clinic` | Mode filter |
//! | `specialties` | comma-joined list | Keep doctors with any listed specialty |
//! | `sortBy` | `fees`, `experience` | Fees ascending or experience descending |
//!
//! Decoding is tolerant: unknown parameters are ignored, unparseable
//! values leave their slot unset, and the first occurrence of a repeated
//! parameter wins.
//!
//! ## Error Handling
//!
//! Request handling is infallible by design. A malformed query string is
//! data, not an error, so every listing request answers `200 OK` with
//! whatever view the query decodes to. The only fallible operation in the
//! service is the startup dataset fetch, which degrades to an empty
//! directory (see [`vaidya_engine::load_or_empty`]).
//!
//! ## Configuration
//!
//! The server is configured via environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `VDS_PORT` | 8080 | Server port |
//! | `VDS_HOST` | 127.0.0.1 | Host to bind |
//! | `VDS_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `VDS_DATA_URL` | campus-api-mock dataset | Doctor dataset URL |
//! | `VDS_FETCH_TIMEOUT` | 10 | Dataset fetch timeout (seconds) |
//! | `VDS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `VDS_ENABLE_CORS` | true | Enable CORS |
//! | `VDS_CORS_ORIGINS` | * | Allowed CORS origins |
//! | `VDS_BASE_URL` | http://localhost:8080 | Base URL for self links |
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`] - Server configuration
//! - [`state`] - Application state (directory, configuration)
//! - [`handlers`] - HTTP request handlers for each operation
//! - [`extractors`] - Axum extractors for the listing query schema
//! - [`responses`] - Response body types
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use vaidya_engine::Directory;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
///
/// # Arguments
///
/// * `directory` - The loaded doctor directory to serve
///
/// # Example
///
/// ```rust,ignore
/// use vaidya_engine::Directory;
/// use vaidya_rest::create_app;
///
/// let directory = Directory::new(doctors);
/// let app = create_app(directory);
/// ```
pub fn create_app(directory: Directory) -> Router {
    create_app_with_config(directory, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up the complete listing API with all handlers,
/// middleware, and configuration.
///
/// # Arguments
///
/// * `directory` - The loaded doctor directory to serve
/// * `config` - Server configuration
///
/// # Example
///
/// ```rust,ignore
/// use vaidya_engine::Directory;
/// use vaidya_rest::{ServerConfig, create_app_with_config};
///
/// let directory = Directory::new(doctors);
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(directory, config);
/// ```
pub fn create_app_with_config(directory: Directory, config: ServerConfig) -> Router {
    info!(
        doctors = directory.len(),
        specialties = directory.specialties().len(),
        "Creating listing API server"
    );

    // Create application state
    let state = AppState::new(Arc::new(directory), config.clone());

    // Build the router with all listing routes
    let router = routing::listing_routes::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "vaidya_rest={},vaidya_engine={},tower_http=debug",
            level, level
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
