//! Server configuration for the listing API.
//!
//! This module provides configuration types for the server, supporting both
//! programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `VDS_PORT` | 8080 | Server port |
//! | `VDS_HOST` | 127.0.0.1 | Host to bind |
//! | `VDS_LOG_LEVEL` | info | Log level |
//! | `VDS_DATA_URL` | campus mock dataset | Upstream doctor dataset endpoint |
//! | `VDS_FETCH_TIMEOUT` | 10 | Upstream fetch timeout (seconds) |
//! | `VDS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `VDS_ENABLE_CORS` | true | Enable CORS |
//! | `VDS_CORS_ORIGINS` | * | Allowed origins |
//! | `VDS_CORS_METHODS` | GET,HEAD,OPTIONS | Allowed methods |
//! | `VDS_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `VDS_BASE_URL` | http://localhost:8080 | Server base URL |
//!
//! # Example
//!
//! ```rust
//! use vaidya_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Upstream dataset endpoint used when no override is configured.
pub const DEFAULT_DATA_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// Server configuration for the listing API.
///
/// This struct can be constructed from environment variables using
/// [`ServerConfig::from_env`], from command line arguments using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "vds")]
#[command(about = "Vaidya Doctor Directory Server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "VDS_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "VDS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "VDS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Upstream doctor dataset endpoint, fetched once at startup.
    #[arg(long, env = "VDS_DATA_URL", default_value = DEFAULT_DATA_URL)]
    pub data_url: String,

    /// Upstream fetch timeout in seconds.
    #[arg(long, env = "VDS_FETCH_TIMEOUT", default_value = "10")]
    pub fetch_timeout: u64,

    /// Request timeout in seconds.
    #[arg(long, env = "VDS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "VDS_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "VDS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "VDS_CORS_METHODS", default_value = "GET,HEAD,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "VDS_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// Base URL for the server (used in listing self links).
    #[arg(long, env = "VDS_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            data_url: DEFAULT_DATA_URL.to_string(),
            fetch_timeout: 10,
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,HEAD,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.fetch_timeout == 0 {
            errors.push("Fetch timeout cannot be 0".to_string());
        }

        if self.data_url.is_empty() {
            errors.push("Data URL cannot be empty".to_string());
        }

        if self.base_url.is_empty() {
            errors.push("Base URL cannot be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            data_url: "http://localhost:0/doctors.json".to_string(),
            fetch_timeout: 2,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "http://localhost:8080".to_string(),
        }
    }
}
