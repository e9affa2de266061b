//! Listing API test harness.
//!
//! Provides infrastructure for testing the listing API endpoints.

use axum_test::TestServer;
use serde_json::Value;

use vaidya_engine::Directory;
use vaidya_rest::{ServerConfig, create_app_with_config};

use super::fixtures;

/// Test harness for listing API testing.
///
/// Provides a configured test server over a fixed doctor directory.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_listing() {
///     let harness = ListingTestHarness::new();
///
///     let body = harness.get_json("/doctors?sortBy=fees").await;
///
///     assert_eq!(body["total"], 5);
/// }
/// ```
pub struct ListingTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// Server configuration.
    pub config: ServerConfig,
}

impl ListingTestHarness {
    /// Creates a test harness over the standard five-doctor dataset.
    pub fn new() -> Self {
        Self::with_directory(fixtures::sample_directory())
    }

    /// Creates a test harness over an empty directory, mimicking a failed
    /// startup fetch.
    pub fn empty() -> Self {
        Self::with_directory(fixtures::empty_directory())
    }

    /// Creates a test harness over the given directory.
    pub fn with_directory(directory: Directory) -> Self {
        let config = ServerConfig::for_testing();
        let app = create_app_with_config(directory, config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, config }
    }

    /// Creates a test harness with a custom configuration.
    pub fn with_config(directory: Directory, config: ServerConfig) -> Self {
        let app = create_app_with_config(directory, config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, config }
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> axum_test::TestResponse {
        self.server.get(path).await
    }

    /// Makes a GET request and decodes the JSON body.
    pub async fn get_json(&self, path: &str) -> Value {
        let response = self.get(path).await;
        response.assert_status_ok();
        response.json()
    }

    /// Makes a GET request and returns the listed doctor names in order.
    pub async fn get_names(&self, path: &str) -> Vec<String> {
        let body = self.get_json(path).await;
        body["doctors"]
            .as_array()
            .expect("listing body carries a doctors array")
            .iter()
            .map(|d| d["name"].as_str().expect("doctor has a name").to_string())
            .collect()
    }

    /// Returns the `self` link from a listing body.
    pub fn self_link(body: &Value) -> &str {
        body["link"]
            .as_array()
            .expect("listing body carries a link array")
            .iter()
            .find(|l| l["relation"] == "self")
            .and_then(|l| l["url"].as_str())
            .expect("listing body carries a self link")
    }
}

impl Default for ListingTestHarness {
    fn default() -> Self {
        Self::new()
    }
}
