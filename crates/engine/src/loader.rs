//! Upstream dataset loading.
//!
//! The dataset is fetched exactly once, at startup. There is no retry, no
//! auth, and no pagination; a failed load is logged and the server carries
//! on with an empty directory, which renders as an empty listing rather
//! than an error surface.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};

use vaidya_model::Doctor;

use crate::directory::Directory;
use crate::error::{LoadError, LoadResult};

/// Default timeout for the one startup fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A source of doctor records.
///
/// The seam exists so the binary can load over HTTP while tests substitute
/// canned or failing sources.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Returns a human-readable name for this source, used in log lines.
    fn source_name(&self) -> &'static str;

    /// Fetches the full record set.
    async fn fetch_doctors(&self) -> LoadResult<Vec<Doctor>>;
}

/// Fetches the dataset from a JSON endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpSource {
    /// Creates a source for the given endpoint with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Overrides the fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The endpoint this source fetches from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DirectorySource for HttpSource {
    fn source_name(&self) -> &'static str {
        "http"
    }

    async fn fetch_doctors(&self) -> LoadResult<Vec<Doctor>> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::UpstreamStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let doctors = serde_json::from_str::<Vec<Doctor>>(&body)?;
        Ok(doctors)
    }
}

/// Loads the directory, degrading to empty on failure.
///
/// This is the only place a [`LoadError`] is handled: it is logged and
/// swallowed, because the listing has no user-facing error state.
pub async fn load_or_empty(source: &dyn DirectorySource) -> Directory {
    match source.fetch_doctors().await {
        Ok(doctors) => {
            info!(
                source = source.source_name(),
                count = doctors.len(),
                "doctor dataset loaded"
            );
            Directory::new(doctors)
        }
        Err(err) => {
            error!(
                source = source.source_name(),
                error = %err,
                "doctor dataset failed to load, serving empty directory"
            );
            Directory::empty()
        }
    }
}
