//! Application state for the listing API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the loaded doctor directory and the server
//! configuration. Both sit behind `Arc`s, so cloning the state per request
//! is cheap and nothing is ever locked; the directory is an immutable
//! snapshot for the life of the process.

use std::sync::Arc;

use vaidya_engine::Directory;

use crate::config::ServerConfig;

/// Shared application state for the listing API.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use vaidya_engine::Directory;
/// use vaidya_rest::{AppState, ServerConfig};
///
/// let directory = Arc::new(Directory::empty());
/// let state = AppState::new(directory, ServerConfig::default());
/// assert_eq!(state.directory().len(), 0);
/// ```
#[derive(Clone)]
pub struct AppState {
    /// The loaded doctor directory.
    directory: Arc<Directory>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates a new AppState with the given directory and configuration.
    pub fn new(directory: Arc<Directory>, config: ServerConfig) -> Self {
        Self {
            directory,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the loaded directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Returns a clone of the directory Arc.
    pub fn directory_arc(&self) -> Arc<Directory> {
        Arc::clone(&self.directory)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL used when building self links.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
