//! HTTP client utilities.
//!
//! Provides a shared HTTP client for the remote fetcher.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::error::{KubectxError, Result};

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("kubectx-git/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| KubectxError::Transport(e.to_string()))
}

/// Get a default HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn default_client() -> Result<Client> {
    build_client(DEFAULT_TIMEOUT)
}
