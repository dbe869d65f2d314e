//! Authenticated remote kubeconfig fetcher.
//!
//! Given a URL and an access token, issues an authenticated HTTP GET and
//! reports success or a descriptive failure. The cache directory under the
//! user's home is resolved at construction but not yet written to; fetched
//! bodies are currently discarded.

use std::path::{Path, PathBuf};

use reqwest::Client;

use crate::core::http;
use crate::error::{KubectxError, Result};
use crate::storage::paths;

/// Fetches remote kubeconfig documents using HTTP basic authentication,
/// with the access token as the username and an empty password.
///
/// The token is set at construction and immutable for the fetcher's
/// lifetime. `fetch` takes `&self` and the underlying [`Client`] tolerates
/// concurrent requests, so independent calls on one fetcher may run in
/// parallel.
// No Debug derive: the access token must not end up in log output.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    access_token: String,
    cache_dir: PathBuf,
}

impl Fetcher {
    /// Create a fetcher caching under the default directory in the user's
    /// home (`~/.kubectx-git/`).
    ///
    /// Any token, including an empty one, is accepted structurally; bad
    /// credentials only surface as a server-side status failure.
    ///
    /// # Errors
    ///
    /// Returns [`KubectxError::HomeDirUnavailable`] if the environment
    /// cannot supply a home directory, or a transport error if the HTTP
    /// client cannot be constructed. Both are initialization failures;
    /// callers that can degrade to a configured cache location should use
    /// [`Fetcher::with_cache_dir`] instead.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        let cache_dir = paths::default_cache_dir()?;
        Self::with_cache_dir(access_token, cache_dir)
    }

    /// Create a fetcher with an explicit cache directory, bypassing
    /// home-directory resolution.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed.
    pub fn with_cache_dir(access_token: impl Into<String>, cache_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            client: http::default_client()?,
            access_token: access_token.into(),
            cache_dir,
        })
    }

    /// Directory under which fetched documents are meant to be cached.
    ///
    /// Computed at construction; nothing is written to it yet.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Fetch a remote document.
    ///
    /// Issues `GET <url>` with `Authorization: Basic base64(token + ":")`.
    /// Succeeds only on status exactly 200; the response body is discarded.
    /// No retries; the client's default timeout governs.
    ///
    /// # Errors
    ///
    /// Returns [`KubectxError::Transport`] on network-level failure
    /// (DNS, connection refused, TLS), [`KubectxError::Timeout`] if the
    /// request exceeds the client default timeout, and
    /// [`KubectxError::RemoteStatus`] carrying the URL and numeric code
    /// for any non-200 response.
    pub async fn fetch(&self, url: &str) -> Result<()> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.access_token, Some(""))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    KubectxError::Timeout {
                        seconds: http::DEFAULT_TIMEOUT.as_secs(),
                    }
                } else {
                    KubectxError::Transport(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(KubectxError::RemoteStatus {
                url: url.to_string(),
                status,
            });
        }

        tracing::debug!(url, "fetched remote config");
        Ok(())
    }
}
