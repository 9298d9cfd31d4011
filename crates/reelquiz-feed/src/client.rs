//! HTTP fetch boundary.

use async_trait::async_trait;
use reelquiz_core::error::TransportError;
use tracing::debug;

/// Fetches raw bytes from a URL.
///
/// One network call per invocation, no retries; retry policy belongs to
/// the round engine. Injectable so tests can stub the network away.
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Fetch the body behind `url`.
    ///
    /// # Errors
    ///
    /// [`TransportError::Transport`] for connection-level failures,
    /// [`TransportError::BadStatus`] for any status outside 200-299.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

/// Production client backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpFeedClient {
    client: reqwest::Client,
}

impl HttpFeedClient {
    /// Creates a client with a fresh connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::BadStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Transport(e.to_string()))?;
        debug!(url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }
}
