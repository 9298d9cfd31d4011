//! Stub feed client — scripted `FeedClient` implementation for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use reelquiz_core::error::TransportError;
use reelquiz_feed::client::FeedClient;

/// A feed client that serves a canned response for the feed URL and a
/// placeholder poster for every other URL, with optional scripted
/// poster failures.
#[derive(Debug)]
pub struct StubFeedClient {
    feed_url: String,
    feed_response: Result<Vec<u8>, TransportError>,
    poster_bytes: Vec<u8>,
    /// 1-based poster fetch numbers that fail with a transport error.
    failing_poster_calls: Vec<u32>,
    poster_calls: Mutex<u32>,
    fetched: Mutex<Vec<String>>,
}

impl StubFeedClient {
    /// A client that answers the feed URL with `payload` and every
    /// other URL with a small placeholder poster.
    #[must_use]
    pub fn with_payload(feed_url: &str, payload: &str) -> Self {
        Self {
            feed_url: feed_url.to_owned(),
            feed_response: Ok(payload.as_bytes().to_vec()),
            poster_bytes: vec![0x89, 0x50, 0x4e, 0x47],
            failing_poster_calls: Vec::new(),
            poster_calls: Mutex::new(0),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// A client whose feed fetch fails with `error`.
    #[must_use]
    pub fn failing_feed(feed_url: &str, error: TransportError) -> Self {
        Self {
            feed_response: Err(error),
            ..Self::with_payload(feed_url, "")
        }
    }

    /// Makes the given 1-based poster fetches fail with a transport
    /// error while all others keep succeeding.
    #[must_use]
    pub fn failing_poster_calls(mut self, calls: Vec<u32>) -> Self {
        self.failing_poster_calls = calls;
        self
    }

    /// Every URL fetched so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedClient for StubFeedClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.fetched.lock().unwrap().push(url.to_owned());

        if url == self.feed_url {
            return self.feed_response.clone();
        }

        let call = {
            let mut calls = self.poster_calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        if self.failing_poster_calls.contains(&call) {
            return Err(TransportError::Transport("poster fetch refused".to_owned()));
        }
        Ok(self.poster_bytes.clone())
    }
}
