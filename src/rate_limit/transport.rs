use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::error::ShapeShiftError;
use crate::rate_limit::RateLimitConfig;
use crate::transport::Transport;

/// Send times of the requests still inside the window, oldest first.
#[derive(Debug)]
struct Window {
    sent: VecDeque<Instant>,
    length: Duration,
    capacity: usize,
}

impl Window {
    fn new(length: Duration, max_requests: u32) -> Self {
        let capacity = (max_requests as usize).max(1);
        Self {
            sent: VecDeque::with_capacity(capacity),
            length,
            capacity,
        }
    }

    /// Record a request sent at `now`, or return how long to wait until the
    /// oldest one leaves the window.
    fn admit(&mut self, now: Instant) -> Result<(), Duration> {
        while self
            .sent
            .front()
            .is_some_and(|sent| now.duration_since(*sent) >= self.length)
        {
            self.sent.pop_front();
        }

        if self.sent.len() < self.capacity {
            self.sent.push_back(now);
            return Ok(());
        }
        let oldest = self.sent.front().copied().unwrap_or(now);
        Err(self.length.saturating_sub(now.duration_since(oldest)))
    }
}

/// A [`Transport`] decorator that waits for a sliding-window permit before
/// every request.
///
/// Clones share the same window.
#[derive(Debug, Clone)]
pub struct RateLimitedTransport<T> {
    inner: T,
    config: RateLimitConfig,
    window: Arc<Mutex<Window>>,
}

impl<T> RateLimitedTransport<T> {
    /// Wrap `inner` with the given limits.
    pub fn new(inner: T, config: RateLimitConfig) -> Self {
        let window = Window::new(config.window, config.max_requests);
        Self {
            inner,
            config,
            window: Arc::new(Mutex::new(window)),
        }
    }

    /// Get a reference to the inner transport.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Get the current configuration.
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Enable or disable rate limiting.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    async fn wait(&self) {
        if !self.config.enabled {
            return;
        }

        loop {
            let admitted = self.window.lock().await.admit(Instant::now());
            match admitted {
                Ok(()) => return,
                Err(delay) => {
                    tracing::trace!(?delay, "request window full, waiting");
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

impl<T: Transport> Transport for RateLimitedTransport<T> {
    async fn get(&self, path: &str) -> Result<String, ShapeShiftError> {
        self.wait().await;
        self.inner.get(path).await
    }

    async fn post_json(&self, path: &str, body: &str) -> Result<String, ShapeShiftError> {
        self.wait().await;
        self.inner.post_json(path, body).await
    }
}
