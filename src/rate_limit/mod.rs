//! Client-side request pacing.
//!
//! Aggregate operations send one request per trading pair, which quickly adds
//! up to thousands of calls. Wrapping a transport in [`RateLimitedTransport`]
//! spaces those calls out with a sliding window so the exchange does not
//! start rejecting them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use shapeshift_api_client::ShapeShiftClient;
//! use shapeshift_api_client::rate_limit::{RateLimitConfig, RateLimitedTransport};
//! use shapeshift_api_client::transport::HttpTransport;
//!
//! let transport = RateLimitedTransport::new(
//!     HttpTransport::new(),
//!     RateLimitConfig {
//!         window: Duration::from_secs(1),
//!         max_requests: 2,
//!         enabled: true,
//!     },
//! );
//! let client = ShapeShiftClient::with_transport(transport);
//! ```

mod transport;

use std::time::Duration;

pub use transport::RateLimitedTransport;

/// Rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Length of the sliding window.
    pub window: Duration,
    /// Maximum requests allowed within one window.
    pub max_requests: u32,
    /// Whether to enable rate limiting.
    pub enabled: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(1),
            max_requests: 2,
            enabled: true,
        }
    }
}
