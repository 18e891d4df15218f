//! HTTP transport used by the client.
//!
//! The client only needs two operations: GET a path and POST a JSON body to a
//! path, each returning the response text. The [`Transport`] trait abstracts
//! them, enabling:
//! - Mock implementations for testing
//! - Decorators such as [`RateLimitedTransport`](crate::rate_limit::RateLimitedTransport)
//! - Alternative HTTP stacks
//!
//! [`HttpTransport`] is the default implementation.

pub mod endpoints;
mod http;

use std::future::Future;
use std::sync::Arc;

pub use http::{HttpTransport, HttpTransportBuilder};

use crate::error::ShapeShiftError;

/// Sends requests to the exchange and returns raw response text.
///
/// Implementations fail on network faults and non-success status codes. They
/// own retries and timeouts; the client never retries on its own.
pub trait Transport: Send + Sync {
    /// Send a GET request for `path` (relative to the transport's base URL).
    fn get(&self, path: &str) -> impl Future<Output = Result<String, ShapeShiftError>> + Send;

    /// Send a POST request for `path` with a JSON `body`.
    fn post_json(
        &self,
        path: &str,
        body: &str,
    ) -> impl Future<Output = Result<String, ShapeShiftError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn get(&self, path: &str) -> impl Future<Output = Result<String, ShapeShiftError>> + Send {
        (**self).get(path)
    }

    fn post_json(
        &self,
        path: &str,
        body: &str,
    ) -> impl Future<Output = Result<String, ShapeShiftError>> + Send {
        (**self).post_json(path, body)
    }
}
