//! The ShapeShift REST client.
//!
//! [`ShapeShiftClient`] exposes one async method per exchange operation. Every
//! request goes through a [`Transport`], is raced against the client's
//! [`Cancellation`] token, and the response text is mapped onto a typed record
//! with the table-driven mapper.
//!
//! Operations are grouped by area:
//! - market data: coins, pairs, rates, limits and market info
//! - transactions: status lookups, history and address validation
//! - shifts: opening exchanges, quotes, cancellation and receipts

mod market;
mod shift;
mod transactions;

use std::time::Duration;

use serde::Serialize;

use crate::auth::AffiliateKeys;
use crate::cancel::Cancellation;
use crate::error::ShapeShiftError;
use crate::mapping::{ListRecord, Record, TokenStream, map_list, map_record};
use crate::transport::{HttpTransport, HttpTransportBuilder, Transport};

pub use transactions::RECENT_TX_MAX;

/// The ShapeShift REST API client.
///
/// # Example
///
/// ```rust,no_run
/// use shapeshift_api_client::ShapeShiftClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ShapeShiftClient::new();
///
///     let rate = client.get_rate_for("btc", "ltc").await?;
///     println!("1 BTC = {} LTC", rate.rate);
///
///     Ok(())
/// }
/// ```
///
/// Any [`Transport`] can be plugged in, for example to pace aggregate calls:
///
/// ```rust,no_run
/// use shapeshift_api_client::ShapeShiftClient;
/// use shapeshift_api_client::rate_limit::{RateLimitConfig, RateLimitedTransport};
/// use shapeshift_api_client::transport::HttpTransport;
///
/// let transport = RateLimitedTransport::new(HttpTransport::new(), RateLimitConfig::default());
/// let client = ShapeShiftClient::with_transport(transport);
/// ```
#[derive(Clone)]
pub struct ShapeShiftClient<T = HttpTransport> {
    transport: T,
    cancellation: Cancellation,
    affiliate: Option<AffiliateKeys>,
}

impl ShapeShiftClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> ShapeShiftClientBuilder {
        ShapeShiftClientBuilder::new()
    }
}

impl<T: Transport> ShapeShiftClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            cancellation: Cancellation::new(),
            affiliate: None,
        }
    }

    /// Replace the cancellation token observed by this client.
    pub fn with_cancellation(mut self, cancellation: Cancellation) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// Attach affiliate keys.
    pub fn with_affiliate(mut self, keys: AffiliateKeys) -> Self {
        self.affiliate = Some(keys);
        self
    }

    /// Get a reference to the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The token that cancels this client's operations.
    pub fn cancellation(&self) -> &Cancellation {
        &self.cancellation
    }

    /// The configured affiliate keys, if any.
    pub fn affiliate(&self) -> Option<&AffiliateKeys> {
        self.affiliate.as_ref()
    }

    fn require_affiliate(&self) -> Result<&AffiliateKeys, ShapeShiftError> {
        self.affiliate
            .as_ref()
            .ok_or(ShapeShiftError::MissingAffiliateKeys)
    }

    /// GET `path` and map the body onto a single record.
    pub(crate) async fn get_record<R: Record>(&self, path: &str) -> Result<R, ShapeShiftError> {
        let body = self.cancellation.guard(self.transport.get(path)).await?;
        map_record(&mut TokenStream::open(&body)?)
    }

    /// GET `path` and split the body into one record per element.
    pub(crate) async fn get_list<R: ListRecord>(
        &self,
        path: &str,
    ) -> Result<Vec<R>, ShapeShiftError> {
        let body = self.cancellation.guard(self.transport.get(path)).await?;
        map_list(&mut TokenStream::open(&body)?)
    }

    /// POST `body` as JSON to `path` and map the response onto a record.
    pub(crate) async fn post_record<R, B>(&self, path: &str, body: &B) -> Result<R, ShapeShiftError>
    where
        R: Record,
        B: Serialize + Sync + ?Sized,
    {
        let json = serde_json::to_string(body)
            .map_err(|err| ShapeShiftError::InvalidRequest(err.to_string()))?;
        let response = self
            .cancellation
            .guard(self.transport.post_json(path, &json))
            .await?;
        map_record(&mut TokenStream::open(&response)?)
    }
}

impl Default for ShapeShiftClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ShapeShiftClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeShiftClient")
            .field("transport", &self.transport)
            .field("cancelled", &self.cancellation.is_cancelled())
            .field("affiliate", &self.affiliate)
            .finish()
    }
}

/// Join `endpoint` and path segments into a request path.
///
/// Segments are user-supplied values (pairs, addresses, keys). They are not
/// percent-encoded, so anything that would change the path structure is
/// rejected up front.
pub(crate) fn endpoint_path(
    endpoint: &str,
    segments: &[(&str, &str)],
) -> Result<String, ShapeShiftError> {
    let mut path = endpoint.to_string();
    for (name, value) in segments {
        check_segment(name, value)?;
        path.push('/');
        path.push_str(value);
    }
    Ok(path)
}

fn check_segment(name: &str, value: &str) -> Result<(), ShapeShiftError> {
    let invalid = value.is_empty()
        || value
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace());
    if invalid {
        return Err(ShapeShiftError::Validation(format!(
            "{name} is not a valid path segment: {value:?}"
        )));
    }
    Ok(())
}

/// Builder for [`ShapeShiftClient`].
pub struct ShapeShiftClientBuilder {
    transport: HttpTransportBuilder,
    cancellation: Option<Cancellation>,
    affiliate: Option<AffiliateKeys>,
}

impl ShapeShiftClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            transport: HttpTransportBuilder::new(),
            cancellation: None,
            affiliate: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.transport = self.transport.base_url(url);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.transport = self.transport.user_agent(user_agent);
        self
    }

    /// Set the maximum number of retries for transient failures (default: 0).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.transport = self.transport.max_retries(retries);
        self
    }

    /// Set a timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.transport = self.transport.timeout(timeout);
        self
    }

    /// Share a cancellation token with the client.
    pub fn cancellation(mut self, cancellation: Cancellation) -> Self {
        self.cancellation = Some(cancellation);
        self
    }

    /// Set affiliate keys.
    pub fn affiliate(mut self, keys: AffiliateKeys) -> Self {
        self.affiliate = Some(keys);
        self
    }

    /// Build the client.
    pub fn build(self) -> ShapeShiftClient {
        ShapeShiftClient {
            transport: self.transport.build(),
            cancellation: self.cancellation.unwrap_or_default(),
            affiliate: self.affiliate,
        }
    }
}

impl Default for ShapeShiftClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Transport answering from canned bodies and recording every request.
    #[derive(Default)]
    pub(crate) struct CannedTransport {
        responses: HashMap<String, String>,
        pub(crate) requests: Mutex<Vec<(String, Option<String>)>>,
    }

    impl CannedTransport {
        pub(crate) fn respond(mut self, path: &str, body: &str) -> Self {
            self.responses.insert(path.to_string(), body.to_string());
            self
        }

        pub(crate) fn paths(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|(path, _)| path.clone())
                .collect()
        }

        fn answer(&self, path: &str, body: Option<&str>) -> Result<String, ShapeShiftError> {
            self.requests
                .lock()
                .unwrap()
                .push((path.to_string(), body.map(str::to_string)));
            self.responses
                .get(path)
                .cloned()
                .ok_or_else(|| ShapeShiftError::HttpStatus {
                    status: 404,
                    body: String::new(),
                })
        }
    }

    impl Transport for CannedTransport {
        async fn get(&self, path: &str) -> Result<String, ShapeShiftError> {
            self.answer(path, None)
        }

        async fn post_json(&self, path: &str, body: &str) -> Result<String, ShapeShiftError> {
            self.answer(path, Some(body))
        }
    }

    #[test]
    fn test_endpoint_path() {
        assert_eq!(
            endpoint_path("/txbyaddress", &[("address", "1abc"), ("api key", "k")]).unwrap(),
            "/txbyaddress/1abc/k"
        );
    }

    #[test]
    fn test_endpoint_path_rejects_bad_segments() {
        for bad in ["", "a/b", "a?b", "a#b", "a b", "%2F"] {
            let err = endpoint_path("/rate", &[("pair", bad)]).unwrap_err();
            assert!(matches!(err, ShapeShiftError::Validation(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_builder_applies_settings() {
        let token = Cancellation::new();
        let client = ShapeShiftClient::builder()
            .base_url("http://localhost:9999/")
            .cancellation(token.clone())
            .affiliate(AffiliateKeys::new("pub", "priv"))
            .build();

        assert_eq!(client.transport().base_url(), "http://localhost:9999");
        assert_eq!(client.affiliate().map(|k| k.public_key.as_str()), Some("pub"));
        token.cancel();
        assert!(client.cancellation().is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_client_sends_nothing() {
        let client = ShapeShiftClient::with_transport(
            CannedTransport::default().respond("/getcoins", "{}"),
        );
        client.cancellation().cancel();

        let result = client.get_all_coins().await;
        assert!(matches!(result, Err(ShapeShiftError::Cancelled)));
        assert!(client.transport().paths().is_empty());
    }

    #[tokio::test]
    async fn test_affiliate_operation_without_keys() {
        let client = ShapeShiftClient::with_transport(CannedTransport::default());
        let result = client.get_affiliate_transactions().await;
        assert!(matches!(result, Err(ShapeShiftError::MissingAffiliateKeys)));
    }
}
