//! Default [`Transport`] built on reqwest with middleware.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::error::ShapeShiftError;
use crate::transport::Transport;
use crate::transport::endpoints::SHAPESHIFT_BASE_URL;

/// HTTP transport for the ShapeShift API.
///
/// Requests are traced through `reqwest-tracing`. Transient failures are not
/// retried unless [`HttpTransportBuilder::max_retries`] is set.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use shapeshift_api_client::transport::HttpTransport;
///
/// let transport = HttpTransport::builder()
///     .timeout(Duration::from_secs(10))
///     .max_retries(2)
///     .build();
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    http_client: ClientWithMiddleware,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new transport builder.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ShapeShiftError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Read the response body, failing on non-success status codes.
    async fn read_body(response: reqwest::Response) -> Result<String, ShapeShiftError> {
        let status = response.status();
        let body = response.text().await.map_err(from_reqwest)?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "ShapeShift request failed");
            return Err(ShapeShiftError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<String, ShapeShiftError> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(from_middleware)?;
        Self::read_body(response).await
    }

    async fn post_json(&self, path: &str, body: &str) -> Result<String, ShapeShiftError> {
        let url = self.url(path)?;
        tracing::debug!(%url, "POST");
        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(from_middleware)?;
        Self::read_body(response).await
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn from_reqwest(err: reqwest::Error) -> ShapeShiftError {
    if err.is_timeout() {
        ShapeShiftError::Timeout
    } else {
        ShapeShiftError::Http(err)
    }
}

fn from_middleware(err: reqwest_middleware::Error) -> ShapeShiftError {
    match err {
        reqwest_middleware::Error::Reqwest(err) => from_reqwest(err),
        // The retry layer wraps the last attempt's error.
        reqwest_middleware::Error::Middleware(ref inner) if inner.chain().any(is_timeout) => {
            ShapeShiftError::Timeout
        }
        other => ShapeShiftError::HttpMiddleware(other),
    }
}

fn is_timeout(cause: &(dyn std::error::Error + 'static)) -> bool {
    match cause.downcast_ref::<reqwest_middleware::Error>() {
        Some(reqwest_middleware::Error::Reqwest(err)) => err.is_timeout(),
        _ => cause
            .downcast_ref::<reqwest::Error>()
            .is_some_and(reqwest::Error::is_timeout),
    }
}

/// Builder for [`HttpTransport`].
pub struct HttpTransportBuilder {
    base_url: String,
    user_agent: Option<String>,
    max_retries: u32,
    timeout: Option<Duration>,
}

impl HttpTransportBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: SHAPESHIFT_BASE_URL.to_string(),
            user_agent: None,
            max_retries: 0,
            timeout: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of retries for transient failures (default: 0).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set a timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the transport.
    pub fn build(self) -> HttpTransport {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("shapeshift-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("shapeshift-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let mut client = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
            client = client.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }
        let client = client.build();

        HttpTransport {
            http_client: client,
            base_url: self.base_url,
        }
    }
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
