//! Error types for the ShapeShift client library.

use std::num::ParseFloatError;

use thiserror::Error;

/// The main error type for all ShapeShift client operations.
///
/// Service-reported problems (the `error` field in a response body) are not
/// represented here by default: they are carried on the returned record. Use
/// [`ErrorEnvelope::into_result`] to turn them into [`ShapeShiftError::Api`].
#[derive(Error, Debug)]
pub enum ShapeShiftError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The server answered with a non-success status code
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code returned by the server
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// The response body is not well-formed JSON
    #[error("Malformed JSON document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// A numeric field could not be parsed
    #[error("Field `{field}` is not a number: {value:?}")]
    NumericDecode {
        /// Wire name of the field
        field: &'static str,
        /// Raw text that failed to parse
        value: String,
        /// Underlying parse failure
        #[source]
        source: ParseFloatError,
    },

    /// Arguments rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request body could not be encoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The service reported an error in the response body
    #[error("ShapeShift API error: {0}")]
    Api(String),

    /// An affiliate operation was called on a client without affiliate keys
    #[error("Affiliate keys required but not configured")]
    MissingAffiliateKeys,

    /// The operation was cancelled through its [`Cancellation`](crate::Cancellation) token
    #[error("Operation cancelled")]
    Cancelled,
}

impl ShapeShiftError {
    /// Check if this error came from the network or the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::HttpMiddleware(_) | Self::HttpStatus { .. } | Self::Url(_) | Self::Timeout
        )
    }

    /// Check if this error came from decoding a response body.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::MalformedDocument(_) | Self::NumericDecode { .. })
    }

    /// Build a [`ShapeShiftError::NumericDecode`] for a field.
    pub(crate) fn numeric(field: &'static str, value: &str, source: ParseFloatError) -> Self {
        Self::NumericDecode {
            field,
            value: value.to_string(),
            source,
        }
    }
}

/// Access to the optional `error` attribute every record carries.
///
/// The exchange may return `{"error": "..."}` instead of, or beside, the
/// success fields of any endpoint. Mapping still succeeds; callers inspect the
/// attribute afterwards.
pub trait ErrorEnvelope {
    /// The service-reported error message, if any.
    fn error(&self) -> Option<&str>;

    /// Check if the service reported an error.
    fn has_error(&self) -> bool {
        self.error().is_some()
    }

    /// Convert a record carrying a service error into [`ShapeShiftError::Api`].
    fn into_result(self) -> Result<Self, ShapeShiftError>
    where
        Self: Sized,
    {
        match self.error() {
            Some(message) => Err(ShapeShiftError::Api(message.to_string())),
            None => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Reply {
        error: Option<String>,
    }

    impl ErrorEnvelope for Reply {
        fn error(&self) -> Option<&str> {
            self.error.as_deref()
        }
    }

    #[test]
    fn test_into_result_passes_clean_record() {
        let reply = Reply::default();
        assert!(!reply.has_error());
        assert!(reply.into_result().is_ok());
    }

    #[test]
    fn test_into_result_raises_api_error() {
        let reply = Reply {
            error: Some("Invalid pair".to_string()),
        };
        match reply.into_result().unwrap_err() {
            ShapeShiftError::Api(message) => assert_eq!(message, "Invalid pair"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_numeric_error_display() {
        let source = "abc".parse::<f64>().unwrap_err();
        let error = ShapeShiftError::numeric("rate", "abc", source);
        assert_eq!(error.to_string(), "Field `rate` is not a number: \"abc\"");
        assert!(error.is_decode());
        assert!(!error.is_transport());
    }

    #[test]
    fn test_status_error_is_transport() {
        let error = ShapeShiftError::HttpStatus {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert!(error.is_transport());
        assert_eq!(error.to_string(), "HTTP 502: bad gateway");
    }
}
