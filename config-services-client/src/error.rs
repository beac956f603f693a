use serde::Serialize;
use thiserror::Error;

/// Unified error type for all admin client operations.
///
/// Each variant includes a `client` field identifying which client produced the
/// error (`"http"`, `"memory"`, ...), plus variant-specific context.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): API rate limit exceeded
///
/// The built-in HTTP client automatically retries these with exponential backoff.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// The client could not be built from the given settings (bad base URL, etc.).
    #[error("[{client}] Invalid configuration: {detail}")]
    InvalidConfig {
        /// Client that produced the error.
        client: String,
        /// What is wrong with the settings.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    ///
    /// This is a transient error and is automatically retried.
    #[error("[{client}] Network error: {detail}")]
    NetworkError {
        /// Client that produced the error.
        client: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// This is a transient error and is automatically retried.
    #[error("[{client}] Request timeout: {detail}")]
    Timeout {
        /// Client that produced the error.
        client: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    #[error("[{client}] Rate limited{}", .retry_after.map(|s| format!(" (retry after {s}s)")).unwrap_or_default())]
    RateLimited {
        /// Client that produced the error.
        client: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The server rejected the credentials (HTTP 401/403).
    #[error("[{client}] Unauthorized (HTTP {status})")]
    Unauthorized {
        /// Client that produced the error.
        client: String,
        /// HTTP status code.
        status: u16,
    },

    /// The server answered with a non-success status not covered above.
    #[error("[{client}] Unexpected HTTP status {status}: {body}")]
    HttpStatus {
        /// Client that produced the error.
        client: String,
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// Failed to parse the API response.
    #[error("[{client}] Parse error: {detail}")]
    ParseError {
        /// Client that produced the error.
        client: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl ClientError {
    /// Whether the failure is transient and the request may be retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    /// Whether the failure is an expected condition (bad settings, rejected
    /// token) rather than a fault. Used to pick `warn` over `error` when logging.
    ///
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. } | Self::Unauthorized { .. } | Self::RateLimited { .. }
        )
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ClientError::NetworkError {
            client: "http".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[http] Network error: connection refused");
    }

    #[test]
    fn display_rate_limited_with_retry_after() {
        let e = ClientError::RateLimited {
            client: "http".to_string(),
            retry_after: Some(5),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[http] Rate limited (retry after 5s)");
    }

    #[test]
    fn display_rate_limited_without_retry_after() {
        let e = ClientError::RateLimited {
            client: "http".to_string(),
            retry_after: None,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[http] Rate limited");
    }

    #[test]
    fn display_http_status() {
        let e = ClientError::HttpStatus {
            client: "http".to_string(),
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(e.to_string(), "[http] Unexpected HTTP status 500: boom");
    }

    #[test]
    fn unauthorized_is_expected_not_retryable() {
        let e = ClientError::Unauthorized {
            client: "http".to_string(),
            status: 401,
        };
        assert!(e.is_expected());
        assert!(!e.is_retryable());
    }

    #[test]
    fn parse_error_is_unexpected() {
        let e = ClientError::ParseError {
            client: "http".to_string(),
            detail: "eof".to_string(),
        };
        assert!(!e.is_expected());
        assert!(!e.is_retryable());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ClientError::Timeout {
            client: "http".to_string(),
            detail: "30s".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "Timeout");
        assert_eq!(json["client"], "http");
    }
}
