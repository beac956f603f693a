//! HTTP request helpers
//!
//! One place for the send / log / classify-status / read-body sequence and
//! the retry loop around it. Callers build the `RequestBuilder` themselves.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ClientError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Upper bound for a server-provided `Retry-After`.
const MAX_RETRY_AFTER_SECS: u64 = 30;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text of a 2xx answer.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `client_name` - client name, used as log prefix and in errors
    /// * `method_name` - request method, for logging
    /// * `url` - request URL, for logging
    ///
    /// # Errors
    /// * `Timeout` / `NetworkError` - the request could not be completed
    /// * `RateLimited` - HTTP 429
    /// * `NetworkError` - HTTP 502/503/504 (retryable)
    /// * `Unauthorized` - HTTP 401/403
    /// * `HttpStatus` - any other non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        client_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<String, ClientError> {
        log::debug!("[{client_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    client: client_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    client: client_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{client_name}] Response Status: {status_code}");

        // Read before the body consumes the response
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                client: client_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{client_name}] Response Body: {}", truncate_for_log(&body));

        match status_code {
            200..=299 => Ok(body),
            429 => {
                log::warn!("[{client_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
                Err(ClientError::RateLimited {
                    client: client_name.to_string(),
                    retry_after,
                    raw_message: Some(truncate_for_log(&body)),
                })
            }
            502..=504 => {
                log::warn!("[{client_name}] Server error (HTTP {status_code})");
                Err(ClientError::NetworkError {
                    client: client_name.to_string(),
                    detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
                })
            }
            401 | 403 => Err(ClientError::Unauthorized {
                client: client_name.to_string(),
                status: status_code,
            }),
            _ => Err(ClientError::HttpStatus {
                client: client_name.to_string(),
                status: status_code,
                body: truncate_for_log(&body),
            }),
        }
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str, client_name: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{client_name}] JSON parse failed: {e}");
            log::error!(
                "[{client_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ClientError::ParseError {
                client: client_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// [`execute_request`](Self::execute_request) with retries.
    ///
    /// Only retryable errors ([`ClientError::is_retryable`]) are retried, with
    /// exponential backoff (100ms, 200ms, 400ms, ... capped at 10s) or the
    /// server's `Retry-After` when rate limited.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        client_name: &str,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<String, ClientError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, client_name, method_name, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{client_name}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, client_name, method_name, url)
                    .await;
            };

            match Self::execute_request(req, client_name, method_name, url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        client_name,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ClientError::NetworkError {
            client: client_name.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Delay before the next attempt.
fn retry_delay(error: &ClientError, attempt: u32) -> Duration {
    if let ClientError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS))
    } else {
        backoff_delay(attempt)
    }
}

/// Exponential backoff: 100ms · 2^attempt, at most 10 seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(u32::MAX), Duration::from_millis(10_000));
    }

    #[test]
    fn retry_after_is_honoured_and_capped() {
        let e = ClientError::RateLimited {
            client: "test".into(),
            retry_after: Some(3),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(3));

        let e = ClientError::RateLimited {
            client: "test".into(),
            retry_after: Some(600),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(MAX_RETRY_AFTER_SECS));
    }

    #[test]
    fn network_error_uses_backoff() {
        let e = ClientError::NetworkError {
            client: "test".into(),
            detail: "reset".into(),
        };
        assert_eq!(retry_delay(&e, 2), Duration::from_millis(400));
    }

    #[test]
    fn parse_json_valid() {
        let result: Result<Vec<i32>, ClientError> = HttpUtils::parse_json("[1,2,3]", "test");
        assert!(matches!(result.as_deref(), Ok([1, 2, 3])), "{result:?}");
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<Vec<i32>, ClientError> = HttpUtils::parse_json("<html>", "test");
        assert!(
            matches!(&result, Err(ClientError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
