//! HTTP admin client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::AdminClient;
use crate::types::ConfigRecord;
use crate::utils::log_sanitizer::mask_secret;

const CLIENT_NAME: &str = "http";

/// Default path of the "all configs" endpoint.
pub const DEFAULT_CONFIGS_PATH: &str = "/api/admin/configs";
/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default number of retries for transient failures
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Settings for [`HttpAdminClient`].
#[derive(Debug, Clone)]
pub struct HttpClientOptions {
    /// Scheme and authority of the admin service, e.g. `https://config.example.com`.
    pub base_url: String,
    /// Path of the endpoint returning every config record.
    pub configs_path: String,
    /// Bearer token sent as `Authorization` header.
    pub api_token: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_retries: u32,
}

impl HttpClientOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            configs_path: DEFAULT_CONFIGS_PATH.to_string(),
            api_token: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Admin client talking JSON over HTTP.
pub struct HttpAdminClient {
    client: Client,
    configs_url: String,
    api_token: Option<String>,
    max_retries: u32,
}

impl HttpAdminClient {
    /// Build a client from `options`.
    ///
    /// Fails with [`ClientError::InvalidConfig`] when the base URL is not an
    /// absolute http(s) URL or the underlying client cannot be created.
    pub fn new(options: HttpClientOptions) -> Result<Self> {
        let configs_url = join_url(&options.base_url, &options.configs_path)?;

        let client = Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.request_timeout)
            .build()
            .map_err(|e| ClientError::InvalidConfig {
                client: CLIENT_NAME.to_string(),
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        log::info!(
            "[{CLIENT_NAME}] Admin client for {configs_url} (token: {})",
            options
                .api_token
                .as_deref()
                .map_or_else(|| "none".to_string(), mask_secret)
        );

        Ok(Self {
            client,
            configs_url,
            api_token: options.api_token,
            max_retries: options.max_retries,
        })
    }

    /// Full URL of the configs endpoint.
    pub fn configs_url(&self) -> &str {
        &self.configs_url
    }
}

#[async_trait]
impl AdminClient for HttpAdminClient {
    fn id(&self) -> &'static str {
        CLIENT_NAME
    }

    async fn get_configs(&self) -> Result<Vec<ConfigRecord>> {
        let mut request = self
            .client
            .get(&self.configs_url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let body = HttpUtils::execute_request_with_retry(
            request,
            CLIENT_NAME,
            "GET",
            &self.configs_url,
            self.max_retries,
        )
        .await?;

        let records: Vec<ConfigRecord> = HttpUtils::parse_json(&body, CLIENT_NAME)?;
        log::info!("[{CLIENT_NAME}] Fetched {} config records", records.len());
        Ok(records)
    }
}

/// Join base URL and endpoint path with exactly one `/` between them.
fn join_url(base_url: &str, path: &str) -> Result<String> {
    let base = base_url.trim().trim_end_matches('/');
    let has_host = base
        .strip_prefix("https://")
        .or_else(|| base.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());
    if !has_host {
        return Err(ClientError::InvalidConfig {
            client: CLIENT_NAME.to_string(),
            detail: format!("base URL must be an absolute http(s) URL, got '{base_url}'"),
        });
    }
    let path = path.trim().trim_start_matches('/');
    Ok(format!("{base}/{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("https://cfg.local/", "/api/admin/configs").unwrap(),
            "https://cfg.local/api/admin/configs"
        );
        assert_eq!(
            join_url("http://cfg.local:8080", "api/configs").unwrap(),
            "http://cfg.local:8080/api/configs"
        );
    }

    #[test]
    fn join_url_rejects_relative_base() {
        let err = join_url("cfg.local", DEFAULT_CONFIGS_PATH).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig { .. }));
    }

    #[test]
    fn join_url_rejects_scheme_only() {
        assert!(join_url("https://", DEFAULT_CONFIGS_PATH).is_err());
    }

    #[test]
    fn new_client_exposes_url() {
        let client = HttpAdminClient::new(HttpClientOptions::new("https://cfg.local")).unwrap();
        assert_eq!(client.configs_url(), "https://cfg.local/api/admin/configs");
        assert_eq!(client.id(), "http");
    }
}
