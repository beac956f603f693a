//! Shared helpers for the HTTP client tests

#![allow(dead_code)]

use std::time::Duration;

use config_services_client::{HttpAdminClient, HttpClientOptions};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Endpoint path used by every test server.
pub const CONFIGS_PATH: &str = "/api/admin/configs";

/// Assert that a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Client pointed at `server`, with short timeouts and `max_retries` retries.
pub fn client_for(server: &MockServer, max_retries: u32, token: Option<&str>) -> HttpAdminClient {
    let mut options = HttpClientOptions::new(server.uri());
    options.configs_path = CONFIGS_PATH.to_string();
    options.api_token = token.map(ToString::to_string);
    options.request_timeout = Duration::from_millis(500);
    options.max_retries = max_retries;
    match HttpAdminClient::new(options) {
        Ok(client) => client,
        Err(e) => panic!("failed to build client: {e}"),
    }
}

/// Three records in the shape the admin service returns.
pub fn sample_body() -> Value {
    json!([
        { "configKey": 11, "configName": "MaxRetryCount", "configValue": "3" },
        { "configKey": 12, "configName": "RequestTimeoutSeconds", "configValue": "30" },
        { "configKey": 13, "configName": "SupportEmail", "configValue": null }
    ])
}
