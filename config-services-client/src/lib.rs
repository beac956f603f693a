//! # config-services-client
//!
//! Client library for the Configuration Services admin API.
//!
//! ## Clients
//!
//! | Client | Use |
//! |--------|-----|
//! | [`HttpAdminClient`] | JSON over HTTP against a running admin service |
//! | [`InMemoryAdminClient`] | fixed record set, for demos and tests |
//!
//! Both implement [`AdminClient`], so callers hold an `Arc<dyn AdminClient>`
//! and never care which one they got.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use config_services_client::{AdminClient, HttpAdminClient, HttpClientOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut options = HttpClientOptions::new("https://config.example.com");
//!     options.api_token = Some("secret".to_string());
//!
//!     let client: Arc<dyn AdminClient> = Arc::new(HttpAdminClient::new(options)?);
//!     for record in client.get_configs().await? {
//!         println!("{} {}", record.config_key, record.display_value("configName"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ClientError>`](ClientError).
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried
//! with exponential backoff before they reach the caller.

mod clients;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use clients::{DEFAULT_CONFIGS_PATH, HttpAdminClient, HttpClientOptions, InMemoryAdminClient};
pub use error::{ClientError, Result};
pub use traits::AdminClient;
pub use types::{CONFIG_KEY_FIELD, ConfigKey, ConfigRecord};
