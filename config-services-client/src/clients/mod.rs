//! `AdminClient` implementations

mod http;
mod memory;

pub use http::{DEFAULT_CONFIGS_PATH, HttpAdminClient, HttpClientOptions};
pub use memory::InMemoryAdminClient;
