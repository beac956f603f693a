//! In-memory admin client
//!
//! Backs demo mode and tests; serves a fixed record set with optional
//! artificial latency or a forced failure.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ClientError, Result};
use crate::traits::AdminClient;
use crate::types::ConfigRecord;

const CLIENT_NAME: &str = "memory";

/// Admin client serving records from memory.
#[derive(Default)]
pub struct InMemoryAdminClient {
    records: RwLock<Vec<ConfigRecord>>,
    latency: Option<Duration>,
    failure: RwLock<Option<String>>,
}

impl InMemoryAdminClient {
    pub fn new(records: Vec<ConfigRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            latency: None,
            failure: RwLock::new(None),
        }
    }

    /// Client preloaded with a handful of plausible config entries.
    pub fn with_sample_data() -> Self {
        Self::new(sample_records())
    }

    /// Delay every fetch by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make subsequent fetches fail with a network error (`None` to recover).
    pub async fn set_failure(&self, detail: Option<String>) {
        *self.failure.write().await = detail;
    }

    /// Replace the served record set.
    pub async fn set_records(&self, records: Vec<ConfigRecord>) {
        *self.records.write().await = records;
    }
}

#[async_trait]
impl AdminClient for InMemoryAdminClient {
    fn id(&self) -> &'static str {
        CLIENT_NAME
    }

    async fn get_configs(&self) -> Result<Vec<ConfigRecord>> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if let Some(detail) = self.failure.read().await.clone() {
            log::warn!("[{CLIENT_NAME}] Simulated failure: {detail}");
            return Err(ClientError::NetworkError {
                client: CLIENT_NAME.to_string(),
                detail,
            });
        }
        let records = self.records.read().await.clone();
        log::debug!("[{CLIENT_NAME}] Serving {} config records", records.len());
        Ok(records)
    }
}

fn sample_records() -> Vec<ConfigRecord> {
    [
        (101, "Tiger.Api", "MaxRetryCount", "3", true),
        (102, "Tiger.Api", "RequestTimeoutSeconds", "30", true),
        (103, "Tiger.Batch", "NightlyRunCron", "0 2 * * *", true),
        (104, "Tiger.Batch", "ArchiveFolder", "\\\\fs01\\archive", false),
        (105, "Tiger.Web", "FeatureFlag.NewDashboard", "false", true),
        (106, "Tiger.Web", "SupportEmail", "support@example.com", true),
    ]
    .into_iter()
    .map(|(key, app, name, value, active)| {
        ConfigRecord::new(key)
            .with_field("applicationName", app)
            .with_field("configName", name)
            .with_field("configValue", value)
            .with_field("isActive", active)
    })
    .collect()
}
