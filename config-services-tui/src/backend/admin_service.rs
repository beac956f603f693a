//! Admin service
//!
//! Runs `AdminClient` calls on the tokio runtime and reports back to the
//! event loop as `AppMessage`s.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use config_services_client::AdminClient;

use crate::message::{AppMessage, Command};

pub struct AdminService {
    client: Arc<dyn AdminClient>,
    runtime: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl AdminService {
    pub fn new(
        client: Arc<dyn AdminClient>,
        runtime: Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            client,
            runtime,
            tx,
        }
    }

    /// Start the work a `Command` asks for; never blocks the caller.
    pub fn execute(&self, command: Command) {
        match command {
            Command::FetchConfigs { seq } => self.fetch_configs(seq),
        }
    }

    fn fetch_configs(&self, seq: u64) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        log::debug!("Fetch #{seq} via {} client", client.id());

        self.runtime.spawn(async move {
            let result = client.get_configs().await;
            if tx.send(AppMessage::ConfigsLoaded { seq, result }).is_err() {
                log::debug!("Event loop gone, dropping fetch #{seq}");
            }
        });
    }
}
