use async_trait::async_trait;

use crate::error::Result;
use crate::types::ConfigRecord;

/// Admin API client trait.
///
/// The grid screen holds an `Arc<dyn AdminClient>` handed to it at
/// construction; implementations must be shareable across tasks.
#[async_trait]
pub trait AdminClient: Send + Sync {
    /// Client identifier, used as the log prefix.
    fn id(&self) -> &'static str;

    /// Fetch every configuration record, in server order.
    async fn get_configs(&self) -> Result<Vec<ConfigRecord>>;
}
