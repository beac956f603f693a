//!
//! src/backend/mod.rs
//! Backend layer: everything that talks to the outside world
//!
//!     config_service.rs   AppConfig, loaded from and saved to a JSON file
//!     admin_service.rs    runs AdminClient calls on the tokio runtime
//!
//! The UI never awaits. `update` returns a `Command`, the main loop hands it
//! to `AdminService::execute`, which spawns the request and sends the result
//! back as an `AppMessage` over an unbounded channel:
//!
//!     update → Command::FetchConfigs { seq }
//!         ↓
//!     AdminService spawns client.get_configs()
//!         ↓
//!     tx.send(AppMessage::ConfigsLoaded { seq, result })
//!         ↓
//!     main loop drains rx before the next frame → update
//!

mod admin_service;
mod config_service;

pub use admin_service::AdminService;
pub use config_service::{AppConfig, ConfigService, JsonConfigService};
