//!
//! src/message/mod.rs
//! Message layer
//!
//! The bridge between Event and Update. Key presses and finished background
//! work are both translated into an `AppMessage`; `update` is the only
//! consumer.
//!
//!     app.rs        AppMessage, the top-level enum
//!     grid.rs       GridMessage, cursor movement and row button presses
//!     command.rs    Command, side effects `update` hands back to the main loop
//!

mod app;
mod command;
mod grid;

pub use app::AppMessage;
pub use command::Command;
pub use grid::GridMessage;
