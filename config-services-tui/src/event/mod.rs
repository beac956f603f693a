//!
//! src/event/mod.rs
//! Event layer: terminal input → `AppMessage`
//!
//!     handler.rs    poll_event / handle_event
//!     keymap.rs     KeyBinding and the default bindings
//!
//! `handle_key_event` checks, in order:
//!     - Ctrl+c, which always quits
//!     - an open overlay, which only reacts to Enter / Esc
//!     - global keys (quit, help, refresh, Esc)
//!     - grid keys: cursor movement and the two row buttons
//!
//! A poll that times out produces no event; the main loop turns that into
//! `AppMessage::Tick`.
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
