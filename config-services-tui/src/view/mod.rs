//!
//! src/view/mod.rs
//! View layer: draws `App`, never changes it
//!
//!     layout.rs                header / grid / footer / status bar split
//!     pages/edit_config.rs     the Edit Config grid and its footer lines
//!     components/statusbar.rs  key hints and the status message
//!     components/modal.rs      help and error overlays
//!     theme.rs                 dark / light colours and shared styles
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
