//!
//! src/util/mod.rs
//! Util layer: terminal setup and teardown
//!
//!     init_terminal()      raw mode + alternate screen
//!     restore_terminal()   undo both; call it even when the main loop failed
//!     Term                 Terminal<CrosstermBackend<Stdout>>
//!

mod terminal;

pub use terminal::{Term, init_terminal, install_panic_hook, restore_terminal};
