//!
//! src/model/mod.rs
//! Model layer: application state
//!
//! The single source of truth for what is on screen. Plain data plus the
//! pure functions deriving row buttons and highlight from it; every change
//! goes through the update layer.
//!
//!     app.rs              App: screen state, cursor, fetch bookkeeping, status, overlay
//!     action.rs           RowAction and the button derivation (Edit/Delete vs Save/Cancel)
//!     columns.rs          Grid column definitions
//!     state/screen.rs     ScreenState and its transition function
//!     state/fetch.rs      Sequence numbers for the configs fetch
//!     state/modal.rs      Help / error overlays
//!
//! Data flow for one button press:
//!
//!     Enter on the cursor row
//!         ↓
//!     event/handler.rs → AppMessage::Grid(GridMessage::Press(ButtonSlot::Left))
//!         ↓
//!     update/grid.rs resolves the slot to Edit or Save for that row and calls
//!     ScreenState::transition(action, row_key)
//!         ↓
//!     view/pages/edit_config.rs re-derives every row's buttons and highlight
//!

pub mod action;
mod app;
pub mod columns;
pub mod state;

pub use app::App;
pub use state::{FetchState, Modal, ModalState, ScreenState};
