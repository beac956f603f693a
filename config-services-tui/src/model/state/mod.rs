//! Screen data state

mod fetch;
mod modal;
mod screen;

pub use fetch::FetchState;
pub use modal::{Modal, ModalState};
pub use screen::ScreenState;
