//! Overlay dialogs

/// An open overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Key binding reference
    Help,
    /// Error details; closed with Esc or Enter
    Error { title: String, message: String },
}

/// Overlay state; at most one is open.
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
