//! Grid messages

use crate::model::action::ButtonSlot;

/// Grid message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMessage {
    // ========== Cursor ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    // ========== Row buttons ==========
    /// Press a button of the row under the cursor
    Press(ButtonSlot),
}
