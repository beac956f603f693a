//! Row actions and the buttons that trigger them
//!
//! Every row shows two buttons in its "Action" column. Which two is a pure
//! function of `(pending_action, selected_key, row_key)`:
//!
//! | row state | left button | right button |
//! |-----------|-------------|--------------|
//! | Editing   | Save        | Cancel       |
//! | Idle      | Edit        | Delete       |
//!
//! A row is Editing iff the pending action is Edit and the row is the
//! selected one. Nothing about buttons is stored per row.

use config_services_client::ConfigKey;

/// Row-level operation, identified by the button that triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    Save,
    Cancel,
}

impl RowAction {
    /// Button id (`"Edit"`, `"Delete"`, `"Save"`, `"Cancel"`), also its title.
    pub fn id(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Save => "Save",
            Self::Cancel => "Cancel",
        }
    }

    /// Button name.
    pub fn button_name(self) -> &'static str {
        match self {
            Self::Edit => "btnEdit",
            Self::Delete => "btnDelete",
            Self::Save => "btnSave",
            Self::Cancel => "btnCancel",
        }
    }

    /// Icon name of the button.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Edit => "pen",
            Self::Delete => "trash",
            Self::Save => "save",
            Self::Cancel => "times-circle",
        }
    }

    /// Icon color as `(r, g, b)`.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Self::Edit => (0xDA, 0xA5, 0x20),   // gold
            Self::Delete => (0x69, 0x69, 0x69), // gray
            Self::Save => (0x00, 0x00, 0x99),   // dark blue
            Self::Cancel => (0xFF, 0x00, 0x00), // red
        }
    }
}

/// Label of an optional pending action; `""` when there is none.
pub fn action_label(action: Option<RowAction>) -> &'static str {
    action.map_or("", RowAction::id)
}

/// Derived per-row state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Idle,
    Editing,
}

/// Which side of the action column a button sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSlot {
    Left,
    Right,
}

/// The two buttons shown for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPair {
    pub left: RowAction,
    pub right: RowAction,
}

impl ButtonPair {
    pub fn get(self, slot: ButtonSlot) -> RowAction {
        match slot {
            ButtonSlot::Left => self.left,
            ButtonSlot::Right => self.right,
        }
    }
}

/// Row state for `row_key` under the given screen state.
pub fn row_state(
    pending_action: Option<RowAction>,
    selected_key: Option<ConfigKey>,
    row_key: ConfigKey,
) -> RowState {
    if pending_action == Some(RowAction::Edit) && selected_key == Some(row_key) {
        RowState::Editing
    } else {
        RowState::Idle
    }
}

/// Buttons shown for `row_key` under the given screen state.
pub fn button_pair(
    pending_action: Option<RowAction>,
    selected_key: Option<ConfigKey>,
    row_key: ConfigKey,
) -> ButtonPair {
    match row_state(pending_action, selected_key, row_key) {
        RowState::Editing => ButtonPair {
            left: RowAction::Save,
            right: RowAction::Cancel,
        },
        RowState::Idle => ButtonPair {
            left: RowAction::Edit,
            right: RowAction::Delete,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: ConfigKey = ConfigKey(7);
    const OTHER: ConfigKey = ConfigKey(8);

    #[test]
    fn editing_row_shows_save_and_cancel() {
        let pair = button_pair(Some(RowAction::Edit), Some(ROW), ROW);
        assert_eq!(pair.left.id(), "Save");
        assert_eq!(pair.right.id(), "Cancel");
        assert_eq!(pair.left.icon(), "save");
        assert_eq!(pair.right.icon(), "times-circle");
        assert_eq!(pair.left.button_name(), "btnSave");
        assert_eq!(pair.right.button_name(), "btnCancel");
    }

    #[test]
    fn other_row_in_edit_leaves_this_row_idle() {
        let pair = button_pair(Some(RowAction::Edit), Some(OTHER), ROW);
        assert_eq!(pair.left.id(), "Edit");
        assert_eq!(pair.right.id(), "Delete");
        assert_eq!(pair.left.icon(), "pen");
        assert_eq!(pair.right.icon(), "trash");
    }

    #[test]
    fn selected_row_with_non_edit_action_is_idle() {
        for action in [RowAction::Delete, RowAction::Save, RowAction::Cancel] {
            assert_eq!(row_state(Some(action), Some(ROW), ROW), RowState::Idle);
        }
        assert_eq!(row_state(None, Some(ROW), ROW), RowState::Idle);
    }

    #[test]
    fn nothing_selected_is_idle() {
        assert_eq!(row_state(Some(RowAction::Edit), None, ROW), RowState::Idle);
    }

    #[test]
    fn button_colors() {
        assert_eq!(RowAction::Edit.color(), (0xDA, 0xA5, 0x20));
        assert_eq!(RowAction::Delete.color(), (0x69, 0x69, 0x69));
        assert_eq!(RowAction::Save.color(), (0x00, 0x00, 0x99));
        assert_eq!(RowAction::Cancel.color(), (0xFF, 0x00, 0x00));
    }

    #[test]
    fn empty_label_without_action() {
        assert_eq!(action_label(None), "");
        assert_eq!(action_label(Some(RowAction::Delete)), "Delete");
    }

    #[test]
    fn pair_slots() {
        let pair = button_pair(None, None, ROW);
        assert_eq!(pair.get(ButtonSlot::Left), RowAction::Edit);
        assert_eq!(pair.get(ButtonSlot::Right), RowAction::Delete);
    }
}
