//! English (en-US)

use super::keys::{
    CommonTexts, GridTexts, HelpTexts, HintActions, HintTexts, KeyNames, ModalTexts, StatusTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Configuration Services Admin",
        loading: "Loading...",
        error: "Error",
    },

    grid: GridTexts {
        title: "Edit Config",
        action_header: "Action",
        no_records: "No Record Found",
        record_count: "Record count",
        tooltip_key: "Config Key",
        debug_action: "Debug Action",
        debug_selected: "You selected configKey",
    },

    status: StatusTexts {
        refreshing: "Refreshing...",
        loaded: "Loaded records:",
        fetch_failed: "Failed to load configs:",
        delete_unavailable: "Delete is not available yet",
        save_local_only: "Saved locally; nothing was sent to the server",
        edit_cancelled: "Edit cancelled",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            up_down: "↑↓",
            delete: "Del",
            alt_r: "Alt+r",
            alt_h: "Alt+h",
            alt_q: "Alt+q",
        },
        actions: HintActions {
            select: "Select",
            back: "Back",
            refresh: "Refresh",
            help: "Help",
            quit: "Quit",
        },
    },

    modal: ModalTexts {
        close_hint: "Press Esc to close",
        fetch_error_title: "Cannot load configs",
    },

    help: HelpTexts {
        title: "Help",
        navigation: "Navigation",
        row_actions: "Row actions",
        global: "Global",
        move_cursor: "Move cursor",
        first_last: "First / last row",
        left_button: "Left button (Edit / Save)",
        right_button: "Right button (Delete / Cancel)",
        clear_selection: "Close overlay / clear selection",
        refresh: "Reload configs",
        show_help: "Show this help",
        quit: "Quit",
    },
};
