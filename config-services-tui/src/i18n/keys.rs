//! Translation keys
//!
//! One struct per UI area, so a missing translation is a compile error.
//!
//! - text shown in the grid page goes under `grid.*`
//! - overlay contents go under `modal.*` / `help.*`
//! - key names and action words for the status bar go under `hints.*`
//! - words reused in several places go under `common.*`

/// Root of all translated text
pub struct Translations {
    pub common: CommonTexts,
    pub grid: GridTexts,
    pub status: StatusTexts,
    pub hints: HintTexts,
    pub modal: ModalTexts,
    pub help: HelpTexts,
}

// ============================================================================
// Common
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
}

// ============================================================================
// Edit Config grid
// ============================================================================

pub struct GridTexts {
    pub title: &'static str,
    pub action_header: &'static str,
    pub no_records: &'static str,
    /// Prefix of "Record count: N"
    pub record_count: &'static str,
    /// Prefix of the row tooltip "Config Key: K"
    pub tooltip_key: &'static str,
    pub debug_action: &'static str,
    pub debug_selected: &'static str,
}

// ============================================================================
// Status bar messages
// ============================================================================

pub struct StatusTexts {
    pub refreshing: &'static str,
    /// Followed by the record count
    pub loaded: &'static str,
    /// Followed by the error text
    pub fetch_failed: &'static str,
    pub delete_unavailable: &'static str,
    pub save_local_only: &'static str,
    pub edit_cancelled: &'static str,
}

// ============================================================================
// Key hints
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: HintActions,
}

pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub up_down: &'static str,
    pub delete: &'static str,
    pub alt_r: &'static str,
    pub alt_h: &'static str,
    pub alt_q: &'static str,
}

pub struct HintActions {
    pub select: &'static str,
    pub back: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// Overlays
// ============================================================================

pub struct ModalTexts {
    pub close_hint: &'static str,
    pub fetch_error_title: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub navigation: &'static str,
    pub row_actions: &'static str,
    pub global: &'static str,
    pub move_cursor: &'static str,
    pub first_last: &'static str,
    pub left_button: &'static str,
    pub right_button: &'static str,
    pub clear_selection: &'static str,
    pub refresh: &'static str,
    pub show_help: &'static str,
    pub quit: &'static str,
}
