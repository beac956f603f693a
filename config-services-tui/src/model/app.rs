//! Application state

use config_services_client::{ConfigKey, ConfigRecord};

use super::columns::{ColumnDef, resolve_columns};
use super::{FetchState, ModalState, ScreenState};

/// Application state
pub struct App {
    /// Set by `Quit`; the main loop exits after the next render.
    pub should_quit: bool,

    /// Records, selection and pending action
    pub screen: ScreenState,

    /// Row index under the keyboard cursor (independent of the selection)
    pub cursor: usize,

    /// Columns from the config file; empty means derive from the records
    pub configured_columns: Vec<ColumnDef>,

    /// Configs fetch bookkeeping
    pub fetch: FetchState,

    /// Status bar message
    pub status_message: Option<String>,

    /// Overlay state
    pub modal: ModalState,

    /// Render ticks, drives the loading spinner
    pub tick: u64,
}

impl App {
    pub fn new(configured_columns: Vec<ColumnDef>) -> Self {
        Self {
            should_quit: false,
            screen: ScreenState::new(),
            cursor: 0,
            configured_columns,
            fetch: FetchState::new(),
            status_message: None,
            modal: ModalState::new(),
            tick: 0,
        }
    }

    /// Record under the cursor.
    pub fn cursor_record(&self) -> Option<&ConfigRecord> {
        self.screen.records().get(self.cursor)
    }

    /// Key of the record under the cursor.
    pub fn cursor_key(&self) -> Option<ConfigKey> {
        self.cursor_record().map(|r| r.config_key)
    }

    /// Columns to render for the current records.
    pub fn columns(&self) -> Vec<ColumnDef> {
        resolve_columns(&self.configured_columns, self.screen.records())
    }

    /// Store freshly fetched records, keeping the cursor in range.
    pub fn set_records(&mut self, records: Vec<ConfigRecord>) {
        self.screen.set_records(records);
        let count = self.screen.record_count();
        if self.cursor >= count {
            self.cursor = count.saturating_sub(1);
        }
    }

    pub fn cursor_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_next(&mut self) {
        if self.cursor + 1 < self.screen.record_count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.cursor = self.screen.record_count().saturating_sub(1);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(keys: &[i64]) -> App {
        let mut app = App::default();
        app.set_records(keys.iter().map(|&k| ConfigRecord::new(k)).collect());
        app
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app_with(&[1, 2, 3]);
        app.cursor_previous();
        assert_eq!(app.cursor, 0);
        app.cursor_last();
        assert_eq!(app.cursor, 2);
        app.cursor_next();
        assert_eq!(app.cursor, 2);
        assert_eq!(app.cursor_key(), Some(ConfigKey(3)));
    }

    #[test]
    fn shrinking_record_set_clamps_cursor() {
        let mut app = app_with(&[1, 2, 3]);
        app.cursor_last();
        app.set_records(vec![ConfigRecord::new(1)]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn empty_screen_has_no_cursor_record() {
        let app = App::default();
        assert!(app.cursor_record().is_none());
        assert_eq!(app.columns().len(), 1);
    }
}
