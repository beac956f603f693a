//! Edit Config screen state
//!
//! `records` / `selected_key` / `pending_action`, plus the single transition
//! function every button press goes through.

use std::collections::HashSet;

use config_services_client::{ConfigKey, ConfigRecord};

use crate::model::action::{ButtonPair, RowAction, RowState, button_pair, row_state};

/// Screen state.
///
/// Invariant: `selected_key` is `None` or the key of exactly one record in
/// `records`. The fields are private so that only [`set_records`] and
/// [`transition`] can change them.
///
/// [`set_records`]: ScreenState::set_records
/// [`transition`]: ScreenState::transition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    records: Vec<ConfigRecord>,
    selected_key: Option<ConfigKey>,
    pending_action: Option<RowAction>,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ConfigRecord] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// The loading indicator is shown for as long as there are no records.
    pub fn is_loading(&self) -> bool {
        self.records.is_empty()
    }

    pub fn selected_key(&self) -> Option<ConfigKey> {
        self.selected_key
    }

    /// Selected key as shown to the user: `0` when nothing is selected.
    pub fn selected_key_display(&self) -> i64 {
        self.selected_key.map_or(0, ConfigKey::get)
    }

    pub fn pending_action(&self) -> Option<RowAction> {
        self.pending_action
    }

    pub fn contains_key(&self, key: ConfigKey) -> bool {
        self.records.iter().any(|r| r.config_key == key)
    }

    pub fn row_state(&self, key: ConfigKey) -> RowState {
        row_state(self.pending_action, self.selected_key, key)
    }

    pub fn buttons_for(&self, key: ConfigKey) -> ButtonPair {
        button_pair(self.pending_action, self.selected_key, key)
    }

    /// Whether the row with `key` gets the selection highlight.
    pub fn is_highlighted(&self, key: ConfigKey) -> bool {
        self.selected_key == Some(key)
    }

    /// Replace the record set.
    ///
    /// Records repeating an earlier `configKey` are dropped, so a key names at
    /// most one row. A selection whose key is gone is dropped together with
    /// its pending action; a selection that survives keeps both.
    pub fn set_records(&mut self, records: Vec<ConfigRecord>) {
        let mut seen = HashSet::with_capacity(records.len());
        let total = records.len();
        self.records = records
            .into_iter()
            .filter(|r| seen.insert(r.config_key))
            .collect();
        if self.records.len() < total {
            log::warn!(
                "Dropped {} config records with duplicate configKey",
                total - self.records.len()
            );
        }

        if let Some(key) = self.selected_key
            && !self.contains_key(key)
        {
            log::debug!("Selected config {key} no longer present, clearing selection");
            self.selected_key = None;
            self.pending_action = None;
        }
    }

    /// Next state after pressing the `action` button on the row with `row_key`.
    ///
    /// - `Edit`: the row becomes selected and Editing. Editing another row
    ///   moves the edit there.
    /// - `Delete`: the row becomes selected with `Delete` pending. Only offered
    ///   while the row is Idle; nothing is removed.
    /// - `Save` / `Cancel`: only valid on the Editing row. The action is
    ///   recorded as pending and the row returns to Idle; the row stays
    ///   selected.
    ///
    /// Unknown keys and buttons that the row does not currently offer leave
    /// the state unchanged.
    #[must_use]
    pub fn transition(&self, action: RowAction, row_key: ConfigKey) -> Self {
        if !self.contains_key(row_key) {
            log::warn!("Ignoring {} on unknown config {row_key}", action.id());
            return self.clone();
        }

        let offered = self.buttons_for(row_key);
        if offered.left != action && offered.right != action {
            log::debug!(
                "Ignoring {} on config {row_key}: row offers {}/{}",
                action.id(),
                offered.left.id(),
                offered.right.id()
            );
            return self.clone();
        }

        Self {
            records: self.records.clone(),
            selected_key: Some(row_key),
            pending_action: Some(action),
        }
    }

    /// Drop the selection and any pending action.
    pub fn clear_selection(&mut self) {
        self.selected_key = None;
        self.pending_action = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(keys: &[i64]) -> Vec<ConfigRecord> {
        keys.iter()
            .map(|&k| ConfigRecord::new(k).with_field("configName", format!("cfg-{k}")))
            .collect()
    }

    fn state() -> ScreenState {
        let mut s = ScreenState::new();
        s.set_records(records(&[10, 20, 30]));
        s
    }

    #[test]
    fn new_state_is_loading_with_nothing_selected() {
        let s = ScreenState::new();
        assert!(s.is_loading());
        assert_eq!(s.record_count(), 0);
        assert_eq!(s.selected_key(), None);
        assert_eq!(s.selected_key_display(), 0);
        assert_eq!(s.pending_action(), None);
    }

    #[test]
    fn populated_state_is_not_loading() {
        let s = state();
        assert!(!s.is_loading());
        assert_eq!(s.record_count(), 3);
    }

    #[test]
    fn edit_selects_row_and_enters_editing() {
        let s = state().transition(RowAction::Edit, ConfigKey(20));
        assert_eq!(s.selected_key(), Some(ConfigKey(20)));
        assert_eq!(s.pending_action(), Some(RowAction::Edit));
        assert_eq!(s.row_state(ConfigKey(20)), RowState::Editing);

        let pair = s.buttons_for(ConfigKey(20));
        assert_eq!((pair.left.id(), pair.right.id()), ("Save", "Cancel"));
    }

    #[test]
    fn rows_other_than_the_edited_one_stay_idle() {
        let s = state().transition(RowAction::Edit, ConfigKey(20));
        for key in [10, 30] {
            let pair = s.buttons_for(ConfigKey(key));
            assert_eq!((pair.left.id(), pair.right.id()), ("Edit", "Delete"));
        }
    }

    #[test]
    fn editing_another_row_moves_the_edit() {
        let s = state()
            .transition(RowAction::Edit, ConfigKey(10))
            .transition(RowAction::Edit, ConfigKey(30));
        assert_eq!(s.row_state(ConfigKey(10)), RowState::Idle);
        assert_eq!(s.row_state(ConfigKey(30)), RowState::Editing);
    }

    #[test]
    fn save_returns_row_to_idle() {
        let s = state()
            .transition(RowAction::Edit, ConfigKey(20))
            .transition(RowAction::Save, ConfigKey(20));
        assert_eq!(s.row_state(ConfigKey(20)), RowState::Idle);
        assert_eq!(s.pending_action(), Some(RowAction::Save));
        assert_eq!(s.selected_key(), Some(ConfigKey(20)));
        let pair = s.buttons_for(ConfigKey(20));
        assert_eq!((pair.left.id(), pair.right.id()), ("Edit", "Delete"));
    }

    #[test]
    fn cancel_returns_row_to_idle() {
        let s = state()
            .transition(RowAction::Edit, ConfigKey(20))
            .transition(RowAction::Cancel, ConfigKey(20));
        assert_eq!(s.row_state(ConfigKey(20)), RowState::Idle);
        assert_eq!(s.pending_action(), Some(RowAction::Cancel));
    }

    #[test]
    fn save_on_idle_row_is_ignored() {
        let before = state().transition(RowAction::Edit, ConfigKey(10));
        let after = before.transition(RowAction::Save, ConfigKey(20));
        assert_eq!(after, before);
    }

    #[test]
    fn delete_on_editing_row_is_ignored() {
        let before = state().transition(RowAction::Edit, ConfigKey(10));
        let after = before.transition(RowAction::Delete, ConfigKey(10));
        assert_eq!(after, before);
    }

    #[test]
    fn delete_selects_row_without_removing_it() {
        let s = state().transition(RowAction::Delete, ConfigKey(30));
        assert_eq!(s.selected_key(), Some(ConfigKey(30)));
        assert_eq!(s.pending_action(), Some(RowAction::Delete));
        assert_eq!(s.record_count(), 3);
        assert_eq!(s.row_state(ConfigKey(30)), RowState::Idle);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let before = state();
        let after = before.transition(RowAction::Edit, ConfigKey(99));
        assert_eq!(after, before);
        assert_eq!(after.selected_key(), None);
    }

    #[test]
    fn highlight_applies_to_exactly_the_selected_row() {
        let s = state();
        assert!(s.records().iter().all(|r| !s.is_highlighted(r.config_key)));

        let s = s.transition(RowAction::Edit, ConfigKey(10));
        let highlighted: Vec<_> = s
            .records()
            .iter()
            .filter(|r| s.is_highlighted(r.config_key))
            .map(|r| r.config_key)
            .collect();
        assert_eq!(highlighted, vec![ConfigKey(10)]);
    }

    #[test]
    fn refresh_keeps_surviving_selection() {
        let mut s = state().transition(RowAction::Edit, ConfigKey(20));
        s.set_records(records(&[20, 40]));
        assert_eq!(s.selected_key(), Some(ConfigKey(20)));
        assert_eq!(s.pending_action(), Some(RowAction::Edit));
    }

    #[test]
    fn refresh_drops_vanished_selection() {
        let mut s = state().transition(RowAction::Edit, ConfigKey(20));
        s.set_records(records(&[10, 30]));
        assert_eq!(s.selected_key(), None);
        assert_eq!(s.pending_action(), None);
    }

    #[test]
    fn duplicate_keys_keep_first_record() {
        let mut s = ScreenState::new();
        s.set_records(vec![
            ConfigRecord::new(1).with_field("configName", "first"),
            ConfigRecord::new(2),
            ConfigRecord::new(1).with_field("configName", "second"),
        ]);
        assert_eq!(s.record_count(), 2);
        assert_eq!(s.records()[0].display_value("configName"), "first");

        let s = s.transition(RowAction::Edit, ConfigKey(1));
        let editing = s
            .records()
            .iter()
            .filter(|r| s.row_state(r.config_key) == RowState::Editing)
            .count();
        assert_eq!(editing, 1);
    }

    #[test]
    fn clear_selection_resets_both_fields() {
        let mut s = state().transition(RowAction::Delete, ConfigKey(10));
        s.clear_selection();
        assert_eq!(s.selected_key_display(), 0);
        assert_eq!(s.pending_action(), None);
    }
}
