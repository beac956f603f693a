//! Grid update logic

use crate::i18n::t;
use crate::message::GridMessage;
use crate::model::App;
use crate::model::action::{ButtonSlot, RowAction};

pub fn update(app: &mut App, msg: GridMessage) {
    match msg {
        GridMessage::SelectPrevious => app.cursor_previous(),
        GridMessage::SelectNext => app.cursor_next(),
        GridMessage::SelectFirst => app.cursor_first(),
        GridMessage::SelectLast => app.cursor_last(),
        GridMessage::Press(slot) => press(app, slot),
    }
}

/// Press the `slot` button of the cursor row.
fn press(app: &mut App, slot: ButtonSlot) {
    let Some(key) = app.cursor_key() else {
        return;
    };

    let action = app.screen.buttons_for(key).get(slot);
    log::debug!("{} pressed on config {key}", action.button_name());

    app.screen = app.screen.transition(action, key);

    match action {
        RowAction::Edit => app.clear_status(),
        RowAction::Delete => app.set_status(t().status.delete_unavailable),
        RowAction::Save => app.set_status(t().status.save_local_only),
        RowAction::Cancel => app.set_status(t().status.edit_cancelled),
    }
}

#[cfg(test)]
mod tests {
    use config_services_client::{ConfigKey, ConfigRecord};

    use super::*;
    use crate::model::action::RowState;

    fn app_with(keys: &[i64]) -> App {
        let mut app = App::default();
        app.set_records(keys.iter().map(|&k| ConfigRecord::new(k)).collect());
        app
    }

    #[test]
    fn left_button_edits_cursor_row() {
        let mut app = app_with(&[10, 20]);
        update(&mut app, GridMessage::SelectNext);
        update(&mut app, GridMessage::Press(ButtonSlot::Left));
        assert_eq!(app.screen.selected_key(), Some(ConfigKey(20)));
        assert_eq!(app.screen.row_state(ConfigKey(20)), RowState::Editing);
    }

    #[test]
    fn second_left_press_saves() {
        let mut app = app_with(&[10]);
        update(&mut app, GridMessage::Press(ButtonSlot::Left));
        update(&mut app, GridMessage::Press(ButtonSlot::Left));
        assert_eq!(app.screen.pending_action(), Some(RowAction::Save));
        assert_eq!(app.screen.row_state(ConfigKey(10)), RowState::Idle);
    }

    #[test]
    fn right_press_on_editing_row_cancels() {
        let mut app = app_with(&[10]);
        update(&mut app, GridMessage::Press(ButtonSlot::Left));
        update(&mut app, GridMessage::Press(ButtonSlot::Right));
        assert_eq!(app.screen.pending_action(), Some(RowAction::Cancel));
        assert_eq!(
            app.status_message.as_deref(),
            Some(t().status.edit_cancelled)
        );
    }

    #[test]
    fn delete_is_a_stub() {
        let mut app = app_with(&[10, 20]);
        update(&mut app, GridMessage::Press(ButtonSlot::Right));
        assert_eq!(app.screen.pending_action(), Some(RowAction::Delete));
        assert_eq!(app.screen.record_count(), 2);
        assert_eq!(
            app.status_message.as_deref(),
            Some(t().status.delete_unavailable)
        );
    }

    #[test]
    fn press_without_records_does_nothing() {
        let mut app = App::default();
        update(&mut app, GridMessage::Press(ButtonSlot::Left));
        assert_eq!(app.screen.selected_key(), None);
        assert!(app.status_message.is_none());
    }
}
