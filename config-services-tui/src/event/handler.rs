//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, GridMessage};
use crate::model::App;
use crate::model::action::ButtonSlot;

/// Wait up to `timeout` for a terminal event.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // ratatui redraws at the new size on the next frame
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Release/Repeat would double every press on Windows terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // Some terminals report '?' with SHIFT set
    if DefaultKeymap::HELP.matches(&key)
        || DefaultKeymap::HELP_ALT.matches(&key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    handle_grid_keys(key)
}

fn handle_grid_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::PRESS_LEFT.matches(&key) || DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Grid(GridMessage::Press(ButtonSlot::Left));
    }
    if DefaultKeymap::PRESS_RIGHT.matches(&key) || DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Grid(GridMessage::Press(ButtonSlot::Right));
    }

    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Grid(GridMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Grid(GridMessage::SelectNext),
        KeyCode::Home => AppMessage::Grid(GridMessage::SelectFirst),
        KeyCode::End => AppMessage::Grid(GridMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// Help and error overlays only respond to the close keys.
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => AppMessage::GoBack,
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn msg(code: KeyCode, modifiers: KeyModifiers, app: &App) -> AppMessage {
        handle_event(press(code, modifiers), app)
    }

    #[test]
    fn row_buttons() {
        let app = App::default();
        assert!(matches!(
            msg(KeyCode::Enter, KeyModifiers::NONE, &app),
            AppMessage::Grid(GridMessage::Press(ButtonSlot::Left))
        ));
        assert!(matches!(
            msg(KeyCode::Char('e'), KeyModifiers::ALT, &app),
            AppMessage::Grid(GridMessage::Press(ButtonSlot::Left))
        ));
        assert!(matches!(
            msg(KeyCode::Delete, KeyModifiers::NONE, &app),
            AppMessage::Grid(GridMessage::Press(ButtonSlot::Right))
        ));
        assert!(matches!(
            msg(KeyCode::Char('d'), KeyModifiers::ALT, &app),
            AppMessage::Grid(GridMessage::Press(ButtonSlot::Right))
        ));
    }

    #[test]
    fn cursor_keys() {
        let app = App::default();
        assert!(matches!(
            msg(KeyCode::Char('j'), KeyModifiers::NONE, &app),
            AppMessage::Grid(GridMessage::SelectNext)
        ));
        assert!(matches!(
            msg(KeyCode::Up, KeyModifiers::NONE, &app),
            AppMessage::Grid(GridMessage::SelectPrevious)
        ));
        assert!(matches!(
            msg(KeyCode::End, KeyModifiers::NONE, &app),
            AppMessage::Grid(GridMessage::SelectLast)
        ));
    }

    #[test]
    fn global_keys() {
        let app = App::default();
        for (code, modifiers) in [
            (KeyCode::Char('q'), KeyModifiers::NONE),
            (KeyCode::Char('q'), KeyModifiers::ALT),
            (KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert!(matches!(msg(code, modifiers, &app), AppMessage::Quit));
        }
        assert!(matches!(
            msg(KeyCode::Char('r'), KeyModifiers::ALT, &app),
            AppMessage::Refresh
        ));
        assert!(matches!(
            msg(KeyCode::Char('?'), KeyModifiers::NONE, &app),
            AppMessage::ShowHelp
        ));
        assert!(matches!(
            msg(KeyCode::Esc, KeyModifiers::NONE, &app),
            AppMessage::GoBack
        ));
    }

    #[test]
    fn overlay_captures_input() {
        let mut app = App::default();
        app.modal.show_help();
        assert!(matches!(
            msg(KeyCode::Char('q'), KeyModifiers::NONE, &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            msg(KeyCode::Enter, KeyModifiers::NONE, &app),
            AppMessage::GoBack
        ));
        assert!(matches!(
            msg(KeyCode::Char('c'), KeyModifiers::CONTROL, &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::default();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(
            handle_event(Event::Key(key), &app),
            AppMessage::Noop
        ));
    }
}
