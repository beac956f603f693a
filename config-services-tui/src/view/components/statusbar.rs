//! Bottom status bar

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::statusbar()),
        area,
    );
}

fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    if app.modal.is_open() {
        return vec![(keys.esc, actions.back)];
    }

    let mut hints = Vec::new();
    if app.screen.record_count() > 0 {
        hints.push((keys.up_down, actions.select));
        hints.push((keys.enter, left_button_label(app)));
        hints.push((keys.delete, right_button_label(app)));
    }
    if app.screen.selected_key().is_some() {
        hints.push((keys.esc, actions.back));
    }
    hints.push((keys.alt_r, actions.refresh));
    hints.push((keys.alt_h, actions.help));
    hints.push((keys.alt_q, actions.quit));
    hints
}

/// Label of whatever Enter would press on the cursor row.
fn left_button_label(app: &App) -> &'static str {
    app.cursor_key()
        .map_or("", |key| app.screen.buttons_for(key).left.id())
}

fn right_button_label(app: &App) -> &'static str {
    app.cursor_key()
        .map_or("", |key| app.screen.buttons_for(key).right.id())
}
