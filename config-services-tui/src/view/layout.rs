//! Main layout

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{Styles, colors};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draw the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(3),    // grid
            Constraint::Length(pages::edit_config::FOOTER_HEIGHT),
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_title_bar(app, frame, main_layout[0]);
    render_grid_block(app, frame, main_layout[1]);
    pages::edit_config::render_footer(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // Overlays last so they sit on top
    components::modal::render(app, frame);
}

/// App name, page title and the loading indicator.
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut spans = vec![
        Span::raw(format!(" {} ", texts.common.app_name)),
        Span::raw("│ "),
        Span::raw(texts.grid.title),
    ];

    let loading = app.screen.is_loading();
    if loading || app.fetch.in_flight() {
        let glyph = SPINNER[(app.tick % SPINNER.len() as u64) as usize];
        let text = if loading {
            format!("{glyph} {}", texts.common.loading)
        } else {
            glyph.to_string()
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(text, Style::default().fg(c.warning)));
    }

    if app.fetch.last_error().is_some() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("✖ {}", texts.common.error),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::title()), area);
}

fn render_grid_block(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", t().grid.title))
        .title_style(Styles::table_header())
        .borders(Borders::ALL)
        .border_style(Styles::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);
    pages::edit_config::render(app, frame, inner);
}
