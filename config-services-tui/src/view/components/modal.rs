//! Overlay dialogs

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::{App, Modal};

pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn overlay_block(title: &str, border: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black))
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = overlay_block(title, Color::Red);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(t().modal.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    Line::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

fn render_help(frame: &mut Frame) {
    let help = &t().help;

    let lines = vec![
        section(help.navigation),
        help_line("↑↓ / jk", help.move_cursor),
        help_line("Home / End", help.first_last),
        Line::from(""),
        section(help.row_actions),
        help_line("Enter, Alt+e", help.left_button),
        help_line("Del, Alt+d", help.right_button),
        Line::from(""),
        section(help.global),
        help_line("Esc", help.clear_selection),
        help_line("Alt+r", help.refresh),
        help_line("Alt+h, ?", help.show_help),
        help_line("q, Alt+q", help.quit),
        Line::from(""),
        Line::styled(t().modal.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2;
    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);

    let block = overlay_block(help.title, Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}
