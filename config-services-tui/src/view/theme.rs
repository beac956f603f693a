//! Theme and styles

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::model::action::RowAction;

// 0 = Dark, 1 = Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// Colour scheme, chosen in the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// Colours of the active theme
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub highlight: Color,
    pub header_fg: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            highlight: Color::Rgb(0, 122, 204),
            header_fg: Color::White,
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            highlight: Color::Rgb(0, 102, 204),
            header_fg: Color::White,
            warning: Color::Rgb(176, 136, 0),
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// Selected row: lavender background, red text
pub const SELECTED_ROW_BG: Color = Color::Rgb(0xE6, 0xE6, 0xFA);
pub const SELECTED_ROW_FG: Color = Color::Rgb(0xF6, 0x2E, 0x18);

/// Common styles
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        let c = colors();
        Style::default()
            .bg(c.highlight)
            .fg(c.header_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn table_header() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Row whose key is the selected key.
    pub fn selected_row() -> Style {
        Style::default().bg(SELECTED_ROW_BG).fg(SELECTED_ROW_FG)
    }

    /// Row under the keyboard cursor. Modifier only, so the selected-row
    /// colours stay visible when the cursor sits on the selected row.
    pub fn cursor_row() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Icon of a row button, in the button's own colour.
    pub fn button(action: RowAction) -> Style {
        let (r, g, b) = action.color();
        Style::default().fg(Color::Rgb(r, g, b))
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
