//! Edit Config grid

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};
use unicode_width::UnicodeWidthStr;

use config_services_client::ConfigRecord;

use crate::i18n::t;
use crate::model::App;
use crate::model::action::{ButtonPair, RowAction, RowState, action_label};
use crate::model::columns::ColumnDef;
use crate::view::theme::{Styles, colors};

/// Lines below the grid: record count, debug line, cursor row key.
pub const FOOTER_HEIGHT: u16 = 3;

const CURSOR_SYMBOL: &str = "▶ ";

/// Terminal stand-in for the button's icon.
fn icon_glyph(action: RowAction) -> &'static str {
    match action.icon() {
        "pen" => "✎",
        "trash" => "✗",
        "save" => "✓",
        "times-circle" => "⊗",
        _ => "•",
    }
}

fn button_label(action: RowAction) -> String {
    format!("{} {}", icon_glyph(action), action.id())
}

fn button_cell(pair: ButtonPair) -> Cell<'static> {
    Cell::from(Line::from(vec![
        Span::styled(button_label(pair.left), Styles::button(pair.left)),
        Span::raw("  "),
        Span::styled(button_label(pair.right), Styles::button(pair.right)),
    ]))
}

/// Width of the Action column: wide enough for either button pair.
fn action_column_width() -> u16 {
    let pair_width = |left: RowAction, right: RowAction| {
        button_label(left).width() + 2 + button_label(right).width()
    };
    let widest = pair_width(RowAction::Edit, RowAction::Delete)
        .max(pair_width(RowAction::Save, RowAction::Cancel))
        .max(t().grid.action_header.width());
    u16::try_from(widest).unwrap_or(u16::MAX)
}

fn record_row(app: &App, record: &ConfigRecord, columns: &[ColumnDef]) -> Row<'static> {
    let key = record.config_key;
    let mut cells = Vec::with_capacity(columns.len() + 1);
    cells.push(button_cell(app.screen.buttons_for(key)));
    cells.extend(
        columns
            .iter()
            .map(|column| Cell::from(record.display_value(&column.accessor))),
    );

    let mut style = if app.screen.is_highlighted(key) {
        Styles::selected_row()
    } else {
        Style::default().fg(colors().fg)
    };
    if app.screen.row_state(key) == RowState::Editing {
        style = style.add_modifier(Modifier::ITALIC);
    }
    Row::new(cells).style(style)
}

/// Draw the grid into `area`.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let columns = app.columns();

    let header = Row::new(
        std::iter::once(Cell::from(texts.grid.action_header))
            .chain(columns.iter().map(|c| Cell::from(c.header.clone()))),
    )
    .style(Styles::table_header());

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(action_column_width()))
        .chain(columns.iter().map(|c| Constraint::Length(c.width)))
        .collect();

    let records = app.screen.records();
    if records.is_empty() {
        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);
        frame.render_widget(
            Table::new(Vec::<Row>::new(), widths)
                .header(header)
                .column_spacing(2),
            header_area,
        );
        frame.render_widget(
            Paragraph::new(texts.grid.no_records)
                .style(Styles::muted())
                .alignment(Alignment::Center),
            body_area,
        );
        return;
    }

    let rows: Vec<Row> = records
        .iter()
        .map(|record| record_row(app, record, &columns))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .row_highlight_style(Styles::cursor_row())
        .highlight_symbol(CURSOR_SYMBOL);

    let mut state = TableState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Record count, debug line and the cursor row's key.
pub fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let screen = &app.screen;

    let mut lines = vec![
        Line::from(format!(
            " {}: {}",
            texts.grid.record_count,
            screen.record_count()
        )),
        Line::styled(
            format!(
                " {}: {} - {}: {}",
                texts.grid.debug_action,
                action_label(screen.pending_action()),
                texts.grid.debug_selected,
                screen.selected_key_display()
            ),
            Styles::muted(),
        ),
    ];

    if let Some(key) = app.cursor_key() {
        lines.push(Line::styled(
            format!(" {}: {key}", texts.grid.tooltip_key),
            Styles::muted(),
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_a_glyph() {
        for action in [
            RowAction::Edit,
            RowAction::Delete,
            RowAction::Save,
            RowAction::Cancel,
        ] {
            assert_ne!(icon_glyph(action), "•", "{}", action.icon());
        }
    }

    #[test]
    fn action_column_fits_both_pairs() {
        let width = usize::from(action_column_width());
        assert!(width >= "✓ Save  ⊗ Cancel".width());
        assert!(width >= "✎ Edit  ✗ Delete".width());
    }
}
