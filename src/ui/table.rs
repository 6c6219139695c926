//! The data table widget.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use super::ThemeColors;
use crate::app::App;
use crate::data::{ColumnKey, Record};

/// Draw the table of visible rows with sort indicators in the header.
///
/// The header stays in place when the filter leaves nothing to show; only
/// the body empties.
pub(super) fn draw_table(
    f: &mut Frame<'_>,
    app: &App,
    rows: &[&Record],
    area: Rect,
    colors: &ThemeColors,
) {
    let header_cells: Vec<Cell<'_>> = ColumnKey::ALL
        .iter()
        .map(|key| {
            let active = app.sort.key == Some(*key);
            let title = match app.sort.indicator_for(*key) {
                Some(indicator) => format!("{} {}", key.title(), indicator),
                None => key.title().to_string(),
            };

            let style = if active {
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.header)
            };

            Cell::from(Text::from(title).alignment(column_alignment(app, *key))).style(style)
        })
        .collect();

    let body_rows: Vec<Row<'_>> = rows
        .iter()
        .map(|record| {
            let cells: Vec<Cell<'_>> = ColumnKey::ALL
                .iter()
                .map(|key| {
                    Cell::from(
                        Text::from(record.cell(*key)).alignment(column_alignment(app, *key)),
                    )
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(28),
        Constraint::Percentage(20),
        Constraint::Percentage(16),
        Constraint::Percentage(12),
    ];

    let table = Table::new(body_rows, widths)
        .header(Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(
            Block::default()
                .title(" Emissionen nach Unternehmen ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .row_highlight_style(
            Style::default()
                .fg(colors.highlight_fg)
                .bg(colors.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

    let selected = if rows.is_empty() {
        None
    } else {
        Some(app.selected.min(rows.len() - 1))
    };
    let mut state = TableState::default();
    state.select(selected);
    f.render_stateful_widget(table, area, &mut state);
}

/// Column alignment, mirrored for right-to-left locales.
fn column_alignment(app: &App, key: ColumnKey) -> Alignment {
    match (app.locale.is_rtl(), key.is_numeric()) {
        (false, false) => Alignment::Left,
        (false, true) => Alignment::Right,
        (true, false) => Alignment::Right,
        (true, true) => Alignment::Left,
    }
}
