//! User interface rendering.

mod formatters;
mod table;
mod theme;

pub use formatters::{badge_label, field_display};
pub use theme::ThemeColors;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::form::Field;

/// Draw the UI.
///
/// The visible rows are recomputed here on every frame, so whatever key
/// event preceded the draw is already reflected in the table.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let rows = app.visible_rows();
    app.clamp_cursor(rows.len());

    // Main layout: filter form, table, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_form(f, app, chunks[0], &colors);
    table::draw_table(f, app, &rows, chunks[1], &colors);
    draw_status(f, app, rows.len(), chunks[2], &colors);
    draw_keymap(f, app, chunks[3], &colors);
}

fn draw_form(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let constraints: Vec<Constraint> = Field::ALL
        .iter()
        .map(|_| Constraint::Ratio(1, Field::ALL.len() as u32))
        .collect();

    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (field, box_area) in Field::ALL.iter().zip(boxes.iter()) {
        let focused = app.form.focus() == Some(*field);

        let border_style = if focused {
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.border)
        };

        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(colors.bg));

        let inner_width = box_area.width.saturating_sub(2) as usize;
        let mut value = field_display(app.form.value(*field), inner_width.saturating_sub(1));
        if focused {
            value.push('█');
        }

        let paragraph = Paragraph::new(value)
            .block(block)
            .style(Style::default().fg(colors.text));

        f.render_widget(paragraph, *box_area);
    }
}

fn draw_status(f: &mut Frame<'_>, app: &App, row_count: usize, area: Rect, colors: &ThemeColors) {
    let badge = badge_label(row_count);
    let badge_width = badge.width() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(badge_width)])
        .split(area);

    let text = if let Some(field) = app.form.focus() {
        format!("Editing: {}", field.label())
    } else {
        app.status.clone()
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));
    f.render_widget(status, chunks[0]);

    let badge = Paragraph::new(format!(" {} ", badge)).style(
        Style::default()
            .fg(colors.badge_fg)
            .bg(colors.badge_bg)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(badge, chunks[1]);
}

fn draw_keymap(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let keymap_text = if app.form.is_editing() {
        "Tab:next field | Shift-Tab:prev | Enter/Esc:done | Type to filter"
    } else {
        "q:quit | j/k:nav | Tab or /:filter | 1-5:sort | r:reset | y:copy | T:theme | ?:help"
    };

    let footer = format!("{} · {} ", app.locale.tag, app.year);
    let footer_width = footer.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(footer_width)])
        .split(area);

    let keymap = Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));
    f.render_widget(keymap, chunks[0]);

    let footer = Paragraph::new(footer).style(Style::default().fg(colors.muted).bg(colors.bg));
    f.render_widget(footer, chunks[1]);
}
