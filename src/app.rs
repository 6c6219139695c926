//! Application state and logic.

use chrono::Datelike;

use crate::clipboard;
use crate::data::{ColumnKey, Record, DATASET};
use crate::filter::{self, FilterCriteria};
use crate::form::FormState;
use crate::locale::Locale;
use crate::sort::{self, SortState};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Filter form state.
    pub form: FormState,
    /// Active sort column and direction.
    pub sort: SortState,
    /// Highlighted row in the visible set.
    pub selected: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Locale detected once at startup.
    pub locale: Locale,
    /// Calendar year captured at startup, shown in the footer.
    pub year: i32,
}

impl App {
    /// Create a new application instance.
    pub fn new(theme: Theme) -> Self {
        let locale = Locale::detect();
        tracing::debug!(tag = %locale.tag, "locale detected");

        Self {
            form: FormState::new(),
            sort: SortState::new(),
            selected: 0,
            status: "Ready".to_string(),
            theme,
            locale,
            year: chrono::Local::now().year(),
        }
    }

    /// The rows to render: always exactly
    /// `sort(filter(DATASET, criteria), sort_state)`, recomputed in full.
    pub fn visible_rows(&self) -> Vec<&'static Record> {
        let criteria = FilterCriteria::from_form(&self.form);
        sort::sort_rows(filter::apply(DATASET, &criteria), &self.sort)
    }

    /// Toggle sorting on a column and report the result.
    pub fn toggle_sort(&mut self, key: ColumnKey) {
        self.sort.toggle(key);
        tracing::debug!(
            key = key.name(),
            direction = self.sort.direction.name(),
            "sort toggled"
        );
        self.status = format!("Sorted by {} ({})", key.title(), self.sort.direction.name());
    }

    /// Clear all filter fields. The sort state persists.
    pub fn reset_filters(&mut self) {
        self.form.reset();
        self.status = "Filters cleared".to_string();
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the visible rows to the clipboard as TSV.
    pub fn copy_visible(&mut self) {
        let rows = self.visible_rows();
        match clipboard::copy_rows(&rows) {
            Ok(_) => self.status = format!("Copied {} rows!", rows.len()),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Move the row highlight up.
    pub fn cursor_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the row highlight down.
    pub fn cursor_down(&mut self) {
        let len = self.visible_rows().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Jump the row highlight to the first row.
    pub fn cursor_first(&mut self) {
        self.selected = 0;
    }

    /// Jump the row highlight to the last row.
    pub fn cursor_last(&mut self) {
        self.selected = self.visible_rows().len().saturating_sub(1);
    }

    /// Clamp the highlight into the visible set after filtering shrinks it.
    pub fn clamp_cursor(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.selected = 0;
        } else if self.selected >= visible_len {
            self.selected = visible_len - 1;
        }
    }
}
