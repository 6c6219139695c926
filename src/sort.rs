//! The sort engine: column ordering with a stable, locale-aware comparator.

use std::cmp::Ordering;

use crate::data::{ColumnKey, Record};
use crate::text::natural_cmp;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Get the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Get the direction name.
    pub fn name(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    /// Header indicator for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The active sort column and direction.
///
/// Persists across re-renders until changed; an explicit value threaded
/// through the sort call rather than hidden module state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Active sort column, or `None` for the unsorted filtered order.
    pub key: Option<ColumnKey>,
    /// Active direction; only meaningful while a key is set.
    pub direction: SortDirection,
}

impl SortState {
    /// Create an unsorted state.
    pub fn new() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }

    /// Apply the header toggle protocol: selecting the active column flips
    /// the direction, selecting a different column makes it the key with
    /// ascending direction.
    pub fn toggle(&mut self, key: ColumnKey) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Header indicator for a column: the direction marker on the active
    /// column, `None` everywhere else.
    pub fn indicator_for(&self, key: ColumnKey) -> Option<&'static str> {
        (self.key == Some(key)).then(|| self.direction.indicator())
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new()
    }
}

/// Order rows by the active sort state.
///
/// With no key set the rows pass through unchanged, preserving the
/// filtered order. The sort is stable, so ties keep their relative input
/// order.
pub fn sort_rows<'a>(mut rows: Vec<&'a Record>, state: &SortState) -> Vec<&'a Record> {
    let Some(key) = state.key else {
        return rows;
    };

    rows.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match state.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    rows
}

/// Compare two records on one column: numeric columns compare by value,
/// text columns with the natural collation.
fn compare(a: &Record, b: &Record, key: ColumnKey) -> Ordering {
    match (a.number(key), b.number(key)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => natural_cmp(&a.cell(key), &b.cell(key)),
    }
}
