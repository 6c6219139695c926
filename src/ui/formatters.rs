//! Shared formatting utilities for UI components.

use unicode_width::UnicodeWidthChar;

/// Localized row-count badge text.
pub fn badge_label(count: usize) -> String {
    format!("{} Einträge", count)
}

/// Fit an input value into a field of the given display width, keeping the
/// tail so the typing position stays visible.
pub fn field_display(value: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut tail: Vec<char> = Vec::new();

    for c in value.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        tail.push(c);
    }

    tail.iter().rev().collect()
}
