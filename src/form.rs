//! Filter form state.
//!
//! Four text buffers plus a focus, fed one keystroke at a time by the
//! event loop. The numeric buffers are rewritten in place only when
//! sanitization actually changes them.

use crate::text::sanitize_numeric;

/// A filter form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Country query.
    Country,
    /// Company query.
    Company,
    /// Lower emissions bound.
    Min,
    /// Upper emissions bound.
    Max,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Country, Field::Company, Field::Min, Field::Max];

    /// Field label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Country => "Land",
            Field::Company => "Unternehmen",
            Field::Min => "Min (Mt)",
            Field::Max => "Max (Mt)",
        }
    }

    /// Whether this field only accepts numeric input.
    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Min | Field::Max)
    }

    fn index(self) -> usize {
        Field::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Filter form state.
#[derive(Debug)]
pub struct FormState {
    values: [String; 4],
    focus: Option<Field>,
}

impl FormState {
    /// Create an empty, unfocused form.
    pub fn new() -> Self {
        Self {
            values: Default::default(),
            focus: None,
        }
    }

    /// Current value of a field.
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// The focused field, if the form is being edited.
    pub fn focus(&self) -> Option<Field> {
        self.focus
    }

    /// Check if the form is being edited.
    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    /// Start editing at the first field.
    pub fn start_editing(&mut self) {
        self.focus = Some(Field::Country);
    }

    /// Stop editing. Field values stay applied.
    pub fn blur(&mut self) {
        self.focus = None;
    }

    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        if let Some(field) = self.focus {
            let next = (field.index() + 1) % Field::ALL.len();
            self.focus = Some(Field::ALL[next]);
        }
    }

    /// Move focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        if let Some(field) = self.focus {
            let prev = (field.index() + Field::ALL.len() - 1) % Field::ALL.len();
            self.focus = Some(Field::ALL[prev]);
        }
    }

    /// Add a character to the focused field.
    ///
    /// Numeric fields are sanitized after the keystroke; the buffer is only
    /// replaced when the cleaned value differs, so untouched input keeps
    /// its identity.
    pub fn input(&mut self, c: char) {
        let Some(field) = self.focus else {
            return;
        };
        let buffer = &mut self.values[field.index()];
        buffer.push(c);
        if field.is_numeric() {
            let cleaned = sanitize_numeric(buffer);
            if cleaned != *buffer {
                *buffer = cleaned;
            }
        }
    }

    /// Remove the last character from the focused field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.focus {
            self.values[field.index()].pop();
        }
    }

    /// Clear all field values.
    pub fn reset(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
