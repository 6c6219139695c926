//! The filter engine: word-start matching and numeric range predicates.

use crate::data::Record;
use crate::form::{Field, FormState};
use crate::text::{normalize, sanitize_numeric, sanitize_text, tokenize};

/// Filter criteria, derived fresh from form state on every recompute.
///
/// The text queries are already sanitized; the bounds are already parsed.
/// Malformed numeric input parses to NaN, which excludes every row; the
/// table empties rather than erroring.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Sanitized country query.
    pub country: String,
    /// Sanitized company query.
    pub company: String,
    /// Lower emissions bound, 0 when the field is empty.
    pub min: f64,
    /// Upper emissions bound, +∞ when the field is empty.
    pub max: f64,
}

impl FilterCriteria {
    /// Build criteria from raw input strings.
    pub fn from_inputs(country: &str, company: &str, min: &str, max: &str) -> Self {
        Self {
            country: sanitize_text(country),
            company: sanitize_text(company),
            min: parse_bound(min, 0.0),
            max: parse_bound(max, f64::INFINITY),
        }
    }

    /// Build criteria from the current form state.
    pub fn from_form(form: &FormState) -> Self {
        Self::from_inputs(
            form.value(Field::Country),
            form.value(Field::Company),
            form.value(Field::Min),
            form.value(Field::Max),
        )
    }
}

/// Parse a numeric bound: sanitize, default when empty, accept a decimal
/// comma. Leftover garbage yields NaN.
fn parse_bound(raw: &str, empty_default: f64) -> f64 {
    let cleaned = sanitize_numeric(raw);
    if cleaned.is_empty() {
        return empty_default;
    }
    cleaned.replace(',', ".").parse().unwrap_or(f64::NAN)
}

/// Word-start match: true when the query is empty, or when any word token
/// of the field starts with the normalized query.
///
/// The query itself is normalized but never tokenized: a query containing
/// a separator can only fail, since tokens contain none.
pub fn word_start_match(field_value: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = normalize(query);
    tokenize(field_value).iter().any(|tok| tok.starts_with(&q))
}

/// Apply the criteria to a set of rows.
///
/// A row survives when both text queries word-start match their fields and
/// its emissions fall inside the closed range. NaN bounds fail every
/// comparison, excluding all rows.
pub fn apply<'a>(rows: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    rows.iter()
        .filter(|r| {
            word_start_match(r.country, &criteria.country)
                && word_start_match(r.company, &criteria.company)
                && r.emissions >= criteria.min
                && r.emissions <= criteria.max
        })
        .collect()
}
