//! Tests for the filter engine.

use emitab::data::{Record, DATASET};
use emitab::filter::{apply, word_start_match, FilterCriteria};

fn criteria(country: &str, company: &str, min: &str, max: &str) -> FilterCriteria {
    FilterCriteria::from_inputs(country, company, min, max)
}

#[test]
fn empty_query_matches_every_record_field() {
    for record in DATASET {
        assert!(word_start_match(record.country, ""));
        assert!(word_start_match(record.company, ""));
    }
}

#[test]
fn word_start_match_is_case_and_diacritic_insensitive() {
    assert!(word_start_match("São Paulo", "sao"));
    assert!(word_start_match("Ägypten", "AG"));
    assert!(word_start_match("Türkei", "tur"));
}

#[test]
fn word_start_match_matches_any_word_start() {
    assert!(word_start_match("New Horizon Logistics", "hor"));
    assert!(word_start_match("Vereinigtes Königreich", "konig"));
}

#[test]
fn word_start_match_is_prefix_only_never_substring() {
    // "UrbanBuild" is one token: there is no case-boundary tokenization.
    assert!(word_start_match("UrbanBuild", "urban"));
    assert!(!word_start_match("UrbanBuild", "build"));
    assert!(!word_start_match("EcoCorp", "corp"));
}

#[test]
fn query_is_never_tokenized() {
    // A separator inside the query cannot match: tokens contain none.
    assert!(!word_start_match("New Horizon Logistics", "new h"));
}

#[test]
fn default_criteria_keep_the_whole_dataset() {
    let rows = apply(DATASET, &criteria("", "", "", ""));
    assert_eq!(rows.len(), DATASET.len());
}

#[test]
fn bounds_default_to_zero_and_infinity() {
    let c = criteria("", "", "", "");
    assert_eq!(c.min, 0.0);
    assert_eq!(c.max, f64::INFINITY);
}

#[test]
fn text_queries_are_sanitized() {
    let c = criteria("  <Deu>tsch$land\\  ", "", "", "");
    assert_eq!(c.country, "Deutschland");
}

#[test]
fn country_and_range_combine() {
    let rows = apply(DATASET, &criteria("deutsch", "", "100", "300"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].company, "EcoCorp");
    assert_eq!(rows[0].emissions, 212.4);
}

#[test]
fn raising_min_excludes_the_row() {
    let rows = apply(DATASET, &criteria("deutsch", "", "300", ""));
    assert!(rows.is_empty());
}

#[test]
fn open_max_keeps_everything_above_min() {
    let rows = apply(DATASET, &criteria("vereinigte", "", "100", ""));
    let companies: Vec<&str> = rows.iter().map(|r| r.company).collect();
    assert_eq!(companies, ["United Energy", "New Horizon Logistics"]);
}

#[test]
fn decimal_comma_is_accepted() {
    let rows = apply(DATASET, &criteria("", "", "212,4", "212,4"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].company, "EcoCorp");
}

#[test]
fn malformed_bound_excludes_all_rows() {
    // Leftover garbage parses to NaN and NaN comparisons are false.
    assert!(apply(DATASET, &criteria("", "", "1.2.3", "")).is_empty());
    assert!(apply(DATASET, &criteria("", "", "", "1,2,3")).is_empty());
}

#[test]
fn filtering_is_idempotent() {
    let c = criteria("", "", "200", "400");
    let once: Vec<Record> = apply(DATASET, &c).into_iter().cloned().collect();
    let twice: Vec<Record> = apply(&once, &c).into_iter().cloned().collect();
    assert!(!once.is_empty());
    assert_eq!(once, twice);
}

#[test]
fn filtering_preserves_dataset_order() {
    let rows = apply(DATASET, &criteria("", "", "300", ""));
    let mut last_index = 0;
    for row in rows {
        let index = DATASET.iter().position(|r| r == row).unwrap();
        assert!(index >= last_index);
        last_index = index;
    }
}

#[test]
fn company_query_filters_independently() {
    let rows = apply(DATASET, &criteria("", "hydro", "", ""));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].country, "Norwegen");
}
