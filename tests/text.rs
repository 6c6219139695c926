//! Tests for normalization, sanitization and collation.

use std::cmp::Ordering;

use emitab::text::{natural_cmp, normalize, sanitize_numeric, sanitize_text, tokenize};

#[test]
fn normalize_strips_case_and_diacritics() {
    assert_eq!(normalize("São Paulo"), "sao paulo");
    assert_eq!(normalize("Ägypten"), "agypten");
    assert_eq!(normalize("Türkei"), "turkei");
    assert_eq!(normalize("PLAIN"), "plain");
}

#[test]
fn normalize_is_idempotent() {
    let once = normalize("Vereinigtes Königreich");
    assert_eq!(normalize(&once), once);
}

#[test]
fn tokenize_splits_on_non_alphanumerics() {
    assert_eq!(tokenize("New Horizon Logistics"), ["new", "horizon", "logistics"]);
    assert_eq!(tokenize("a-b_c.d"), ["a", "b", "c", "d"]);
    assert_eq!(tokenize("Jahr 2023"), ["jahr", "2023"]);
}

#[test]
fn tokenize_never_splits_on_case_boundaries() {
    // Camel-case stays one token; only non-alphanumerics separate words.
    assert_eq!(tokenize("UrbanBuild"), ["urbanbuild"]);
    assert_eq!(tokenize("GazpromX"), ["gazpromx"]);
}

#[test]
fn tokenize_discards_empty_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" -- ").is_empty());
    assert_eq!(tokenize("  EcoCorp  "), ["ecocorp"]);
}

#[test]
fn sanitize_text_strips_injection_characters_and_trims() {
    assert_eq!(sanitize_text("  <Deu>tsch$land\\  "), "Deutschland");
    assert_eq!(sanitize_text("`rm -rf`"), "rm -rf");
    assert_eq!(sanitize_text("EcoCorp"), "EcoCorp");
}

#[test]
fn sanitize_numeric_keeps_digits_period_comma() {
    assert_eq!(sanitize_numeric("1a2b3"), "123");
    assert_eq!(sanitize_numeric("12,5"), "12,5");
    assert_eq!(sanitize_numeric("3.14 Mt"), "3.14");
    assert_eq!(sanitize_numeric("abc"), "");
}

#[test]
fn natural_cmp_orders_digit_runs_by_value() {
    assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
    assert_eq!(natural_cmp("item10", "item2"), Ordering::Greater);
    assert_eq!(natural_cmp("block2a", "block2b"), Ordering::Less);
}

#[test]
fn natural_cmp_ignores_case_and_accents() {
    assert_eq!(natural_cmp("Alpha", "alpha"), Ordering::Equal);
    assert_eq!(natural_cmp("Ärger", "arger"), Ordering::Equal);
    assert_eq!(natural_cmp("Ägypten", "Brasilien"), Ordering::Less);
}

#[test]
fn natural_cmp_treats_leading_zeros_as_equal_value() {
    assert_eq!(natural_cmp("v01", "v1"), Ordering::Equal);
    assert_eq!(natural_cmp("v010", "v2"), Ordering::Greater);
}

#[test]
fn natural_cmp_shorter_prefix_sorts_first() {
    assert_eq!(natural_cmp("USA", "USAX"), Ordering::Less);
    assert_eq!(natural_cmp("", "a"), Ordering::Less);
}
