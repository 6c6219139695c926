//! End-to-end pipeline tests: filter → sort → presentation helpers.

use emitab::clipboard::rows_as_tsv;
use emitab::data::{ColumnKey, DATASET};
use emitab::filter::{apply, FilterCriteria};
use emitab::locale::{Locale, TextDirection};
use emitab::sort::{sort_rows, SortDirection, SortState};
use emitab::ui::{badge_label, field_display};

#[test]
fn filtered_and_sorted_rows_export_as_tsv() {
    let criteria = FilterCriteria::from_inputs("vereinigte", "", "", "");
    let state = SortState {
        key: Some(ColumnKey::Emissions),
        direction: SortDirection::Descending,
    };
    let rows = sort_rows(apply(DATASET, &criteria), &state);

    let companies: Vec<&str> = rows.iter().map(|r| r.company).collect();
    assert_eq!(companies, ["New Horizon Logistics", "United Energy"]);

    let tsv = rows_as_tsv(&rows);
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Land\tUnternehmen\tSektor\tEmissionen (Mt)\tJahr");
    assert_eq!(
        lines[1],
        "Vereinigte Staaten\tNew Horizon Logistics\tTransport\t345.2\t2024"
    );
    assert_eq!(
        lines[2],
        "Vereinigtes Königreich\tUnited Energy\tEnergie\t250.0\t2023"
    );
}

#[test]
fn badge_counts_rows_in_german() {
    assert_eq!(badge_label(22), "22 Einträge");
    assert_eq!(badge_label(0), "0 Einträge");
}

#[test]
fn emissions_cells_show_one_decimal() {
    let maple_oil = DATASET.iter().find(|r| r.company == "MapleOil").unwrap();
    assert_eq!(maple_oil.cell(ColumnKey::Emissions), "390.0");
    assert_eq!(maple_oil.cell(ColumnKey::Year), "2023");
    assert_eq!(maple_oil.cell(ColumnKey::Country), "Kanada");
}

#[test]
fn field_display_keeps_the_tail_visible() {
    assert_eq!(field_display("abcdef", 3), "def");
    assert_eq!(field_display("ab", 3), "ab");
    assert_eq!(field_display("abc", 0), "");
}

#[test]
fn locale_tags_map_to_direction() {
    assert_eq!(Locale::from_tag("de_DE").tag, "de-DE");
    assert_eq!(
        Locale::from_tag("de-DE").direction,
        TextDirection::LeftToRight
    );

    for tag in ["ar", "ar-EG", "he", "fa-IR", "ur"] {
        assert!(Locale::from_tag(tag).is_rtl(), "{tag} should be RTL");
    }
    for tag in ["de", "en-US", "ja"] {
        assert!(!Locale::from_tag(tag).is_rtl(), "{tag} should be LTR");
    }
}

#[test]
fn whole_pipeline_is_a_pure_function_of_its_inputs() {
    let criteria = FilterCriteria::from_inputs("", "e", "100", "500");
    let state = SortState {
        key: Some(ColumnKey::Company),
        direction: SortDirection::Ascending,
    };

    let first = sort_rows(apply(DATASET, &criteria), &state);
    let second = sort_rows(apply(DATASET, &criteria), &state);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}
