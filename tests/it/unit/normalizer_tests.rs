//! Tests for cell normalization and table normalization.

use crate::helpers::{ANDORRA_ZIMBABWE_CSV, andorra_zimbabwe};
use gdpboard::data::{CellError, DataError, normalize, normalize_cell, normalize_str, parse_csv_content};
use gdpboard::types::RawCell;

#[test]
fn test_abbreviation_grammar() {
    assert_eq!(normalize_str("2.90k"), Ok(2900));
    assert_eq!(normalize_str("5k"), Ok(5000));
    assert_eq!(normalize_str("k"), Ok(1000));
    assert_eq!(normalize_str("1234"), Ok(1234));
    // Only the first fraction digit counts
    assert_eq!(normalize_str("2.95k"), Ok(2900));
    assert_eq!(normalize_str("2.99k"), Ok(2900));
}

#[test]
fn test_suffix_is_case_sensitive() {
    assert_eq!(normalize_str("5K"), Err(CellError::NotAnInteger));
}

#[test]
fn test_integers_pass_through() {
    for n in [0, 1, 999, 123_456, -42] {
        assert_eq!(normalize_cell(&RawCell::Int(n)), Ok(n));
    }
}

#[test]
fn test_normalize_is_idempotent() {
    let raw = parse_csv_content(ANDORRA_ZIMBABWE_CSV, ',').unwrap();
    let once = normalize(&raw).unwrap();
    let twice = normalize(&once.to_raw(&raw.headers[0])).unwrap();

    assert_eq!(once, twice);
    assert_eq!(once, andorra_zimbabwe());
}

#[test]
fn test_one_bad_cell_fails_whole_load() {
    let raw = parse_csv_content("country,2000\nChad,1.2k\nPeru,lots\n", ',').unwrap();
    let err = normalize(&raw).unwrap_err();

    assert!(matches!(err, DataError::Format { row: 2, .. }));
    let message = err.to_string();
    assert!(message.contains("Peru"));
    assert!(message.contains("2000"));
    assert!(message.contains("lots"));
}

#[test]
fn test_fraction_with_trailing_junk_fails_load() {
    assert_eq!(normalize_str("2.9xk"), Err(CellError::InvalidFraction));
    assert_eq!(normalize_str("2.9.1k"), Err(CellError::InvalidFraction));

    let raw = parse_csv_content("country,2000\nChad,2.9.1k\n", ',').unwrap();
    assert!(matches!(normalize(&raw), Err(DataError::Format { row: 1, .. })));
}

#[test]
fn test_years_reaching_i32_max_load() {
    let raw = parse_csv_content("country,2147483646,2147483647\nChad,1,2.9k\n", ',').unwrap();
    let table = normalize(&raw).unwrap();

    assert_eq!(table.max_year(), i32::MAX);
    assert_eq!(table.full_range().len(), 2);
    assert_eq!(table.value("Chad", i32::MAX), Some(2900));
}

#[test]
fn test_year_after_i32_max_is_rejected() {
    let raw = parse_csv_content("country,2147483647,1\nChad,1,2\n", ',').unwrap();
    assert!(matches!(
        normalize(&raw),
        Err(DataError::InvalidYearHeader { column: 2, .. })
    ));
}
