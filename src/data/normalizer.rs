//! Cell normalization: abbreviated GDP strings to plain integers.
//!
//! Source cells mix plain integers with thousand-abbreviated strings such as
//! `"2.9k"`. Every year cell is turned into an `i64`; anything that does not
//! fit the grammar aborts the load so a partially normalized table never
//! exists.
//!
//! ## Grammar
//!
//! - an integer cell passes through unchanged
//! - a finite float cell is truncated toward zero
//! - a string containing `k`:
//!   - with a decimal point: `I * 1000 + first_fraction_digit * 100`
//!     (`"2.95k"` is 2900, later fraction digits are dropped but must still
//!     be digits)
//!   - without one: `int(stripped) * 1000`
//!   - exactly `"k"`: 1000
//! - any other string must be a base-10 integer

use crate::constants::THOUSANDS_SUFFIX;
use crate::data::csv_parser::parse_csv_file;
use crate::data::error::{DataError, DataResult};
use crate::types::{CanonicalTable, CountryRow, RawCell, RawTable};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Why a single cell could not be normalized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    #[error("cell is empty")]
    Empty,
    #[error("not an integer")]
    NotAnInteger,
    #[error("float is not finite")]
    NotFinite,
    #[error("missing digit after the decimal point")]
    MissingFraction,
    #[error("fraction must contain only digits")]
    InvalidFraction,
    #[error("value does not fit in 64 bits")]
    Overflow,
}

/// Normalize one cell according to the abbreviation grammar
pub fn normalize_cell(cell: &RawCell) -> Result<i64, CellError> {
    match cell {
        RawCell::Int(n) => Ok(*n),
        RawCell::Float(f) => {
            if !f.is_finite() {
                return Err(CellError::NotFinite);
            }
            if f.abs() >= i64::MAX as f64 {
                return Err(CellError::Overflow);
            }
            Ok(f.trunc() as i64)
        }
        RawCell::Text(s) => normalize_str(s),
        RawCell::Empty => Err(CellError::Empty),
    }
}

/// Normalize a textual cell
pub fn normalize_str(value: &str) -> Result<i64, CellError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CellError::Empty);
    }
    if !value.contains(THOUSANDS_SUFFIX) {
        return parse_int(value);
    }

    let stripped = value.replace(THOUSANDS_SUFFIX, "");
    if let Some((whole, fraction)) = stripped.split_once('.') {
        let whole = parse_int(whole)?;
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(CellError::InvalidFraction);
        }
        let digit = fraction
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or(CellError::MissingFraction)?;
        return whole
            .checked_mul(1000)
            .and_then(|n| n.checked_add(i64::from(digit) * 100))
            .ok_or(CellError::Overflow);
    }

    if !stripped.is_empty() {
        return parse_int(&stripped)?
            .checked_mul(1000)
            .ok_or(CellError::Overflow);
    }

    // Only a bare marker means one thousand; "kk" is not a number
    if value.chars().count() == 1 {
        Ok(1000)
    } else {
        Err(CellError::NotAnInteger)
    }
}

fn parse_int(s: &str) -> Result<i64, CellError> {
    s.parse::<i64>().map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
            CellError::Overflow
        }
        _ => CellError::NotAnInteger,
    })
}

/// Normalize a whole raw table into the canonical table.
///
/// Year headers must be integers forming a contiguous ascending run. The
/// country column is copied as-is.
pub fn normalize(raw: &RawTable) -> DataResult<CanonicalTable> {
    let years = parse_year_headers(&raw.headers)?;
    let first_year = years[0];

    let mut seen = HashSet::with_capacity(raw.rows.len());
    let mut rows = Vec::with_capacity(raw.rows.len());

    for (i, raw_row) in raw.rows.iter().enumerate() {
        let row_number = i + 1;
        if raw_row.cells.len() != years.len() {
            return Err(DataError::RaggedRow {
                row: row_number,
                expected: years.len() + 1,
                found: raw_row.cells.len() + 1,
            });
        }
        if !seen.insert(raw_row.country.as_str()) {
            return Err(DataError::DuplicateCountry {
                country: raw_row.country.clone(),
            });
        }

        let values = raw_row
            .cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                normalize_cell(cell).map_err(|e| DataError::Format {
                    row: row_number,
                    country: raw_row.country.clone(),
                    column: raw.headers[col + 1].clone(),
                    value: cell.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<DataResult<Vec<i64>>>()?;

        rows.push(CountryRow {
            country: raw_row.country.clone(),
            values,
        });
    }

    let table = CanonicalTable::from_rows(first_year, years.len(), rows)
        .ok_or_else(|| DataError::Other("table shape changed during normalization".to_string()))?;

    tracing::info!(
        countries = table.len(),
        first_year = table.min_year(),
        last_year = table.max_year(),
        "Normalized GDP table"
    );
    Ok(table)
}

/// Read and normalize a data file in one step
pub fn load_table(path: &Path, delimiter: Option<char>) -> DataResult<CanonicalTable> {
    let raw = parse_csv_file(path, delimiter)?;
    normalize(&raw)
}

fn parse_year_headers(headers: &[String]) -> DataResult<Vec<i32>> {
    if headers.len() < 2 {
        return Err(DataError::NoColumns);
    }

    let mut years: Vec<i32> = Vec::with_capacity(headers.len() - 1);
    for (column, header) in headers.iter().enumerate().skip(1) {
        let year: i32 = header
            .trim()
            .parse()
            .map_err(|_| DataError::InvalidYearHeader {
                column,
                header: header.clone(),
            })?;
        if let Some(&prev) = years.last() {
            // Nothing can follow i32::MAX
            let expected = prev
                .checked_add(1)
                .ok_or_else(|| DataError::InvalidYearHeader {
                    column,
                    header: header.clone(),
                })?;
            if year != expected {
                return Err(DataError::NonContiguousYears {
                    expected,
                    found: year,
                });
            }
        }
        years.push(year);
    }
    Ok(years)
}
