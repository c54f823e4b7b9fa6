//! Wide-to-long reshaping (and back).
//!
//! `melt` turns one row per country into one record per (country, year).
//! Cells without a numeric value become `None` records and are reported as
//! [`CoercionWarning`]s instead of failing the batch.

use crate::types::{SelectedRow, SelectedTable, TidyRecord};
use serde::Serialize;

/// A cell that could not be read as a number during reshaping
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoercionWarning {
    pub country: String,
    pub year: i32,
}

impl std::fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no numeric value for {} in {}", self.country, self.year)
    }
}

/// Melt a selected table into tidy records, logging any missing values.
///
/// Records are grouped by country in row order, years ascending within each
/// country.
pub fn melt(selected: &SelectedTable) -> Vec<TidyRecord> {
    let (records, warnings) = melt_reporting(selected);
    for warning in &warnings {
        tracing::warn!(country = %warning.country, year = warning.year, "Missing value plotted as gap");
    }
    records
}

/// Melt and return the coercion warnings alongside the records
pub fn melt_reporting(selected: &SelectedTable) -> (Vec<TidyRecord>, Vec<CoercionWarning>) {
    let mut records = Vec::with_capacity(selected.cell_count());
    let mut warnings = Vec::new();

    for row in &selected.rows {
        for (i, &year) in selected.years.iter().enumerate() {
            let value = row.values.get(i).copied().flatten();
            if value.is_none() {
                warnings.push(CoercionWarning {
                    country: row.country.clone(),
                    year,
                });
            }
            records.push(TidyRecord::new(row.country.clone(), year, value));
        }
    }

    (records, warnings)
}

/// Pivot tidy records back into wide form.
///
/// Countries keep their first-appearance order and years are sorted
/// ascending. A (country, year) pair with no record becomes `None`.
pub fn widen(records: &[TidyRecord]) -> SelectedTable {
    let mut years: Vec<i32> = records.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();

    let mut rows: Vec<SelectedRow> = Vec::new();
    for record in records {
        let Ok(col) = years.binary_search(&record.year) else {
            continue;
        };
        let row = match rows.iter().position(|r| r.country == record.country) {
            Some(i) => &mut rows[i],
            None => {
                rows.push(SelectedRow {
                    country: record.country.clone(),
                    values: vec![None; years.len()],
                });
                let last = rows.len() - 1;
                &mut rows[last]
            }
        };
        row.values[col] = record.value;
    }

    SelectedTable { years, rows }
}
