//! Row/column slicing of the canonical table by user selection.

use crate::types::{CanonicalTable, CountrySelection, SelectedRow, SelectedTable, YearRange};

/// Restrict `table` to the selected countries and the inclusive year range.
///
/// Rows come out in selection order. Countries the table does not know are
/// skipped, and years outside the table bounds are clamped to the nearest
/// bound. The table itself is never modified.
pub fn select(
    table: &CanonicalTable,
    countries: &CountrySelection,
    years: YearRange,
) -> SelectedTable {
    let clamped = years.clamp(table.min_year(), table.max_year());
    if clamped != years {
        tracing::warn!(
            requested_start = years.start(),
            requested_end = years.end(),
            start = clamped.start(),
            end = clamped.end(),
            "Year range outside table bounds, clamped"
        );
    }

    // Offsets are positional: (year - min_year) into each row
    let first = clamped.start().abs_diff(table.min_year()) as usize;
    let last = clamped.end().abs_diff(table.min_year()) as usize;

    let rows: Vec<SelectedRow> = countries
        .iter()
        .filter_map(|country| {
            let Some(row) = table.row(country) else {
                tracing::trace!(country, "Ignoring unknown country");
                return None;
            };
            Some(SelectedRow {
                country: row.country.clone(),
                values: (first..=last).map(|i| row.values.get(i).copied()).collect(),
            })
        })
        .collect();

    SelectedTable {
        years: (clamped.start()..=clamped.end()).collect(),
        rows,
    }
}
