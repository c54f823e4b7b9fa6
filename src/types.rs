//! Core types for the GDP dashboard pipeline.
//!
//! This module defines the tables that flow between the pipeline stages:
//! the raw table read from disk, the normalized canonical table, the
//! selected sub-table, and the tidy records fed to the chart.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::RangeInclusive;

// ============================================================================
// Raw Table Types
// ============================================================================

/// A single cell as read from the delimited file, typed on read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RawCell {
    Int(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl RawCell {
    /// Parse a trimmed field into the narrowest cell type that fits
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return RawCell::Empty;
        }
        if let Ok(n) = value.parse::<i64>() {
            return RawCell::Int(n);
        }
        match value.parse::<f64>() {
            Ok(f) => RawCell::Float(f),
            Err(_) => RawCell::Text(value.to_string()),
        }
    }
}

impl std::fmt::Display for RawCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawCell::Int(n) => write!(f, "{}", n),
            RawCell::Float(n) => write!(f, "{}", n),
            RawCell::Text(s) => f.write_str(s),
            RawCell::Empty => Ok(()),
        }
    }
}

/// The file as read: a header row plus one row per country.
///
/// The first column holds country names, the rest hold per-year cells.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub country: String,
    pub cells: Vec<RawCell>,
}

impl RawRow {
    pub fn new(country: impl Into<String>, cells: Vec<RawCell>) -> Self {
        Self {
            country: country.into(),
            cells,
        }
    }
}

// ============================================================================
// Canonical Table
// ============================================================================

/// One country's normalized values, one per table year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRow {
    pub country: String,
    pub values: Vec<i64>,
}

/// The fully normalized country x year matrix.
///
/// Built once at startup and shared read-only afterwards. Every row has a
/// value for every year, and years are contiguous and ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalTable {
    first_year: i32,
    last_year: i32,
    year_count: usize,
    rows: Vec<CountryRow>,
    index: HashMap<String, usize>,
}

impl CanonicalTable {
    /// Assemble a table from already-validated parts.
    ///
    /// Returns `None` if a row's length differs from `year_count`, a country
    /// repeats, there are no years, or the last year would not fit in `i32`.
    pub fn from_rows(first_year: i32, year_count: usize, rows: Vec<CountryRow>) -> Option<Self> {
        if year_count == 0 || rows.iter().any(|r| r.values.len() != year_count) {
            return None;
        }
        let last_year = i32::try_from(year_count - 1)
            .ok()
            .and_then(|span| first_year.checked_add(span))?;
        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if index.insert(row.country.clone(), i).is_some() {
                return None;
            }
        }
        Some(Self {
            first_year,
            last_year,
            year_count,
            rows,
            index,
        })
    }

    pub fn min_year(&self) -> i32 {
        self.first_year
    }

    pub fn max_year(&self) -> i32 {
        self.last_year
    }

    pub fn year_count(&self) -> usize {
        self.year_count
    }

    /// Years in ascending order
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    /// Country names in table order
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.country.as_str())
    }

    pub fn rows(&self) -> &[CountryRow] {
        &self.rows
    }

    pub fn row(&self, country: &str) -> Option<&CountryRow> {
        self.index.get(country).map(|&i| &self.rows[i])
    }

    pub fn contains(&self, country: &str) -> bool {
        self.index.contains_key(country)
    }

    /// Positional offset of a year within each row
    pub fn year_offset(&self, year: i32) -> Option<usize> {
        if year < self.min_year() || year > self.max_year() {
            return None;
        }
        Some(year.abs_diff(self.first_year) as usize)
    }

    pub fn value(&self, country: &str, year: i32) -> Option<i64> {
        let offset = self.year_offset(year)?;
        self.row(country).and_then(|r| r.values.get(offset).copied())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The full year span of the table
    pub fn full_range(&self) -> YearRange {
        YearRange::new(self.min_year(), self.max_year())
    }

    /// Re-widen into an all-integer raw table with the given country header.
    pub fn to_raw(&self, country_header: &str) -> RawTable {
        let mut headers = Vec::with_capacity(self.year_count + 1);
        headers.push(country_header.to_string());
        headers.extend(self.years().map(|y| y.to_string()));

        let rows = self
            .rows
            .iter()
            .map(|r| RawRow::new(r.country.clone(), r.values.iter().map(|&v| RawCell::Int(v)).collect()))
            .collect();

        RawTable { headers, rows }
    }
}

// ============================================================================
// Selection Types
// ============================================================================

/// Inclusive year range, always ordered so that `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Build a range from two endpoints in either order
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of years covered, endpoints included
    pub fn len(&self) -> usize {
        self.end.abs_diff(self.start) as usize + 1
    }

    /// Always `false`: a range covers at least its start year
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Clamp both endpoints into `[min, max]`
    pub fn clamp(&self, min: i32, max: i32) -> Self {
        Self::new(self.start.clamp(min, max), self.end.clamp(min, max))
    }
}

/// Chosen countries in the order the user supplied them, without repeats.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountrySelection(Vec<String>);

impl CountrySelection {
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for country in countries {
            selection.insert(country);
        }
        selection
    }

    /// Add a country unless already present; returns whether it was added
    pub fn insert(&mut self, country: impl Into<String>) -> bool {
        let country = country.into();
        if self.0.contains(&country) {
            return false;
        }
        self.0.push(country);
        true
    }

    pub fn contains(&self, country: &str) -> bool {
        self.0.iter().any(|c| c == country)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CountrySelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// ============================================================================
// Selected & Tidy Types
// ============================================================================

/// A country's values restricted to the selected years.
///
/// `None` marks a value that could not be read as a number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRow {
    pub country: String,
    pub values: Vec<Option<i64>>,
}

/// Wide-form slice of the canonical table: selected rows x selected years.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedTable {
    pub years: Vec<i32>,
    pub rows: Vec<SelectedRow>,
}

impl SelectedTable {
    pub fn empty() -> Self {
        Self {
            years: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.country.as_str())
    }

    pub fn row(&self, country: &str) -> Option<&SelectedRow> {
        self.rows.iter().find(|r| r.country == country)
    }

    /// Number of cells (rows x years)
    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.years.len()
    }
}

/// One (country, year, value) triple in long form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TidyRecord {
    pub country: String,
    pub year: i32,
    pub value: Option<i64>,
}

impl TidyRecord {
    pub fn new(country: impl Into<String>, year: i32, value: Option<i64>) -> Self {
        Self {
            country: country.into(),
            year,
            value,
        }
    }
}
