//! Error types for data operations
//!
//! Provides unified error handling for loading, parsing and normalizing
//! the country x year table.

use thiserror::Error;

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parse error: {0}")]
    Csv(String),

    /// File is too large for loading
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// Too many rows for loading
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// File is empty
    #[error("Empty file")]
    EmptyFile,

    /// Header has no year columns
    #[error("No year columns found")]
    NoColumns,

    /// A year column header is not an integer
    #[error("Column {column}: header {header:?} is not a year")]
    InvalidYearHeader { column: usize, header: String },

    /// Year headers skip or repeat a year
    #[error("Year columns must be contiguous and ascending: expected {expected}, found {found}")]
    NonContiguousYears { expected: i32, found: i32 },

    /// The same country appears on two rows
    #[error("Duplicate country: {country}")]
    DuplicateCountry { country: String },

    /// A row has a different width than the header
    #[error("Row {row}: expected {expected} cells, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell cannot be coerced to an integer
    #[error("Row {row} ({country}), column {column}: cannot read {value:?} as a number: {reason}")]
    Format {
        row: usize,
        country: String,
        column: String,
        value: String,
        reason: String,
    },

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
