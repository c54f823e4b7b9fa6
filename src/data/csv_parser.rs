//! CSV and TSV file parsing
//!
//! Parses delimited files into a [`RawTable`]: the first column is the
//! country name, every other column is one year.
//!
//! ## Memory Limits
//!
//! To prevent unbounded memory growth:
//! - Files larger than 100MB are rejected (see [`MAX_CSV_SIZE_MB`])
//! - Files with more than 100,000 rows are rejected (see [`MAX_CSV_ROWS`])

use crate::constants::{DELIMITER_SNIFF_LINES, MAX_CSV_ROWS, MAX_CSV_SIZE_MB};
use crate::data::error::{DataError, DataResult};
use crate::types::{RawCell, RawRow, RawTable};
use std::path::Path;

/// Parse a CSV or TSV file into a RawTable
///
/// Uses `delimiter` when given, otherwise detects it from the file
/// extension (.tsv uses tab) or content analysis.
///
/// # Memory Limits
/// - Files larger than [`MAX_CSV_SIZE_MB`]MB will return [`DataError::TooLarge`]
/// - Files with more than [`MAX_CSV_ROWS`] rows will return [`DataError::TooManyRows`]
pub fn parse_csv_file(path: &Path, delimiter: Option<char>) -> DataResult<RawTable> {
    let metadata = std::fs::metadata(path)?;
    let size_mb = metadata.len() / (1024 * 1024);
    if size_mb > MAX_CSV_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_CSV_SIZE_MB,
        });
    }

    let content = std::fs::read_to_string(path)?;

    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(path, &content));
    tracing::debug!(path = %path.display(), ?delimiter, "Parsing data file");
    parse_csv_content(&content, delimiter)
}

/// Parse CSV/TSV content from a string
///
/// Blank lines are skipped. Every data row must have as many fields as the
/// header.
pub fn parse_csv_content(content: &str, delimiter: char) -> DataResult<RawTable> {
    // A UTF-8 BOM would otherwise end up in the first header
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines().filter(|l| !l.trim().is_empty());

    let header_line = lines.next().ok_or(DataError::EmptyFile)?;
    let headers: Vec<String> = split_csv_line(header_line, delimiter)
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    if headers.len() < 2 {
        return Err(DataError::NoColumns);
    }

    let mut rows: Vec<RawRow> = Vec::new();
    for line in lines {
        if rows.len() >= MAX_CSV_ROWS {
            return Err(DataError::TooManyRows {
                rows: rows.len() + 1, // +1 for the current row that exceeded limit
                max_rows: MAX_CSV_ROWS,
            });
        }

        let fields = split_csv_line(line, delimiter);
        if fields.len() != headers.len() {
            return Err(DataError::RaggedRow {
                row: rows.len() + 1,
                expected: headers.len(),
                found: fields.len(),
            });
        }

        let mut fields = fields.into_iter();
        let country = fields.next().unwrap_or_default().to_string();
        if country.is_empty() {
            return Err(DataError::Csv(format!("row {} has no country name", rows.len() + 1)));
        }
        rows.push(RawRow::new(country, fields.map(RawCell::parse).collect()));
    }

    Ok(RawTable { headers, rows })
}

/// Detect the delimiter to use for parsing
pub fn detect_delimiter(path: &Path, content: &str) -> char {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if ext.eq_ignore_ascii_case("tsv") {
            return '\t';
        }
    }

    // Count delimiters in first few lines to determine most likely
    let first_lines: String = content
        .lines()
        .take(DELIMITER_SNIFF_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let semicolon_count = first_lines.matches(';').count();

    if tab_count > comma_count && tab_count > semicolon_count {
        '\t'
    } else if semicolon_count > comma_count {
        ';'
    } else {
        ','
    }
}

/// Split a CSV line respecting quoted fields
fn split_csv_line(line: &str, delimiter: char) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == delimiter && !in_quotes {
            result.push(unquote(&line[start..i]));
            start = i + c.len_utf8();
        }
    }

    result.push(unquote(&line[start..]));
    result
}

/// Remove surrounding quotes from a field
fn unquote(s: &str) -> &str {
    let trimmed = s.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}
