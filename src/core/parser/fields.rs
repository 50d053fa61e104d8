//! Line/field splitting and length-gated field access shared by both parsers

use crate::core::rounding::round1;
use std::fmt;

/// Why a single row was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The row has fewer fields than the mandatory columns need
    TooFewFields {
        /// Fields present
        found: usize,
        /// Fields required
        required: usize,
    },
    /// A mandatory text column is empty
    EmptyField(&'static str),
    /// A mandatory numeric column is not a number
    NotANumber {
        /// Column name
        field: &'static str,
        /// Raw value
        value: String,
    },
    /// Credits below zero
    NegativeCredits(String),
    /// Summary line carrying the total marker
    TotalRow,
    /// Time/room cell is not a `day,start-end,room` triple
    MalformedTimeRoom(String),
    /// Day label outside the seven known weekdays
    UnknownWeekday(String),
    /// Period range not integer, reversed, or outside 1–14
    BadPeriodRange(String),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFields { found, required } => {
                write!(f, "{found} fields, at least {required} required")
            }
            Self::EmptyField(field) => write!(f, "empty {field}"),
            Self::NotANumber { field, value } => write!(f, "{field} '{value}' is not a number"),
            Self::NegativeCredits(value) => write!(f, "negative credits '{value}'"),
            Self::TotalRow => write!(f, "total row"),
            Self::MalformedTimeRoom(value) => write!(f, "malformed time/room '{value}'"),
            Self::UnknownWeekday(value) => write!(f, "unknown weekday '{value}'"),
            Self::BadPeriodRange(value) => write!(f, "bad period range '{value}'"),
        }
    }
}

/// A dropped row and the reason it was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the input
    pub line: usize,
    /// Reason
    pub reason: RowError,
}

/// Parse result: accepted rows in input order plus diagnostics for dropped ones
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable<T> {
    /// Accepted rows
    pub rows: Vec<T>,
    /// Dropped rows (blank lines are not listed)
    pub skipped: Vec<SkippedRow>,
}

impl<T> Default for ParsedTable<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Non-blank lines with their 1-based line numbers; a trailing `\r` is dropped
pub fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Tab-separated fields, each trimmed
#[must_use]
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split('\t').map(str::trim).collect()
}

/// Field at `idx` if the row is wide enough and the value is non-empty
#[must_use]
pub fn field<'a>(fields: &[&'a str], idx: usize) -> Option<&'a str> {
    fields.get(idx).copied().filter(|value| !value.is_empty())
}

/// Mandatory non-empty text field
///
/// # Errors
/// [`RowError::EmptyField`] when the column is missing or blank
pub fn required_text(fields: &[&str], idx: usize, name: &'static str) -> Result<String, RowError> {
    field(fields, idx)
        .map(str::to_string)
        .ok_or(RowError::EmptyField(name))
}

/// Parse a number, accepting a decimal comma. Non-finite values are rejected.
#[must_use]
pub fn parse_number(value: &str) -> Option<f64> {
    let normalized = value.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Optional numeric column, rounded to one decimal. Missing, blank or
/// non-numeric values are `None`.
#[must_use]
pub fn optional_score(fields: &[&str], idx: usize) -> Option<f64> {
    field(fields, idx).and_then(parse_number).map(round1)
}
