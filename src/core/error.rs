//! Structural errors surfaced to callers
//!
//! Row-level problems never appear here: they are absorbed by the parsers
//! (see [`crate::core::parser::RowError`]). Numeric edge cases such as zero
//! credits or an already completed program are encoded in return values.

use std::error::Error;
use std::fmt;

/// Schedule input that cannot be turned into a timetable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No row of the pasted schedule carries a required column
    MissingColumn {
        /// Human-readable column name
        column: &'static str,
        /// Number of candidate rows inspected
        rows: usize,
    },
    /// A user-entered custom session could not be interpreted
    InvalidCustomSession {
        /// Raw session spec as given
        input: String,
        /// What was wrong with it
        reason: String,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { column, rows } => write!(
                f,
                "Schedule is missing the required '{column}' column ({rows} rows checked)"
            ),
            Self::InvalidCustomSession { input, reason } => {
                write!(f, "Invalid custom session '{input}': {reason}")
            }
        }
    }
}

impl Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_missing_column() {
        let err = ScheduleError::MissingColumn {
            column: "time/room",
            rows: 3,
        };
        assert_eq!(
            err.to_string(),
            "Schedule is missing the required 'time/room' column (3 rows checked)"
        );
    }

    #[test]
    fn test_display_invalid_custom_session() {
        let err = ScheduleError::InvalidCustomSession {
            input: "x".to_string(),
            reason: "bad".to_string(),
        };
        assert!(err.to_string().contains("'x': bad"));
    }
}
