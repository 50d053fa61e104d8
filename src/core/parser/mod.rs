//! Parsers for tab-delimited portal exports
//!
//! Both parsers split the input into lines and each line into tab-separated
//! fields. Column positions are fixed; there is no header detection. Any
//! problem with a single row drops that row and parsing continues.

pub mod fields;
pub mod grades;
pub mod schedule;

pub use fields::{ParsedTable, RowError, SkippedRow};
pub use grades::{parse_grade_records, parse_grade_table};
pub use schedule::{
    parse_schedule_records, parse_schedule_table, validate_schedule_columns, TOTAL_MARKER,
};
