//! Grade table parser
//!
//! Column layout (tab separated):
//! term, code, name, credits, formula, score 1..5, 10-point, 4-point, letter.
//! The first five columns are mandatory; everything after may be missing.

use super::fields::{self, ParsedTable, RowError, SkippedRow};
use crate::core::models::{CourseRecord, COMPONENT_SCORE_COUNT};
use crate::core::rounding::round1;
use crate::debug;

const COL_TERM: usize = 0;
const COL_CODE: usize = 1;
const COL_NAME: usize = 2;
const COL_CREDITS: usize = 3;
const COL_FORMULA: usize = 4;
const COL_FIRST_COMPONENT: usize = 5;
const COL_SCORE10: usize = COL_FIRST_COMPONENT + COMPONENT_SCORE_COUNT;
const COL_SCORE4: usize = COL_SCORE10 + 1;
const COL_LETTER: usize = COL_SCORE4 + 1;

/// Fields needed for the mandatory columns
const REQUIRED_FIELDS: usize = COL_FORMULA + 1;

/// Parse pasted grade rows, keeping diagnostics for dropped rows
#[must_use]
pub fn parse_grade_table(text: &str) -> ParsedTable<CourseRecord> {
    let mut table = ParsedTable::default();

    for (line_no, line) in fields::lines(text) {
        match parse_grade_line(line, table.rows.len() + 1) {
            Ok(record) => table.rows.push(record),
            Err(reason) => {
                debug!("Skipping grade line {line_no}: {reason}");
                table.skipped.push(SkippedRow {
                    line: line_no,
                    reason,
                });
            }
        }
    }

    debug!(
        "Parsed {} grade rows ({} skipped)",
        table.rows.len(),
        table.skipped.len()
    );
    table
}

/// Parse pasted grade rows. Malformed rows are dropped; output keeps input order.
#[must_use]
pub fn parse_grade_records(text: &str) -> Vec<CourseRecord> {
    parse_grade_table(text).rows
}

fn parse_grade_line(line: &str, seq: usize) -> Result<CourseRecord, RowError> {
    let cols = fields::split_fields(line);
    if cols.len() < REQUIRED_FIELDS {
        return Err(RowError::TooFewFields {
            found: cols.len(),
            required: REQUIRED_FIELDS,
        });
    }

    let term = fields::required_text(&cols, COL_TERM, "term")?;
    let code = fields::required_text(&cols, COL_CODE, "course code")?;
    let name = fields::required_text(&cols, COL_NAME, "course name")?;

    let raw_credits = cols[COL_CREDITS];
    let credits = fields::parse_number(raw_credits).ok_or_else(|| RowError::NotANumber {
        field: "credits",
        value: raw_credits.to_string(),
    })?;
    if credits < 0.0 {
        return Err(RowError::NegativeCredits(raw_credits.to_string()));
    }

    let formula = cols[COL_FORMULA].to_string();
    let mut record = CourseRecord::new(seq, term, code, name, round1(credits), formula);

    for (slot, component) in record.components.iter_mut().enumerate() {
        *component = fields::optional_score(&cols, COL_FIRST_COMPONENT + slot);
    }
    record.score10 = fields::optional_score(&cols, COL_SCORE10);
    record.score4 = fields::optional_score(&cols, COL_SCORE4);
    record.letter = fields::field(&cols, COL_LETTER).map(str::to_string);

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_row() {
        let line = "HK1 2023\tINT1008\tProgramming\t3\tCC:10% CK:90%\t8\t7.5\t\t\t\t8.25\t3.5\tB+";
        let r = parse_grade_line(line, 1).unwrap();
        assert_eq!(r.term, "HK1 2023");
        assert_eq!(r.code, "INT1008");
        assert!((r.credits - 3.0).abs() < f64::EPSILON);
        assert_eq!(r.formula, "CC:10% CK:90%");
        assert_eq!(r.components, [Some(8.0), Some(7.5), None, None, None]);
        assert_eq!(r.score10, Some(8.3));
        assert_eq!(r.score4, Some(3.5));
        assert_eq!(r.letter.as_deref(), Some("B+"));
    }

    #[test]
    fn test_ragged_trailing_columns_default_to_absent() {
        let r = parse_grade_line("HK1\tMAT1\tCalculus\t4\t", 1).unwrap();
        assert!(r.components.iter().all(Option::is_none));
        assert!(r.score10.is_none());
        assert!(r.letter.is_none());
    }

    #[test]
    fn test_short_row_is_rejected() {
        let err = parse_grade_line("HK1\tMAT1\tCalculus\t4", 1).unwrap_err();
        assert_eq!(
            err,
            RowError::TooFewFields {
                found: 4,
                required: 5
            }
        );
    }

    #[test]
    fn test_non_numeric_credits_rejected() {
        let err = parse_grade_line("HK1\tMAT1\tCalculus\tfour\t", 1).unwrap_err();
        assert!(matches!(err, RowError::NotANumber { field: "credits", .. }));
    }

    #[test]
    fn test_negative_credits_rejected() {
        let err = parse_grade_line("HK1\tMAT1\tCalculus\t-1\t", 1).unwrap_err();
        assert!(matches!(err, RowError::NegativeCredits(_)));
    }

    #[test]
    fn test_empty_code_rejected() {
        let err = parse_grade_line("HK1\t\tCalculus\t3\t", 1).unwrap_err();
        assert_eq!(err, RowError::EmptyField("course code"));
    }

    #[test]
    fn test_non_numeric_optional_score_is_absent() {
        let r = parse_grade_line("HK1\tMAT1\tCalculus\t3\t\tabs\t\t\t\t\t7\t3\tB", 1).unwrap();
        assert_eq!(r.components[0], None);
        assert_eq!(r.score10, Some(7.0));
    }

    #[test]
    fn test_sequence_numbers_follow_kept_rows() {
        let text = "HK1\tA\tA\t3\t\nheader only\nHK1\tB\tB\t2\t\n";
        let table = parse_grade_table(text);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].seq, 1);
        assert_eq!(table.rows[1].seq, 2);
        assert_eq!(table.rows[1].code, "B");
        assert_eq!(table.skipped.len(), 1);
        assert_eq!(table.skipped[0].line, 2);
    }
}
