//! Course grade record model

use serde::{Deserialize, Serialize};

/// Number of raw component score columns in a grade row
pub const COMPONENT_SCORE_COUNT: usize = 5;

/// One graded course as pasted from the portal grade table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// 1-based position among the accepted rows
    pub seq: usize,

    /// Term label (e.g., "HK1 2023-2024")
    pub term: String,

    /// Course code (e.g., "INT1008")
    pub code: String,

    /// Course name
    pub name: String,

    /// Credit count, rounded to one decimal
    pub credits: f64,

    /// Grading formula as displayed by the portal (e.g., "CC:10% GK:30% CK:60%")
    pub formula: String,

    /// Raw component scores; a missing column is `None`
    pub components: [Option<f64>; COMPONENT_SCORE_COUNT],

    /// Final score on the 10-point scale
    pub score10: Option<f64>,

    /// Final score on the 4-point scale
    pub score4: Option<f64>,

    /// Letter grade (e.g., "B+")
    pub letter: Option<String>,
}

impl CourseRecord {
    /// Create a record with only the mandatory columns filled in
    #[must_use]
    pub const fn new(
        seq: usize,
        term: String,
        code: String,
        name: String,
        credits: f64,
        formula: String,
    ) -> Self {
        Self {
            seq,
            term,
            code,
            name,
            credits,
            formula,
            components: [None; COMPONENT_SCORE_COUNT],
            score10: None,
            score4: None,
            letter: None,
        }
    }

    /// Whether this course counts toward GPA: 10-point score, letter grade and
    /// positive credits must all be present.
    #[must_use]
    pub fn counts_toward_gpa(&self) -> bool {
        self.score10.is_some() && self.letter.is_some() && self.credits > 0.0
    }

    /// 4-point value used for GPA: the 4-point column, or the value implied by
    /// the letter grade when that column is absent.
    ///
    /// A letter outside the A+..F ladder (e.g. a pass/fail `P`) yields 0.0,
    /// so a course with a 10-point score, credits and such a letter but no
    /// 4-point column still counts and lowers `gpa4`. Portal exports give
    /// pass/fail courses zero credits, which keeps them out of the average.
    #[must_use]
    pub fn grade_points(&self) -> Option<f64> {
        self.score4
            .or_else(|| self.letter.as_deref().map(letter_to_points))
    }
}

/// Convert a letter grade to 4-point value. Unknown letters map to 0.
#[must_use]
pub fn letter_to_points(letter: &str) -> f64 {
    match letter.trim().to_ascii_uppercase().as_str() {
        "A+" | "A" => 4.0,
        "B+" => 3.5,
        "B" => 3.0,
        "C+" => 2.5,
        "C" => 2.0,
        "D+" => 1.5,
        "D" => 1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(credits: f64) -> CourseRecord {
        CourseRecord::new(
            1,
            "HK1".to_string(),
            "INT1008".to_string(),
            "Introduction to Programming".to_string(),
            credits,
            String::new(),
        )
    }

    #[test]
    fn test_new_record_has_no_scores() {
        let r = record(3.0);
        assert!(r.components.iter().all(Option::is_none));
        assert!(r.score10.is_none());
        assert!(r.score4.is_none());
        assert!(r.letter.is_none());
        assert!(!r.counts_toward_gpa());
    }

    #[test]
    fn test_counts_toward_gpa_requires_all_three() {
        let mut r = record(3.0);
        r.score10 = Some(8.0);
        assert!(!r.counts_toward_gpa());
        r.letter = Some("B+".to_string());
        assert!(r.counts_toward_gpa());

        let mut zero = record(0.0);
        zero.score10 = Some(8.0);
        zero.letter = Some("B+".to_string());
        assert!(!zero.counts_toward_gpa());
    }

    #[test]
    fn test_grade_points_prefers_score4_column() {
        let mut r = record(3.0);
        r.letter = Some("B".to_string());
        assert_eq!(r.grade_points(), Some(3.0));
        r.score4 = Some(3.2);
        assert_eq!(r.grade_points(), Some(3.2));
    }

    #[test]
    fn test_letter_to_points() {
        assert!((letter_to_points("a+") - 4.0).abs() < f64::EPSILON);
        assert!((letter_to_points("C+") - 2.5).abs() < f64::EPSILON);
        assert!((letter_to_points(" D ") - 1.0).abs() < f64::EPSILON);
        assert!(letter_to_points("F").abs() < f64::EPSILON);
        assert!(letter_to_points("?").abs() < f64::EPSILON);
    }
}
