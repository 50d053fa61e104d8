//! Report generation for grade summaries and weekly timetables
//!
//! A report holds an optional grade section and an optional timetable grid,
//! and renders to Markdown or HTML.

pub mod formats;

use crate::core::gpa::{Feasibility, GpaSummary, GradeScale, TargetRequirement, TermGpa};
use crate::core::models::CourseRecord;
use crate::core::timetable::TimetableGrid;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Target GPA and what the remaining credits must average to reach it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetOutlook {
    /// Target cumulative GPA
    pub target: f64,
    /// Scale `target` is expressed on
    pub scale: GradeScale,
    /// Credits the whole program needs
    pub program_credits: f64,
    /// Back-solved requirement
    pub requirement: TargetRequirement,
}

impl TargetOutlook {
    /// Feasibility of the requirement on the target's scale
    #[must_use]
    pub fn feasibility(&self) -> Feasibility {
        self.requirement.feasibility(self.scale)
    }

    /// One-line description, e.g. `"3.52 over 60.0 remaining credits (achievable)"`
    #[must_use]
    pub fn describe(&self) -> String {
        match self.requirement {
            TargetRequirement::AlreadyComplete => self.feasibility().to_string(),
            TargetRequirement::Required {
                gpa,
                remaining_credits,
            } => format!(
                "{gpa:.2} over {remaining_credits:.1} remaining credits ({})",
                self.feasibility()
            ),
        }
    }
}

/// Grade data shown in a report
#[derive(Debug, Clone)]
pub struct GradeSection<'a> {
    /// Parsed records in input order
    pub records: &'a [CourseRecord],
    /// Cumulative summary
    pub summary: &'a GpaSummary,
    /// Per-term breakdown, when requested
    pub terms: Option<&'a [TermGpa]>,
    /// Target outlook, when a target was given
    pub outlook: Option<TargetOutlook>,
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report heading
    pub title: String,
    /// Grade section
    pub grades: Option<GradeSection<'a>>,
    /// Timetable grid
    pub timetable: Option<&'a TimetableGrid>,
}

impl<'a> ReportContext<'a> {
    /// Create an empty report context
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            grades: None,
            timetable: None,
        }
    }

    /// Attach a grade section
    #[must_use]
    pub fn with_grades(mut self, grades: GradeSection<'a>) -> Self {
        self.grades = Some(grades);
        self
    }

    /// Attach a timetable grid
    #[must_use]
    pub fn with_timetable(mut self, grid: &'a TimetableGrid) -> Self {
        self.timetable = Some(grid);
        self
    }

    /// Number of graded records in the report
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.grades.as_ref().map_or(0, |g| g.records.len())
    }
}

/// Display text for an optional score
#[must_use]
pub fn score_text(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |value| format!("{value:.1}"))
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
