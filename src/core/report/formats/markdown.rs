//! Markdown report generator
//!
//! Grade tables, the GPA summary and the timetable grid as GitHub-flavored
//! Markdown tables.

use crate::core::get_version;
use crate::core::models::Weekday;
use crate::core::report::{score_text, GradeSection, ReportContext, ReportGenerator};
use crate::core::timetable::TimetableGrid;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../../../../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

/// Escape characters that would break a table cell
fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', "<br>")
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let grades = ctx
            .grades
            .as_ref()
            .map(Self::generate_grades_section)
            .unwrap_or_default();
        let timetable = ctx
            .timetable
            .map(Self::generate_timetable_section)
            .unwrap_or_default();

        MARKDOWN_TEMPLATE
            .replace("{{title}}", &ctx.title)
            .replace("{{version}}", get_version())
            .replace("{{grades}}", &grades)
            .replace("{{timetable}}", &timetable)
    }

    fn generate_grades_section(grades: &GradeSection) -> String {
        let mut out = String::from("## Grades\n\n");
        let summary = grades.summary;

        out.push_str("| Metric | Value |\n|---|---|\n");
        let _ = writeln!(out, "| GPA (10) | {:.2} |", summary.gpa10);
        let _ = writeln!(out, "| GPA (4) | {:.2} |", summary.gpa4);
        let _ = writeln!(out, "| Classification | {} |", summary.classification);
        let _ = writeln!(out, "| Credits counted | {:.1} |", summary.total_credits);
        if let Some(outlook) = &grades.outlook {
            let _ = writeln!(
                out,
                "| Target {:.2} ({}) over {:.1} credits | {} |",
                outlook.target,
                outlook.scale,
                outlook.program_credits,
                outlook.describe()
            );
        }
        out.push('\n');

        if let Some(terms) = grades.terms {
            out.push_str("### By term\n\n");
            out.push_str("| Term | GPA (10) | GPA (4) | Classification | Credits |\n");
            out.push_str("|---|---|---|---|---|\n");
            for term in terms {
                let _ = writeln!(
                    out,
                    "| {} | {:.2} | {:.2} | {} | {:.1} |",
                    cell(&term.term),
                    term.summary.gpa10,
                    term.summary.gpa4,
                    term.summary.classification,
                    term.summary.total_credits
                );
            }
            out.push('\n');
        }

        out.push_str("### Courses\n\n");
        out.push_str("| # | Term | Code | Name | Credits | Score (10) | Score (4) | Letter |\n");
        out.push_str("|---|---|---|---|---|---|---|---|\n");
        for record in grades.records {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {:.1} | {} | {} | {} |",
                record.seq,
                cell(&record.term),
                cell(&record.code),
                cell(&record.name),
                record.credits,
                score_text(record.score10),
                score_text(record.score4),
                record.letter.as_deref().map_or_else(|| "-".to_string(), cell)
            );
        }
        out.push('\n');
        out
    }

    fn generate_timetable_section(grid: &TimetableGrid) -> String {
        let mut out = String::from("## Timetable\n\n");
        if grid.is_empty() {
            out.push_str("_No sessions scheduled._\n");
            return out;
        }

        out.push_str("| Period |");
        for day in grid.columns() {
            let _ = write!(out, " {} |", day.label());
        }
        out.push_str("\n|---|");
        out.push_str(&"---|".repeat(Weekday::ALL.len()));
        out.push('\n');

        for row in grid.rows() {
            let _ = write!(out, "| {} |", row.header());
            for labels in &row.cells {
                let _ = write!(out, " {} |", cell(&labels.join("\n")));
            }
            out.push('\n');
        }

        let collisions = grid.collisions();
        if !collisions.is_empty() {
            out.push_str("\n**Double bookings**\n\n");
            for collision in collisions {
                let _ = writeln!(
                    out,
                    "- {}, period {}: {}",
                    collision.day,
                    collision.period,
                    collision.labels.join(", ")
                );
            }
        }
        out
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
