//! HTML report generator
//!
//! Renders a self-contained page (embedded CSS) through the askama template
//! `templates/report.html`. Values are escaped by the template engine.

use crate::core::get_version;
use crate::core::report::{score_text, GradeSection, ReportContext, ReportGenerator};
use crate::core::timetable::TimetableGrid;
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

/// HTML report generator
pub struct HtmlReporter;

struct SummaryLine {
    metric: String,
    value: String,
}

struct TermLine {
    term: String,
    gpa10: String,
    gpa4: String,
    classification: String,
    credits: String,
}

struct CourseLine {
    seq: usize,
    term: String,
    code: String,
    name: String,
    credits: String,
    score10: String,
    score4: String,
    letter: String,
    counted: bool,
}

struct GradesView {
    summary: Vec<SummaryLine>,
    terms: Vec<TermLine>,
    courses: Vec<CourseLine>,
}

struct GridLine {
    header: String,
    cells: Vec<Vec<String>>,
}

struct TimetableView {
    days: Vec<String>,
    rows: Vec<GridLine>,
    collisions: Vec<String>,
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportPage<'a> {
    title: &'a str,
    version: &'a str,
    grades: Option<GradesView>,
    timetable: Option<TimetableView>,
}

fn grades_view(grades: &GradeSection) -> GradesView {
    let summary = grades.summary;
    let mut lines = vec![
        SummaryLine {
            metric: "GPA (10)".to_string(),
            value: format!("{:.2}", summary.gpa10),
        },
        SummaryLine {
            metric: "GPA (4)".to_string(),
            value: format!("{:.2}", summary.gpa4),
        },
        SummaryLine {
            metric: "Classification".to_string(),
            value: summary.classification.to_string(),
        },
        SummaryLine {
            metric: "Credits counted".to_string(),
            value: format!("{:.1}", summary.total_credits),
        },
    ];
    if let Some(outlook) = &grades.outlook {
        lines.push(SummaryLine {
            metric: format!(
                "Target {:.2} ({}) over {:.1} credits",
                outlook.target, outlook.scale, outlook.program_credits
            ),
            value: outlook.describe(),
        });
    }

    let terms = grades
        .terms
        .unwrap_or_default()
        .iter()
        .map(|term| TermLine {
            term: term.term.clone(),
            gpa10: format!("{:.2}", term.summary.gpa10),
            gpa4: format!("{:.2}", term.summary.gpa4),
            classification: term.summary.classification.to_string(),
            credits: format!("{:.1}", term.summary.total_credits),
        })
        .collect();

    let courses = grades
        .records
        .iter()
        .map(|record| CourseLine {
            seq: record.seq,
            term: record.term.clone(),
            code: record.code.clone(),
            name: record.name.clone(),
            credits: format!("{:.1}", record.credits),
            score10: score_text(record.score10),
            score4: score_text(record.score4),
            letter: record.letter.clone().unwrap_or_else(|| "-".to_string()),
            counted: record.counts_toward_gpa(),
        })
        .collect();

    GradesView {
        summary: lines,
        terms,
        courses,
    }
}

fn timetable_view(grid: &TimetableGrid) -> TimetableView {
    TimetableView {
        days: grid
            .columns()
            .iter()
            .map(|day| day.label().to_string())
            .collect(),
        rows: grid
            .rows()
            .iter()
            .map(|row| GridLine {
                header: row.header(),
                cells: row.cells.to_vec(),
            })
            .collect(),
        collisions: grid
            .collisions()
            .into_iter()
            .map(|c| format!("{}, period {}: {}", c.day, c.period, c.labels.join(", ")))
            .collect(),
    }
}

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let page = ReportPage {
            title: &ctx.title,
            version: get_version(),
            grades: ctx.grades.as_ref().map(grades_view),
            timetable: ctx.timetable.map(timetable_view),
        };
        Ok(page.render()?)
    }
}
