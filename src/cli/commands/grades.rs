//! Grades command handler
//!
//! Parses a pasted grade table, prints the GPA summary and optionally the
//! per-term breakdown, the target requirement and a report.

use super::{input_label, read_input, report_path, write_report};
use std::path::PathBuf;
use studyboard::config::Config;
use studyboard::core::gpa::{
    compute_gpa, compute_term_gpas, required_future_gpa, Feasibility, GpaSummary, GradeScale,
    TermGpa,
};
use studyboard::core::parser::parse_grade_table;
use studyboard::core::report::{GradeSection, ReportContext, ReportFormat, TargetOutlook};
use studyboard::{debug, info, verbose, warn};

/// Options collected from the `grades` subcommand
#[derive(Debug, Clone)]
pub struct GradesOptions {
    /// Input file or `-`
    pub input: PathBuf,
    /// Target scale override
    pub scale: Option<GradeScale>,
    /// Target GPA override
    pub target: Option<f64>,
    /// Program credit total override
    pub program_credits: Option<f64>,
    /// Print per-term GPAs
    pub by_term: bool,
    /// Report format
    pub report: Option<ReportFormat>,
    /// Report path
    pub output: Option<PathBuf>,
}

/// Run the grades command
pub fn run(opts: &GradesOptions, config: &Config) -> Result<(), String> {
    let text = read_input(&opts.input)?;
    let table = parse_grade_table(&text);

    if !table.skipped.is_empty() {
        verbose!("Skipped {} malformed grade rows", table.skipped.len());
        for row in &table.skipped {
            debug!("line {}: {}", row.line, row.reason);
        }
    }
    if table.rows.is_empty() {
        warn!("No grade rows found in {}", input_label(&opts.input));
    }
    info!("Loaded {} grade rows", table.rows.len());

    let records = table.rows;
    let summary = compute_gpa(&records);
    print_summary(&summary, records.len());

    let terms = opts.by_term.then(|| compute_term_gpas(&records));
    if let Some(terms) = &terms {
        print_terms(terms);
    }

    let outlook = resolve_outlook(opts, config, &summary);
    if let Some(outlook) = &outlook {
        print_outlook(outlook);
    }

    if let Some(format) = opts.report {
        let path = report_path(opts.output.as_deref(), &opts.input, "grades", format, config)?;
        let ctx = ReportContext::new("Grade report").with_grades(GradeSection {
            records: &records,
            summary: &summary,
            terms: terms.as_deref(),
            outlook,
        });
        write_report(&ctx, format, &path)?;
    }

    Ok(())
}

/// Combine CLI flags with config defaults into a target outlook
fn resolve_outlook(
    opts: &GradesOptions,
    config: &Config,
    summary: &GpaSummary,
) -> Option<TargetOutlook> {
    let target = opts.target.or_else(|| config.gpa.target())?;
    let scale = opts.scale.unwrap_or_else(|| config.gpa.grade_scale());
    let program_credits = opts.program_credits.unwrap_or(config.gpa.program_credits);

    if target > scale.max() {
        warn!(
            "Target {target:.2} is above the {scale} scale maximum of {:.1}",
            scale.max()
        );
    }

    let requirement = required_future_gpa(
        scale.pick(summary),
        summary.total_credits,
        program_credits,
        target,
    );
    Some(TargetOutlook {
        target,
        scale,
        program_credits,
        requirement,
    })
}

fn print_summary(summary: &GpaSummary, rows: usize) {
    println!("\n=== GPA ===");
    println!("Courses parsed:  {rows}");
    println!("Credits counted: {:.1}", summary.total_credits);
    println!("GPA (10):        {:.2}", summary.gpa10);
    println!("GPA (4):         {:.2}", summary.gpa4);
    println!("Classification:  {}", summary.classification);
}

fn print_terms(terms: &[TermGpa]) {
    println!("\n=== By term ===");
    for term in terms {
        println!(
            "{:<20} {:>5.2} {:>5.2}  {:<12} {:>5.1} cr",
            term.term,
            term.summary.gpa10,
            term.summary.gpa4,
            term.summary.classification.to_string(),
            term.summary.total_credits
        );
    }
}

fn print_outlook(outlook: &TargetOutlook) {
    println!("\n=== Target ===");
    println!(
        "Target {:.2} on the {} scale over {:.1} program credits",
        outlook.target, outlook.scale, outlook.program_credits
    );
    println!("Required: {}", outlook.describe());
    if outlook.feasibility() == Feasibility::Infeasible {
        warn!("Target cannot be reached with the remaining credits");
    }
}
