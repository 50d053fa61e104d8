//! Timetable command handler
//!
//! Parses a pasted class schedule, merges custom sessions given with `--add`,
//! and prints the weekly grid.

use super::{input_label, read_input, report_path, write_report};
use std::path::PathBuf;
use studyboard::config::Config;
use studyboard::core::models::{ClassSession, CustomSession, CustomSessions, Weekday};
use studyboard::core::parser::{parse_schedule_table, validate_schedule_columns};
use studyboard::core::report::{ReportContext, ReportFormat};
use studyboard::core::timetable::{build_timetable, TimetableGrid};
use studyboard::{debug, error, info, verbose, warn};

/// Options collected from the `timetable` subcommand
#[derive(Debug, Clone)]
pub struct TimetableOptions {
    /// Input file or `-`
    pub input: PathBuf,
    /// Raw `name|room|day|range` custom session specs
    pub add: Vec<String>,
    /// Report format
    pub report: Option<ReportFormat>,
    /// Report path
    pub output: Option<PathBuf>,
}

/// Run the timetable command
pub fn run(opts: &TimetableOptions, config: &Config) -> Result<(), String> {
    let text = read_input(&opts.input)?;
    validate_schedule_columns(&text).map_err(|e| {
        error!("{}: {e}", input_label(&opts.input));
        format!("✗ {e}")
    })?;

    let table = parse_schedule_table(&text);
    if !table.skipped.is_empty() {
        verbose!("Skipped {} schedule rows", table.skipped.len());
        for row in &table.skipped {
            debug!("line {}: {}", row.line, row.reason);
        }
    }
    info!("Loaded {} class sessions", table.rows.len());

    let custom = collect_custom_sessions(&opts.add);
    report_conflicts(&custom, &table.rows);

    let grid = build_timetable(&table.rows, &custom);
    if grid.is_empty() {
        warn!("No sessions to place in {}", input_label(&opts.input));
    }
    print_grid(&grid);

    if let Some(format) = opts.report {
        let path = report_path(
            opts.output.as_deref(),
            &opts.input,
            "timetable",
            format,
            config,
        )?;
        let ctx = ReportContext::new("Weekly timetable").with_timetable(&grid);
        write_report(&ctx, format, &path)?;
    }

    Ok(())
}

/// Parse `--add` specs; invalid ones are reported and skipped
fn collect_custom_sessions(specs: &[String]) -> CustomSessions {
    let mut custom = CustomSessions::new();
    for spec in specs {
        match CustomSession::parse_spec(spec) {
            Ok(session) => {
                verbose!("✓ Added custom session: {}", session.name);
                custom.add(session);
            }
            Err(e) => eprintln!("✗ {e}"),
        }
    }
    custom
}

fn report_conflicts(custom: &CustomSessions, sessions: &[ClassSession]) {
    for (idx, clash) in custom.conflicts_with(sessions) {
        if let Some(session) = custom.get(idx) {
            warn!(
                "Custom session '{}' occupies the same slot as '{}' (row {})",
                session.name, clash.name, clash.row
            );
        }
    }
}

fn print_grid(grid: &TimetableGrid) {
    println!("\n=== Timetable ===");
    if grid.is_empty() {
        println!("(no sessions)");
        return;
    }

    for row in grid.rows() {
        println!("\n{}", row.header());
        for day in Weekday::ALL {
            let labels = &row.cells[day.column()];
            if !labels.is_empty() {
                println!("  {:<9} {}", day.label(), labels.join(" / "));
            }
        }
    }

    let collisions = grid.collisions();
    if !collisions.is_empty() {
        println!("\n⚠️  {} double-booked cells", collisions.len());
        for collision in collisions {
            println!(
                "  {}, period {}: {}",
                collision.day,
                collision.period,
                collision.labels.join(", ")
            );
        }
    }
}
