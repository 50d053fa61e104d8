//! CLI command handlers for `studyboard`.
//!
//! Each command is implemented in its own submodule. Handlers return
//! `Err(String)` with a user-facing `✗` message; `main` prints it and exits.

pub mod config;
pub mod grades;
pub mod periods;
pub mod timetable;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use studyboard::config::Config;
use studyboard::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use studyboard::{error, info};

/// Display name for an input path (`stdin` for `-`)
pub fn input_label(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read pasted text from a file, or from stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("✗ Failed to read stdin: {e}"))?;
        return Ok(text);
    }

    fs::read_to_string(path).map_err(|e| {
        error!("Failed to read {}: {e}", path.display());
        format!("✗ Failed to read {}: {e}", path.display())
    })
}

/// Output path for a report: the explicit one, or `<reports_dir>/<stem>_report.<ext>`
pub fn report_path(
    output: Option<&Path>,
    input: &Path,
    fallback_stem: &str,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = output {
        return Ok(output.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| *stem != "-")
        .unwrap_or(fallback_stem);
    Ok(reports_dir.join(format!("{stem}_report.{}", format.extension())))
}

/// Render `ctx` in `format` and write it to `output_path`
pub fn write_report(
    ctx: &ReportContext,
    format: ReportFormat,
    output_path: &Path,
) -> Result<(), String> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("✗ Failed to create {}: {e}", parent.display()))?;
        }
    }

    match format {
        ReportFormat::Markdown => MarkdownReporter::new()
            .generate(ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate Markdown report: {e}"))?,
        ReportFormat::Html => HtmlReporter::new()
            .generate(ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate HTML report: {e}"))?,
    }

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());
    Ok(())
}
