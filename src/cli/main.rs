//! Command-line interface entry point for `studyboard`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::grades::GradesOptions;
use commands::timetable::TimetableOptions;
use studyboard::config::Config;
use studyboard::info;
use studyboard::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
            Ok(())
        }
        Command::Grades {
            input,
            scale,
            target,
            program_credits,
            by_term,
            report,
            output,
        } => commands::grades::run(
            &GradesOptions {
                input,
                scale: scale.map(Into::into),
                target,
                program_credits,
                by_term,
                report: report.map(Into::into),
                output,
            },
            &config,
        ),
        Command::Timetable {
            input,
            add,
            report,
            output,
        } => commands::timetable::run(
            &TimetableOptions {
                input,
                add,
                report: report.map(Into::into),
                output,
            },
            &config,
        ),
        Command::Periods { time } => commands::periods::run(time.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
