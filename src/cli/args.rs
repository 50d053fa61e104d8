//! CLI argument definitions for `studyboard`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use studyboard::config::ConfigOverrides;
use studyboard::core::gpa::GradeScale;
use studyboard::core::report::ReportFormat;
use studyboard::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// GPA scale argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ScaleArg {
    /// 0–10 scale
    Ten,
    /// 0–4.0 scale
    Four,
}

impl From<ScaleArg> for GradeScale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Ten => Self::Ten,
            ScaleArg::Four => Self::Four,
        }
    }
}

/// Report format argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ReportArg {
    /// Markdown tables
    Markdown,
    /// Self-contained HTML page
    Html,
}

impl From<ReportArg> for ReportFormat {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Markdown => Self::Markdown,
            ReportArg::Html => Self::Html,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `scale`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Compute GPA from a pasted grade table.
    ///
    /// Reads tab-separated grade rows from FILE, or stdin when FILE is `-`.
    Grades {
        /// Grade table file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Scale the target is expressed on (defaults to config `scale`)
        #[arg(long, value_enum)]
        scale: Option<ScaleArg>,

        /// Target cumulative GPA to back-solve for
        #[arg(long, value_name = "GPA")]
        target: Option<f64>,

        /// Credits required by the whole program (defaults to config `program_credits`)
        #[arg(long, value_name = "CREDITS")]
        program_credits: Option<f64>,

        /// Also print the GPA of each term
        #[arg(long)]
        by_term: bool,

        /// Write a report in the given format
        #[arg(long, value_enum, value_name = "FORMAT")]
        report: Option<ReportArg>,

        /// Report output path (defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Build a weekly timetable from a pasted class schedule.
    ///
    /// Reads tab-separated schedule rows from FILE, or stdin when FILE is `-`.
    Timetable {
        /// Schedule file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Add a custom session: `"name|room|day|range"`, where range is
        /// `3-5` or `07:00-09:40` (repeatable)
        #[arg(long = "add", value_name = "SESSION")]
        add: Vec<String>,

        /// Write a report in the given format
        #[arg(long, value_enum, value_name = "FORMAT")]
        report: Option<ReportArg>,

        /// Report output path (defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List the period catalog, or map a clock time to its period.
    Periods {
        /// Clock time such as `09:15` or `9h15`
        #[arg(value_name = "TIME")]
        time: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studyboard",
    about = "GPA summaries and weekly timetables from pasted portal exports",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Periods { time: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.reports_dir = Some(PathBuf::from("/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.reports_dir, Some("/reports".to_string()));
    }

    #[test]
    fn test_parse_timetable_with_custom_sessions() {
        let cli = Cli::try_parse_from([
            "studyboard",
            "timetable",
            "-",
            "--add",
            "Gym|Hall|Thứ 7|1-2",
            "--add",
            "Club|B2|CN|07:00-09:40",
            "--report",
            "html",
        ])
        .unwrap();
        match cli.command {
            Command::Timetable { input, add, report, .. } => {
                assert_eq!(input, PathBuf::from("-"));
                assert_eq!(add.len(), 2);
                assert_eq!(report, Some(ReportArg::Html));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_grades_flags() {
        let cli = Cli::try_parse_from([
            "studyboard",
            "--debug",
            "grades",
            "grades.tsv",
            "--scale",
            "ten",
            "--target",
            "8.5",
            "--by-term",
        ])
        .unwrap();
        assert!(cli.debug_flag);
        match cli.command {
            Command::Grades {
                scale,
                target,
                by_term,
                program_credits,
                ..
            } => {
                assert_eq!(scale.map(GradeScale::from), Some(GradeScale::Ten));
                assert_eq!(target, Some(8.5));
                assert!(by_term);
                assert!(program_credits.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
