//! Configuration module for `studyboard`

use crate::core::gpa::GradeScale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

const DIR_VARIABLE: &str = "$STUDYBOARD";

/// Keys accepted by `get`, `set` and `unset`
pub const CONFIG_KEYS: [&str; 7] = [
    "level",
    "file",
    "verbose",
    "reports_dir",
    "scale",
    "program_credits",
    "target",
];

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// GPA defaults used when the CLI flags are omitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaConfig {
    /// Scale the target is expressed in (`ten` or `four`)
    #[serde(default)]
    pub scale: String,
    /// Credits required by the whole program
    #[serde(default)]
    pub program_credits: f64,
    /// Target cumulative GPA; `0` means no target
    #[serde(default)]
    pub target: f64,
}

impl Default for GpaConfig {
    fn default() -> Self {
        Self {
            scale: GradeScale::Four.to_string(),
            program_credits: 120.0,
            target: 0.0,
        }
    }
}

impl GpaConfig {
    /// Parsed scale, falling back to the 4-point scale on unknown values
    #[must_use]
    pub fn grade_scale(&self) -> GradeScale {
        self.scale.parse().unwrap_or(GradeScale::Four)
    }

    /// Configured target, if one is set
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        (self.target > 0.0).then_some(self.target)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// GPA settings
    #[serde(default)]
    pub gpa: GpaConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

fn parse_credits(key: &str, value: &str) -> Result<f64, String> {
    let number = value
        .parse::<f64>()
        .map_err(|_| format!("Invalid number for '{key}': '{value}'"))?;
    if !number.is_finite() || number < 0.0 {
        return Err(format!("'{key}' must be a non-negative number, got '{value}'"));
    }
    Ok(number)
}

impl Config {
    /// Get the `$STUDYBOARD` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studyboard`
    /// - macOS: `~/Library/Application Support/studyboard`
    /// - Windows: `%APPDATA%\studyboard`
    #[must_use]
    pub fn get_studyboard_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studyboard")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled, plus a zero `program_credits`.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        if self.gpa.scale.is_empty() && !defaults.gpa.scale.is_empty() {
            self.gpa.scale.clone_from(&defaults.gpa.scale);
            changed = true;
        }
        if self.gpa.program_credits <= 0.0 && defaults.gpa.program_credits > 0.0 {
            self.gpa.program_credits = defaults.gpa.program_credits;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; nothing is persisted.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir = Self::expand_variables(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_studyboard_dir`](Self::get_studyboard_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studyboard_dir().join(CONFIG_FILE_NAME)
    }

    /// Replace `$STUDYBOARD` with the config directory path
    #[must_use]
    pub fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_studyboard_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. `$STUDYBOARD` is expanded in
    /// path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from the compiled-in defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds
    /// `DefaultCLIConfigRelease.toml`.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).unwrap_or_default()
    }

    /// Load configuration from file, or create it from defaults if not found
    ///
    /// An existing file gets missing fields merged in from defaults and is
    /// saved back when that changed anything. Falls back to defaults on any
    /// read or parse error.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Same as [`load`](Self::load) against an explicit file
    #[must_use]
    pub fn load_from(config_file: &std::path::Path) -> Self {
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save_to(config_file);
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if serialization fails, or the directory or file cannot
    /// be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to an explicit file
    ///
    /// # Errors
    /// Same as [`save`](Self::save)
    pub fn save_to(&self, config_file: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys are listed in [`CONFIG_KEYS`]; `reports-dir` and
    /// `program-credits` are accepted as aliases.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "scale" => Some(self.gpa.scale.clone()),
            "program_credits" | "program-credits" => Some(self.gpa.program_credits.to_string()),
            "target" => Some(self.gpa.target.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to
    /// persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value does not
    /// parse (`verbose` must be a boolean, `scale` `ten` or `four`, numbers
    /// non-negative).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "scale" => {
                let scale: GradeScale = value.parse()?;
                self.gpa.scale = scale.to_string();
            }
            "program_credits" | "program-credits" => {
                self.gpa.program_credits = parse_credits(key, value)?;
            }
            "target" => self.gpa.target = parse_credits(key, value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its value in `defaults`)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "scale" => self.gpa.scale.clone_from(&defaults.gpa.scale),
            "program_credits" | "program-credits" => {
                self.gpa.program_credits = defaults.gpa.program_credits;
            }
            "target" => self.gpa.target = defaults.gpa.target,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds when there is no file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[gpa]")?;
        writeln!(f, "  scale = \"{}\"", self.gpa.scale)?;
        writeln!(f, "  program_credits = {}", self.gpa.program_credits)?;
        writeln!(f, "  target = {}", self.gpa.target)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = Config::from_defaults();
        assert!(!config.logging.level.is_empty());
        assert_eq!(config.gpa.grade_scale(), GradeScale::Four);
        assert!((config.gpa.program_credits - 120.0).abs() < f64::EPSILON);
        assert_eq!(config.gpa.target(), None);
        assert!(!config.paths.reports_dir.contains(DIR_VARIABLE));
    }

    #[test]
    fn test_set_validates_values() {
        let mut config = Config::from_defaults();
        assert!(config.set("scale", "10").is_ok());
        assert_eq!(config.gpa.scale, "ten");
        assert!(config.set("scale", "7").is_err());
        assert!(config.set("target", "-1").is_err());
        assert!(config.set("program_credits", "abc").is_err());
        assert!(config.set("verbose", "maybe").is_err());
        assert!(config.set("nope", "x").is_err());
    }

    #[test]
    fn test_missing_gpa_section_uses_defaults() {
        let config = Config::from_toml("[logging]\nlevel = \"info\"\n").unwrap();
        assert_eq!(config.gpa, GpaConfig::default());
    }
}
