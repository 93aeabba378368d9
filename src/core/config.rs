//! Configuration module for `studydash`

use crate::core::countdown::parse_exam_date;
use crate::core::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside config values
const DIR_VARIABLE: &str = "$STUDYDASH";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
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
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding `quotes.json`, `subjects.json` and `schedule.json`
    #[serde(default)]
    pub data_dir: String,
    /// Directory for rendered dashboard reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Exam configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamConfig {
    /// Exam date-time (RFC 3339, `YYYY-MM-DD HH:MM:SS` local, or `YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,
    /// Heading shown above the countdown
    #[serde(default)]
    pub label: String,
}

/// Display configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Theme preference (`light` or `dark`)
    #[serde(default)]
    pub theme: String,
}

/// Study estimate configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Hours credited per completed chapter; 0 means "use the built-in rate"
    #[serde(default)]
    pub hours_per_chapter: f64,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Exam settings
    #[serde(default)]
    pub exam: ExamConfig,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Study estimate settings
    #[serde(default)]
    pub study: StudyConfig,
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
    /// Override data directory
    pub data_dir: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override exam date
    pub exam_date: Option<String>,
}

impl Config {
    /// Get the `$STUDYDASH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studydash`
    /// - macOS: `~/Library/Application Support/studydash`
    /// - Windows: `%APPDATA%\studydash`
    #[must_use]
    pub fn get_studydash_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studydash")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty in the current config and non-empty in
    /// defaults are updated, so upgrades pick up new keys without touching
    /// user settings.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (value, default) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.data_dir, &defaults.paths.data_dir),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
            (&mut self.exam.date, &defaults.exam.date),
            (&mut self.exam.label, &defaults.exam.label),
            (&mut self.display.theme, &defaults.display.theme),
        ] {
            if value.is_empty() && !default.is_empty() {
                value.clone_from(default);
                changed = true;
            }
        }

        if self.study.hours_per_chapter <= 0.0 && defaults.study.hours_per_chapter > 0.0 {
            self.study.hours_per_chapter = defaults.study.hours_per_chapter;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto this configuration in place
    ///
    /// Only non-`None` values replace config values. A config changed this way
    /// must not be saved; use [`with_overrides`](Self::with_overrides) to keep
    /// the stored settings separate.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(date) = &overrides.exam_date {
            self.exam.date.clone_from(date);
        }
    }

    /// Copy of this configuration with CLI overrides applied
    ///
    /// Overrides last for a single run: `self` stays untouched and is the
    /// value to mutate and [`save()`](Self::save).
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut effective = self.clone();
        effective.apply_overrides(overrides);
        effective
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, in
    /// the directory returned by [`get_studydash_dir`](Self::get_studydash_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studydash_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$STUDYDASH` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_studydash_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults (empty strings, `false`, `0`).
    /// `$STUDYDASH` in path values is expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - File exists: load it, merge missing fields from defaults, save if anything was added
    /// - First run: create the config directory and write the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Theme preference, light when unset or unrecognized
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_preference(&self.display.theme)
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_dir`, `reports_dir`,
    /// `exam_date`, `exam_label`, `theme`, `hours_per_chapter`. Dashed
    /// spellings (`data-dir`) are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_dir" | "data-dir" => Some(self.paths.data_dir.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "exam_date" | "exam-date" => Some(self.exam.date.clone()),
            "exam_label" | "exam-label" => Some(self.exam.label.clone()),
            "theme" => Some(self.display.theme.clone()),
            "hours_per_chapter" | "hours-per-chapter" => {
                Some(self.study.hours_per_chapter.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid for it
    /// (`verbose` must be a boolean, `theme` light/dark, `hours_per_chapter` a
    /// non-negative number, `exam_date` a recognizable date).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_dir" | "data-dir" => self.paths.data_dir = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "exam_date" | "exam-date" => {
                parse_exam_date(value).map_err(|e| e.to_string())?;
                self.exam.date = value.to_string();
            }
            "exam_label" | "exam-label" => self.exam.label = value.to_string(),
            "theme" => {
                let theme = value.parse::<Theme>().map_err(|e| e.to_string())?;
                self.display.theme = theme.to_string();
            }
            "hours_per_chapter" | "hours-per-chapter" => {
                let hours = value
                    .parse::<f64>()
                    .ok()
                    .filter(|h| h.is_finite() && *h >= 0.0)
                    .ok_or_else(|| format!("Invalid value for 'hours_per_chapter': '{value}'"))?;
                self.study.hours_per_chapter = hours;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_dir" | "data-dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "exam_date" | "exam-date" => self.exam.date.clone_from(&defaults.exam.date),
            "exam_label" | "exam-label" => self.exam.label.clone_from(&defaults.exam.label),
            "theme" => self.display.theme.clone_from(&defaults.display.theme),
            "hours_per_chapter" | "hours-per-chapter" => {
                self.study.hours_per_chapter = defaults.study.hours_per_chapter;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
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
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[exam]")?;
        writeln!(f, "  date = \"{}\"", self.exam.date)?;
        writeln!(f, "  label = \"{}\"", self.exam.label)?;

        writeln!(f, "\n[display]")?;
        writeln!(f, "  theme = \"{}\"", self.display.theme)?;

        writeln!(f, "\n[study]")?;
        writeln!(f, "  hours_per_chapter = {}", self.study.hours_per_chapter)?;

        Ok(())
    }
}
