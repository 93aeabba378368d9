//! CLI argument definitions for `studydash`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use study_dashboard::config::ConfigOverrides;
use study_dashboard::core::resources::ResourceKind;
use study_dashboard::core::theme::Theme;
use study_dashboard::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
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

/// Theme argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ThemeArg {
    /// Light background
    Light,
    /// Dark background
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

/// Chapter resource argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ResourceArg {
    /// Video lecture
    Lecture,
    /// PDF notes
    Notes,
    /// Practice quiz
    Quiz,
}

impl From<ResourceArg> for ResourceKind {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Lecture => Self::Lecture,
            ResourceArg::Notes => Self::Notes,
            ResourceArg::Quiz => Self::Quiz,
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
        /// Optional configuration key to display (e.g., `level`, `data_dir`, `exam_date`)
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
pub enum ThemeSubcommand {
    /// Print the stored theme.
    Get,
    /// Switch between light and dark and save the choice.
    Toggle,
    /// Store a specific theme.
    Set {
        /// Theme to store
        #[arg(value_enum)]
        theme: ThemeArg,
    },
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
    /// Print the dashboard to the terminal.
    Show {
        /// 0-based index of the schedule week to display
        #[arg(long, value_name = "INDEX", default_value_t = 0)]
        week_index: usize,
    },
    /// Render the dashboard to a file.
    ///
    /// Writes a standalone HTML page or a Markdown report with a completion chart.
    Report {
        /// Output file path (optional; defaults to `dashboard.<ext>` in config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: html, markdown (md) or text
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// 0-based index of the schedule week to display
        #[arg(long, value_name = "INDEX", default_value_t = 0)]
        week_index: usize,
    },
    /// Print the time left until the exam.
    Countdown {
        /// Recompute and reprint every second
        #[arg(short, long)]
        watch: bool,

        /// Stop watching after this many updates
        #[arg(long, value_name = "N", requires = "watch")]
        ticks: Option<u64>,
    },
    /// Print a random motivational quote.
    Quote,
    /// Show or change the theme preference.
    ///
    /// If no subcommand is provided, prints the stored theme.
    Theme {
        #[command(subcommand)]
        subcommand: Option<ThemeSubcommand>,
    },
    /// Open a chapter resource (lecture, notes or quiz).
    Open {
        /// Subject name (case-insensitive)
        #[arg(value_name = "SUBJECT")]
        subject: String,

        /// Chapter name
        #[arg(value_name = "CHAPTER")]
        chapter: String,

        /// Resource to open
        #[arg(short, long, value_enum, default_value = "lecture")]
        kind: ResourceArg,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studydash",
    about = "Exam study dashboard: countdown, quotes, chapter progress and schedule",
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

    /// Directory containing quotes.json, subjects.json and schedule.json
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override the exam date (e.g., "2026-05-03 09:00:00")
    #[arg(long = "exam-date", value_name = "DATE")]
    pub exam_date: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            exam_date: self.exam_date.clone(),
        }
    }
}
