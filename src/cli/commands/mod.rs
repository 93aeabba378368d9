//! CLI command handlers for `studydash`.
//!
//! Each command is implemented in its own submodule. The helpers here turn
//! the loaded configuration into dashboard inputs.

pub mod config;
pub mod countdown;
pub mod open;
pub mod quote;
pub mod report;
pub mod show;
pub mod theme;

use chrono::{DateTime, Utc};
use study_dashboard::config::Config;
use study_dashboard::core::countdown::{parse_exam_date, DEFAULT_EXAM_DATE};
use study_dashboard::core::dashboard::DashboardOptions;
use study_dashboard::core::loader::DataDir;
use study_dashboard::core::progress::DEFAULT_HOURS_PER_CHAPTER;
use study_dashboard::error;

/// Data source rooted at config `paths.data_dir`
pub fn data_source(config: &Config) -> DataDir {
    DataDir::new(&config.paths.data_dir)
}

/// Exam instant from config, falling back to the built-in date when unparseable
pub fn exam_date(config: &Config) -> DateTime<Utc> {
    match parse_exam_date(&config.exam.date) {
        Ok(date) => date,
        Err(e) => {
            error!("Invalid exam date in config: {e}; using {DEFAULT_EXAM_DATE}");
            parse_exam_date(DEFAULT_EXAM_DATE).unwrap_or_else(|_| Utc::now())
        }
    }
}

/// Dashboard options for the configured exam, theme and study rate
pub fn dashboard_options(config: &Config, week_index: usize) -> DashboardOptions {
    let hours_per_chapter = if config.study.hours_per_chapter > 0.0 {
        config.study.hours_per_chapter
    } else {
        DEFAULT_HOURS_PER_CHAPTER
    };

    let mut options = DashboardOptions::new(exam_date(config));
    if !config.exam.label.is_empty() {
        options.exam_label.clone_from(&config.exam.label);
    }
    options.week_index = week_index;
    options.theme = config.theme();
    options.hours_per_chapter = hours_per_chapter;
    options
}
