//! Open command handler

use crate::commands::data_source;
use study_dashboard::config::Config;
use study_dashboard::core::loader::DataSource;
use study_dashboard::core::resources::{open, ResourceKind};
use study_dashboard::error;

/// Acknowledge a lecture, notes or quiz for a known chapter
pub fn run(config: &Config, subject: &str, chapter: &str, kind: ResourceKind) {
    let subjects = match data_source(config).subjects() {
        Ok(subjects) => subjects,
        Err(e) => {
            error!("Error loading subjects: {e}");
            eprintln!("✗ Error loading subjects. Please try again later.");
            std::process::exit(1);
        }
    };

    match open(&subjects, subject, chapter, kind) {
        Ok(message) => println!("✓ {message}"),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
