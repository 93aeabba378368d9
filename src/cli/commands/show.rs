//! Show command handler

use crate::commands::{dashboard_options, data_source};
use study_dashboard::config::Config;
use study_dashboard::core::dashboard::Dashboard;
use study_dashboard::core::report::{ReportContext, ReportGenerator, TextReporter, DEFAULT_TITLE};
use study_dashboard::{error, verbose};

/// Build the dashboard and print it as text
pub fn run(config: &Config, week_index: usize) {
    let source = data_source(config);
    verbose!("Loading study data from {}", source.root().display());

    let dashboard = Dashboard::build(&source, &dashboard_options(config, week_index));
    match TextReporter::new().render(&ReportContext::new(&dashboard, DEFAULT_TITLE)) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            error!("Failed to render dashboard: {e}");
            eprintln!("✗ Failed to render dashboard: {e}");
        }
    }
}
