//! Report command handler
//!
//! Renders the dashboard to an HTML page, a Markdown report or plain text.

use crate::commands::{dashboard_options, data_source};
use study_dashboard::config::Config;
use study_dashboard::core::dashboard::Dashboard;
use study_dashboard::core::report::{self, ReportContext, ReportFormat, DEFAULT_TITLE};
use study_dashboard::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Base name of reports written to the reports directory
const REPORT_STEM: &str = "dashboard";

/// Run the report command.
///
/// # Arguments
/// * `output_file` - Optional output path
/// * `format_str` - Report format (html, markdown, text)
/// * `week_index` - Schedule week to include
/// * `config` - Configuration containing the data and reports directories
pub fn run(output_file: Option<&Path>, format_str: &str, week_index: usize, config: &Config) {
    if let Err(err) = generate_report(output_file, format_str, week_index, config) {
        error!("Report generation failed: {err}");
        eprintln!("{err}");
    }
}

/// Output path for `format` when none is given
fn default_output_path(config: &Config, format: ReportFormat) -> PathBuf {
    PathBuf::from(&config.paths.reports_dir).join(format!("{REPORT_STEM}.{}", format.extension()))
}

fn generate_report(
    output_file: Option<&Path>,
    format_str: &str,
    week_index: usize,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: html, markdown, or text"))?;

    let dashboard = Dashboard::build(&data_source(config), &dashboard_options(config, week_index));
    let ctx = ReportContext::new(&dashboard, DEFAULT_TITLE);

    let output_path =
        output_file.map_or_else(|| default_output_path(config, format), Path::to_path_buf);

    report::generate(format, &ctx, &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());

    print_summary(&dashboard);
    Ok(())
}

/// Print a summary of the rendered dashboard
fn print_summary(dashboard: &Dashboard) {
    println!("\n=== Summary ===");
    println!("{}: {}", dashboard.exam_label, dashboard.countdown);
    match dashboard.progress() {
        Some(progress) => println!(
            "Chapters: {}/{} ({}%), study hours: {}",
            progress.completed_chapters,
            progress.total_chapters,
            progress.overall_percentage(),
            progress.estimated_study_hours
        ),
        None => println!("⚠️  Subjects unavailable"),
    }
    if let Some(msg) = dashboard.schedule.message() {
        println!("⚠️  {msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let mut config = Config::from_defaults();
        config.paths.reports_dir = "/tmp/reports".to_string();
        assert_eq!(
            default_output_path(&config, ReportFormat::Markdown),
            PathBuf::from("/tmp/reports/dashboard.md")
        );
        assert_eq!(
            default_output_path(&config, ReportFormat::Html),
            PathBuf::from("/tmp/reports/dashboard.html")
        );
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let config = Config::from_defaults();
        let err = generate_report(None, "pdf", 0, &config).unwrap_err();
        assert!(err.contains("Use: html, markdown, or text"));
    }
}
