//! Dashboard rendering
//!
//! Renders a built [`Dashboard`] as a standalone HTML page, a Markdown report
//! with a Mermaid chart, or plain text for the terminal.

pub mod formats;
pub mod visualization;

use crate::core::countdown::Remaining;
use crate::core::dashboard::{Dashboard, Section, SubjectsView};
use crate::core::models::{Quote, Week};
use crate::core::progress::ProgressSummary;
use chrono::{DateTime, Local, Utc};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};
pub use visualization::MermaidGenerator;

/// Page title used when none is given
pub const DEFAULT_TITLE: &str = "Study Dashboard";

/// Data context for report generation
///
/// Wraps the dashboard view models with display helpers shared by every
/// format.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Built dashboard
    pub dashboard: &'a Dashboard,
    /// Page/report title
    pub title: &'a str,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(dashboard: &'a Dashboard, title: &'a str) -> Self {
        Self { dashboard, title }
    }

    /// Heading above the countdown
    #[must_use]
    pub fn exam_label(&self) -> &str {
        &self.dashboard.exam_label
    }

    /// Countdown fields
    #[must_use]
    pub const fn countdown(&self) -> &Remaining {
        &self.dashboard.countdown
    }

    /// Exam date in local time (e.g., "May 3, 2026 00:00")
    #[must_use]
    pub fn exam_date_display(&self) -> String {
        local_display(self.dashboard.exam_date)
    }

    /// Build time in local time
    #[must_use]
    pub fn generated_display(&self) -> String {
        local_display(self.dashboard.generated_at)
    }

    /// Quote of the day
    #[must_use]
    pub const fn quote(&self) -> &Quote {
        &self.dashboard.quote
    }

    /// Subject region
    #[must_use]
    pub const fn subjects(&self) -> &Section<SubjectsView> {
        &self.dashboard.subjects
    }

    /// Progress summary, if subjects loaded
    #[must_use]
    pub fn progress(&self) -> Option<&ProgressSummary> {
        self.dashboard.progress()
    }

    /// Schedule region
    #[must_use]
    pub const fn schedule(&self) -> &Section<Week> {
        &self.dashboard.schedule
    }
}

fn local_display(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%B %-d, %Y %H:%M").to_string()
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Render with the generator matching `format`.
///
/// # Errors
/// Returns an error if rendering fails
pub fn render(format: ReportFormat, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
    match format {
        ReportFormat::Html => HtmlReporter::new().render(ctx),
        ReportFormat::Markdown => MarkdownReporter::new().render(ctx),
        ReportFormat::Text => TextReporter::new().render(ctx),
    }
}

/// Write a report with the generator matching `format`.
///
/// # Errors
/// Returns an error if rendering or writing fails
pub fn generate(
    format: ReportFormat,
    ctx: &ReportContext,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    match format {
        ReportFormat::Html => HtmlReporter::new().generate(ctx, output_path),
        ReportFormat::Markdown => MarkdownReporter::new().generate(ctx, output_path),
        ReportFormat::Text => TextReporter::new().generate(ctx, output_path),
    }
}
