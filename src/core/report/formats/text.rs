//! Plain-text dashboard for the terminal

use crate::core::dashboard::Section;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Width of the progress bars, in characters
const BAR_WIDTH: usize = 20;

/// Plain-text renderer used by `studydash show`
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `[#########-----------]` for a 0-100 percentage
    #[must_use]
    pub fn bar(percentage: u8) -> String {
        let filled = usize::from(percentage.min(100)) * BAR_WIDTH / 100;
        format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
    }

    fn write_report(ctx: &ReportContext, out: &mut String) -> std::fmt::Result {
        let dashboard = ctx.dashboard;

        writeln!(out, "=== {} ===\n", ctx.title)?;
        writeln!(out, "{}: {} (until {})", ctx.exam_label(), ctx.countdown(), ctx.exam_date_display())?;
        writeln!(out, "\n\"{}\"\n  - {}", dashboard.quote.text, dashboard.quote.author)?;

        writeln!(out, "\n--- Progress ---")?;
        match ctx.subjects() {
            Section::Loaded(view) => {
                let width = view
                    .progress
                    .subjects
                    .iter()
                    .map(|s| s.name.chars().count())
                    .max()
                    .unwrap_or(0);
                for s in &view.progress.subjects {
                    writeln!(
                        out,
                        "{:<width$}  {} {:>3}%  ({}/{})",
                        s.name,
                        Self::bar(s.percentage),
                        s.percentage,
                        s.completed,
                        s.total
                    )?;
                }
                writeln!(
                    out,
                    "Chapters: {}/{}  Study hours: {}",
                    view.progress.completed_chapters,
                    view.progress.total_chapters,
                    view.progress.estimated_study_hours
                )?;
            }
            Section::Unavailable(msg) => writeln!(out, "{msg}")?,
        }

        match ctx.schedule() {
            Section::Loaded(week) => {
                writeln!(out, "\n--- Schedule: {} ---", week.label())?;
                for day in &week.days {
                    writeln!(out, "{}", day.name)?;
                    for task in &day.tasks {
                        writeln!(out, "  • {task}")?;
                    }
                }
            }
            Section::Unavailable(msg) => {
                writeln!(out, "\n--- Schedule ---")?;
                writeln!(out, "{msg}")?;
            }
        }

        Ok(())
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        Self::write_report(ctx, &mut out)?;
        Ok(out)
    }
}
