//! Markdown report generator
//!
//! Generates the dashboard as Markdown with an embedded Mermaid bar chart.
//! These reports render well in GitHub, GitLab, and VS Code.

use crate::core::dashboard::{Section, SubjectsView};
use crate::core::models::Week;
use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let dashboard = ctx.dashboard;

        let (subjects, progress, chart) = match ctx.subjects() {
            Section::Loaded(view) => (
                Self::generate_subjects(view),
                Self::generate_progress_table(view),
                MermaidGenerator::completion_chart(&view.progress),
            ),
            Section::Unavailable(msg) => (format!("_{msg}_\n"), format!("_{msg}_\n"), String::new()),
        };
        let schedule = match ctx.schedule() {
            Section::Loaded(week) => Self::generate_schedule_table(week),
            Section::Unavailable(msg) => format!("_{msg}_\n"),
        };

        fill_placeholders(
            MARKDOWN_TEMPLATE,
            &[
                ("title", ctx.title),
                ("generated_at", ctx.generated_display().as_str()),
                ("theme", dashboard.theme.as_str()),
                ("exam_label", ctx.exam_label()),
                ("countdown", ctx.countdown().to_string().as_str()),
                ("exam_date", ctx.exam_date_display().as_str()),
                ("quote_text", dashboard.quote.text.as_str()),
                ("quote_author", dashboard.quote.author.as_str()),
                ("subjects", subjects.as_str()),
                ("progress", progress.as_str()),
                ("completion_chart", chart.as_str()),
                ("schedule", schedule.as_str()),
            ],
        )
    }

    /// Generate one checklist per subject
    fn generate_subjects(view: &SubjectsView) -> String {
        let mut md = String::new();

        for subject in &view.subjects {
            let _ = writeln!(md, "### {}\n", subject.name);
            if subject.chapters.is_empty() {
                md.push_str("_No chapters yet._\n\n");
                continue;
            }
            for chapter in &subject.chapters {
                let mark = if chapter.completed { "x" } else { " " };
                let _ = writeln!(md, "- [{mark}] {}", chapter.name);
            }
            md.push('\n');
        }

        md
    }

    /// Generate the per-subject progress table and totals
    fn generate_progress_table(view: &SubjectsView) -> String {
        let progress = &view.progress;
        let mut table = String::new();

        table.push_str("| Subject | Completed | Total | Progress |\n");
        table.push_str("|---|---|---|---|\n");
        for s in &progress.subjects {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {}% |",
                s.name, s.completed, s.total, s.percentage
            );
        }

        let _ = writeln!(
            table,
            "\n**Chapters completed:** {} / {} ({}%) · **Study hours:** {}",
            progress.completed_chapters,
            progress.total_chapters,
            progress.overall_percentage(),
            progress.estimated_study_hours
        );

        table
    }

    /// Generate the day-by-day schedule table
    fn generate_schedule_table(week: &Week) -> String {
        let mut table = String::new();

        let _ = writeln!(table, "**{}**\n", week.label());
        table.push_str("| Day | Tasks |\n");
        table.push_str("|---|---|\n");
        for day in &week.days {
            let tasks = if day.tasks.is_empty() {
                "-".to_string()
            } else {
                day.tasks.join("<br>")
            };
            let _ = writeln!(table, "| {} | {tasks} |", day.name);
        }

        table
    }
}

/// Replace every `{{key}}` in `template` in a single pass.
///
/// Substituted values are never rescanned. Unknown keys are kept verbatim.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after[close + 2..];
    }

    out.push_str(rest);
    out
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::countdown::Clock;
    use crate::core::dashboard::{Dashboard, DashboardOptions};
    use crate::core::loader::StaticSource;
    use crate::core::models::{Day, Quote, Schedule, Subject};
    use chrono::{TimeZone, Utc};

    fn dashboard(source: &StaticSource) -> Dashboard {
        let exam = Utc.with_ymd_and_hms(2026, 5, 3, 0, 0, 0).unwrap();
        let options = DashboardOptions {
            clock: Clock::Fixed(Utc.with_ymd_and_hms(2026, 5, 2, 23, 0, 0).unwrap()),
            exam_label: "NEET 2026".to_string(),
            ..DashboardOptions::new(exam)
        };
        Dashboard::build(source, &options)
    }

    #[test]
    fn test_full_report() {
        let source = StaticSource {
            quotes: Some(vec![Quote::new("Practice daily.", "Coach")]),
            subjects: Some(vec![
                Subject::new("Botany", "fa-leaf")
                    .with_chapter("Cell", true)
                    .with_chapter("Tissues", false),
                Subject::new("Zoology", "fa-paw"),
            ]),
            schedule: Some(Schedule {
                weeks: vec![Week {
                    week_number: 1,
                    days: vec![
                        Day {
                            name: "Monday".to_string(),
                            tasks: vec!["Cell".to_string(), "Quiz".to_string()],
                        },
                        Day {
                            name: "Sunday".to_string(),
                            tasks: vec![],
                        },
                    ],
                }],
            }),
        };
        let dashboard = dashboard(&source);
        let md = MarkdownReporter::new()
            .render(&ReportContext::new(&dashboard, "Study Dashboard"))
            .unwrap();

        assert!(md.starts_with("# Study Dashboard"));
        assert!(md.contains("## ⏳ NEET 2026"));
        assert!(md.contains("**00d 01h 00m 00s**"));
        assert!(md.contains("> \"Practice daily.\""));
        assert!(md.contains("- [x] Cell"));
        assert!(md.contains("- [ ] Tissues"));
        assert!(md.contains("_No chapters yet._"));
        assert!(md.contains("| Botany | 1 | 2 | 50% |"));
        assert!(md.contains("| Zoology | 0 | 0 | 0% |"));
        assert!(md.contains("**Study hours:** 2"));
        assert!(md.contains("xychart-beta"));
        assert!(md.contains("| Monday | Cell<br>Quiz |"));
        assert!(md.contains("| Sunday | - |"));
        assert!(!md.contains("{{"));
    }

    #[test]
    fn test_unavailable_sections() {
        let dashboard = dashboard(&StaticSource::default());
        let md = MarkdownReporter::new()
            .render(&ReportContext::new(&dashboard, "Study Dashboard"))
            .unwrap();

        assert!(md.contains("_Error loading subjects. Please try again later._"));
        assert!(md.contains("_Error loading study schedule. Please try again later._"));
        assert!(md.contains("Mark Twain"));
        assert!(!md.contains("xychart-beta"));
    }

    #[test]
    fn test_quote_placeholders_are_not_expanded() {
        let source = StaticSource {
            quotes: Some(vec![Quote::new("Plan {{schedule}} wisely", "{{title}}")]),
            ..StaticSource::default()
        };
        let dashboard = dashboard(&source);
        let md = MarkdownReporter::new()
            .render(&ReportContext::new(&dashboard, "Study Dashboard"))
            .unwrap();

        assert!(md.contains("Plan {{schedule}} wisely"));
        assert!(md.contains("{{title}}"));
        assert_eq!(md.matches("Error loading study schedule").count(), 1);
    }

    #[test]
    fn test_fill_placeholders() {
        assert_eq!(
            fill_placeholders("a {{x}} b {{y}} {{z}}", &[("x", "{{y}}"), ("y", "2")]),
            "a {{y}} b 2 {{z}}"
        );
        assert_eq!(fill_placeholders("open {{x", &[("x", "1")]), "open {{x");
    }
}
