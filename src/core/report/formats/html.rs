//! HTML dashboard generator
//!
//! Renders the dashboard as a single self-contained HTML page through an
//! askama template (`templates/dashboard.html`). CSS is embedded; a short
//! script keeps the countdown ticking and acknowledges resource buttons.

use crate::core::dashboard::Section;
use crate::core::models::Day;
use crate::core::report::visualization::bar_palette;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::resources::{acknowledge, ResourceKind};
use askama::Template;
use std::error::Error;

/// One chapter row inside a subject card
struct ChapterRow<'a> {
    name: &'a str,
    status_icon: &'static str,
    status_class: &'static str,
    actions: Vec<ActionButton>,
}

/// Lecture/notes/quiz button
struct ActionButton {
    title: &'static str,
    icon: &'static str,
    message: String,
}

struct SubjectCard<'a> {
    name: &'a str,
    icon: &'a str,
    chapters: Vec<ChapterRow<'a>>,
}

struct ProgressBar<'a> {
    name: &'a str,
    percentage: u8,
    fill: &'static str,
    border: &'static str,
}

struct Stats {
    completed: usize,
    total: usize,
    hours: u64,
    overall: u8,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage<'a> {
    title: &'a str,
    theme: &'static str,
    theme_icon: &'static str,
    exam_label: &'a str,
    exam_date: String,
    exam_epoch_ms: i64,
    days: String,
    hours: String,
    minutes: String,
    seconds: String,
    quote_text: &'a str,
    quote_author: &'a str,
    subjects_error: Option<&'a str>,
    cards: Vec<SubjectCard<'a>>,
    bars: Vec<ProgressBar<'a>>,
    stats: Option<Stats>,
    schedule_error: Option<&'a str>,
    week_label: String,
    schedule_days: Vec<&'a Day>,
    generated_at: String,
}

/// HTML dashboard generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn page<'a>(ctx: &ReportContext<'a>) -> DashboardPage<'a> {
        let dashboard = ctx.dashboard;
        let countdown = dashboard.countdown;

        let (subjects_error, cards, bars, stats) = match &dashboard.subjects {
            Section::Loaded(view) => (
                None,
                view.subjects
                    .iter()
                    .map(|subject| SubjectCard {
                        name: &subject.name,
                        icon: &subject.icon,
                        chapters: subject
                            .chapters
                            .iter()
                            .map(|chapter| Self::chapter_row(&subject.name, &chapter.name, chapter.completed))
                            .collect(),
                    })
                    .collect(),
                view.progress
                    .subjects
                    .iter()
                    .enumerate()
                    .map(|(idx, s)| {
                        let (fill, border) = bar_palette(idx);
                        ProgressBar {
                            name: &s.name,
                            percentage: s.percentage,
                            fill,
                            border,
                        }
                    })
                    .collect(),
                Some(Stats {
                    completed: view.progress.completed_chapters,
                    total: view.progress.total_chapters,
                    hours: view.progress.estimated_study_hours,
                    overall: view.progress.overall_percentage(),
                }),
            ),
            Section::Unavailable(msg) => (Some(msg.as_str()), Vec::new(), Vec::new(), None),
        };

        let (schedule_error, week_label, schedule_days) = match &dashboard.schedule {
            Section::Loaded(week) => (None, week.label(), week.days.iter().collect()),
            Section::Unavailable(msg) => (Some(msg.as_str()), String::new(), Vec::new()),
        };

        DashboardPage {
            title: ctx.title,
            theme: dashboard.theme.as_str(),
            theme_icon: dashboard.theme.icon(),
            exam_label: &dashboard.exam_label,
            exam_date: ctx.exam_date_display(),
            exam_epoch_ms: dashboard.exam_date.timestamp_millis(),
            days: format!("{:02}", countdown.days),
            hours: format!("{:02}", countdown.hours),
            minutes: format!("{:02}", countdown.minutes),
            seconds: format!("{:02}", countdown.seconds),
            quote_text: &dashboard.quote.text,
            quote_author: &dashboard.quote.author,
            subjects_error,
            cards,
            bars,
            stats,
            schedule_error,
            week_label,
            schedule_days,
            generated_at: ctx.generated_display(),
        }
    }

    fn chapter_row<'a>(subject: &str, chapter: &'a str, completed: bool) -> ChapterRow<'a> {
        ChapterRow {
            name: chapter,
            status_icon: if completed { "fa-check-circle" } else { "fa-circle" },
            status_class: if completed { "done" } else { "pending" },
            actions: ResourceKind::ALL
                .iter()
                .map(|kind| ActionButton {
                    title: kind.title(),
                    icon: kind.icon(),
                    message: acknowledge(subject, chapter, *kind),
                })
                .collect(),
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::page(ctx).render()?)
    }
}
