//! Dashboard composition
//!
//! Builds the view models for every page region from a [`DataSource`]. The
//! quote, subject and schedule loads run concurrently and fail independently:
//! a failed load degrades its own region and never the others.

use crate::core::countdown::{remaining, Clock, Remaining};
use crate::core::error::DashboardError;
use crate::core::loader::DataSource;
use crate::core::models::{Quote, Schedule, Subject, Week};
use crate::core::progress::{summarize_with_rate, ProgressSummary, DEFAULT_HOURS_PER_CHAPTER};
use crate::core::quotes::pick_or_fallback;
use crate::core::schedule::DEFAULT_WEEK_INDEX;
use crate::core::theme::Theme;
use crate::{error, info, warn};
use chrono::{DateTime, Utc};
use std::thread;

/// Message shown in the subject and progress regions when subjects fail to load
pub const SUBJECTS_UNAVAILABLE: &str = "Error loading subjects. Please try again later.";

/// Message shown in the schedule region when the schedule fails to load
pub const SCHEDULE_UNAVAILABLE: &str = "Error loading study schedule. Please try again later.";

/// A page region that either loaded or shows an inline message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<T> {
    /// Region content
    Loaded(T),
    /// Inline message replacing the content
    Unavailable(String),
}

impl<T> Section<T> {
    /// Content, if loaded
    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Unavailable(_) => None,
        }
    }

    /// Inline message, if unavailable
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Unavailable(msg) => Some(msg),
        }
    }
}

/// Inputs that are not loaded from the data source
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Exam instant the countdown targets
    pub exam_date: DateTime<Utc>,
    /// Heading above the countdown
    pub exam_label: String,
    /// Source of "now"
    pub clock: Clock,
    /// 0-based week to display
    pub week_index: usize,
    /// Theme preference read at startup
    pub theme: Theme,
    /// Study hours credited per completed chapter
    pub hours_per_chapter: f64,
}

impl DashboardOptions {
    /// Options with defaults for everything but the exam date
    #[must_use]
    pub fn new(exam_date: DateTime<Utc>) -> Self {
        Self {
            exam_date,
            exam_label: "Exam".to_string(),
            clock: Clock::System,
            week_index: DEFAULT_WEEK_INDEX,
            theme: Theme::default(),
            hours_per_chapter: DEFAULT_HOURS_PER_CHAPTER,
        }
    }
}

/// Subject cards and the progress they produce
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectsView {
    /// Subjects with their chapters, in source order
    pub subjects: Vec<Subject>,
    /// Aggregated completion
    pub progress: ProgressSummary,
}

/// Everything needed to render the page
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Heading above the countdown
    pub exam_label: String,
    /// Countdown target
    pub exam_date: DateTime<Utc>,
    /// Instant the dashboard was built at
    pub generated_at: DateTime<Utc>,
    /// Time left
    pub countdown: Remaining,
    /// Quote of the day (fallback when the source failed or was empty)
    pub quote: Quote,
    /// Subject cards, progress bars, chart and stats
    pub subjects: Section<SubjectsView>,
    /// Selected schedule week
    pub schedule: Section<Week>,
    /// Active theme
    pub theme: Theme,
}

impl Dashboard {
    /// Build the dashboard from a data source.
    ///
    /// Never fails: load errors are logged and turned into fallback content.
    #[must_use]
    pub fn build<S: DataSource + ?Sized>(source: &S, options: &DashboardOptions) -> Self {
        let now = options.clock.now();

        let (quotes, subjects, schedule) = thread::scope(|scope| {
            let quotes = scope.spawn(|| source.quotes());
            let subjects = scope.spawn(|| source.subjects());
            let schedule = scope.spawn(|| source.schedule());
            (
                join(quotes, "quotes"),
                join(subjects, "subjects"),
                join(schedule, "schedule"),
            )
        });

        let dashboard = Self {
            exam_label: options.exam_label.clone(),
            exam_date: options.exam_date,
            generated_at: now,
            countdown: remaining(options.exam_date, now),
            quote: quote_region(quotes),
            subjects: subjects_region(subjects, options.hours_per_chapter),
            schedule: schedule_region(schedule, options.week_index),
            theme: options.theme,
        };

        info!(
            "Dashboard built: {} left, subjects {}, schedule {}",
            dashboard.countdown,
            region_state(&dashboard.subjects),
            region_state(&dashboard.schedule)
        );
        dashboard
    }

    /// Progress summary, if subjects loaded
    #[must_use]
    pub fn progress(&self) -> Option<&ProgressSummary> {
        self.subjects.loaded().map(|view| &view.progress)
    }
}

fn join<T>(
    handle: thread::ScopedJoinHandle<'_, Result<T, DashboardError>>,
    resource: &str,
) -> Result<T, DashboardError> {
    handle
        .join()
        .unwrap_or_else(|_| Err(DashboardError::fetch(resource, "loader thread panicked")))
}

const fn region_state<T>(section: &Section<T>) -> &'static str {
    match section {
        Section::Loaded(_) => "loaded",
        Section::Unavailable(_) => "unavailable",
    }
}

fn quote_region(quotes: Result<Vec<Quote>, DashboardError>) -> Quote {
    match quotes {
        Ok(quotes) => {
            if quotes.is_empty() {
                warn!("Quote collection is empty; using fallback quote");
            }
            pick_or_fallback(&quotes)
        }
        Err(e) => {
            error!("Error loading quotes: {e}");
            Quote::fallback()
        }
    }
}

fn subjects_region(
    subjects: Result<Vec<Subject>, DashboardError>,
    hours_per_chapter: f64,
) -> Section<SubjectsView> {
    match subjects {
        Ok(subjects) => {
            let progress = summarize_with_rate(&subjects, hours_per_chapter);
            Section::Loaded(SubjectsView { subjects, progress })
        }
        Err(e) => {
            error!("Error loading subjects: {e}");
            Section::Unavailable(SUBJECTS_UNAVAILABLE.to_string())
        }
    }
}

fn schedule_region(schedule: Result<Schedule, DashboardError>, index: usize) -> Section<Week> {
    let schedule = match schedule {
        Ok(schedule) => schedule,
        Err(e) => {
            error!("Error loading schedule: {e}");
            return Section::Unavailable(SCHEDULE_UNAVAILABLE.to_string());
        }
    };

    match schedule.select_week(index) {
        Ok(week) => Section::Loaded(week.clone()),
        Err(e) => {
            warn!("{e}");
            Section::Unavailable(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::StaticSource;
    use crate::core::models::Day;

    fn fixed_options() -> DashboardOptions {
        let exam = DateTime::parse_from_rfc3339("2026-05-03T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let now = DateTime::parse_from_rfc3339("2026-05-01T22:30:15Z")
            .unwrap()
            .with_timezone(&Utc);
        DashboardOptions {
            clock: Clock::Fixed(now),
            ..DashboardOptions::new(exam)
        }
    }

    fn full_source() -> StaticSource {
        StaticSource {
            quotes: Some(vec![Quote::new("Dream big.", "Anon")]),
            subjects: Some(vec![Subject::new("Botany", "fa-leaf")
                .with_chapter("Cell", true)
                .with_chapter("Tissues", false)]),
            schedule: Some(Schedule {
                weeks: vec![Week {
                    week_number: 1,
                    days: vec![Day {
                        name: "Monday".to_string(),
                        tasks: vec!["Botany: Cell".to_string()],
                    }],
                }],
            }),
        }
    }

    #[test]
    fn test_all_regions_loaded() {
        let dashboard = Dashboard::build(&full_source(), &fixed_options());

        assert_eq!(dashboard.quote.text, "Dream big.");
        assert_eq!(dashboard.progress().unwrap().percentage("Botany"), Some(50));
        assert_eq!(dashboard.schedule.loaded().unwrap().week_number, 1);
        assert_eq!(
            dashboard.countdown,
            Remaining {
                days: 1,
                hours: 1,
                minutes: 29,
                seconds: 45
            }
        );
    }

    #[test]
    fn test_failures_are_isolated() {
        let source = StaticSource {
            quotes: None,
            ..full_source()
        };
        let dashboard = Dashboard::build(&source, &fixed_options());
        assert_eq!(dashboard.quote, Quote::fallback());
        assert!(dashboard.subjects.loaded().is_some());
        assert!(dashboard.schedule.loaded().is_some());

        let source = StaticSource {
            subjects: None,
            ..full_source()
        };
        let dashboard = Dashboard::build(&source, &fixed_options());
        assert_eq!(dashboard.subjects.message(), Some(SUBJECTS_UNAVAILABLE));
        assert!(dashboard.progress().is_none());
        assert_eq!(dashboard.quote.text, "Dream big.");
        assert!(dashboard.schedule.loaded().is_some());

        let source = StaticSource {
            schedule: None,
            ..full_source()
        };
        let dashboard = Dashboard::build(&source, &fixed_options());
        assert_eq!(dashboard.schedule.message(), Some(SCHEDULE_UNAVAILABLE));
        assert!(dashboard.subjects.loaded().is_some());
    }

    #[test]
    fn test_empty_quotes_fall_back() {
        let source = StaticSource {
            quotes: Some(Vec::new()),
            ..full_source()
        };
        let dashboard = Dashboard::build(&source, &fixed_options());
        assert_eq!(dashboard.quote.author, "Mark Twain");
    }

    #[test]
    fn test_week_out_of_range_degrades_schedule() {
        let options = DashboardOptions {
            week_index: 4,
            ..fixed_options()
        };
        let dashboard = Dashboard::build(&full_source(), &options);
        let message = dashboard.schedule.message().unwrap();
        assert!(message.contains("out of range"));
    }

    #[test]
    fn test_elapsed_exam() {
        let mut options = fixed_options();
        options.clock = Clock::Fixed(options.exam_date);
        let dashboard = Dashboard::build(&full_source(), &options);
        assert!(dashboard.countdown.is_elapsed());
    }
}
