//! End-to-end dashboard tests over a data directory on disk.

use chrono::{TimeZone, Utc};
use std::fs;
use study_dashboard::core::countdown::Clock;
use study_dashboard::core::dashboard::{
    Dashboard, DashboardOptions, SCHEDULE_UNAVAILABLE, SUBJECTS_UNAVAILABLE,
};
use study_dashboard::core::loader::{DataDir, QUOTES_FILE, SCHEDULE_FILE, SUBJECTS_FILE};
use study_dashboard::core::models::Quote;
use study_dashboard::core::report::{self, ReportContext, ReportFormat};
use tempfile::TempDir;

const QUOTES: &str = r#"[{"text": "Keep going.", "author": "Anon"}]"#;
const SUBJECTS: &str = r#"[
  {"name": "Botany", "icon": "fa-leaf", "chapters": [
    {"name": "Cell", "completed": true},
    {"name": "Tissues", "completed": false},
    {"name": "Plant Kingdom", "completed": true}
  ]}
]"#;
const SCHEDULE: &str = r#"{"weeks": [{"weekNumber": 1, "days": [{"name": "Monday", "tasks": ["Botany: Cell"]}]}]}"#;

fn options() -> DashboardOptions {
    let exam = Utc.with_ymd_and_hms(2026, 5, 3, 0, 0, 0).unwrap();
    DashboardOptions {
        clock: Clock::Fixed(Utc.with_ymd_and_hms(2026, 4, 27, 19, 56, 58).unwrap()),
        ..DashboardOptions::new(exam)
    }
}

fn data_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("Failed to write data file");
    }
    dir
}

#[test]
fn full_data_directory() {
    let dir = data_dir(&[
        (QUOTES_FILE, QUOTES),
        (SUBJECTS_FILE, SUBJECTS),
        (SCHEDULE_FILE, SCHEDULE),
    ]);
    let dashboard = Dashboard::build(&DataDir::new(dir.path()), &options());

    assert_eq!(dashboard.countdown.to_string(), "05d 04h 03m 02s");
    assert_eq!(dashboard.quote, Quote::new("Keep going.", "Anon"));

    let progress = dashboard.progress().expect("subjects loaded");
    assert_eq!(progress.total_chapters, 3);
    assert_eq!(progress.completed_chapters, 2);
    assert_eq!(progress.estimated_study_hours, 5);
    assert_eq!(progress.percentage("Botany"), Some(67));

    assert_eq!(dashboard.schedule.loaded().map(|w| w.label()), Some("Week 1".to_string()));
}

#[test]
fn missing_and_malformed_files_degrade_independently() {
    let dir = data_dir(&[(QUOTES_FILE, "not json"), (SUBJECTS_FILE, SUBJECTS)]);
    let dashboard = Dashboard::build(&DataDir::new(dir.path()), &options());

    assert_eq!(dashboard.quote, Quote::fallback());
    assert!(dashboard.progress().is_some());
    assert_eq!(dashboard.schedule.message(), Some(SCHEDULE_UNAVAILABLE));
}

#[test]
fn wrong_subject_shape_is_unavailable() {
    let dir = data_dir(&[
        (QUOTES_FILE, QUOTES),
        (SUBJECTS_FILE, r#"{"name": "Botany"}"#),
        (SCHEDULE_FILE, SCHEDULE),
    ]);
    let dashboard = Dashboard::build(&DataDir::new(dir.path()), &options());

    assert_eq!(dashboard.subjects.message(), Some(SUBJECTS_UNAVAILABLE));
    assert!(dashboard.schedule.loaded().is_some());
}

#[test]
fn reports_are_written_in_each_format() {
    let dir = data_dir(&[
        (QUOTES_FILE, QUOTES),
        (SUBJECTS_FILE, SUBJECTS),
        (SCHEDULE_FILE, SCHEDULE),
    ]);
    let dashboard = Dashboard::build(&DataDir::new(dir.path()), &options());
    let ctx = ReportContext::new(&dashboard, "Study Dashboard");

    for format in [ReportFormat::Html, ReportFormat::Markdown, ReportFormat::Text] {
        let path = dir
            .path()
            .join("out")
            .join(format!("dashboard.{}", format.extension()));
        report::generate(format, &ctx, &path).expect("report should render");

        let content = fs::read_to_string(&path).expect("report file");
        assert!(content.contains("Botany"), "{format} report lacks subjects");
        assert!(content.contains("Keep going."), "{format} report lacks quote");
    }
}
