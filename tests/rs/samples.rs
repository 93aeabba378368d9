//! Checks that the bundled sample data loads and aggregates as documented.

use std::path::PathBuf;
use study_dashboard::core::loader::{DataDir, DataSource};
use study_dashboard::core::progress::summarize;

fn samples() -> DataDir {
    DataDir::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/data"))
}

#[test]
fn sample_quotes_load() {
    let quotes = samples().quotes().expect("quotes.json should parse");
    assert!(!quotes.is_empty());
    assert!(quotes.iter().all(|q| !q.text.is_empty() && !q.author.is_empty()));
}

#[test]
fn sample_subjects_aggregate() {
    let subjects = samples().subjects().expect("subjects.json should parse");
    let summary = summarize(&subjects);

    assert_eq!(summary.total_chapters, 14);
    assert_eq!(summary.completed_chapters, 6);
    assert_eq!(summary.estimated_study_hours, 15);
    assert_eq!(summary.percentage("Physics"), Some(50));
    assert_eq!(summary.percentage("Chemistry"), Some(33));
    assert_eq!(summary.percentage("Botany"), Some(67));
    assert_eq!(summary.percentage("Zoology"), Some(25));
    assert_eq!(summary.overall_percentage(), 43);
}

#[test]
fn sample_schedule_has_numbered_weeks() {
    let schedule = samples().schedule().expect("schedule.json should parse");
    let first = schedule.select_week(0).expect("week 0");
    assert_eq!(first.label(), "Week 1");
    assert_eq!(first.days.len(), 7);
    assert!(schedule.select_week(schedule.weeks.len()).is_err());
}
