//! Chapter completion aggregation
//!
//! Turns the subject list into per-subject completion percentages and the
//! overall totals shown in the stats panel.

use crate::core::error::DashboardError;
use crate::core::models::Subject;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Study hours credited for every completed chapter
pub const DEFAULT_HOURS_PER_CHAPTER: f64 = 2.5;

/// Completion figures for one subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectProgress {
    /// Subject name
    pub name: String,
    /// Subject icon identifier
    pub icon: String,
    /// Completed chapters
    pub completed: usize,
    /// All chapters
    pub total: usize,
    /// Rounded completion percentage (0-100); 0 when the subject has no chapters
    pub percentage: u8,
}

/// Aggregated progress across all subjects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Per-subject progress in source order
    pub subjects: Vec<SubjectProgress>,
    /// Sum of chapter counts
    pub total_chapters: usize,
    /// Sum of completed chapters
    pub completed_chapters: usize,
    /// `floor(completed_chapters * hours_per_chapter)`
    pub estimated_study_hours: u64,
}

impl ProgressSummary {
    /// Completion percentage for a subject by name
    #[must_use]
    pub fn percentage(&self, subject: &str) -> Option<u8> {
        self.subjects
            .iter()
            .find(|s| s.name == subject)
            .map(|s| s.percentage)
    }

    /// Subject name to percentage mapping
    #[must_use]
    pub fn per_subject(&self) -> BTreeMap<String, u8> {
        self.subjects
            .iter()
            .map(|s| (s.name.clone(), s.percentage))
            .collect()
    }

    /// `(name, percentage)` pairs in source order, as plotted by the chart
    #[must_use]
    pub fn completion_rates(&self) -> Vec<(&str, u8)> {
        self.subjects
            .iter()
            .map(|s| (s.name.as_str(), s.percentage))
            .collect()
    }

    /// Overall completion percentage across every chapter
    #[must_use]
    pub fn overall_percentage(&self) -> u8 {
        percentage(self.completed_chapters, self.total_chapters)
    }
}

/// Round-half-up percentage in integer arithmetic. Zero total yields 0.
#[must_use]
pub fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    let rounded = (200 * completed + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

/// Summarize subjects with the default 2.5 hours per chapter.
#[must_use]
pub fn summarize(subjects: &[Subject]) -> ProgressSummary {
    summarize_with_rate(subjects, DEFAULT_HOURS_PER_CHAPTER)
}

/// Summarize subjects with an explicit hours-per-chapter rate.
///
/// Negative or non-finite rates count as zero hours.
#[must_use]
pub fn summarize_with_rate(subjects: &[Subject], hours_per_chapter: f64) -> ProgressSummary {
    let mut total_chapters = 0;
    let mut completed_chapters = 0;

    let per_subject = subjects
        .iter()
        .map(|subject| {
            let total = subject.chapters.len();
            let completed = subject.completed_count();
            total_chapters += total;
            completed_chapters += completed;

            SubjectProgress {
                name: subject.name.clone(),
                icon: subject.icon.clone(),
                completed,
                total,
                percentage: percentage(completed, total),
            }
        })
        .collect();

    ProgressSummary {
        subjects: per_subject,
        total_chapters,
        completed_chapters,
        estimated_study_hours: study_hours(completed_chapters, hours_per_chapter),
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn study_hours(completed: usize, hours_per_chapter: f64) -> u64 {
    if !hours_per_chapter.is_finite() || hours_per_chapter <= 0.0 {
        return 0;
    }
    (completed as f64 * hours_per_chapter).floor() as u64
}

/// Validate the raw `subjects.json` shape and decode it.
///
/// Missing `name`, `icon` and `completed` fields take their defaults.
///
/// # Errors
/// Returns `InvalidInput` if the value is not an array, an entry is not an
/// object, an entry lacks a `chapters` array, or a field has the wrong type.
pub fn parse_subjects(value: &Value) -> Result<Vec<Subject>, DashboardError> {
    let entries = value
        .as_array()
        .ok_or_else(|| DashboardError::InvalidInput("subjects must be a JSON array".into()))?;

    for (idx, entry) in entries.iter().enumerate() {
        let object = entry.as_object().ok_or_else(|| {
            DashboardError::InvalidInput(format!("subject #{idx} is not an object"))
        })?;
        match object.get("chapters") {
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(DashboardError::InvalidInput(format!(
                    "subject #{idx} has a non-array chapters field"
                )))
            }
            None => {
                return Err(DashboardError::InvalidInput(format!(
                    "subject #{idx} lacks a chapters field"
                )))
            }
        }
    }

    Vec::<Subject>::deserialize(value)
        .map_err(|e| DashboardError::InvalidInput(format!("malformed subject: {e}")))
}

/// Summarize an untyped subjects value.
///
/// # Errors
/// Returns `InvalidInput` under the same conditions as [`parse_subjects`].
pub fn summarize_json(value: &Value) -> Result<ProgressSummary, DashboardError> {
    parse_subjects(value).map(|subjects| summarize(&subjects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn subject(name: &str, flags: &[bool]) -> Subject {
        flags
            .iter()
            .enumerate()
            .fold(Subject::new(name, "fa-book"), |s, (i, done)| {
                s.with_chapter(format!("Chapter {}", i + 1), *done)
            })
    }

    #[test]
    fn test_summarize_json_unnamed_chapters() {
        let value = json!([
            {"name": "Botany", "chapters": [{"completed": true}, {"completed": false}]}
        ]);
        let summary = summarize_json(&value).unwrap();

        assert_eq!(summary.percentage("Botany"), Some(50));
        assert_eq!(summary.total_chapters, 2);
        assert_eq!(summary.completed_chapters, 1);
        assert_eq!(summary.estimated_study_hours, 2);
    }

    #[test]
    fn test_botany_half_done() {
        let summary = summarize(&[subject("Botany", &[true, false])]);

        assert_eq!(summary.percentage("Botany"), Some(50));
        assert_eq!(summary.total_chapters, 2);
        assert_eq!(summary.completed_chapters, 1);
        assert_eq!(summary.estimated_study_hours, 2);
    }

    #[test]
    fn test_round_half_up() {
        // 1/8 = 12.5% rounds up, 1/3 = 33.3% rounds down, 2/3 = 66.7% rounds up
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn test_empty_subject_is_zero_percent() {
        let summary = summarize(&[subject("Zoology", &[]), subject("Physics", &[true])]);

        assert_eq!(summary.percentage("Zoology"), Some(0));
        assert_eq!(summary.percentage("Physics"), Some(100));
        assert_eq!(summary.total_chapters, 1);
    }

    #[test]
    fn test_totals_never_exceed() {
        let sets: Vec<Vec<Subject>> = vec![
            vec![],
            vec![subject("A", &[false, false, false])],
            vec![subject("A", &[true; 7]), subject("B", &[true, false, true])],
            vec![subject("A", &[]), subject("B", &[false]), subject("C", &[true])],
        ];

        for subjects in &sets {
            let summary = summarize(subjects);
            assert!(summary.completed_chapters <= summary.total_chapters);
            for s in &summary.subjects {
                assert!(s.percentage <= 100);
            }
        }
    }

    #[test]
    fn test_study_hours_floor() {
        let summary = summarize(&[subject("Chemistry", &[true, true, true])]);
        assert_eq!(summary.estimated_study_hours, 7);

        let custom = summarize_with_rate(&[subject("Chemistry", &[true, true, true])], 1.0);
        assert_eq!(custom.estimated_study_hours, 3);

        let negative = summarize_with_rate(&[subject("Chemistry", &[true])], -4.0);
        assert_eq!(negative.estimated_study_hours, 0);
    }

    #[test]
    fn test_per_subject_and_rates() {
        let summary = summarize(&[
            subject("Physics", &[true, false, false, false]),
            subject("Botany", &[true, true]),
        ]);

        let map = summary.per_subject();
        assert_eq!(map.get("Physics"), Some(&25));
        assert_eq!(map.get("Botany"), Some(&100));
        assert_eq!(summary.completion_rates(), vec![("Physics", 25), ("Botany", 100)]);
        assert_eq!(summary.overall_percentage(), 50);
    }

    #[test]
    fn test_summarize_json_valid() {
        let value = json!([
            {"name": "Botany", "icon": "fa-leaf", "chapters": [
                {"name": "Cell", "completed": true},
                {"name": "Tissues", "completed": false}
            ]}
        ]);

        let summary = summarize_json(&value).unwrap();
        assert_eq!(summary.percentage("Botany"), Some(50));
        assert_eq!(summary.subjects[0].icon, "fa-leaf");
    }

    #[test]
    fn test_summarize_json_rejects_bad_shapes() {
        let not_array = json!({"name": "Botany"});
        let missing_chapters = json!([{"name": "Botany"}]);
        let bad_chapters = json!([{"name": "Botany", "chapters": "none"}]);
        let not_object = json!([42]);

        for value in [not_array, missing_chapters, bad_chapters, not_object] {
            assert!(matches!(
                summarize_json(&value),
                Err(DashboardError::InvalidInput(_))
            ));
        }
    }
}
