//! Integration smoke tests for `study_dashboard`

use study_dashboard::core::countdown::{parse_exam_date, DEFAULT_EXAM_DATE};
use study_dashboard::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn default_exam_date_parses() {
    assert!(parse_exam_date(DEFAULT_EXAM_DATE).is_ok());
}
