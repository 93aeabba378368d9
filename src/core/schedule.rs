//! Week selection over the study schedule

use crate::core::error::DashboardError;
use crate::core::models::{Schedule, Week};

/// Week shown when no index is requested
pub const DEFAULT_WEEK_INDEX: usize = 0;

/// Select a week by 0-based index.
///
/// # Errors
/// Returns `IndexOutOfRange` if `index >= schedule.len()`.
pub fn select_week(schedule: &[Week], index: usize) -> Result<&Week, DashboardError> {
    schedule
        .get(index)
        .ok_or(DashboardError::IndexOutOfRange {
            index,
            len: schedule.len(),
        })
}

impl Schedule {
    /// Select a week by 0-based index.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if the schedule has no week at `index`.
    pub fn select_week(&self, index: usize) -> Result<&Week, DashboardError> {
        select_week(&self.weeks, index)
    }

    /// Check that every week number is at least 1.
    ///
    /// # Errors
    /// Returns `InvalidInput` naming the first week numbered 0.
    pub fn validate(&self) -> Result<(), DashboardError> {
        match self.weeks.iter().position(|w| w.week_number == 0) {
            Some(idx) => Err(DashboardError::InvalidInput(format!(
                "week #{idx} has weekNumber 0 (weeks are numbered from 1)"
            ))),
            None => Ok(()),
        }
    }

    /// Find a week by its 1-based week number
    #[must_use]
    pub fn week_by_number(&self, number: u32) -> Option<&Week> {
        self.weeks.iter().find(|w| w.week_number == number)
    }
}
