//! Error type shared by the dashboard components

use thiserror::Error;

/// Errors emitted while loading study data or deriving view models.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DashboardError {
    /// A JSON resource could not be read or parsed.
    #[error("failed to load {resource}: {reason}")]
    FetchFailure {
        /// Resource name, e.g. `quotes.json`
        resource: String,
        /// Underlying I/O or parse error message
        reason: String,
    },
    /// Input has the wrong shape or an unusable value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A week index outside the schedule.
    #[error("week index {index} is out of range (schedule has {len} weeks)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of available weeks
        len: usize,
    },
    /// A random pick was requested from an empty collection.
    #[error("cannot pick from an empty {0} collection")]
    EmptyCollection(&'static str),
}

impl DashboardError {
    /// Build a `FetchFailure` for a named resource.
    pub fn fetch(resource: impl Into<String>, reason: impl ToString) -> Self {
        Self::FetchFailure {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}
