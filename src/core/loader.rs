//! Loading of the static JSON resources
//!
//! The dashboard reads three files from a data directory: `quotes.json`,
//! `subjects.json` and `schedule.json`. Each is loaded on its own and may
//! fail on its own.

use crate::core::error::DashboardError;
use crate::core::models::{Quote, Schedule, Subject};
use crate::core::progress::parse_subjects;
use crate::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the quote collection
pub const QUOTES_FILE: &str = "quotes.json";
/// File name of the subject list
pub const SUBJECTS_FILE: &str = "subjects.json";
/// File name of the study schedule
pub const SCHEDULE_FILE: &str = "schedule.json";

/// Provider of the dashboard's input data
///
/// Implementations must be shareable across threads: the dashboard loads all
/// three resources concurrently.
pub trait DataSource: Sync {
    /// Load the quote collection
    ///
    /// # Errors
    /// Returns `FetchFailure` if the resource cannot be read or decoded
    fn quotes(&self) -> Result<Vec<Quote>, DashboardError>;

    /// Load the subjects with their chapters
    ///
    /// # Errors
    /// Returns `FetchFailure` on read/parse errors and `InvalidInput` on a bad shape
    fn subjects(&self) -> Result<Vec<Subject>, DashboardError>;

    /// Load the study schedule
    ///
    /// # Errors
    /// Returns `FetchFailure` if the resource cannot be read or decoded and
    /// `InvalidInput` if a week is numbered 0
    fn schedule(&self) -> Result<Schedule, DashboardError>;
}

/// Data source backed by a directory of JSON files
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Create a source rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the resources are read from
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_value(&self, file: &str) -> Result<Value, DashboardError> {
        let path = self.root.join(file);
        debug!("Reading {}", path.display());
        let content = fs::read_to_string(&path).map_err(|e| DashboardError::fetch(file, e))?;
        serde_json::from_str(&content).map_err(|e| DashboardError::fetch(file, e))
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T, DashboardError> {
        let value = self.read_value(file)?;
        serde_json::from_value(value).map_err(|e| DashboardError::fetch(file, e))
    }
}

impl DataSource for DataDir {
    fn quotes(&self) -> Result<Vec<Quote>, DashboardError> {
        self.read(QUOTES_FILE)
    }

    fn subjects(&self) -> Result<Vec<Subject>, DashboardError> {
        let value = self.read_value(SUBJECTS_FILE)?;
        parse_subjects(&value)
    }

    fn schedule(&self) -> Result<Schedule, DashboardError> {
        let schedule: Schedule = self.read(SCHEDULE_FILE)?;
        schedule.validate()?;
        Ok(schedule)
    }
}

/// In-memory data source, each resource either present or failing
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    /// Quotes; `None` simulates an unavailable resource
    pub quotes: Option<Vec<Quote>>,
    /// Subjects; `None` simulates an unavailable resource
    pub subjects: Option<Vec<Subject>>,
    /// Schedule; `None` simulates an unavailable resource
    pub schedule: Option<Schedule>,
}

impl StaticSource {
    fn missing(file: &str) -> DashboardError {
        DashboardError::fetch(file, "resource unavailable")
    }
}

impl DataSource for StaticSource {
    fn quotes(&self) -> Result<Vec<Quote>, DashboardError> {
        self.quotes.clone().ok_or_else(|| Self::missing(QUOTES_FILE))
    }

    fn subjects(&self) -> Result<Vec<Subject>, DashboardError> {
        self.subjects
            .clone()
            .ok_or_else(|| Self::missing(SUBJECTS_FILE))
    }

    fn schedule(&self) -> Result<Schedule, DashboardError> {
        self.schedule
            .clone()
            .ok_or_else(|| Self::missing(SCHEDULE_FILE))
    }
}
