//! Countdown to the exam date

use crate::core::error::DashboardError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt;

/// Exam date used when none is configured (local midnight)
pub const DEFAULT_EXAM_DATE: &str = "2026-05-03 00:00:00";

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = MS_PER_SECOND * 60;
const MS_PER_HOUR: i64 = MS_PER_MINUTE * 60;
const MS_PER_DAY: i64 = MS_PER_HOUR * 24;

/// Time left until the target, split into display fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Remaining {
    /// Whole days
    pub days: i64,
    /// Hours within the current day (0-23)
    pub hours: i64,
    /// Minutes within the current hour (0-59)
    pub minutes: i64,
    /// Seconds within the current minute (0-59)
    pub seconds: i64,
}

impl Remaining {
    /// All fields zero: the target has been reached
    #[must_use]
    pub const fn is_elapsed(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Compute the time left until `target`. All zeros when `now >= target`.
#[must_use]
pub fn remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> Remaining {
    let left = (target - now).num_milliseconds();
    if left <= 0 {
        return Remaining::default();
    }

    Remaining {
        days: left / MS_PER_DAY,
        hours: (left % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (left % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (left % MS_PER_MINUTE) / MS_PER_SECOND,
    }
}

/// Parse an exam date.
///
/// Accepts RFC 3339 (`2026-05-03T00:00:00+05:30`), a naive date-time in local
/// time (`2026-05-03 00:00:00` or `2026-05-03T00:00:00`), or a bare date
/// meaning local midnight (`2026-05-03`).
///
/// # Errors
/// Returns `InvalidInput` if the value matches none of these forms or names a
/// local time that does not exist.
pub fn parse_exam_date(value: &str) -> Result<DateTime<Utc>, DashboardError> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default())
        })
        .map_err(|_| DashboardError::InvalidInput(format!("unrecognized exam date '{value}'")))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| DashboardError::InvalidInput(format!("exam date '{value}' does not exist locally")))
}

/// Source of the current instant
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Wall-clock time
    #[default]
    System,
    /// A frozen instant, for deterministic rendering
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Current instant according to this clock
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(at) => *at,
        }
    }
}
