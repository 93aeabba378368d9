//! Study schedule models

use serde::{Deserialize, Serialize};

/// One day of planned study tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Day name (e.g., "Monday")
    pub name: String,
    /// Task descriptions in planned order
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// A numbered week of the study plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// 1-based week number
    pub week_number: u32,
    /// Days in display order
    pub days: Vec<Day>,
}

impl Week {
    /// Heading shown above the schedule (e.g., "Week 3")
    #[must_use]
    pub fn label(&self) -> String {
        format!("Week {}", self.week_number)
    }

    /// Total number of tasks across all days
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.days.iter().map(|d| d.tasks.len()).sum()
    }
}

/// Top-level object of `schedule.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Weeks in plan order
    pub weeks: Vec<Week>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_from_json() {
        let week: Week = serde_json::from_str(
            r#"{"weekNumber": 2, "days": [
                {"name": "Monday", "tasks": ["Botany: Cell Cycle", "Physics: Work"]},
                {"name": "Tuesday", "tasks": []}
            ]}"#,
        )
        .unwrap();

        assert_eq!(week.week_number, 2);
        assert_eq!(week.label(), "Week 2");
        assert_eq!(week.days.len(), 2);
        assert_eq!(week.task_count(), 2);
    }
}
