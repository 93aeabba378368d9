//! Chapter resource actions
//!
//! Lecture, notes and quiz links are not wired to real content; opening one
//! yields an acknowledgment message.

use crate::core::error::DashboardError;
use crate::core::models::Subject;
use std::fmt;
use std::str::FromStr;

/// Kind of study resource attached to a chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Video lecture
    Lecture,
    /// PDF notes
    Notes,
    /// Practice quiz
    Quiz,
}

impl ResourceKind {
    /// All kinds, in the order the chapter actions are shown
    pub const ALL: [Self; 3] = [Self::Lecture, Self::Notes, Self::Quiz];

    /// Icon identifier for the action button
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Lecture => "fa-video",
            Self::Notes => "fa-file-pdf",
            Self::Quiz => "fa-question-circle",
        }
    }

    /// Button title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Lecture => "Lecture",
            Self::Notes => "Notes",
            Self::Quiz => "Quiz",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lecture" | "video" => Ok(Self::Lecture),
            "notes" | "pdf" => Ok(Self::Notes),
            "quiz" => Ok(Self::Quiz),
            _ => Err(DashboardError::InvalidInput(format!(
                "unknown resource kind '{s}'"
            ))),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title().to_lowercase())
    }
}

/// Acknowledgment shown when a chapter resource is opened
#[must_use]
pub fn acknowledge(subject: &str, chapter: &str, kind: ResourceKind) -> String {
    match kind {
        ResourceKind::Lecture => format!("Opening lecture for {chapter} ({subject})"),
        ResourceKind::Notes => format!("Opening notes for {chapter} ({subject})"),
        ResourceKind::Quiz => format!("Starting quiz for {chapter} ({subject})"),
    }
}

/// Acknowledge a resource after checking the subject and chapter exist.
///
/// # Errors
/// Returns `InvalidInput` if no subject or chapter matches the given names.
pub fn open(
    subjects: &[Subject],
    subject: &str,
    chapter: &str,
    kind: ResourceKind,
) -> Result<String, DashboardError> {
    let found = subjects
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(subject))
        .ok_or_else(|| DashboardError::InvalidInput(format!("no subject named '{subject}'")))?;
    let chapter = found.chapter(chapter).ok_or_else(|| {
        DashboardError::InvalidInput(format!("{} has no chapter named '{chapter}'", found.name))
    })?;

    Ok(acknowledge(&found.name, &chapter.name, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            acknowledge("Botany", "Cell Cycle", ResourceKind::Lecture),
            "Opening lecture for Cell Cycle (Botany)"
        );
        assert_eq!(
            acknowledge("Botany", "Cell Cycle", ResourceKind::Notes),
            "Opening notes for Cell Cycle (Botany)"
        );
        assert_eq!(
            acknowledge("Botany", "Cell Cycle", ResourceKind::Quiz),
            "Starting quiz for Cell Cycle (Botany)"
        );
    }

    #[test]
    fn test_open_checks_names() {
        let subjects = vec![Subject::new("Zoology", "fa-paw").with_chapter("Animal Kingdom", false)];

        assert_eq!(
            open(&subjects, "zoology", "Animal Kingdom", ResourceKind::Quiz).unwrap(),
            "Starting quiz for Animal Kingdom (Zoology)"
        );
        assert!(open(&subjects, "Physics", "Animal Kingdom", ResourceKind::Quiz).is_err());
        assert!(open(&subjects, "Zoology", "Genetics", ResourceKind::Quiz).is_err());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("Video".parse::<ResourceKind>().unwrap(), ResourceKind::Lecture);
        assert_eq!("notes".parse::<ResourceKind>().unwrap(), ResourceKind::Notes);
        assert!("podcast".parse::<ResourceKind>().is_err());
        assert_eq!(ResourceKind::Quiz.to_string(), "quiz");
    }
}
