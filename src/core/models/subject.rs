//! Subject and chapter models

use serde::{Deserialize, Serialize};

/// Smallest trackable unit of study content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter title (e.g., "Cell: The Unit of Life"); empty when the source omits it
    #[serde(default)]
    pub name: String,

    /// Whether the chapter has been studied
    #[serde(default)]
    pub completed: bool,
}

impl Chapter {
    /// Create a new chapter
    #[must_use]
    pub fn new(name: impl Into<String>, completed: bool) -> Self {
        Self {
            name: name.into(),
            completed,
        }
    }
}

/// Named grouping of chapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name (e.g., "Botany")
    #[serde(default)]
    pub name: String,

    /// Icon identifier shown next to the name (e.g., "fa-leaf")
    #[serde(default)]
    pub icon: String,

    /// Chapters in syllabus order
    pub chapters: Vec<Chapter>,
}

impl Subject {
    /// Create a subject without chapters
    #[must_use]
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            chapters: Vec::new(),
        }
    }

    /// Builder-style chapter append
    #[must_use]
    pub fn with_chapter(mut self, name: impl Into<String>, completed: bool) -> Self {
        self.chapters.push(Chapter::new(name, completed));
        self
    }

    /// Number of chapters marked completed
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.chapters.iter().filter(|c| c.completed).count()
    }

    /// Look up a chapter by exact name
    #[must_use]
    pub fn chapter(&self, name: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_count() {
        let subject = Subject::new("Physics", "fa-atom")
            .with_chapter("Units and Measurements", true)
            .with_chapter("Motion in a Straight Line", false)
            .with_chapter("Laws of Motion", true);

        assert_eq!(subject.chapters.len(), 3);
        assert_eq!(subject.completed_count(), 2);
        assert!(subject.chapter("Laws of Motion").is_some());
        assert!(subject.chapter("Optics").is_none());
    }

    #[test]
    fn test_deserialize_defaults() {
        let subject: Subject =
            serde_json::from_str(r#"{"name":"Botany","chapters":[{"name":"Cell"}]}"#).unwrap();

        assert_eq!(subject.icon, "");
        assert!(!subject.chapters[0].completed);
    }
}
