//! Mermaid chart generator for completion rates
//!
//! Generates Mermaid `xychart-beta` syntax that renders as a bar chart in
//! GitHub, GitLab and other Markdown viewers.

use crate::core::progress::ProgressSummary;
use std::fmt::Write;

/// Generator for Mermaid chart syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a bar chart of per-subject completion rates (y axis 0-100)
    ///
    /// Returns an empty string when there are no subjects to plot.
    #[must_use]
    pub fn completion_chart(progress: &ProgressSummary) -> String {
        let rates = progress.completion_rates();
        if rates.is_empty() {
            return String::new();
        }

        let labels: Vec<String> = rates
            .iter()
            .map(|(name, _)| format!("\"{}\"", Self::sanitize_label(name)))
            .collect();
        let values: Vec<String> = rates.iter().map(|(_, pct)| pct.to_string()).collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        let _ = writeln!(output, "    title \"Completion Rate (%)\"");
        let _ = writeln!(output, "    x-axis [{}]", labels.join(", "));
        let _ = writeln!(output, "    y-axis \"Completion (%)\" 0 --> 100");
        let _ = writeln!(output, "    bar [{}]", values.join(", "));
        output.push_str("```\n");
        output
    }

    /// Strip characters that would end a quoted Mermaid label
    fn sanitize_label(name: &str) -> String {
        name.chars()
            .map(|c| match c {
                '"' | '[' | ']' => '\'',
                c => c,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Subject;
    use crate::core::progress::summarize;

    #[test]
    fn test_chart_lists_subjects_in_order() {
        let progress = summarize(&[
            Subject::new("Physics", "fa-atom")
                .with_chapter("Units", true)
                .with_chapter("Motion", false),
            Subject::new("Chemistry", "fa-flask").with_chapter("Mole Concept", false),
        ]);

        let chart = MermaidGenerator::completion_chart(&progress);
        assert!(chart.starts_with("```mermaid\nxychart-beta\n"));
        assert!(chart.contains("x-axis [\"Physics\", \"Chemistry\"]"));
        assert!(chart.contains("bar [50, 0]"));
        assert!(chart.contains("0 --> 100"));
    }

    #[test]
    fn test_empty_progress_has_no_chart() {
        assert!(MermaidGenerator::completion_chart(&summarize(&[])).is_empty());
    }

    #[test]
    fn test_labels_sanitized() {
        assert_eq!(MermaidGenerator::sanitize_label("Bio \"A\" [x]"), "Bio 'A' 'x'");
    }
}
