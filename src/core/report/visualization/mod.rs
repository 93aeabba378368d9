//! Chart generation for reports
//!
//! Provides the Mermaid bar chart embedded in Markdown reports and the bar
//! palette shared with the HTML page.

pub mod mermaid;

pub use mermaid::MermaidGenerator;

/// Bar fill colors, cycled across subjects
pub const BAR_COLORS: [&str; 4] = [
    "rgba(74, 111, 165, 0.7)",
    "rgba(107, 140, 188, 0.7)",
    "rgba(86, 166, 99, 0.7)",
    "rgba(255, 107, 107, 0.7)",
];

/// Bar border colors, parallel to [`BAR_COLORS`]
pub const BAR_BORDERS: [&str; 4] = [
    "rgba(74, 111, 165, 1)",
    "rgba(107, 140, 188, 1)",
    "rgba(86, 166, 99, 1)",
    "rgba(255, 107, 107, 1)",
];

/// `(fill, border)` for the bar at `index`
#[must_use]
pub const fn bar_palette(index: usize) -> (&'static str, &'static str) {
    let slot = index % BAR_COLORS.len();
    (BAR_COLORS[slot], BAR_BORDERS[slot])
}
