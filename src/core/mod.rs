//! Core module for the study dashboard

pub mod config;
pub mod countdown;
pub mod dashboard;
pub mod error;
pub mod loader;
pub mod models;
pub mod progress;
pub mod quotes;
pub mod report;
pub mod resources;
pub mod schedule;
pub mod theme;

pub use error::DashboardError;

/// Returns the current version of the `study-dashboard` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
