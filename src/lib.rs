//! Library for `studydash`
//! Loads study data, aggregates chapter progress and renders the dashboard.

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;
