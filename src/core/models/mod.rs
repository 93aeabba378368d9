//! Data models for the study dashboard

pub mod quote;
pub mod schedule;
pub mod subject;

pub use quote::Quote;
pub use schedule::{Day, Schedule, Week};
pub use subject::{Chapter, Subject};
