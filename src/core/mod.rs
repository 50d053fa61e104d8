//! Core module: parsing, period mapping, GPA computation and timetable building

pub mod config;
pub mod error;
pub mod gpa;
pub mod models;
pub mod parser;
pub mod periods;
pub mod report;
pub mod rounding;
pub mod timetable;

/// Returns the current version of the `studyboard` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
