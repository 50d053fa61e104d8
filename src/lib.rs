//! Shared library for `studyboard`
//! Parses pasted portal exports into grade summaries and weekly timetables.

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;
