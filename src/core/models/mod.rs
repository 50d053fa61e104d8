//! Data models for `studyboard`

pub mod course_record;
pub mod session;
pub mod weekday;

pub use course_record::{CourseRecord, COMPONENT_SCORE_COUNT};
pub use session::{ClassSession, CustomSession, CustomSessions, PeriodRange, SessionSlot};
pub use weekday::Weekday;
