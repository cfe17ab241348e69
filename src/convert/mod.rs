//! Spreadsheet → JSON conversions
//!
//! - Class mode: every sheet's A, D, H, I columns → `{Time, Section, Location}` records
//! - Student mode: first sheet's rows → `{id: {name, class}}`

pub mod fields;
pub mod roster;
pub mod schedule;
pub mod time;

pub use roster::{student_convert, RosterLayout, RosterSummary};
pub use schedule::{class_convert, ScheduleLayout, ScheduleSummary};
pub use time::normalize_time;
