//! Classbook - class-schedule and student-roster workbooks to JSON
//!
//! This library reads spreadsheet workbooks and reshapes them into the JSON
//! documents the schedule dashboard loads.
//!
//! # Modes
//!
//! - Class schedule: every sheet's columns A, D, H, I become
//!   `{"Time", "Section", "Location"}` records keyed by sheet name
//! - Student roster: the first sheet's rows become
//!   `{"<id>": {"name", "class"}}`
//!
//! # Example
//!
//! ```no_run
//! use classbook::convert::{class_convert, student_convert};
//! use std::path::Path;
//!
//! let summary = class_convert(Path::new("schedule.xlsx"), Path::new("schedule.json"))?;
//! println!("{} sheets, {} records", summary.sheets, summary.records);
//!
//! let roster = student_convert(Path::new("students.xlsx"), Path::new("students.json"))?;
//! println!("{} students", roster.students);
//! # Ok::<(), classbook::error::ConvertError>(())
//! ```

pub mod cli;
pub mod convert;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use types::{Cell, ClassRecord, RosterOutput, ScheduleOutput, Sheet, StudentRecord};
