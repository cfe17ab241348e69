//! Interactive entry point

pub mod commands;

pub use commands::{report, run, Converted, Mode, RunOptions};
