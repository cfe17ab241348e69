//! Canonical time strings for the schedule `Time` column

use crate::types::Cell;
use chrono::Timelike;

/// Normalize a time cell to its canonical string.
///
/// Midnight date-times collapse to `YYYY-MM-DD`; any other date-time becomes
/// `YYYY-MM-DD HH:MM:SS`. A time of day with no date is `HH:MM:SS`, midnight
/// included. Missing cells yield `""` and every other value uses its default
/// rendering.
pub fn normalize_time(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::DateTime(dt) => {
            if dt.hour() == 0 && dt.minute() == 0 && dt.second() == 0 {
                dt.format("%Y-%m-%d").to_string()
            } else {
                dt.format("%Y-%m-%d %H:%M:%S").to_string()
            }
        }
        Cell::Time(t) => t.format("%H:%M:%S").to_string(),
        other => other.render(),
    }
}
