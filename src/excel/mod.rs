//! Excel import
//!
//! Reads workbooks through calamine and re-anchors every sheet at A1 so
//! converters can address cells by spreadsheet column.

mod reader;

pub use reader::{cell_from_data, WorkbookReader};
