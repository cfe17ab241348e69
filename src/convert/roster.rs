//! Student-roster converter - roster sheet → [`RosterOutput`]

use crate::convert::fields::trimmed;
use crate::error::ConvertResult;
use crate::excel::WorkbookReader;
use crate::types::{RosterOutput, Sheet, StudentRecord};
use crate::writer::write_json_file;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Placeholder that marks a missing id in exported rosters
const MISSING_ID: &str = "nan";

/// Where the roster fields live in each row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterLayout {
    pub id_column: usize,
    pub name_column: usize,
    /// Half-open range of class columns
    pub class_columns: Range<usize>,
}

impl Default for RosterLayout {
    fn default() -> Self {
        Self {
            id_column: 0,
            name_column: 1,
            // C through X
            class_columns: 2..24,
        }
    }
}

/// Result of a student-mode conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSummary {
    pub output: PathBuf,
    pub students: usize,
}

/// Convert one roster row; `None` when the row has no usable id
pub fn convert_row(
    sheet: &Sheet,
    row: usize,
    layout: &RosterLayout,
) -> Option<(String, StudentRecord)> {
    let id = trimmed(sheet.cell(row, layout.id_column))
        .filter(|id| !id.is_empty() && id != MISSING_ID)?;

    let name = trimmed(sheet.cell(row, layout.name_column)).unwrap_or_default();

    let classes = layout
        .class_columns
        .clone()
        .filter_map(|col| trimmed(sheet.cell(row, col)))
        .filter(|class| !class.is_empty())
        .collect();

    Some((id, StudentRecord { name, classes }))
}

/// Convert every row of a roster sheet.
///
/// A repeated id overwrites the earlier entry but keeps its position.
pub fn convert_rows(sheet: &Sheet, layout: &RosterLayout) -> RosterOutput {
    let mut output = RosterOutput::new();

    for row in 0..sheet.row_count() {
        match convert_row(sheet, row, layout) {
            Some((id, record)) => {
                if output.insert(id.clone(), record).is_some() {
                    debug!(row = row + 1, id = %id, "duplicate student id overwritten");
                }
            }
            None => debug!(row = row + 1, "skipping row without student id"),
        }
    }

    output
}

/// Convert the first sheet of a roster workbook at `input` into JSON at `output`
pub fn student_convert(input: &Path, output: &Path) -> ConvertResult<RosterSummary> {
    student_convert_with(input, output, &RosterLayout::default())
}

pub fn student_convert_with(
    input: &Path,
    output: &Path,
    layout: &RosterLayout,
) -> ConvertResult<RosterSummary> {
    let sheet = WorkbookReader::new(input).read_first()?;

    let roster = convert_rows(&sheet, layout);
    write_json_file(output, &roster)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        students = roster.len(),
        "student roster written"
    );

    Ok(RosterSummary {
        output: output.to_path_buf(),
        students: roster.len(),
    })
}
