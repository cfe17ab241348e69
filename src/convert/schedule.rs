//! Class-schedule converter - multi-sheet timetable workbook → [`ScheduleOutput`]

use crate::convert::fields::{coerce_section, text_or_empty};
use crate::convert::time::normalize_time;
use crate::error::ConvertResult;
use crate::excel::WorkbookReader;
use crate::types::{Cell, ClassRecord, ScheduleOutput, Sheet};
use crate::writer::write_json_file;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where the schedule fields live in each sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleLayout {
    /// 0-based columns for Time, Section, Part_H and Part_I
    pub columns: [usize; 4],
    /// Rows read from the top of each sheet
    pub max_rows: usize,
}

impl Default for ScheduleLayout {
    fn default() -> Self {
        Self {
            // A, D, H, I
            columns: [0, 3, 7, 8],
            max_rows: 60,
        }
    }
}

impl ScheduleLayout {
    /// Width a sheet must reach for every projected column to exist
    fn required_width(&self) -> usize {
        self.columns.iter().max().map_or(0, |c| c + 1)
    }

    /// Pick the four layout columns out of a full row
    fn project<'a>(&self, sheet: &'a Sheet, row: usize) -> [&'a Cell; 4] {
        self.columns.map(|col| sheet.cell(row, col))
    }
}

/// Result of a class-mode conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSummary {
    pub output: PathBuf,
    pub sheets: usize,
    pub records: usize,
    pub skipped_sheets: Vec<String>,
}

/// Outcome of converting one sheet
#[derive(Debug, Clone, PartialEq)]
pub enum SheetOutcome {
    Converted(Vec<ClassRecord>),
    Empty,
    /// Sheet does not reach every layout column
    ColumnMismatch { width: usize },
}

/// Convert one sheet's rows into class records
pub fn convert_sheet(sheet: &Sheet, layout: &ScheduleLayout) -> SheetOutcome {
    let rows = sheet.row_count().min(layout.max_rows);
    let window = Sheet::with_rows(sheet.name.clone(), sheet.rows[..rows].to_vec());

    if window.is_empty() {
        return SheetOutcome::Empty;
    }

    let width = window.used_width();
    if width < layout.required_width() {
        return SheetOutcome::ColumnMismatch { width };
    }

    let records = (0..rows)
        .filter_map(|row| {
            let [time, section, part_h, part_i] = layout.project(&window, row);
            if time.is_empty() {
                return None;
            }
            Some(ClassRecord {
                time: normalize_time(time),
                section: coerce_section(section),
                location: format!("{}_{}", text_or_empty(part_h), text_or_empty(part_i)),
            })
        })
        .collect();

    SheetOutcome::Converted(records)
}

/// Convert every usable sheet, keyed by sheet name in workbook order.
///
/// Returns the output mapping and the names of sheets skipped for not
/// reaching the layout's columns.
pub fn convert_sheets(sheets: &[Sheet], layout: &ScheduleLayout) -> (ScheduleOutput, Vec<String>) {
    let mut output = ScheduleOutput::new();
    let mut skipped = Vec::new();

    for sheet in sheets {
        match convert_sheet(sheet, layout) {
            SheetOutcome::Converted(records) => {
                debug!(sheet = %sheet.name, records = records.len(), "converted sheet");
                output.insert(sheet.name.clone(), records);
            }
            SheetOutcome::Empty => {
                debug!(sheet = %sheet.name, "skipping empty sheet");
            }
            SheetOutcome::ColumnMismatch { width } => {
                warn!(
                    sheet = %sheet.name,
                    width,
                    required = layout.required_width(),
                    "skipping sheet without the expected columns"
                );
                skipped.push(sheet.name.clone());
            }
        }
    }

    (output, skipped)
}

/// Convert a class-schedule workbook at `input` into JSON at `output`
pub fn class_convert(input: &Path, output: &Path) -> ConvertResult<ScheduleSummary> {
    class_convert_with(input, output, &ScheduleLayout::default())
}

pub fn class_convert_with(
    input: &Path,
    output: &Path,
    layout: &ScheduleLayout,
) -> ConvertResult<ScheduleSummary> {
    let sheets = WorkbookReader::new(input)
        .with_max_rows(layout.max_rows)
        .read_all()?;

    let (schedule, skipped_sheets) = convert_sheets(&sheets, layout);
    write_json_file(output, &schedule)?;

    let records = schedule.values().map(Vec::len).sum();
    info!(
        input = %input.display(),
        output = %output.display(),
        sheets = schedule.len(),
        records,
        "class schedule written"
    );

    Ok(ScheduleSummary {
        output: output.to_path_buf(),
        sheets: schedule.len(),
        records,
        skipped_sheets,
    })
}
