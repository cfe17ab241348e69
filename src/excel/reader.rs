//! Workbook reader - spreadsheet file → [`Sheet`] grids

use crate::error::{ConvertError, ConvertResult};
use crate::types::{Cell, Sheet};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader, Sheets};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads workbooks into A1-anchored grids of [`Cell`]s.
///
/// The format is picked from the file extension (`.xlsx`, `.xlsm`, `.xlsb`,
/// `.xls`, `.ods`).
pub struct WorkbookReader {
    path: PathBuf,
    max_rows: Option<usize>,
}

impl WorkbookReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_rows: None,
        }
    }

    /// Only materialize the first `max_rows` rows of each sheet
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    fn open(&self) -> ConvertResult<Sheets<BufReader<File>>> {
        open_workbook_auto(&self.path).map_err(|e| {
            ConvertError::Workbook(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    pub fn sheet_names(&self) -> ConvertResult<Vec<String>> {
        Ok(self.open()?.sheet_names().to_vec())
    }

    /// Read every sheet, in workbook order
    pub fn read_all(&self) -> ConvertResult<Vec<Sheet>> {
        let mut workbook = self.open()?;
        let sheet_names = workbook.sheet_names().to_vec();

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for sheet_name in sheet_names {
            sheets.push(self.read_sheet(&mut workbook, &sheet_name)?);
        }
        Ok(sheets)
    }

    /// Read the first sheet only
    pub fn read_first(&self) -> ConvertResult<Sheet> {
        let mut workbook = self.open()?;
        let first = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ConvertError::EmptyWorkbook(self.path.clone()))?;
        self.read_sheet(&mut workbook, &first)
    }

    fn read_sheet(
        &self,
        workbook: &mut Sheets<BufReader<File>>,
        sheet_name: &str,
    ) -> ConvertResult<Sheet> {
        let range = workbook.worksheet_range(sheet_name).map_err(|e| {
            ConvertError::Workbook(format!("Failed to read sheet '{}': {}", sheet_name, e))
        })?;

        let sheet = Sheet::with_rows(sheet_name, grid_from_range(&range, self.max_rows));
        debug!(
            sheet = sheet_name,
            rows = sheet.row_count(),
            width = sheet.used_width(),
            "read sheet"
        );
        Ok(sheet)
    }
}

/// Re-anchor a calamine range at A1.
///
/// calamine ranges start at the first used cell; leading blank rows and
/// columns are padded back in so column indexes match the spreadsheet.
fn grid_from_range(range: &Range<Data>, max_rows: Option<usize>) -> Vec<Vec<Cell>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);
    let limit = max_rows.unwrap_or(usize::MAX);

    let mut grid: Vec<Vec<Cell>> = (0..start_row.min(limit)).map(|_| Vec::new()).collect();
    for row in range.rows() {
        if grid.len() >= limit {
            break;
        }
        let mut cells = vec![Cell::Empty; start_col];
        cells.extend(row.iter().map(cell_from_data));
        grid.push(cells);
    }
    grid
}

/// Convert calamine cell data to a [`Cell`]
pub fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            // Serials below 1 are a time of day on Excel's epoch day
            Some(ndt) if is_time_of_day(dt) => Cell::Time(ndt.time()),
            Some(ndt) => Cell::DateTime(ndt),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match parse_iso_datetime(s) {
            Some(ndt) => Cell::DateTime(ndt),
            None => Cell::Text(s.clone()),
        },
        Data::DurationIso(s) => Cell::Text(s.clone()),
        // Error cells (#N/A, #DIV/0!, ...) count as missing
        Data::Error(_) => Cell::Empty,
        Data::Empty => Cell::Empty,
    }
}

fn is_time_of_day(dt: &ExcelDateTime) -> bool {
    dt.is_datetime() && (0.0..1.0).contains(&dt.as_f64())
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    let raw = s.trim_end_matches('Z');
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
