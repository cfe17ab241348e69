use chrono::{NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

//==============================================================================
// Cells and Sheets
//==============================================================================

/// A single spreadsheet value, as read from the workbook
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Time of day with no date part
    Time(NaiveTime),
    /// Blank cell, error cell, or a position past the end of the row
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Default text rendering of a cell.
    ///
    /// Integral numbers drop the fractional part (`101.0` renders as `101`),
    /// which is how ids and room numbers typed into a spreadsheet read.
    pub fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format_number(*n),
            Cell::Bool(true) => "True".to_string(),
            Cell::Bool(false) => "False".to_string(),
            Cell::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Cell::Time(t) => t.format("%H:%M:%S").to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// Format a number for display, removing a zero fractional part
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// One worksheet as a grid anchored at A1.
///
/// `rows[r][c]` is spreadsheet row `r + 1`, column `c` (0 = A). Rows may be
/// ragged; [`Sheet::cell`] reads past-the-end positions as [`Cell::Empty`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

static EMPTY: Cell = Cell::Empty;

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(Cell::is_empty))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns up to and including the right-most non-empty cell
    pub fn used_width(&self) -> usize {
        self.rows
            .iter()
            .filter_map(|row| row.iter().rposition(|c| !c.is_empty()))
            .map(|idx| idx + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }
}

//==============================================================================
// Class mode output
//==============================================================================

/// One schedule entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Section")]
    pub section: i64,
    #[serde(rename = "Location")]
    pub location: String,
}

/// Sheet name -> records, in workbook order
pub type ScheduleOutput = IndexMap<String, Vec<ClassRecord>>;

//==============================================================================
// Student mode output
//==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    #[serde(rename = "class")]
    pub classes: Vec<String>,
}

/// Student id -> record, in first-seen order
pub type RosterOutput = IndexMap<String, StudentRecord>;
