use crate::convert::{class_convert, student_convert, RosterSummary, ScheduleSummary};
use crate::error::{ConvertError, ConvertResult};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

pub const FILENAME_PROMPT: &str = "Enter the Excel file name (without extension): ";
pub const MODE_PROMPT: &str = "Select conversion mode\n1 Class schedule\n2 Student roster\nEnter mode (1 or 2): ";

/// Conversion mode picked at the mode prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Class,
    Student,
}

impl FromStr for Mode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "class" => Ok(Mode::Class),
            "2" | "student" => Ok(Mode::Student),
            other => Err(ConvertError::InvalidMode(other.to_string())),
        }
    }
}

/// Answers that may come from the command line instead of the prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Base file name without extension
    pub name: Option<String>,
    /// Mode answer, parsed like the mode prompt
    pub mode: Option<String>,
    /// Workbook extension appended to the base name
    pub extension: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            name: None,
            mode: None,
            extension: "xlsx".to_string(),
        }
    }
}

/// A finished conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    Class(ScheduleSummary),
    Student(RosterSummary),
}

/// Workbook path for a base name: `name.ext`
pub fn input_path(name: &str, extension: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", name, extension))
}

/// JSON path next to the workbook: same stem, `.json` extension
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Print a prompt and read one line without its line ending.
/// End of input reads as `""`.
fn prompt<R: BufRead, W: Write>(question: &str, input: &mut R, out: &mut W) -> ConvertResult<String> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Run the interactive flow: file name → existence check → mode → convert.
///
/// Every failure, including a missing file or an unknown mode, comes back as
/// a [`ConvertError`] for [`report`] to print.
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    input: &mut R,
    out: &mut W,
) -> ConvertResult<Converted> {
    let name = match &options.name {
        Some(name) => name.clone(),
        None => prompt(FILENAME_PROMPT, input, out)?,
    };

    let workbook = input_path(&name, &options.extension);
    let json = output_path(&workbook);
    debug!(input = %workbook.display(), output = %json.display(), "resolved paths");

    if !workbook.exists() {
        return Err(ConvertError::NotFound(workbook));
    }

    let answer = match &options.mode {
        Some(mode) => mode.clone(),
        None => prompt(MODE_PROMPT, input, out)?,
    };

    match answer.parse::<Mode>()? {
        Mode::Class => class_convert(&workbook, &json).map(Converted::Class),
        Mode::Student => student_convert(&workbook, &json).map(Converted::Student),
    }
}

/// Print the user-facing message for a run's result
pub fn report<W: Write>(result: &ConvertResult<Converted>, out: &mut W) -> std::io::Result<()> {
    match result {
        Ok(Converted::Class(summary)) => {
            writeln!(
                out,
                "{} Saved to {}",
                "✅ Conversion succeeded!".bold().green(),
                summary.output.display()
            )?;
            writeln!(
                out,
                "   {} sheets, {} records",
                summary.sheets, summary.records
            )?;
            if !summary.skipped_sheets.is_empty() {
                writeln!(
                    out,
                    "   {} {}",
                    "⚠️  Skipped sheets without columns A, D, H, I:".yellow(),
                    summary.skipped_sheets.join(", ")
                )?;
            }
        }
        Ok(Converted::Student(summary)) => {
            writeln!(
                out,
                "{} Saved to {} ({} records)",
                "✅ Conversion succeeded!".bold().green(),
                summary.output.display(),
                summary.students
            )?;
        }
        Err(ConvertError::NotFound(path)) => {
            writeln!(out, "{} {}", "❌ File not found:".bold().red(), path.display())?;
        }
        Err(ConvertError::InvalidMode(_)) => {
            writeln!(
                out,
                "{}",
                "❌ Invalid mode selection! Please enter 1 or 2.".bold().red()
            )?;
        }
        Err(e) => {
            writeln!(out, "{} {}", "❌ Error:".bold().red(), e)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
