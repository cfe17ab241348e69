use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid mode selection: {0:?} (expected 1 or 2)")]
    InvalidMode(String),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Workbook has no sheets: {}", .0.display())]
    EmptyWorkbook(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
