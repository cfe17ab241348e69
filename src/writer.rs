use crate::error::ConvertResult;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Serialize pretty JSON with 4-space indentation into `writer`.
///
/// Non-ASCII text is written as-is, never `\u` escaped.
pub fn write_json<W: Write, T: Serialize>(writer: W, value: &T) -> ConvertResult<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

/// Write a value as JSON to `path`, replacing any existing file.
///
/// The file is only touched once serialization has succeeded.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> ConvertResult<()> {
    let mut buf = Vec::new();
    write_json(&mut buf, value)?;
    fs::write(path, buf)?;
    Ok(())
}
