//! Output formatting: present parsed data tables.
//!
//! This module handles the last stage of the table pipeline:
//!
//! 1. Raw text (a data file)
//! 2. `DataTable` (validated rows + column widths)
//! 3. `FormattedTable` (headers, widths, normalized display strings)
//!
//! `FormattedTable` is a pure presentation layer. It renders to aligned
//! text or JSON and never re-validates.
//!
//! ## Example
//!
//! ```rust,ignore
//! use labscriptslib::output::FormattedTable;
//!
//! let table = FormattedTable::from_table(&read_table("zmax.dat")?);
//! // table.headers: ["zmax", "bbb2", "bbb3", ..., "ttt3"]
//! print!("{}", table.to_text());
//! ```

pub mod table;

use std::path::Path;

use crate::options::OutputMode;
use crate::table::read_table;
use crate::Result;

pub use table::FormattedTable;

/// Read, validate and render a data file in one call.
///
/// Text output ends with a newline after the last row; JSON output does not.
pub fn format_file(path: impl AsRef<Path>, mode: OutputMode) -> Result<String> {
    let table = FormattedTable::from_table(&read_table(path)?);
    match mode {
        OutputMode::Text => Ok(table.to_text()),
        OutputMode::Json => table.to_json(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabscriptsError;
    use crate::table::COL_COUNT;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_format_file_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zmax.dat");
        let row: Vec<String> = (0..COL_COUNT).map(|i| format!("{i},5")).collect();
        fs::write(&path, format!("{}\n", row.join("\t"))).unwrap();

        let text = format_file(&path, OutputMode::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("zmax bbb2 "));
        assert!(lines[1].starts_with("0.5  1.5  2.5  "));
    }

    #[test]
    fn test_format_file_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.dat");
        fs::write(&path, "").unwrap();

        let json = format_file(&path, OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"].as_array().unwrap().len(), 0);
        assert_eq!(value["headers"].as_array().unwrap().len(), COL_COUNT);
    }

    #[test]
    fn test_format_file_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.dat");
        fs::write(&path, "1 2 3\n").unwrap();

        let err = format_file(&path, OutputMode::Text).unwrap_err();
        assert!(matches!(err, LabscriptsError::InvalidLineLength { .. }));
    }
}
