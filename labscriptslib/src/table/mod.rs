//! Parsing and validation of zmax data tables.
//!
//! A data file holds one row per line, each with exactly [`COL_COUNT`]
//! whitespace-separated fields. Rows are scanned once, in file order:
//! each row is validated and then immediately folded into the column
//! widths, and the first malformed row aborts the scan.

pub mod labels;
pub mod row;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LabscriptsError;
use crate::text::normalize_newlines;
use crate::Result;

pub use labels::{header_labels, AXIS_LABELS, COL_COUNT, DEGREE_LABELS, ZMAX_LABEL};
pub use row::{ColumnWidths, Row, MIN_WIDTH};

/// Validated rows together with their column widths.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    pub rows: Vec<Row>,
    pub widths: ColumnWidths,
}

impl DataTable {
    /// Parse table text, failing on the first row without `COL_COUNT` fields.
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = DataTable::default();

        for (index, line) in text.lines().enumerate() {
            let row = Row::parse(line);
            if !row.is_complete() {
                debug!(
                    line = index + 1,
                    found = row.fields.len(),
                    expected = COL_COUNT,
                    "rejecting row"
                );
                return Err(LabscriptsError::InvalidLineLength {
                    line: index + 1,
                    found: row.fields.len(),
                });
            }
            table.widths.observe(&row);
            table.rows.push(row);
        }

        debug!(
            rows = table.rows.len(),
            line_width = table.widths.line_width(),
            "scanned table"
        );
        Ok(table)
    }
}

/// Read and parse a data file.
pub fn read_table(path: impl AsRef<Path>) -> Result<DataTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| LabscriptsError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read data file");
    DataTable::parse(&normalize_newlines(&content))
}
