//! Presentation of a parsed data table.
//!
//! `FormattedTable` holds the header labels, the computed widths and the
//! comma-normalized rows. It only formats; all validation and width
//! computation happened in [`DataTable::parse`](crate::table::DataTable::parse).

use std::io::Write;

use serde::Serialize;

use crate::table::{header_labels, DataTable};
use crate::Result;

/// Table-ready data: headers, widths and display strings.
#[derive(Debug, Clone, Serialize)]
pub struct FormattedTable {
    /// Column headers: `zmax` then the generated axis labels
    pub headers: Vec<String>,
    /// Display width of each column
    pub widths: Vec<usize>,
    /// Data rows with decimal commas replaced by periods
    pub rows: Vec<Vec<String>>,
}

impl FormattedTable {
    /// Build the presentation form of a parsed table.
    pub fn from_table(table: &DataTable) -> Self {
        FormattedTable {
            headers: header_labels(),
            widths: table.widths.as_slice().to_vec(),
            rows: table.rows.iter().map(|row| row.normalized()).collect(),
        }
    }

    /// Render as aligned text: the header line, then one line per row.
    pub fn to_text(&self) -> String {
        std::iter::once(&self.headers)
            .chain(&self.rows)
            .map(|cells| render_line(cells, &self.widths))
            .collect()
    }

    /// Write the aligned text to `out`.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.to_text().as_bytes())?;
        Ok(())
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Left-align each cell in its column width and terminate the line.
fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!("{:<width$}", cell, width = width));
    }
    line.push('\n');
    line
}
