//! # labscriptslib
//!
//! Text utilities for the lab's data and write-ups.
//!
//! ## Overview
//!
//! Two independent tools share this crate:
//!
//! - **Table formatter** ([`table`], [`output`]): reads a whitespace-separated
//!   zmax data file with exactly 55 columns per row, validates every row,
//!   computes per-column widths and renders an aligned table headed by
//!   `zmax` and the generated `bbb2` ... `ttt3` axis labels.
//! - **Markup stripper** ([`strip`]): turns a LaTeX document into a plain-text
//!   approximation with an ordered list of regex substitutions.
//!
//! Both are pure: they return data and errors, and leave printing and
//! process exit codes to the `labscripts` binaries.
//!
//! ## Example
//!
//! ```rust
//! use labscriptslib::{strip, DataTable, FormattedTable, COL_COUNT};
//!
//! // Strip markup
//! let plain = strip("\\emph{Hello}~world % note\n");
//! assert_eq!(plain, "Hello world ");
//!
//! // Format a one-row table
//! let row: Vec<String> = (0..COL_COUNT).map(|i| format!("{i},0")).collect();
//! let table = DataTable::parse(&row.join(" ")).unwrap();
//! let text = FormattedTable::from_table(&table).to_text();
//! assert!(text.starts_with("zmax bbb2 bbb3 "));
//! assert!(text.lines().nth(1).unwrap().starts_with("0.0  1.0  2.0  "));
//!
//! // A short row is rejected
//! let err = DataTable::parse("1 2 3").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid line length");
//! ```

pub mod error;
pub mod options;
pub mod output;
pub mod strip;
pub mod table;
pub mod text;

pub use error::LabscriptsError;
pub use options::OutputMode;
pub use output::{format_file, FormattedTable};
pub use strip::{strip, strip_reader, Rule, RULES};
pub use table::{header_labels, read_table, ColumnWidths, DataTable, Row, COL_COUNT, MIN_WIDTH};

/// Result type for labscriptslib operations
pub type Result<T> = std::result::Result<T, LabscriptsError>;
