//! Data rows and column width tracking.

use serde::Serialize;

use super::labels::COL_COUNT;

/// Minimum display width of every column.
pub const MIN_WIDTH: usize = 5;

/// One line of input split on runs of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub fields: Vec<String>,
}

impl Row {
    /// Split a line into fields. Leading and trailing whitespace is ignored
    /// and consecutive separators collapse, so a blank line has no fields.
    pub fn parse(line: &str) -> Self {
        Row {
            fields: line.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Whether the row has exactly `COL_COUNT` fields.
    pub fn is_complete(&self) -> bool {
        self.fields.len() == COL_COUNT
    }

    /// Fields with decimal commas replaced by periods.
    pub fn normalized(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.replace(',', ".")).collect()
    }
}

/// Display width of each column, grown as rows are observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnWidths {
    widths: Vec<usize>,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnWidths {
    /// All columns at `MIN_WIDTH`.
    pub fn new() -> Self {
        ColumnWidths {
            widths: vec![MIN_WIDTH; COL_COUNT],
        }
    }

    /// Grow each column to fit the row's field plus one separating space.
    ///
    /// The row must already be complete; extra fields past `COL_COUNT` are ignored.
    pub fn observe(&mut self, row: &Row) {
        for (width, field) in self.widths.iter_mut().zip(&row.fields) {
            *width = (*width).max(field.chars().count() + 1);
        }
    }

    /// Width of column `index`.
    pub fn get(&self, index: usize) -> usize {
        self.widths[index]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.widths
    }

    /// Length of a rendered line, excluding the newline.
    pub fn line_width(&self) -> usize {
        self.widths.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_row(first: &str) -> Row {
        let mut line = first.to_string();
        for _ in 1..COL_COUNT {
            line.push_str(" 0");
        }
        Row::parse(&line)
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let row = Row::parse("  1,5\t 2  \t3 \n");
        assert_eq!(row.fields, vec!["1,5", "2", "3"]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(Row::parse("   ").fields.is_empty());
        assert!(Row::parse("").fields.is_empty());
    }

    #[test]
    fn test_is_complete() {
        assert!(complete_row("1").is_complete());
        assert!(!Row::parse("1 2 3").is_complete());
    }

    #[test]
    fn test_normalized_replaces_commas() {
        let row = Row::parse("3,14 1,000,5 7");
        assert_eq!(row.normalized(), vec!["3.14", "1.000.5", "7"]);
        // the raw fields are untouched
        assert_eq!(row.fields[0], "3,14");
    }

    #[test]
    fn test_widths_floor() {
        let mut widths = ColumnWidths::new();
        widths.observe(&complete_row("1234"));
        assert_eq!(widths.get(0), MIN_WIDTH);
        assert_eq!(widths.get(1), MIN_WIDTH);
        assert_eq!(widths.line_width(), MIN_WIDTH * COL_COUNT);
    }

    #[test]
    fn test_widths_grow_to_longest_field() {
        let mut widths = ColumnWidths::new();
        widths.observe(&complete_row("12345678"));
        widths.observe(&complete_row("123"));
        assert_eq!(widths.get(0), 9);
        assert_eq!(widths.get(1), MIN_WIDTH);
    }

    #[test]
    fn test_widths_count_chars_not_bytes() {
        let mut widths = ColumnWidths::new();
        widths.observe(&complete_row("αβγδεζ"));
        assert_eq!(widths.get(0), 7);
    }
}
