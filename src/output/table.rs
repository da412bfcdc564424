//! Aligned plain-text table writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::{Align, WriteOptions};
use crate::error::{Error, Result};
use crate::model::Table;

use super::OutputFormatter;

/// Columns to include in the output
#[derive(Debug, Clone, Default)]
pub enum ColumnSelection {
    /// Every column, in the table's native order
    #[default]
    All,
    /// The named columns, emitted in the order given here
    Columns(Vec<String>),
}

impl From<&str> for ColumnSelection {
    fn from(name: &str) -> Self {
        ColumnSelection::Columns(vec![name.to_string()])
    }
}

impl From<Vec<String>> for ColumnSelection {
    fn from(names: Vec<String>) -> Self {
        ColumnSelection::Columns(names)
    }
}

impl From<Vec<&str>> for ColumnSelection {
    fn from(names: Vec<&str>) -> Self {
        ColumnSelection::Columns(names.iter().map(|s| s.to_string()).collect())
    }
}

/// Stringified rows paired with the header row, before alignment
struct RenderedTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Writer producing a border-less, whitespace-aligned grid.
///
/// The header line starts with the comment marker, one space, then the
/// space-padded column names. Each column is padded to the width of its
/// longest rendered token, header label included; the first column is
/// left-justified and the rest right-justified by default.
pub struct TableWriter {
    options: WriteOptions,
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableWriter {
    /// Create a writer with default options
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with the given options
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Write every column of `table` to `writer` in native order
    pub fn write(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        self.write_columns(table, writer, &ColumnSelection::All)
    }

    /// Write the selected columns of `table` to `writer`.
    ///
    /// The whole output is laid out in memory first, so nothing reaches the
    /// writer when a requested column is missing. An I/O failure mid-write
    /// can still leave truncated output behind; there is no atomic commit.
    pub fn write_columns(
        &self,
        table: &Table,
        writer: &mut dyn Write,
        columns: &ColumnSelection,
    ) -> Result<()> {
        let indices = self.select(table, columns)?;
        let rendered = self.render(table, &indices);
        writer.write_all(self.layout(&rendered).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the selected columns of `table` to a new file at `path`
    pub fn write_to_path(
        &self,
        table: &Table,
        path: &Path,
        columns: &ColumnSelection,
    ) -> Result<()> {
        // validate first so a bad selection leaves no file behind
        self.select(table, columns)?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_columns(table, &mut writer, columns)
    }

    /// Resolve the selection to column indices, failing fast when any
    /// requested name is missing
    fn select(&self, table: &Table, columns: &ColumnSelection) -> Result<Vec<usize>> {
        match columns {
            ColumnSelection::All => Ok((0..table.column_count()).collect()),
            ColumnSelection::Columns(names) => {
                let missing: Vec<String> = names
                    .iter()
                    .filter(|name| table.column_index(name).is_none())
                    .cloned()
                    .collect();
                if !missing.is_empty() {
                    return Err(Error::ColumnNotFound(missing));
                }
                Ok(names
                    .iter()
                    .filter_map(|name| table.column_index(name))
                    .collect())
            }
        }
    }

    /// Stringify the selected cells and mark the first header name with the
    /// comment marker
    fn render(&self, table: &Table, indices: &[usize]) -> RenderedTable {
        let mut header: Vec<String> = indices
            .iter()
            .map(|&idx| table.columns[idx].name.clone())
            .collect();
        if let Some(first) = header.first_mut() {
            *first = format!("{} {}", self.options.comment, first);
        }

        let rows = table
            .rows
            .iter()
            .map(|row| indices.iter().map(|&idx| row[idx].render()).collect())
            .collect();

        RenderedTable { header, rows }
    }

    /// Pad every cell to its column width and join the lines
    fn layout(&self, rendered: &RenderedTable) -> String {
        let col_count = rendered.header.len();
        let all_rows = || std::iter::once(&rendered.header).chain(rendered.rows.iter());

        let mut widths = vec![0usize; col_count];
        for row in all_rows() {
            for (idx, cell) in row.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.len());
            }
        }

        let mut output = String::new();
        for row in all_rows() {
            let mut line = String::new();
            for (idx, cell) in row.iter().enumerate() {
                if idx > 0 {
                    line.push_str("  ");
                }
                let align = if idx == 0 {
                    self.options.first_column
                } else {
                    self.options.other_columns
                };
                match align {
                    Align::Left => line.push_str(&format!("{:<width$}", cell, width = widths[idx])),
                    Align::Right => line.push_str(&format!("{:>width$}", cell, width = widths[idx])),
                }
            }
            output.push_str(line.trim_end());
            output.push('\n');
        }
        output
    }
}

impl OutputFormatter for TableWriter {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        self.write(table, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    fn students() -> Table {
        Table::from_columns(vec![
            (
                "Name".to_string(),
                vec![
                    "Ankit".into(),
                    "Aishwarya".into(),
                    "Shaurya".into(),
                    "Shivangi".into(),
                ],
            ),
            (
                "Age".to_string(),
                vec![23i64.into(), 21i64.into(), 22i64.into(), 21i64.into()],
            ),
            (
                "University".to_string(),
                vec!["BHU".into(), "JNU".into(), "DU".into(), "BHU".into()],
            ),
        ])
        .unwrap()
    }

    fn write_to_string(table: &Table, selection: &ColumnSelection) -> String {
        let mut buf = Vec::new();
        TableWriter::new()
            .write_columns(table, &mut buf, selection)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_alignment_is_deterministic() {
        let output = write_to_string(&students(), &ColumnSelection::All);
        let expected = "\
# Name     Age  University
Ankit       23         BHU
Aishwarya   21         JNU
Shaurya     22          DU
Shivangi    21         BHU
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_subset_preserves_requested_order() {
        let output = write_to_string(&students(), &vec!["Age", "Name"].into());
        let first_line = output.lines().next().unwrap();
        assert_eq!(first_line, "# Age       Name");
    }

    #[test]
    fn test_single_column_subset() {
        let output = write_to_string(&students(), &"Age".into());
        assert_eq!(output.lines().next().unwrap(), "# Age");
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn test_missing_column_fails_before_any_write() {
        let mut buf = Vec::new();
        let err = TableWriter::new()
            .write_columns(&students(), &mut buf, &vec!["Age", "Nonexistent"].into())
            .unwrap_err();
        assert!(
            matches!(err, Error::ColumnNotFound(names) if names == vec!["Nonexistent".to_string()])
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_custom_marker_and_alignment() {
        use crate::config::{Align, WriteOptions};

        let options = WriteOptions::new()
            .with_comment('%')
            .with_other_columns(Align::Left);
        let mut buf = Vec::new();
        TableWriter::with_options(options)
            .write(&students(), &mut buf)
            .unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("% Name     Age  University\n"));
        assert!(output.contains("\nAnkit      23   BHU\n"));
    }
}
