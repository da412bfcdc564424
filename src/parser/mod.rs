//! Parser layer for reading tabular data formats

mod csv;
mod infer;
mod table;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::DEFAULT_COMMENT;
use crate::error::{Error, Result};
use crate::model::{Column, Table};

pub use self::csv::CsvParser;
pub use self::table::TableParser;

/// Trait for parsing tabular data into a [`Table`]
pub trait Parser: Send + Sync {
    /// Parse the full input and return a Table
    fn parse(&self, input: &mut dyn BufRead) -> Result<Table>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for creating parsers based on file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn Parser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserFactory {
    /// Create a factory with all supported parsers, using the default
    /// comment marker for the aligned-table format
    pub fn new() -> Self {
        Self::with_comment(DEFAULT_COMMENT)
    }

    /// Create a factory whose table parser recognizes `comment`
    pub fn with_comment(comment: char) -> Self {
        Self {
            parsers: vec![
                Box::new(TableParser::with_comment(comment)),
                Box::new(CsvParser),
            ],
        }
    }

    /// Get a parser for the given file path
    pub fn get_parser(&self, path: &Path) -> Result<&dyn Parser> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        for parser in &self.parsers {
            if parser.supports_extension(&ext) {
                return Ok(parser.as_ref());
            }
        }

        Err(Error::UnsupportedFormat(if ext.is_empty() {
            "unknown".to_string()
        } else {
            ext
        }))
    }

    /// Parse a file using the appropriate parser
    pub fn parse_path(&self, path: &Path) -> Result<Table> {
        let parser = self.get_parser(path)?;
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        parser.parse(&mut reader)
    }
}

/// Assemble a table from header names and raw string rows, running the
/// per-column classification pass
pub(crate) fn build_table(names: Vec<String>, raw_rows: Vec<Vec<String>>) -> Result<Table> {
    let types = infer::classify_columns(&raw_rows, names.len());

    let columns: Vec<Column> = names
        .into_iter()
        .zip(&types)
        .enumerate()
        .map(|(idx, (name, cell_type))| Column::with_type(name, idx, *cell_type))
        .collect();

    let mut table = Table::new(columns)?;
    for raw in raw_rows {
        let cells = raw
            .iter()
            .zip(&types)
            .map(|(token, cell_type)| infer::coerce(token, *cell_type))
            .collect();
        table.add_row(cells)?;
    }
    Ok(table)
}
