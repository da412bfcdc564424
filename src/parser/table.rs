//! Parser for the aligned plain-text table format

use std::io::BufRead;

use crate::config::DEFAULT_COMMENT;
use crate::error::{Error, Result};
use crate::model::Table;

use super::Parser;

/// Parser for whitespace-aligned text tables.
///
/// The first line of the input is always the header. The comment marker is
/// blanked out of it wherever it occurs, not only at the start, and the
/// remainder is split on runs of whitespace to recover the column names.
/// A marker character inside a header name is blanked too and splits that
/// name in two; a known sharp edge of the format.
pub struct TableParser {
    comment: char,
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TableParser {
    /// Create a parser recognizing the default `#` marker
    pub fn new() -> Self {
        Self {
            comment: DEFAULT_COMMENT,
        }
    }

    /// Create a parser recognizing `comment` as the marker
    pub fn with_comment(comment: char) -> Self {
        Self { comment }
    }

    /// Read one table from `input`.
    ///
    /// Blank lines and lines whose first non-whitespace character is the
    /// marker are skipped. Every remaining line must split into exactly as
    /// many whitespace-separated tokens as the header has names, or the
    /// whole read fails.
    pub fn read(&self, input: &mut dyn BufRead) -> Result<Table> {
        let mut lines = input.lines();

        let header_line = match lines.next() {
            Some(line) => line?,
            None => return Err(Error::EmptyInput),
        };

        let names: Vec<String> = header_line
            .replace(self.comment, " ")
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut raw_rows: Vec<Vec<String>> = Vec::new();
        for (offset, line) in lines.enumerate() {
            let line = line?;
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with(self.comment) {
                continue;
            }

            let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            if tokens.len() != names.len() {
                return Err(Error::RowWidthMismatch {
                    // the header occupies line 1
                    line: offset + 2,
                    expected: names.len(),
                    found: tokens.len(),
                });
            }
            raw_rows.push(tokens);
        }

        super::build_table(names, raw_rows)
    }
}

impl Parser for TableParser {
    fn parse(&self, input: &mut dyn BufRead) -> Result<Table> {
        self.read(input)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "txt" | "tab" | "dat")
    }
}
