//! CSV import

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::model::Table;

use super::Parser;

/// Parser for comma-separated files.
///
/// Applies the same per-column type inference as the aligned-table format,
/// so converting a CSV produces identical column types to re-reading the
/// converted file.
pub struct CsvParser;

impl Parser for CsvParser {
    fn parse(&self, input: &mut dyn BufRead) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        let names: Vec<String> = headers.iter().map(str::to_string).collect();
        if names.is_empty() || names.iter().all(|name| name.is_empty()) {
            return Err(Error::EmptyInput);
        }

        let mut raw_rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            raw_rows.push(record.iter().map(str::to_string).collect());
        }

        super::build_table(names, raw_rows)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv" | "tsv")
    }
}
