//! Output formatting for tables

mod json;
mod table;

use std::io::Write;

use crate::config::{OutputFormat, WriteOptions};
use crate::error::Result;
use crate::model::Table;

pub use json::JsonOutput;
pub use table::{ColumnSelection, TableWriter};

/// Trait for table output formatters
pub trait OutputFormatter {
    /// Render a table to a writer
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        Self::with_options(format, WriteOptions::default())
    }

    /// Create a formatter honoring the given layout options; JSON output
    /// ignores them
    pub fn with_options(format: OutputFormat, options: WriteOptions) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Text => Box::new(TableWriter::with_options(options)),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Render a table to stdout
pub fn render_to_stdout(table: &Table, format: OutputFormat, options: WriteOptions) -> Result<()> {
    let formatter = OutputFactory::with_options(format, options);
    let mut stdout = std::io::stdout();
    formatter.render(table, &mut stdout)
}
