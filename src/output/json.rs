//! JSON output format

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::model::{CellType, CellValue, Table};

use super::OutputFormatter;

/// JSON output formatter
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable column for JSON output
#[derive(Serialize)]
struct JsonColumn {
    name: String,
    #[serde(rename = "type")]
    cell_type: CellType,
}

#[derive(Serialize)]
struct JsonTable {
    columns: Vec<JsonColumn>,
    rows: Vec<Vec<serde_json::Value>>,
}

fn cell_value_to_json(value: &CellValue) -> serde_json::Value {
    match value {
        CellValue::Int(i) => serde_json::json!(*i),
        CellValue::Float(f) => serde_json::json!(*f),
        CellValue::Text(s) => serde_json::Value::String(s.clone()),
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let output = JsonTable {
            columns: table
                .columns
                .iter()
                .map(|column| JsonColumn {
                    name: column.name.clone(),
                    cell_type: column.cell_type,
                })
                .collect(),
            rows: table
                .rows
                .iter()
                .map(|row| row.iter().map(cell_value_to_json).collect())
                .collect(),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
