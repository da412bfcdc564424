//! Table and cell value data structures

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::schema::{CellType, Column};

/// A single scalar cell value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::Text(a), CellValue::Text(b)) => a == b,
            // Cross-type numeric comparison
            (CellValue::Int(a), CellValue::Float(b)) => (*a as f64) == *b,
            (CellValue::Float(a), CellValue::Int(b)) => *a == (*b as f64),
            _ => false,
        }
    }
}

impl CellValue {
    /// The type of this single value
    pub fn cell_type(&self) -> CellType {
        match self {
            CellValue::Int(_) => CellType::Int,
            CellValue::Float(_) => CellType::Float,
            CellValue::Text(_) => CellType::Text,
        }
    }

    /// Render the value the way it appears in a table file
    pub fn render(&self) -> String {
        match self {
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => render_float(*f),
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// Round floats keep a decimal point so a float column is still inferred as
/// float after a round trip.
fn render_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

/// A table of named, equal-length columns
///
/// Column order and row order are both significant and preserved end to end.
/// Every row has exactly one cell per column (the table is rectangular) and
/// every column name is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column definitions
    pub columns: Vec<Column>,
    /// Rows in column order
    pub rows: Vec<Vec<CellValue>>,
    /// Index from column name to column position
    name_index: IndexMap<String, usize>,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut name_index = IndexMap::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            if name_index.insert(column.name.clone(), idx).is_some() {
                return Err(Error::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
            name_index,
        })
    }

    /// Build a table from named value columns, inferring each column's type
    /// from its values (int and float widen to float, anything else to text)
    pub fn from_columns(columns: Vec<(String, Vec<CellValue>)>) -> Result<Self> {
        let expected = columns.first().map(|(_, values)| values.len()).unwrap_or(0);
        for (name, values) in &columns {
            if values.len() != expected {
                return Err(Error::RaggedColumns {
                    name: name.clone(),
                    expected,
                    found: values.len(),
                });
            }
        }

        let defs: Vec<Column> = columns
            .iter()
            .enumerate()
            .map(|(idx, (name, values))| Column::with_type(name.clone(), idx, column_type(values)))
            .collect();

        let mut table = Table::new(defs)?;
        for row_idx in 0..expected {
            let cells: Vec<CellValue> = columns
                .iter()
                .map(|(_, values)| values[row_idx].clone())
                .collect();
            table.add_row(cells)?;
        }
        Ok(table)
    }

    /// Append a row; the cell count must match the column count
    pub fn add_row(&mut self, cells: Vec<CellValue>) -> Result<()> {
        if cells.len() != self.columns.len() {
            return Err(Error::RowWidthMismatch {
                line: self.rows.len() + 1,
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|idx| &self.columns[idx])
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Project the table onto the named columns, in the order given
    pub fn select(&self, names: &[String]) -> Result<Table> {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(Error::ColumnNotFound(missing));
        }

        let indices: Vec<usize> = names
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();

        let columns: Vec<Column> = indices
            .iter()
            .enumerate()
            .map(|(new_idx, &old_idx)| {
                let column = &self.columns[old_idx];
                Column::with_type(column.name.clone(), new_idx, column.cell_type)
            })
            .collect();

        let mut table = Table::new(columns)?;
        for row in &self.rows {
            let cells: Vec<CellValue> = indices.iter().map(|&idx| row[idx].clone()).collect();
            table.add_row(cells)?;
        }
        Ok(table)
    }
}

/// The single type covering every value of a column
fn column_type(values: &[CellValue]) -> CellType {
    let mut types = values.iter().map(CellValue::cell_type);
    match types.next() {
        None => CellType::Text,
        Some(first) => types.fold(first, CellType::widen),
    }
}
