//! Error types for table reading and writing

use thiserror::Error;

/// Errors produced while building, writing, or reading tables
#[derive(Debug, Error)]
pub enum Error {
    /// One or more requested columns do not exist in the table
    #[error("column(s) not found: {}", .0.join(", "))]
    ColumnNotFound(Vec<String>),

    /// Two columns share the same name
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A row does not match the table width; for parsed input `line` is the
    /// 1-based physical line number, for programmatic construction it is the
    /// 1-based row ordinal
    #[error("row at line {line} has {found} value(s), expected {expected}")]
    RowWidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Columns of unequal length were supplied
    #[error("column '{name}' has {found} row(s), expected {expected}")]
    RaggedColumns {
        name: String,
        expected: usize,
        found: usize,
    },

    /// The input contained no header line
    #[error("empty input: no header line")]
    EmptyInput,

    /// No parser claims the file extension
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Underlying CSV reader failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying JSON serializer failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying stream failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
