//! plaintab - Aligned plain-text tables for tabular data
//!
//! Reads and writes small-to-medium tabular datasets as human-readable,
//! column-aligned text files that stay easy to diff and edit by hand. The
//! header line is marked with a comment character so other tools treat it as
//! a comment, and column types are inferred per column on read.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use config::WriteOptions;
pub use error::{Error, Result};
pub use model::Table;
pub use output::{ColumnSelection, TableWriter};
pub use parser::TableParser;
