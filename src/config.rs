//! Configuration for table layout and CLI output

/// Comment marker used when none is supplied
pub const DEFAULT_COMMENT: char = '#';

/// Horizontal alignment of a rendered column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Output format for rendering a parsed table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Options controlling how a table is laid out on write.
///
/// The layout family is always a border-less, whitespace-delimited grid.
/// There is deliberately no border or box option: reading the file back
/// relies on whitespace being the only delimiter.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Marker prepended to the header line and recognized on skipped lines
    pub comment: char,
    /// Alignment of the first (leftmost) column
    pub first_column: Align,
    /// Alignment of every other column
    pub other_columns: Align,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            comment: DEFAULT_COMMENT,
            first_column: Align::Left,
            other_columns: Align::Right,
        }
    }
}

impl WriteOptions {
    /// Create the default options: `#` marker, first column left-justified,
    /// remaining columns right-justified
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment marker
    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = comment;
        self
    }

    /// Set the first column's alignment
    pub fn with_first_column(mut self, align: Align) -> Self {
        self.first_column = align;
        self
    }

    /// Set the alignment of all columns after the first
    pub fn with_other_columns(mut self, align: Align) -> Self {
        self.other_columns = align;
        self
    }
}
