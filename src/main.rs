//! plaintab - Aligned plain-text tables for tabular data

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use plaintab::config::{OutputFormat, WriteOptions};
use plaintab::model::Table;
use plaintab::output::{render_to_stdout, OutputFactory, OutputFormatter, TableWriter};
use plaintab::parser::{ParserFactory, TableParser};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Read, convert, and check aligned plain-text tables
#[derive(Parser, Debug)]
#[command(name = "plaintab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (.txt/.tab/.dat aligned table, or .csv/.tsv)
    input: PathBuf,

    /// Write the table to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Column(s) to keep, in order (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Comment marker for the header line and skipped lines
    #[arg(long, default_value = "#")]
    comment: char,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: CliOutputFormat,

    /// Round-trip the table through the aligned format in memory and report
    /// whether it survives unchanged
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1) // Round trip lost data
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    let factory = ParserFactory::with_comment(cli.comment);
    let table = factory
        .parse_path(&cli.input)
        .with_context(|| format!("Failed to parse input file: {}", cli.input.display()))?;

    let table = if cli.columns.is_empty() {
        table
    } else {
        table
            .select(&cli.columns)
            .context("Failed to select columns")?
    };

    let options = WriteOptions::new().with_comment(cli.comment);

    if cli.check {
        return check_round_trip(&table, options, cli.comment);
    }

    match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            OutputFactory::with_options(cli.format.into(), options).render(&table, &mut writer)?;
        }
        None => render_to_stdout(&table, cli.format.into(), options)?,
    }

    Ok(true)
}

fn check_round_trip(table: &Table, options: WriteOptions, comment: char) -> Result<bool> {
    let mut buf = Vec::new();
    TableWriter::with_options(options).write(table, &mut buf)?;
    let reread = TableParser::with_comment(comment).read(&mut buf.as_slice())?;

    if reread == *table {
        println!(
            "ok: {} column(s), {} row(s) survive a round trip",
            table.column_count(),
            table.row_count()
        );
        Ok(true)
    } else {
        println!("mismatch: table does not survive a round trip");
        Ok(false)
    }
}
