//! hspice2csv - HSPICE report to table converter
//!
//! Converts a paginated HSPICE text report into a delimited numeric
//! table, and compares signals between two extracted tables.
//!
//! # Usage
//!
//! ```bash
//! hspice2csv convert nfetdc.out nfetdc.csv
//! hspice2csv compare nfetdc.csv nfettrans.csv --y-alias "i(vd)"
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hspice_table::{
    compare::{compare_tables, CompareSpec},
    error::Result,
    export::{read_table_file, write_table_file, Delimiter, WriteOptions},
    report::{extract_file, ReportKind},
    DEFAULT_PRECISION,
};

/// HSPICE report to table converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the data table from a paginated report
    Convert {
        /// Path to the HSPICE report (.out)
        #[arg(value_name = "REPORT")]
        input: PathBuf,

        /// Output table path (defaults to the input with a .csv extension)
        #[arg(value_name = "TABLE")]
        output: Option<PathBuf>,

        /// Report kind; detected from the first header line when omitted
        #[arg(short, long, value_enum)]
        kind: Option<ReportKind>,

        /// Field separator for the output table
        #[arg(short, long, value_enum, default_value_t = Delimiter::Comma)]
        delimiter: Delimiter,

        /// Digits after the decimal point
        #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },

    /// Compare a signal between two extracted tables
    Compare {
        /// Reference table
        #[arg(value_name = "REFERENCE")]
        reference: PathBuf,

        /// Candidate table
        #[arg(value_name = "CANDIDATE")]
        candidate: PathBuf,

        /// X-axis column aliases, tried in order (repeatable)
        #[arg(long = "x-alias", value_name = "ALIAS")]
        x_aliases: Vec<String>,

        /// Y-axis column aliases, tried in order (repeatable)
        #[arg(long = "y-alias", value_name = "ALIAS")]
        y_aliases: Vec<String>,
    },
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    match Args::parse().command {
        Command::Convert {
            input,
            output,
            kind,
            delimiter,
            precision,
        } => convert(input, output, kind, delimiter, precision),
        Command::Compare {
            reference,
            candidate,
            x_aliases,
            y_aliases,
        } => compare(reference, candidate, x_aliases, y_aliases),
    }
}

fn convert(
    input: PathBuf,
    output: Option<PathBuf>,
    kind: Option<ReportKind>,
    delimiter: Delimiter,
    precision: usize,
) -> Result<()> {
    let output = output.unwrap_or_else(|| input.with_extension("csv"));

    eprintln!("Parsing {}...", input.display());
    let table = extract_file(&input, kind)?;
    eprintln!("Found {} data points", table.len());
    eprintln!("Columns ({}): {:?}", table.columns.len(), table.columns);

    let opts = WriteOptions {
        delimiter,
        precision,
    };
    write_table_file(&table, &output, &opts)?;
    eprintln!("Wrote {}", output.display());
    Ok(())
}

fn compare(
    reference: PathBuf,
    candidate: PathBuf,
    x_aliases: Vec<String>,
    y_aliases: Vec<String>,
) -> Result<()> {
    let ref_table = read_table_file(&reference)?;
    let cand_table = read_table_file(&candidate)?;

    let mut spec = CompareSpec::default();
    if !x_aliases.is_empty() {
        spec.x_aliases = x_aliases;
    }
    if !y_aliases.is_empty() {
        spec.y_aliases = y_aliases;
    }

    let cmp = compare_tables(&ref_table, &cand_table, &spec)?;

    println!(
        "Reference {}: x={}, y={}",
        reference.display(),
        cmp.reference_columns.0,
        cmp.reference_columns.1
    );
    println!(
        "Candidate {}: x={}, y={}",
        candidate.display(),
        cmp.candidate_columns.0,
        cmp.candidate_columns.1
    );
    println!(
        "Max difference: {:.2}% at x = {:.6}",
        cmp.max_diff, cmp.max_diff_x
    );
    println!("Mean difference: {:.2}%", cmp.mean_diff);
    println!("Std difference: {:.2}%", cmp.std_diff);
    Ok(())
}
