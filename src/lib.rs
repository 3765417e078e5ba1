//! # hspice_table
//!
//! Extract tabular data from paginated HSPICE text reports.
//!
//! HSPICE prints sweep and transient results as a fixed-width text
//! report in engineering notation, paginated into multiple column
//! blocks when the output is wide. This library parses that format back
//! into one unified numeric table and serializes it as delimited text.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`report`] - Scanner and merger for the paginated report format
//! - [`table`] - The unified in-memory table
//! - [`export`] - Delimited-text serialization and deserialization
//! - [`compare`] - Signal comparison between two extracted tables
//! - [`error`] - Unified error type
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use hspice_table::{export, report};
//!
//! # fn main() -> hspice_table::Result<()> {
//! let table = report::extract_file(Path::new("nfetdc.out"), None)?;
//! export::write_table_file(
//!     &table,
//!     Path::new("nfetdc.csv"),
//!     &export::WriteOptions::default(),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Extraction Method
//!
//! Extraction is a single forward pass over the report lines:
//!
//! 1. Locate each header line (tokens from the closed vocabulary
//!    `time`/`volt`/`voltage`/`current`) and its optional name
//!    sub-header
//! 2. Decode the engineering-notation data rows that follow, dropping
//!    rows with undecodable tokens
//! 3. Merge the resulting sections on their shared index column, exact
//!    match first and nearest-within-tolerance as fallback
//!
//! The whole transform is pure and in-memory; nothing outlives a single
//! extraction call.

pub mod compare;
pub mod error;
pub mod export;
pub mod report;
pub mod table;

// Re-export main types for convenience
pub use error::{HspiceError, Result};
pub use report::{extract, extract_file, ReportKind};
pub use table::Table;

/// Default digits after the decimal point when rendering values.
pub const DEFAULT_PRECISION: usize = 10;
