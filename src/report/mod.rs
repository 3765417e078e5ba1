//! Parser for paginated HSPICE text reports.
//!
//! HSPICE prints analysis results as a line-oriented report. Each page
//! starts with a type-header naming the kind of every column, usually
//! followed by a sub-header naming the signal in each slot, then data
//! rows in engineering notation until a terminator line:
//!
//! ```text
//! volt     current   current
//!           vd        vs
//!    0.0     1.2340n  -1.2340n
//!  100.0m    2.4875n  -2.4875n
//! y
//! ```
//!
//! # Format Notes
//!
//! - Header tokens come from a closed vocabulary (`time`, `volt`,
//!   `voltage`, `current`), case-insensitive, repetition allowed.
//! - The independent variable (sweep value or time) is often unlabeled:
//!   the sub-header then has one name fewer than the header has types,
//!   and slot 0 becomes the `sweep`/`time` index column.
//! - Wide sweeps are paginated into several sections that repeat the
//!   index column; [`merge_sections`] re-aligns them by index value,
//!   exact first and then within a per-kind tolerance, because
//!   pagination sometimes perturbs the last printed digit.
//! - Values use single-letter magnitude suffixes (`1.00000k` = 1000.0,
//!   `-137.2197n` = -1.372197e-7, `x` = 1e6).
//! - A data section ends at a line starting with `y`, `x`, `*`, `$`,
//!   `>` or mentioning the job banner; blank lines inside a section are
//!   skipped.

mod kind;
mod merge;
mod scanner;
mod value;

pub use kind::ReportKind;
pub use merge::merge_sections;
pub use scanner::{Scanner, Section};
pub use value::decode;

pub(crate) use scanner::looks_like_data;

use std::path::Path;

use log::debug;

use crate::error::{HspiceError, Result};
use crate::table::Table;

fn extract_named(input: &str, kind: ReportKind, origin: &str) -> Result<Table> {
    let mut scanner = Scanner::new(input, kind);
    let mut sections = Vec::new();
    while let Some(section) = scanner.next_section() {
        debug!(
            "section {}: {} columns, {} rows",
            sections.len(),
            section.columns.len(),
            section.rows.len()
        );
        sections.push(section);
    }

    if sections.is_empty() {
        if scanner.saw_header() {
            return Err(HspiceError::NoDataExtracted {
                path: origin.to_string(),
            });
        }
        return Err(HspiceError::NoHeaderFound {
            path: origin.to_string(),
        });
    }
    merge_sections(sections, kind)
}

/// Extract the unified data table from report text.
pub fn extract(input: &str, kind: ReportKind) -> Result<Table> {
    extract_named(input, kind, "<input>")
}

/// Extract the unified data table from a report file.
///
/// With `kind` omitted the report kind is detected from the first
/// header line ([`ReportKind::detect`]).
pub fn extract_file(path: &Path, kind: Option<ReportKind>) -> Result<Table> {
    let content = std::fs::read_to_string(path).map_err(|e| HspiceError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    let kind = kind.unwrap_or_else(|| ReportKind::detect(&content));
    debug!("extracting {} as {kind:?}", path.display());
    extract_named(&content, kind, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_two_section_report() {
        let text = "\
volt  current
 ng    vd
  0.0   1.0n
  0.1   2.0n
y
current
 vs
  0.0   3.0n
  0.1   4.0n
y
";
        let table = extract(text, ReportKind::DcSweep).unwrap();
        assert_eq!(table.columns, vec!["v(ng)", "i(vd)", "i(vs)"]);
        assert_eq!(
            table.rows,
            vec![vec![0.0, 1e-9, 3e-9], vec![0.1, 2e-9, 4e-9]]
        );
    }

    #[test]
    fn test_no_header_is_fatal() {
        let err = extract("nothing to see\n1.0 2.0\n", ReportKind::DcSweep).unwrap_err();
        assert!(matches!(err, HspiceError::NoHeaderFound { .. }));
    }

    #[test]
    fn test_header_without_rows_is_fatal() {
        let err = extract("volt  current\n ng   vd\ny\n", ReportKind::DcSweep).unwrap_err();
        assert!(matches!(err, HspiceError::NoDataExtracted { .. }));
    }
}
