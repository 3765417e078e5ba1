//! Multi-section merger.
//!
//! HSPICE paginates wide output: when a sweep produces more columns than
//! fit one page, the remaining columns are printed as further sections
//! sharing the same index axis. The merger stitches those sections back
//! into one table keyed on column 0 of each row.

use log::debug;

use super::kind::ReportKind;
use super::scanner::Section;
use crate::error::{HspiceError, Result};
use crate::table::Table;

/// Merge paginated sections into one table.
///
/// The first section is primary: its index values are the canonical key
/// sequence and its rows seed the output. Every later section contributes
/// its non-index columns, matched row by row against the primary keys,
/// exact first and then within the kind's tolerance. A primary key with
/// no counterpart gets NaN filler; no primary row is ever dropped.
pub fn merge_sections(sections: Vec<Section>, kind: ReportKind) -> Result<Table> {
    let mut sections = sections.into_iter();
    let primary = sections
        .next()
        .ok_or_else(|| HspiceError::empty("no sections to merge"))?;

    let keys: Vec<f64> = primary.rows.iter().map(|row| row[0]).collect();
    let mut table = Table {
        columns: primary.columns,
        rows: primary.rows,
    };

    let tolerance = kind.merge_tolerance();
    for section in sections {
        table.columns.extend_from_slice(&section.columns[1..]);
        let added = section.columns.len() - 1;

        // Lookup from this section's index value to its data values.
        let lookup: Vec<(f64, &[f64])> = section
            .rows
            .iter()
            .map(|row| (row[0], &row[1..]))
            .collect();

        for (row, &key) in table.rows.iter_mut().zip(keys.iter()) {
            let found = lookup
                .iter()
                .find(|(k, _)| *k == key)
                .or_else(|| lookup.iter().find(|(k, _)| (k - key).abs() < tolerance));
            match found {
                Some((_, values)) => row.extend_from_slice(values),
                None => {
                    debug!("no match for index {key:e} within {tolerance:e}, filling NaN");
                    row.extend(std::iter::repeat(f64::NAN).take(added));
                }
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(columns: &[&str], rows: &[&[f64]]) -> Section {
        Section {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(|r| r.to_vec()).collect(),
        }
    }

    #[test]
    fn test_merge_exact_keys() {
        let a = section(&["v(ng)", "i(vd)"], &[&[0.0, 1e-9], &[0.1, 2e-9]]);
        let b = section(&["sweep", "i(vs)"], &[&[0.0, 3e-9], &[0.1, 4e-9]]);
        let table = merge_sections(vec![a, b], ReportKind::DcSweep).unwrap();
        assert_eq!(table.columns, vec!["v(ng)", "i(vd)", "i(vs)"]);
        assert_eq!(table.rows, vec![vec![0.0, 1e-9, 3e-9], vec![0.1, 2e-9, 4e-9]]);
        assert!(table.rows.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn test_merge_within_tolerance() {
        let a = section(&["v(ng)", "i(vd)"], &[&[1.0, 1e-9]]);
        let b = section(&["sweep", "i(vs)"], &[&[1.0000000001, 3e-9]]);
        let table = merge_sections(vec![a, b], ReportKind::DcSweep).unwrap();
        assert_eq!(table.rows, vec![vec![1.0, 1e-9, 3e-9]]);
    }

    #[test]
    fn test_merge_outside_tolerance_fills_nan() {
        let a = section(&["v(ng)", "i(vd)"], &[&[0.0, 1e-9], &[0.5, 2e-9]]);
        let b = section(&["sweep", "i(vs)", "i(vb)"], &[&[0.0, 3e-9, 5e-9]]);
        let table = merge_sections(vec![a, b], ReportKind::DcSweep).unwrap();
        // Unmatched primary row is kept, padded with NaN for each
        // missing column.
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec![0.0, 1e-9, 3e-9, 5e-9]);
        assert_eq!(table.rows[1][..2], [0.5, 2e-9]);
        assert!(table.rows[1][2].is_nan());
        assert!(table.rows[1][3].is_nan());
    }

    #[test]
    fn test_merge_transient_tolerance_is_tighter() {
        let a = section(&["time", "v(out)"], &[&[1e-9, 0.5]]);
        let b = section(&["time", "i(vd)"], &[&[1e-9 + 1e-14, 2e-9]]);
        let table = merge_sections(vec![a, b], ReportKind::Transient).unwrap();
        // 1e-14 off is outside the 1e-15 transient tolerance.
        assert!(table.rows[0][2].is_nan());
    }

    #[test]
    fn test_merge_empty_is_an_error() {
        assert!(merge_sections(Vec::new(), ReportKind::DcSweep).is_err());
    }
}
