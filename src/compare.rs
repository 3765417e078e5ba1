//! Numeric comparison of two extracted tables.
//!
//! Typical use: the same device swept by two simulators (or two analysis
//! modes), exported to tables, then compared by signal magnitude over a
//! shared x axis. The second dataset is linearly interpolated onto the
//! first dataset's x grid and the difference is reported in percent.
//!
//! Column resolution is fuzzy on purpose: signal names vary between
//! report generators (`i(vd)`, `i(Vd_sat)`, `i_vd`), so each axis is
//! resolved through an explicit, ordered alias list with a documented
//! positional fallback (x: column 1, y: column 2, clamped to the table
//! width). The fallback silently assumes the conventional column order,
//! so callers that know their column names should pass aliases.

use log::debug;

use crate::error::{HspiceError, Result};
use crate::table::Table;

/// Default x-axis aliases: gate-voltage style sweep columns.
pub const DEFAULT_X_ALIASES: &[&str] = &["v(ng)", "v_ng", "vng", "sweep", "time"];

/// Default y-axis aliases: drain-current style signal columns.
pub const DEFAULT_Y_ALIASES: &[&str] = &["i(vd)", "i_vd", "ivd", "i(vd_sat)"];

/// Which columns to compare, as ordered alias lists.
#[derive(Debug, Clone)]
pub struct CompareSpec {
    pub x_aliases: Vec<String>,
    pub y_aliases: Vec<String>,
}

impl Default for CompareSpec {
    fn default() -> Self {
        Self {
            x_aliases: DEFAULT_X_ALIASES.iter().map(|s| s.to_string()).collect(),
            y_aliases: DEFAULT_Y_ALIASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Result of comparing a signal between two tables.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Resolved (x, y) column names in the reference table.
    pub reference_columns: (String, String),
    /// Resolved (x, y) column names in the candidate table.
    pub candidate_columns: (String, String),
    /// X values of the reference grid.
    pub x: Vec<f64>,
    /// Percent difference per reference point:
    /// `100 * (candidate - reference) / reference`, 0 where undefined.
    pub percent_diff: Vec<f64>,
    /// Largest-magnitude percent difference (signed).
    pub max_diff: f64,
    /// X value at which the largest difference occurs.
    pub max_diff_x: f64,
    /// Mean percent difference.
    pub mean_diff: f64,
    /// Population standard deviation of the percent differences.
    pub std_diff: f64,
}

/// Resolve a column through the alias list, falling back to a fixed
/// position when nothing matches.
fn resolve_column(table: &Table, aliases: &[String], fallback: usize) -> Result<usize> {
    let refs: Vec<&str> = aliases.iter().map(String::as_str).collect();
    if let Some(idx) = table.find_column(&refs) {
        return Ok(idx);
    }
    if table.columns.is_empty() {
        return Err(HspiceError::ColumnNotFound {
            wanted: aliases.to_vec(),
        });
    }
    let idx = fallback.min(table.columns.len() - 1);
    debug!(
        "no column matched {aliases:?}, falling back to position {idx} ({})",
        table.columns[idx]
    );
    Ok(idx)
}

/// Linear interpolation of `(xp, fp)` at `x`, clamped at both ends.
/// `xp` must be ascending.
fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    match xp {
        [] => f64::NAN,
        [_] => fp[0],
        _ => {
            if x <= xp[0] {
                return fp[0];
            }
            if x >= xp[xp.len() - 1] {
                return fp[fp.len() - 1];
            }
            let hi = xp.partition_point(|&v| v < x).max(1);
            let (x0, x1) = (xp[hi - 1], xp[hi]);
            let (y0, y1) = (fp[hi - 1], fp[hi]);
            if x1 == x0 {
                return y0;
            }
            y0 + (y1 - y0) * (x - x0) / (x1 - x0)
        }
    }
}

/// Compare one signal between `reference` and `candidate`.
///
/// Signals are compared by magnitude (currents flip sign between
/// conventions); the candidate is interpolated onto the reference x
/// grid.
pub fn compare_tables(
    reference: &Table,
    candidate: &Table,
    spec: &CompareSpec,
) -> Result<Comparison> {
    if reference.is_empty() {
        return Err(HspiceError::empty("reference table has no rows"));
    }
    if candidate.is_empty() {
        return Err(HspiceError::empty("candidate table has no rows"));
    }

    let rx = resolve_column(reference, &spec.x_aliases, 1)?;
    let ry = resolve_column(reference, &spec.y_aliases, 2)?;
    let cx = resolve_column(candidate, &spec.x_aliases, 1)?;
    let cy = resolve_column(candidate, &spec.y_aliases, 2)?;

    let x: Vec<f64> = reference.column_values(rx).unwrap_or_default();
    let y_ref: Vec<f64> = reference
        .column_values(ry)
        .unwrap_or_default()
        .iter()
        .map(|v| v.abs())
        .collect();
    let xc: Vec<f64> = candidate.column_values(cx).unwrap_or_default();
    let yc: Vec<f64> = candidate
        .column_values(cy)
        .unwrap_or_default()
        .iter()
        .map(|v| v.abs())
        .collect();

    let percent_diff: Vec<f64> = x
        .iter()
        .zip(y_ref.iter())
        .map(|(&xv, &yr)| {
            let yi = interp(xv, &xc, &yc);
            let pct = 100.0 * (yi - yr) / yr;
            if pct.is_finite() {
                pct
            } else {
                0.0
            }
        })
        .collect();

    let n = percent_diff.len() as f64;
    let mean_diff = percent_diff.iter().sum::<f64>() / n;
    let std_diff = (percent_diff
        .iter()
        .map(|d| (d - mean_diff).powi(2))
        .sum::<f64>()
        / n)
        .sqrt();
    let (max_idx, max_diff) = percent_diff
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.abs().total_cmp(&b.abs()))
        .map(|(i, &d)| (i, d))
        .unwrap_or((0, 0.0));

    Ok(Comparison {
        reference_columns: (
            reference.columns[rx].clone(),
            reference.columns[ry].clone(),
        ),
        candidate_columns: (
            candidate.columns[cx].clone(),
            candidate.columns[cy].clone(),
        ),
        max_diff_x: x[max_idx],
        x,
        percent_diff,
        max_diff,
        mean_diff,
        std_diff,
    })
}
