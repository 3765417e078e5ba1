//! The unified table produced by report extraction.
//!
//! A [`Table`] is an ordered list of column names plus an ordered list of
//! rows of `f64` values, aligned positionally with the columns. Column 0 is
//! the merge index (the sweep or time base) and is monotonic per the source
//! sweep.

/// An in-memory numeric table with named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Ordered column names. Index columns are the literal `sweep` or
    /// `time`; measured columns are `v(<name>)` or `i(<name>)`.
    pub columns: Vec<String>,
    /// Data rows. Every row has exactly `columns.len()` values.
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    /// Create a table with the given columns and no rows.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extract one column as a vector, by index.
    ///
    /// Returns `None` when the index is out of range.
    pub fn column_values(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.columns.len() {
            return None;
        }
        Some(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Find the first column whose name contains any of the given aliases,
    /// case-insensitively, in alias order.
    ///
    /// This is the fuzzy lookup used by downstream consumers to locate a
    /// signal (e.g. aliases `["i(vd)", "ivd"]` match a column named
    /// `i(Vd_sat)`). Alias order wins over column order: all columns are
    /// checked against the first alias before the second alias is tried.
    pub fn find_column(&self, aliases: &[&str]) -> Option<usize> {
        for alias in aliases {
            let alias = alias.to_lowercase();
            for (i, name) in self.columns.iter().enumerate() {
                if name.to_lowercase().contains(&alias) {
                    return Some(i);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            columns: vec!["sweep".into(), "v(ng)".into(), "i(Vd_sat)".into()],
            rows: vec![vec![0.0, 0.0, 1e-9], vec![0.1, 0.1, 2e-9]],
        }
    }

    #[test]
    fn test_column_values() {
        let t = sample();
        assert_eq!(t.column_values(2), Some(vec![1e-9, 2e-9]));
        assert_eq!(t.column_values(3), None);
    }

    #[test]
    fn test_find_column_case_insensitive() {
        let t = sample();
        assert_eq!(t.find_column(&["i(vd)"]), Some(2));
        assert_eq!(t.find_column(&["V(NG)"]), Some(1));
        assert_eq!(t.find_column(&["freq"]), None);
    }

    #[test]
    fn test_find_column_alias_order_wins() {
        let t = sample();
        // "sweep" appears earlier in the table, but the first alias is
        // checked against every column first.
        assert_eq!(t.find_column(&["i(vd", "sweep"]), Some(2));
    }
}
