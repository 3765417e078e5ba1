//! Report-kind configuration.
//!
//! The paginated report format comes in two observed shapes that differ
//! only in their header vocabulary, the name of the unlabeled index
//! column, and the tolerance used when re-aligning paginated rows. Both
//! shapes share one scanner and one merger; the differences live here.

use super::scanner::header_tokens;

/// The analysis that produced a report, as far as the scanner cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportKind {
    /// DC transfer curves: the index column is the swept source value.
    DcSweep,
    /// Transient analysis: the index column is simulation time.
    Transient,
}

impl ReportKind {
    /// Header-type tokens recognized by this kind, lowercase.
    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            ReportKind::DcSweep => &["volt", "voltage", "current"],
            ReportKind::Transient => &["time", "volt", "voltage", "current"],
        }
    }

    /// Name given to the unlabeled merge-index column.
    pub fn index_column(self) -> &'static str {
        match self {
            ReportKind::DcSweep => "sweep",
            ReportKind::Transient => "time",
        }
    }

    /// Absolute tolerance for matching index values across paginated
    /// sections. Pagination sometimes perturbs the last significant
    /// digit of the shared index, so exact match gets a fallback.
    pub fn merge_tolerance(self) -> f64 {
        match self {
            ReportKind::DcSweep => 1e-12,
            ReportKind::Transient => 1e-15,
        }
    }

    /// Guess the kind from report text: the first recognizable header
    /// line decides. A `time` token makes it transient; anything else
    /// (including a report with no header at all) is a DC sweep.
    pub fn detect(input: &str) -> ReportKind {
        for line in input.lines() {
            if let Some(tokens) = header_tokens(line, ReportKind::Transient.vocabulary()) {
                if tokens.iter().any(|t| t == "time") {
                    return ReportKind::Transient;
                }
                return ReportKind::DcSweep;
            }
        }
        ReportKind::DcSweep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_transient() {
        let text = "some banner\n time  volt  current\n       out   vd\n";
        assert_eq!(ReportKind::detect(text), ReportKind::Transient);
    }

    #[test]
    fn test_detect_dc_sweep() {
        let text = "volt  current  current\n       ng    vd\n";
        assert_eq!(ReportKind::detect(text), ReportKind::DcSweep);
    }

    #[test]
    fn test_detect_defaults_to_dc() {
        assert_eq!(ReportKind::detect("no headers here\n"), ReportKind::DcSweep);
    }

    #[test]
    fn test_tolerances() {
        assert_eq!(ReportKind::DcSweep.merge_tolerance(), 1e-12);
        assert_eq!(ReportKind::Transient.merge_tolerance(), 1e-15);
    }
}
