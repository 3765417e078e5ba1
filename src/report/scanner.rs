//! Section scanner for paginated report text.
//!
//! A report page starts with a type-header line (tokens from a closed
//! vocabulary such as `volt  current  current`), usually followed by a
//! name sub-header assigning a signal name to each slot, then data rows
//! until a terminator. The scanner is a single forward pass with one
//! line of lookahead for the sub-header.

use log::debug;

use super::kind::ReportKind;
use super::value::decode;

/// One contiguous page of the report: derived column names plus the
/// decoded data rows. Consumed by the merger, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

/// Scanner over report text, yielding one [`Section`] per page.
pub struct Scanner<'a> {
    lines: std::iter::Peekable<std::str::Lines<'a>>,
    kind: ReportKind,
    saw_header: bool,
}

/// Match a line against the header grammar: every whitespace-delimited
/// token must be in `vocab` (case-insensitive). Returns the lowercased
/// tokens on a match.
pub(crate) fn header_tokens(line: &str, vocab: &[&str]) -> Option<Vec<String>> {
    let tokens: Vec<String> = line
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();
    if tokens.is_empty() {
        return None;
    }
    if tokens.iter().all(|t| vocab.contains(&t.as_str())) {
        Some(tokens)
    } else {
        None
    }
}

/// True when a line could begin a data row: first character is a digit,
/// a sign, or a decimal point.
pub(crate) fn looks_like_data(line: &str) -> bool {
    matches!(
        line.trim_start().chars().next(),
        Some('0'..='9') | Some('-') | Some('+') | Some('.')
    )
}

/// True when a line ends the data rows of a section.
fn is_terminator(trimmed: &str) -> bool {
    let lower = trimmed.to_lowercase();
    if matches!(lower.chars().next(), Some('y' | 'x' | '*' | '$' | '>')) {
        return true;
    }
    lower.contains("job") || lower.contains("concluded")
}

fn type_column(ty: &str, name: &str) -> String {
    match ty {
        "time" => "time".to_string(),
        "volt" | "voltage" => format!("v({name})"),
        _ => format!("i({name})"),
    }
}

/// Derive column names from the header types and the optional sub-header
/// names.
///
/// When the sub-header has fewer names than the header has types, the
/// first header slot is the unlabeled merge index (the swept source or
/// time base) and the remaining type/name pairs shift by one. With no
/// sub-header at all, every slot gets a positional `col<N>` placeholder.
fn build_columns(types: &[String], names: Option<&[&str]>, kind: ReportKind) -> Vec<String> {
    match names {
        None => types
            .iter()
            .enumerate()
            .map(|(j, ty)| type_column(ty, &format!("col{j}")))
            .collect(),
        Some(names) if names.len() < types.len() => {
            let mut columns = vec![kind.index_column().to_string()];
            for (j, ty) in types[1..].iter().enumerate() {
                let placeholder;
                let name = match names.get(j) {
                    Some(n) => *n,
                    None => {
                        placeholder = format!("col{}", j + 1);
                        placeholder.as_str()
                    }
                };
                columns.push(type_column(ty, name));
            }
            columns
        }
        Some(names) => types
            .iter()
            .zip(names.iter())
            .map(|(ty, name)| type_column(ty, name))
            .collect(),
    }
}

impl<'a> Scanner<'a> {
    /// Create a scanner over the given report text.
    pub fn new(input: &'a str, kind: ReportKind) -> Self {
        Self {
            lines: input.lines().peekable(),
            kind,
            saw_header: false,
        }
    }

    /// Whether any header line has been matched so far. Distinguishes
    /// "no data section found" from "header found but zero rows".
    pub fn saw_header(&self) -> bool {
        self.saw_header
    }

    /// Scan forward to the next section with at least one valid data row.
    pub fn next_section(&mut self) -> Option<Section> {
        let vocab = self.kind.vocabulary();

        while let Some(line) = self.lines.next() {
            let Some(types) = header_tokens(line, vocab) else {
                continue;
            };
            self.saw_header = true;

            // Sub-header lookahead: the next line carries signal names
            // unless it already looks like a data row.
            let has_names = self.lines.peek().is_some_and(|l| !looks_like_data(l));
            let names: Option<Vec<&str>> = if has_names {
                self.lines.next().map(|l| l.split_whitespace().collect())
            } else {
                None
            };
            let mut columns = build_columns(&types, names.as_deref(), self.kind);

            let rows = self.collect_rows(&columns);
            if rows.is_empty() {
                continue;
            }

            // A row carrying one extra leading value means the page
            // repeats the merge index without declaring it.
            if rows[0].len() == columns.len() + 1 {
                columns.insert(0, self.kind.index_column().to_string());
            }
            return Some(Section { columns, rows });
        }
        None
    }

    fn collect_rows(&mut self, columns: &[String]) -> Vec<Vec<f64>> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut width: Option<usize> = None;

        while let Some(&next) = self.lines.peek() {
            let trimmed = next.trim();
            if trimmed.is_empty() {
                self.lines.next();
                continue;
            }
            if is_terminator(trimmed) || !looks_like_data(trimmed) {
                break;
            }
            let line = self.lines.next().unwrap_or_default();

            let decoded: Result<Vec<f64>, _> =
                line.split_whitespace().map(decode).collect();
            let row = match decoded {
                Ok(row) => row,
                Err(e) => {
                    debug!("dropping row ({e}): {line}");
                    continue;
                }
            };

            // First accepted row fixes the width; the declared column
            // count and one-wider (undeclared index) are both legal.
            match width {
                None if row.len() == columns.len() || row.len() == columns.len() + 1 => {
                    width = Some(row.len());
                }
                None => {
                    debug!("dropping row with {} values for {} columns", row.len(), columns.len());
                    continue;
                }
                Some(w) if row.len() != w => {
                    debug!("dropping row with {} values, expected {w}", row.len());
                    continue;
                }
                Some(_) => {}
            }
            rows.push(row);
        }
        rows
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Section;

    fn next(&mut self) -> Option<Section> {
        self.next_section()
    }
}
