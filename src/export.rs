//! Delimited-text serialization of extracted tables.
//!
//! One header line with the column names, then one line per row with
//! every value in scientific notation. The delimiter and the rendered
//! precision are caller choices, not part of the extraction contract.
//! [`read_table`] parses the same shape back (plain floats only, no
//! engineering suffixes), which is what the comparison tooling consumes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{HspiceError, Result};
use crate::report::looks_like_data;
use crate::table::Table;

/// Field separator for serialized tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Delimiter {
    #[default]
    Comma,
    Space,
    Tab,
}

impl Delimiter {
    fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Space => " ",
            Delimiter::Tab => "\t",
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Delimiter::Comma => "comma",
            Delimiter::Space => "space",
            Delimiter::Tab => "tab",
        };
        f.write_str(name)
    }
}

/// Rendering options for [`write_table`].
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Field separator.
    pub delimiter: Delimiter,
    /// Digits after the decimal point in scientific notation.
    pub precision: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Comma,
            precision: crate::DEFAULT_PRECISION,
        }
    }
}

/// Serialize a table to a writer.
pub fn write_table<W: Write>(table: &Table, writer: &mut W, opts: &WriteOptions) -> Result<()> {
    if table.columns.is_empty() {
        return Err(HspiceError::empty("no columns to serialize"));
    }
    let sep = opts.delimiter.as_str();
    writeln!(writer, "{}", table.columns.join(sep))?;
    for row in &table.rows {
        let mut first = true;
        for value in row {
            if !first {
                writer.write_all(sep.as_bytes())?;
            }
            write!(writer, "{:.*e}", opts.precision, value)?;
            first = false;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Serialize a table to a file.
pub fn write_table_file(table: &Table, path: &Path, opts: &WriteOptions) -> Result<()> {
    let file = File::create(path).map_err(|e| HspiceError::FileWrite {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    write_table(table, &mut writer, opts)?;
    writer.flush()?;
    debug!("wrote {} rows to {}", table.rows.len(), path.display());
    Ok(())
}

fn split_fields(line: &str) -> Vec<&str> {
    if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}

/// Parse a serialized table back into memory.
///
/// Leading `#` comment lines and blank lines are skipped; the first
/// remaining line is the header. Data lines must start with a digit,
/// sign, or decimal point; anything else is ignored. Values are plain
/// floats (the serializer never emits engineering suffixes). A data row
/// whose width differs from the header is malformed.
pub fn read_table(input: &str) -> Result<Table> {
    let mut lines = input.lines().enumerate();

    let (_, header) = lines
        .by_ref()
        .find(|(_, l)| {
            let t = l.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .ok_or_else(|| HspiceError::empty("no header line"))?;
    let columns: Vec<String> = split_fields(header)
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut table = Table::new(columns);
    for (idx, line) in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || !looks_like_data(trimmed) {
            continue;
        }
        let fields = split_fields(trimmed);
        if fields.len() != table.columns.len() {
            return Err(HspiceError::malformed(
                idx + 1,
                format!(
                    "expected {} values, found {}",
                    table.columns.len(),
                    fields.len()
                ),
            ));
        }
        let row: Vec<f64> = fields
            .iter()
            .map(|f| {
                f.parse::<f64>()
                    .map_err(|_| HspiceError::malformed(idx + 1, format!("bad value '{f}'")))
            })
            .collect::<Result<_>>()?;
        table.rows.push(row);
    }
    Ok(table)
}

/// Parse a serialized table from a file.
pub fn read_table_file(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path).map_err(|e| HspiceError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    read_table(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Table {
        Table {
            columns: vec!["sweep".into(), "v(ng)".into(), "i(vd)".into()],
            rows: vec![
                vec![0.0, 0.0, 1.372197e-7],
                vec![0.1, 0.1, -2.5e-9],
                vec![0.2, 0.2, f64::NAN],
            ],
        }
    }

    fn round_trip(opts: &WriteOptions) {
        let table = sample();
        let mut buf = Vec::new();
        write_table(&table, &mut buf, opts).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let back = read_table(&text).unwrap();

        assert_eq!(back.columns, table.columns);
        assert_eq!(back.rows.len(), table.rows.len());
        for (a, b) in table.rows.iter().zip(back.rows.iter()) {
            for (x, y) in a.iter().zip(b.iter()) {
                if x.is_nan() {
                    assert!(y.is_nan());
                } else {
                    assert_relative_eq!(x, y, max_relative = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_comma() {
        round_trip(&WriteOptions::default());
    }

    #[test]
    fn test_round_trip_space_and_tab() {
        round_trip(&WriteOptions {
            delimiter: Delimiter::Space,
            precision: 10,
        });
        round_trip(&WriteOptions {
            delimiter: Delimiter::Tab,
            precision: 10,
        });
    }

    #[test]
    fn test_read_skips_comments() {
        let text = "# generated\nsweep,i(vd)\n0.0e0,1.0e-9\n# trailing note\n";
        let table = read_table(text).unwrap();
        assert_eq!(table.columns, vec!["sweep", "i(vd)"]);
        assert_eq!(table.rows, vec![vec![0.0, 1e-9]]);
    }

    #[test]
    fn test_read_rejects_ragged_rows() {
        let text = "sweep,i(vd)\n0.0,1.0e-9,2.0\n";
        assert!(matches!(
            read_table(text),
            Err(HspiceError::MalformedTable { line: 2, .. })
        ));
    }

    #[test]
    fn test_read_empty_input() {
        assert!(read_table("").is_err());
    }

    #[test]
    fn test_write_empty_columns_is_an_error() {
        let table = Table::default();
        let mut buf = Vec::new();
        assert!(write_table(&table, &mut buf, &WriteOptions::default()).is_err());
    }
}
