//! Engineering-notation token decoder.
//!
//! HSPICE prints scalar measurements either as plain floats (scientific
//! notation allowed) or with a single-letter magnitude suffix, e.g.
//! `-137.2197n` for `-1.372197e-7` or `1.00000k` for `1000.0`.

use crate::error::{HspiceError, Result};

/// HSPICE magnitude suffixes. Note `x` is mega; `m` is milli.
const SUFFIXES: [(char, f64); 10] = [
    ('a', 1e-18),
    ('f', 1e-15),
    ('p', 1e-12),
    ('n', 1e-9),
    ('u', 1e-6),
    ('m', 1e-3),
    ('k', 1e3),
    ('x', 1e6),
    ('g', 1e9),
    ('t', 1e12),
];

fn suffix_magnitude(ch: char) -> Option<f64> {
    let ch = ch.to_ascii_lowercase();
    SUFFIXES.iter().find(|(c, _)| *c == ch).map(|(_, m)| *m)
}

/// Decode one engineering-notation token into a finite `f64`.
///
/// An empty token is a decode failure, not zero: a report row containing
/// an empty slot must be rejected, never padded.
pub fn decode(token: &str) -> Result<f64> {
    let s = token.trim();
    if s.is_empty() {
        return Err(HspiceError::decode(token));
    }

    let (mantissa, magnitude) = match s.chars().last().and_then(suffix_magnitude) {
        Some(mag) => (&s[..s.len() - 1], mag),
        None => (s, 1.0),
    };

    let value: f64 = mantissa
        .parse()
        .map_err(|_| HspiceError::decode(token))?;
    let value = value * magnitude;

    if !value.is_finite() {
        return Err(HspiceError::decode(token));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decode_suffixed() {
        assert_relative_eq!(decode("-137.2197n").unwrap(), -1.372197e-7, max_relative = 1e-9);
        assert_relative_eq!(decode("1.00000k").unwrap(), 1000.0, max_relative = 1e-9);
        assert_relative_eq!(decode("4.7u").unwrap(), 4.7e-6, max_relative = 1e-9);
        assert_relative_eq!(decode("2.5a").unwrap(), 2.5e-18, max_relative = 1e-9);
    }

    #[test]
    fn test_decode_x_is_mega() {
        assert_relative_eq!(decode("0.5x").unwrap(), 5.0e5, max_relative = 1e-9);
    }

    #[test]
    fn test_decode_suffix_case_insensitive() {
        assert_relative_eq!(decode("10K").unwrap(), 1e4, max_relative = 1e-9);
        assert_relative_eq!(decode("-3.0M").unwrap(), -3.0e-3, max_relative = 1e-9);
    }

    #[test]
    fn test_decode_plain_scientific() {
        assert_relative_eq!(decode("1.5e-9").unwrap(), 1.5e-9, max_relative = 1e-9);
        assert_relative_eq!(decode("-2.0E3").unwrap(), -2000.0, max_relative = 1e-9);
        assert_eq!(decode("0.0").unwrap(), 0.0);
    }

    #[test]
    fn test_decode_rejects_empty_and_garbage() {
        assert!(decode("").is_err());
        assert!(decode("   ").is_err());
        assert!(decode("volt").is_err());
        assert!(decode("-").is_err());
        assert!(decode("n").is_err());
        assert!(decode("nan").is_err());
    }

    #[test]
    fn test_decode_rejects_overflow() {
        assert!(decode("1e400").is_err());
    }
}
