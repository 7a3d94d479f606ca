//! Request-level inputs: magnitude parsing and mode selection.

use std::str::FromStr;

use crate::constants::MAX_MAGNITUDE;
use crate::converter::Variant;
use crate::error::{Error, Result};

/// Which single-run results a report carries. The chart is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Iterative result only.
    Iterative,
    /// Recursive result only.
    Recursive,
    /// Both results.
    Both,
    /// No single-run results, chart only.
    Chart,
}

impl Mode {
    /// Whether this mode reports `variant`.
    pub fn includes(self, variant: Variant) -> bool {
        match self {
            Mode::Both => true,
            Mode::Chart => false,
            Mode::Iterative => variant == Variant::Iterative,
            Mode::Recursive => variant == Variant::Recursive,
        }
    }

    /// Lenient parse for query strings: anything unrecognized is chart-only.
    pub fn from_query(value: &str) -> Self {
        value.parse().unwrap_or(Mode::Chart)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iterative" => Ok(Mode::Iterative),
            "recursive" => Ok(Mode::Recursive),
            "both" => Ok(Mode::Both),
            "chart" => Ok(Mode::Chart),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Both
    }
}

/// Parse a base-10 magnitude. Surrounding whitespace is ignored.
///
/// Values outside `i64` are still integers, so they saturate instead of
/// failing; [`clamp_magnitude`] brings them into range afterwards.
pub fn parse_magnitude(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    match trimmed.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) if is_integer_literal(trimmed) => Ok(if trimmed.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }),
        Err(_) => Err(Error::InvalidMagnitude(value.to_string())),
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Clamp a magnitude into `[0, 1_000_000_000]`.
pub fn clamp_magnitude(n: i64) -> i64 {
    n.clamp(0, MAX_MAGNITUDE)
}
