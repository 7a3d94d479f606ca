//! Configuration for conversion benchmarks and the HTTP front end.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_WARMUP, FLOOR_NS, RECURSION_LIMIT, RECURSIVE_REPETITION_CAP,
};
use crate::measurement::calibration;

/// Configuration options for `BinaryBench`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Un-timed calls before each measurement batch (default: 1,000).
    ///
    /// Never exceeds the batch's own repetition count.
    pub warmup: usize,

    /// Smallest duration ever reported, in nanoseconds (default: 10).
    pub floor_ns: u64,

    /// Largest magnitude the recursive variant is run for (default: 1,000,000).
    pub recursion_limit: i64,

    /// Cap on timed recursive repetitions (default: 10,000).
    pub recursive_repetition_cap: usize,

    /// Repetitions per measurement batch (default: Calibrated).
    pub repetitions: Repetitions,

    /// Optional wall-clock budget for one chart, in milliseconds.
    ///
    /// Points left when the budget runs out are dropped from the chart.
    pub max_duration_ms: Option<u64>,

    /// Optional deterministic seed for the variant measurement order.
    pub measurement_seed: Option<u64>,
}

/// How many repetitions a measurement batch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetitions {
    /// Derive from the magnitude's bit length.
    Calibrated,

    /// Use exactly N repetitions (at least 1), regardless of magnitude.
    ///
    /// The recursive cap still applies.
    Fixed(usize),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warmup: DEFAULT_WARMUP,
            floor_ns: FLOOR_NS,
            recursion_limit: RECURSION_LIMIT,
            recursive_repetition_cap: RECURSIVE_REPETITION_CAP,
            repetitions: Repetitions::Calibrated,
            max_duration_ms: None,
            measurement_seed: None,
        }
    }
}

/// Settings for the HTTP front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory served at `/`.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: PathBuf::from("./static"),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Repetitions {
    fn default() -> Self {
        Self::Calibrated
    }
}

impl Repetitions {
    /// Resolve the repetition count for magnitude `n`.
    pub fn resolve(&self, n: i64) -> usize {
        match self {
            Self::Calibrated => calibration::repetitions(n),
            Self::Fixed(count) => (*count).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.warmup, 1_000);
        assert_eq!(config.floor_ns, 10);
        assert_eq!(config.recursion_limit, 1_000_000);
        assert_eq!(config.recursive_repetition_cap, 10_000);
        assert_eq!(config.repetitions, Repetitions::Calibrated);
        assert!(config.max_duration_ms.is_none());
    }

    #[test]
    fn test_fixed_repetitions_never_zero() {
        assert_eq!(Repetitions::Fixed(0).resolve(5), 1);
        assert_eq!(Repetitions::Fixed(7).resolve(1_000_000_000), 7);
        assert_eq!(Repetitions::Calibrated.resolve(0), 1_000_000);
    }

    #[test]
    fn test_server_addr() {
        let server = ServerConfig::default();
        assert_eq!(server.server_addr(), "0.0.0.0:8080");
        assert_eq!(server.static_dir, PathBuf::from("./static"));
    }
}
