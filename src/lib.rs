//! # binary-race
//!
//! Time two decimal-to-binary conversions against each other.
//!
//! An iterative halving loop and its recursive counterpart are run across a
//! ladder of magnitudes, producing for each point:
//! - Average wall-clock cost per call for both variants, in nanoseconds
//! - Bit extractions (steps) performed by each
//! - A runtime cross-check that both variants produce the same digits
//!
//! Timings are "good enough for a demo chart": each is one calibrated batch
//! divided by its length, raised to a 10 ns floor. There is no variance or
//! percentile reporting.
//!
//! ## Quick Start
//!
//! ```
//! use binary_race::{BinaryBench, Mode};
//!
//! let bench = BinaryBench::quick();
//! let report = bench.run(37, Mode::Both);
//!
//! assert_eq!(report.iterative.as_ref().unwrap().binary, "100101");
//! assert_eq!(report.chart.sizes, vec![1, 2, 5, 10, 20, 37, 50, 100]);
//! ```
//!
//! ## Recursion limit
//!
//! The recursive variant is correct for any `u64`, but it is only timed up to
//! [`RECURSION_LIMIT`]. Above it the recursive point carries no steps and the
//! floor duration, and single runs report [`TOO_LARGE_SENTINEL`].

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod bench;
mod config;
mod constants;
mod error;
mod result;

// Functional modules
pub mod converter;
pub mod dataset;
pub mod measurement;
pub mod output;
pub mod report;

#[cfg(feature = "server")]
pub mod server;

// Re-exports for public API
pub use bench::BinaryBench;
pub use config::{Config, Repetitions, ServerConfig};
pub use constants::{
    FLOOR_NS, LADDER, MAX_MAGNITUDE, RECURSION_LIMIT, RECURSIVE_REPETITION_CAP,
    TOO_LARGE_SENTINEL,
};
pub use converter::{to_binary_iterative, to_binary_recursive, BinaryResult, Variant};
pub use error::{Error, Result};
pub use measurement::{repetitions, Timer};
pub use report::Mode;
pub use result::{Benchmark, Chart, MeasurementPoint, Metadata, RunReport, VariantRun};

/// Convenience function: report for `n` in `mode` with default configuration.
///
/// Uses calibrated repetition counts, so large magnitudes take a while.
pub fn run(n: i64, mode: Mode) -> RunReport {
    BinaryBench::new().run(n, mode)
}
