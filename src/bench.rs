//! Main `BinaryBench` entry point and builder.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::{Config, Repetitions};
use crate::constants::TOO_LARGE_SENTINEL;
use crate::converter::{BinaryResult, Variant};
use crate::dataset;
use crate::error::{Error, Result};
use crate::measurement::{Collector, Timer};
use crate::report::{clamp_magnitude, parse_magnitude, Mode};
use crate::result::{Benchmark, Chart, MeasurementPoint, Metadata, RunReport, VariantRun};

/// Stateless benchmark service comparing the two converters.
///
/// Holds only configuration, so one instance can be shared by any number of
/// concurrent requests.
///
/// # Example
///
/// ```
/// use binary_race::{BinaryBench, Mode};
///
/// let bench = BinaryBench::quick();
/// let report = bench.run(10, Mode::Both);
///
/// assert_eq!(report.iterative.unwrap().binary, "1010");
/// assert_eq!(report.chart.sizes.last(), Some(&100));
/// ```
#[derive(Debug, Clone)]
pub struct BinaryBench {
    config: Config,
    collector: Collector,
}

impl Default for BinaryBench {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryBench {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create with fast configuration for tests and smoke runs.
    ///
    /// Settings:
    /// - 200 fixed repetitions per batch (vs calibrated)
    /// - 20 warmup calls (vs 1,000)
    pub fn quick() -> Self {
        Self::with_config(Config {
            warmup: 20,
            repetitions: Repetitions::Fixed(200),
            ..Config::default()
        })
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        let collector = Collector::new(Timer::from_config(&config), config.measurement_seed);
        Self { config, collector }
    }

    /// Apply a builder change. The clock resolution is measured once per
    /// `BinaryBench` and carried over.
    fn reconfigure(self, update: impl FnOnce(&mut Config)) -> Self {
        let resolution_ns = self.timer().resolution_ns();
        let mut config = self.config;
        update(&mut config);
        let timer = Timer::with_resolution(&config, resolution_ns);
        let collector = Collector::new(timer, config.measurement_seed);
        Self { config, collector }
    }

    /// Set warm-up calls per batch.
    pub fn warmup(self, warmup: usize) -> Self {
        self.reconfigure(|c| c.warmup = warmup)
    }

    /// Set the reporting floor in nanoseconds.
    pub fn floor_ns(self, floor_ns: u64) -> Self {
        self.reconfigure(|c| c.floor_ns = floor_ns)
    }

    /// Set how batch sizes are chosen.
    pub fn repetitions(self, repetitions: Repetitions) -> Self {
        self.reconfigure(|c| c.repetitions = repetitions)
    }

    /// Bound the time spent on one chart.
    pub fn max_duration_ms(self, ms: u64) -> Self {
        self.reconfigure(|c| c.max_duration_ms = Some(ms))
    }

    /// Fix the seed for the variant measurement order.
    pub fn measurement_seed(self, seed: u64) -> Self {
        self.reconfigure(|c| c.measurement_seed = Some(seed))
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the timer used for measurements.
    pub fn timer(&self) -> &Timer {
        self.collector.timer()
    }

    /// Convert `n` with `variant`. Negative input converts as 0.
    pub fn convert(&self, variant: Variant, n: i64) -> BinaryResult {
        variant.convert(n.max(0) as u64)
    }

    /// Calibrated repetition count for `n`.
    pub fn repetitions_for(&self, n: i64) -> usize {
        self.config.repetitions.resolve(n)
    }

    /// Average per-call duration of `variant` at `n`, floored.
    pub fn measure(&self, variant: Variant, n: i64) -> u64 {
        self.timer().measure(variant, n)
    }

    /// Chart magnitudes for a user-supplied `n`.
    pub fn dataset(&self, n: i64) -> Vec<i64> {
        dataset::generate(n)
    }

    fn recursion_allowed(&self, n: i64) -> bool {
        n <= self.config.recursion_limit
    }

    /// Convert, cross-check and time both variants at `n`.
    ///
    /// A disagreement between the variants is logged as an
    /// `InternalInconsistency` event and otherwise ignored.
    pub fn benchmark(&self, n: i64) -> Benchmark {
        let iterative = self.convert(Variant::Iterative, n);

        let recursive = if self.recursion_allowed(n) {
            let recursive = self.convert(Variant::Recursive, n);
            if recursive.binary != iterative.binary {
                report_inconsistency(n, &iterative, &recursive);
            }
            Some(recursive)
        } else {
            None
        };

        let timings = self.collector.collect(n);
        let timer = self.timer();

        let point = MeasurementPoint {
            n,
            time_iterative_ns: timer.floored(timings.get(Variant::Iterative)),
            time_recursive_ns: timer.floored(timings.get(Variant::Recursive)),
            steps_iterative: iterative.steps,
            steps_recursive: recursive.as_ref().map_or(0, |r| r.steps),
        };

        debug!(
            n,
            iterative_ns = point.time_iterative_ns,
            recursive_ns = point.time_recursive_ns,
            steps = point.steps_iterative,
            "measured point"
        );

        Benchmark {
            point,
            iterative,
            recursive,
        }
    }

    /// Measure every magnitude in the dataset for `n`.
    ///
    /// Returns the chart and the number of magnitudes dropped because the
    /// configured time budget ran out.
    pub fn chart(&self, n: i64) -> (Chart, usize) {
        let sizes: Vec<i64> = self.dataset(n).into_iter().filter(|&p| p > 0).collect();
        let deadline = self
            .config
            .max_duration_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        let mut chart = Chart::default();
        for (index, &size) in sizes.iter().enumerate() {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                let skipped = sizes.len() - index;
                warn!(n, skipped, measured = index, "chart time budget exhausted");
                return (chart, skipped);
            }
            chart.push(self.benchmark(size).point);
        }

        (chart, 0)
    }

    fn single_run(&self, variant: Variant, n: i64) -> VariantRun {
        if variant == Variant::Recursive && !self.recursion_allowed(n) {
            return VariantRun {
                binary: TOO_LARGE_SENTINEL.to_string(),
                steps: 0,
                time_ns: self.timer().floor_ns(),
                warning: Some(format!(
                    "Input > {} is not recommended for recursion",
                    self.config.recursion_limit
                )),
            };
        }

        let result = self.convert(variant, n);
        VariantRun {
            binary: result.binary,
            steps: result.steps,
            time_ns: self.measure(variant, n),
            warning: None,
        }
    }

    /// Build a full report for magnitude `n`.
    ///
    /// `n` is clamped into `[0, 1_000_000_000]` first.
    pub fn run(&self, n: i64, mode: Mode) -> RunReport {
        let start = Instant::now();
        let n = clamp_magnitude(n);

        let iterative = mode
            .includes(Variant::Iterative)
            .then(|| self.single_run(Variant::Iterative, n));
        let recursive = mode
            .includes(Variant::Recursive)
            .then(|| self.single_run(Variant::Recursive, n));

        let (chart, skipped_points) = self.chart(n);

        RunReport {
            n,
            iterative,
            recursive,
            chart,
            metadata: Metadata {
                floor_ns: self.timer().floor_ns(),
                timer_resolution_ns: self.timer().resolution_ns(),
                skipped_points,
                runtime_secs: start.elapsed().as_secs_f64(),
            },
        }
    }

    /// Build a report from raw query values.
    ///
    /// A non-integer magnitude is rejected before any measurement; an
    /// unrecognized mode yields a chart-only report.
    pub fn run_query(&self, n: &str, mode: &str) -> Result<RunReport> {
        let n = parse_magnitude(n)?;
        Ok(self.run(n, Mode::from_query(mode)))
    }
}

fn report_inconsistency(n: i64, iterative: &BinaryResult, recursive: &BinaryResult) {
    let err = Error::InternalInconsistency {
        n,
        iterative: iterative.binary.clone(),
        recursive: recursive.binary.clone(),
    };
    warn!(
        kind = err.kind(),
        n,
        iterative = %iterative.binary,
        recursive = %recursive.binary,
        "{err}"
    );
}
