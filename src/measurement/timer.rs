//! Wall-clock timing of conversion calls.
//!
//! A measurement is one warm-up pass followed by one timed batch. The batch
//! is timed as a whole with `Instant` and divided by its length, so the
//! clock's resolution is amortized over every repetition.

use std::hint::black_box as std_black_box;
use std::time::Instant;

use crate::config::{Config, Repetitions};
use crate::converter::Variant;

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Every converted value passes through this so the optimizer cannot drop
/// the call being timed.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// Empirically measure clock resolution by finding the minimum non-zero
/// difference between consecutive reads.
fn measure_timer_resolution() -> u64 {
    let mut min_diff = u64::MAX;

    for _ in 0..1000 {
        let t1 = Instant::now();
        let diff = t1.elapsed().as_nanos() as u64;
        if diff > 0 && diff < min_diff {
            min_diff = diff;
        }
    }

    if min_diff == u64::MAX {
        1
    } else {
        min_diff
    }
}

/// Times conversion calls and applies the reporting floor.
#[derive(Debug, Clone)]
pub struct Timer {
    warmup: usize,
    floor_ns: u64,
    recursion_limit: i64,
    recursive_repetition_cap: usize,
    repetitions: Repetitions,
    /// Estimated clock resolution in nanoseconds.
    resolution_ns: u64,
}

impl Timer {
    /// Create a timer with default configuration.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create a timer from the measurement settings in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_resolution(config, measure_timer_resolution())
    }

    /// Create a timer from `config`, reusing an already measured resolution.
    pub(crate) fn with_resolution(config: &Config, resolution_ns: u64) -> Self {
        Self {
            warmup: config.warmup,
            floor_ns: config.floor_ns.max(1),
            recursion_limit: config.recursion_limit,
            recursive_repetition_cap: config.recursive_repetition_cap.max(1),
            repetitions: config.repetitions,
            resolution_ns,
        }
    }

    /// Smallest duration this timer reports, in nanoseconds.
    pub fn floor_ns(&self) -> u64 {
        self.floor_ns
    }

    /// Get the estimated clock resolution in nanoseconds.
    pub fn resolution_ns(&self) -> u64 {
        self.resolution_ns
    }

    /// Timed repetitions for `variant` at magnitude `n`.
    ///
    /// Returns `None` when the variant is not measured at that magnitude and
    /// the floor is reported instead.
    pub fn planned_repetitions(&self, variant: Variant, n: i64) -> Option<usize> {
        match variant {
            Variant::Iterative if n < 0 => None,
            Variant::Iterative => Some(self.repetitions.resolve(n)),
            Variant::Recursive if n <= 0 || n > self.recursion_limit => None,
            Variant::Recursive => Some(
                self.repetitions
                    .resolve(n)
                    .min(self.recursive_repetition_cap),
            ),
        }
    }

    /// Average cost of one `variant` conversion of `n`, in nanoseconds.
    ///
    /// Never below the floor.
    pub fn measure(&self, variant: Variant, n: i64) -> u64 {
        let Some(repetitions) = self.planned_repetitions(variant, n) else {
            return self.floor_ns;
        };

        let value = n as u64;
        self.warm_up(self.warmup.min(repetitions), || variant.convert(value));
        let average = self.measure_batched_ns(repetitions, || variant.convert(value));
        self.floored(average)
    }

    /// Run `f` `iterations` times without timing it.
    #[inline]
    pub fn warm_up<F, T>(&self, iterations: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        for _ in 0..iterations {
            black_box(f());
        }
    }

    /// Time `iterations` calls of `f` as one batch and return the average
    /// per call in nanoseconds, rounded down.
    #[inline]
    pub fn measure_batched_ns<F, T>(&self, iterations: usize, mut f: F) -> u64
    where
        F: FnMut() -> T,
    {
        let iterations = iterations.max(1);

        let start = Instant::now();
        for _ in 0..iterations {
            black_box(f());
        }
        let elapsed = start.elapsed().as_nanos();

        (elapsed / iterations as u128).min(u64::MAX as u128) as u64
    }

    /// Raise `ns` to the floor.
    #[inline]
    pub fn floored(&self, ns: u64) -> u64 {
        ns.max(self.floor_ns)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
