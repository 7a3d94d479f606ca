//! Per-magnitude collection of both variants in randomized order.
//!
//! Timing the same variant first at every point would let clock-frequency
//! ramps and cache warming bias one curve, so each point shuffles which
//! variant goes first.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::converter::Variant;

use super::timer::Timer;

/// Floored per-call durations of both variants at one magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Iterative average in nanoseconds.
    pub iterative_ns: u64,
    /// Recursive average in nanoseconds.
    pub recursive_ns: u64,
}

impl Timings {
    /// Duration recorded for `variant`.
    pub fn get(&self, variant: Variant) -> u64 {
        match variant {
            Variant::Iterative => self.iterative_ns,
            Variant::Recursive => self.recursive_ns,
        }
    }
}

/// Collector for timing both variants at a magnitude.
#[derive(Debug, Clone)]
pub struct Collector {
    timer: Timer,
    /// Seed for the measurement order; thread RNG when absent.
    seed: Option<u64>,
}

impl Collector {
    /// Create a collector around a configured timer.
    pub fn new(timer: Timer, seed: Option<u64>) -> Self {
        Self { timer, seed }
    }

    /// Get a reference to the internal timer.
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Time both variants at `n`, in a shuffled order.
    pub fn collect(&self, n: i64) -> Timings {
        let mut timings = Timings {
            iterative_ns: self.timer.floor_ns(),
            recursive_ns: self.timer.floor_ns(),
        };

        for variant in self.create_schedule(n) {
            let ns = self.timer.measure(variant, n);
            match variant {
                Variant::Iterative => timings.iterative_ns = ns,
                Variant::Recursive => timings.recursive_ns = ns,
            }
        }

        timings
    }

    /// Order in which the variants are timed at `n`.
    ///
    /// With a seed the order depends only on `(seed, n)`.
    fn create_schedule(&self, n: i64) -> [Variant; 2] {
        let mut schedule = Variant::ALL;
        match self.seed {
            Some(seed) => {
                let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed ^ n as u64);
                schedule.shuffle(&mut rng);
            }
            None => schedule.shuffle(&mut rand::rng()),
        }
        schedule
    }
}
