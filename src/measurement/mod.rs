//! Measurement infrastructure for conversion timing.
//!
//! This module provides:
//! - Repetition calibration from input magnitude
//! - A wall-clock batch timer with warm-up and a reporting floor
//! - Per-magnitude collection of both variants in randomized order
//!
//! # Noise
//!
//! Converting a small number takes a few nanoseconds, well under what one
//! `Instant` read can resolve on many platforms. The timer therefore never
//! times a single call: it times a whole calibrated batch once and divides.
//! Any average that still rounds to zero is reported as the floor.

pub mod calibration;
mod collector;
mod timer;

pub use calibration::repetitions;
pub use collector::{Collector, Timings};
pub use timer::{black_box, Timer};
