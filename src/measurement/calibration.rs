//! Repetition calibration.
//!
//! Small magnitudes convert so quickly that loop and clock overhead dominate
//! a short batch, so they get many repetitions. The count falls off with the
//! square of the bit length because recursive cost grows with depth as well
//! as per call.

use crate::constants::{
    CALIBRATION_BUDGET, CALIBRATION_OFFSET, MAX_REPETITIONS, MIN_REPETITIONS,
};
use crate::converter::bit_length;

/// Repetitions to time for magnitude `n`.
///
/// Always in `[MIN_REPETITIONS, MAX_REPETITIONS]`. Non-positive magnitudes get
/// the maximum.
pub fn repetitions(n: i64) -> usize {
    if n <= 0 {
        return MAX_REPETITIONS;
    }

    let d = bit_length(n as u64) as usize;
    (CALIBRATION_BUDGET / (d * d + CALIBRATION_OFFSET)).clamp(MIN_REPETITIONS, MAX_REPETITIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_gets_maximum() {
        assert_eq!(repetitions(0), 1_000_000);
        assert_eq!(repetitions(-1), 1_000_000);
        assert_eq!(repetitions(i64::MIN), 1_000_000);
    }

    #[test]
    fn test_known_values() {
        // d = 1: 10_000_000 / 101
        assert_eq!(repetitions(1), 99_009);
        // d = 4: 10_000_000 / 116
        assert_eq!(repetitions(10), 86_206);
        // d = 20: 10_000_000 / 500
        assert_eq!(repetitions(1_000_000), 20_000);
        // d = 30: 10_000_000 / 1000
        assert_eq!(repetitions(1_000_000_000), 10_000);
        // d = 63: 10_000_000 / 4069
        assert_eq!(repetitions(i64::MAX), 2_457);
    }

    #[test]
    fn test_monotone_non_increasing() {
        let mut previous = usize::MAX;
        for shift in 0..63 {
            let reps = repetitions(1i64 << shift);
            assert!(reps <= previous, "shift {shift}: {reps} > {previous}");
            previous = reps;
        }
    }

    #[test]
    fn test_always_in_range() {
        for n in [i64::MIN, -42, 0, 1, 2, 37, 1 << 40, i64::MAX] {
            let reps = repetitions(n);
            assert!((MIN_REPETITIONS..=MAX_REPETITIONS).contains(&reps), "n = {n}");
        }
    }
}
