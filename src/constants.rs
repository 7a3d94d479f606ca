//! Named constants shared across the measurement pipeline.

/// Largest magnitude for which the recursive variant is computed and timed.
///
/// Chosen empirically to keep recursive call volume per chart bounded; the
/// recursive algorithm is correct well beyond it.
pub const RECURSION_LIMIT: i64 = 1_000_000;

/// Upper bound on timed repetitions for the recursive variant.
///
/// Also an empirical safety margin: each recursive call allocates once per
/// layer, so it is capped independently of the calibrator.
pub const RECURSIVE_REPETITION_CAP: usize = 10_000;

/// Smallest duration ever reported, in nanoseconds.
pub const FLOOR_NS: u64 = 10;

/// Default number of un-timed warm-up calls before a measurement batch.
pub const DEFAULT_WARMUP: usize = 1_000;

/// Fewest repetitions the calibrator will ever request.
pub const MIN_REPETITIONS: usize = 100;

/// Most repetitions the calibrator will ever request.
pub const MAX_REPETITIONS: usize = 1_000_000;

/// Numerator of the calibration curve `BUDGET / (d^2 + OFFSET)`.
pub const CALIBRATION_BUDGET: usize = 10_000_000;

/// Additive term in the calibration denominator.
pub const CALIBRATION_OFFSET: usize = 100;

/// Magnitudes accepted at the request boundary are clamped into
/// `[0, MAX_MAGNITUDE]`.
pub const MAX_MAGNITUDE: i64 = 1_000_000_000;

/// Binary value reported for the recursive variant above [`RECURSION_LIMIT`].
pub const TOO_LARGE_SENTINEL: &str = "TOO_LARGE_FOR_RECURSION";

/// Representative magnitudes seeding every chart, ascending.
pub const LADDER: [i64; 19] = [
    1, 2, 5, 10, 20, 50, //
    100, 200, 500, //
    1_000, 2_000, 5_000, //
    10_000, 20_000, 50_000, //
    100_000, 200_000, 500_000, //
    1_000_000,
];

/// Lower clamp for the chart cap, so small inputs still get a useful curve.
pub const MIN_CHART_CAP: i64 = 100;

/// Upper clamp for the chart cap; also the largest user value charted.
pub const MAX_CHART_CAP: i64 = 1_000_000;
