//! Chart magnitude generation.

use crate::constants::{LADDER, MAX_CHART_CAP, MIN_CHART_CAP};

/// Magnitudes to chart for a user-supplied `user_n`.
///
/// Ladder entries up to `user_n` (clamped to `[100, 1_000_000]`), plus
/// `user_n` itself when it lies in `(0, 1_000_000]`. Strictly ascending.
pub fn generate(user_n: i64) -> Vec<i64> {
    let cap = user_n.clamp(MIN_CHART_CAP, MAX_CHART_CAP);

    let mut points: Vec<i64> = LADDER.iter().copied().filter(|&p| p <= cap).collect();

    if user_n > 0 && user_n <= MAX_CHART_CAP {
        if let Err(index) = points.binary_search(&user_n) {
            points.insert(index, user_n);
        }
    }

    points
}
