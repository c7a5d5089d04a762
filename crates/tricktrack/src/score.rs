//! Coarse activity scoring.

use crate::data::{Window, abs_count};

/// Default divisor mapping the raw magnitude sum to a compact display range.
pub const SCORE_DIVISOR: u32 = 8_000;

/// Coarse intensity score for a completed capture.
///
/// Sum of every absolute magnitude across all three axes, divided by
/// `divisor`. Computed on the raw (pre-normalization) window so harder
/// tricks score higher; integer truncation is fine for a display
/// heuristic.
pub fn activity_score<const N: usize>(window: &Window<N>, divisor: u32) -> u32 {
    let mut sum: u64 = 0;
    for i in 0..N {
        sum += abs_count(window.x[i]) as u64;
        sum += abs_count(window.y[i]) as u64;
        sum += abs_count(window.z[i]) as u64;
    }
    (sum / divisor as u64) as u32
}
