//! Motion trigger detection.

use crate::data::Sample;

/// Per-axis, per-sign motion trigger thresholds.
///
/// A sample trips the trigger when any axis reading reaches its positive
/// bound or falls to its negative bound (both comparisons inclusive). The
/// predicate is stateless; the engine evaluates it once per tick while
/// idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerConfig {
    /// Positive X-axis bound.
    pub x_pos: i16,
    /// Negative X-axis bound (stored as a negative count).
    pub x_neg: i16,
    /// Positive Y-axis bound.
    pub y_pos: i16,
    /// Negative Y-axis bound.
    pub y_neg: i16,
    /// Positive Z-axis bound.
    pub z_pos: i16,
    /// Negative Z-axis bound.
    pub z_neg: i16,
}

impl TriggerConfig {
    /// Default thresholds in raw counts (2048 counts per g).
    ///
    /// The Z bounds are asymmetric: landings spike harder downward into the
    /// board than the pop lifts it.
    pub const DEFAULT: Self = Self {
        x_pos: 3_000,
        x_neg: -3_000,
        y_pos: 3_000,
        y_neg: -3_000,
        z_pos: 4_200,
        z_neg: -2_600,
    };

    /// Creates the default trigger configuration.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the X-axis bounds.
    #[must_use]
    pub const fn with_x_bounds(mut self, pos: i16, neg: i16) -> Self {
        self.x_pos = pos;
        self.x_neg = neg;
        self
    }

    /// Sets the Y-axis bounds.
    #[must_use]
    pub const fn with_y_bounds(mut self, pos: i16, neg: i16) -> Self {
        self.y_pos = pos;
        self.y_neg = neg;
        self
    }

    /// Sets the Z-axis bounds.
    #[must_use]
    pub const fn with_z_bounds(mut self, pos: i16, neg: i16) -> Self {
        self.z_pos = pos;
        self.z_neg = neg;
        self
    }

    /// Whether `sample` trips the trigger.
    pub const fn triggered(self, sample: Sample) -> bool {
        sample.x >= self.x_pos
            || sample.x <= self.x_neg
            || sample.y >= self.y_pos
            || sample.y <= self.y_neg
            || sample.z >= self.z_pos
            || sample.z <= self.z_neg
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
