//! Engine configuration.

use crate::classify::DEFAULT_CONFIDENCE_FLOOR;
use crate::score::SCORE_DIVISOR;
use crate::trigger::TriggerConfig;

/// Gesture engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineConfig {
    /// Motion trigger thresholds that arm a capture.
    pub trigger: TriggerConfig,
    /// Minimum Q15 aggregate coefficient for a classification to count.
    pub confidence_floor: i32,
    /// Divisor mapping the raw magnitude sum to the activity score.
    pub score_divisor: u32,
    /// Settle time after a cycle before re-arming, in nanoseconds. Lets
    /// the tail of a reported gesture die down instead of retriggering.
    pub rearm_delay_ns: u32,
}

impl EngineConfig {
    /// Default engine configuration.
    pub const DEFAULT: Self = Self {
        trigger: TriggerConfig::DEFAULT,
        confidence_floor: DEFAULT_CONFIDENCE_FLOOR,
        score_divisor: SCORE_DIVISOR,
        rearm_delay_ns: 0,
    };

    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the trigger thresholds.
    #[must_use]
    pub const fn with_trigger(mut self, trigger: TriggerConfig) -> Self {
        self.trigger = trigger;
        self
    }

    /// Sets the confidence floor (Q15).
    #[must_use]
    pub const fn with_confidence_floor(mut self, floor: i32) -> Self {
        self.confidence_floor = floor;
        self
    }

    /// Sets the activity score divisor.
    #[must_use]
    pub const fn with_score_divisor(mut self, divisor: u32) -> Self {
        self.score_divisor = divisor;
        self
    }

    /// Sets the re-arm settle delay in nanoseconds.
    #[must_use]
    pub const fn with_rearm_delay_ns(mut self, delay_ns: u32) -> Self {
        self.rearm_delay_ns = delay_ns;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let trigger = TriggerConfig::new().with_x_bounds(500, -500);
        let config = EngineConfig::new()
            .with_trigger(trigger)
            .with_confidence_floor(10_000)
            .with_score_divisor(4_000)
            .with_rearm_delay_ns(1_000_000);
        assert_eq!(config.trigger.x_pos, 500);
        assert_eq!(config.confidence_floor, 10_000);
        assert_eq!(config.score_divisor, 4_000);
        assert_eq!(config.rearm_delay_ns, 1_000_000);
    }
}
