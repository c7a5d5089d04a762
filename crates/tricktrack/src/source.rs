//! External collaborator seams: sample source, reporter, operator.

use crate::classify::ClassificationResult;
use crate::data::{Sample, Window};
use crate::error::Error;

/// Periodic 3-axis sample source, implemented by the platform layer.
///
/// The contract mirrors a hardware sample timer: `next_sample` completes
/// once per fixed tick and must not be called more than once per tick. A
/// missed deadline is a platform fault and surfaces as
/// [`Error::TickOverrun`].
#[allow(async_fn_in_trait)]
pub trait SampleSource {
    /// Waits for the next tick and returns its bias-corrected sample.
    async fn next_sample(&mut self) -> Result<Sample, Error>;

    /// Halts the periodic tick source. Called when a capture completes so
    /// classification gets unlimited wall-clock time without losing
    /// samples.
    fn suspend(&mut self);

    /// Restarts the periodic tick source after processing.
    fn resume(&mut self);
}

/// Result sink, implemented by the platform layer (UART, RTT, log).
///
/// Reporting is fire-and-forget: failures in this path are the platform's
/// problem and never reach the classification pipeline, so the methods
/// return nothing.
pub trait Reporter {
    /// Receives the activity score for a completed capture.
    fn activity_score(&mut self, score: u32);

    /// Receives the classification outcome for a completed capture.
    fn classification(&mut self, result: &ClassificationResult);

    /// Receives the raw captured window for diagnostic dumps. Default: drop.
    fn raw_window<const N: usize>(&mut self, _window: &Window<N>) {}
}

/// Operator decision on a completed capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Classify and report the capture.
    Keep,
    /// Drop the capture and return to monitoring. Not an error.
    Discard,
}

/// Reviews completed captures before classification.
///
/// Typically a push-button the rider uses to throw away accidental
/// triggers. Runs with the tick source suspended, so it may block
/// indefinitely.
#[allow(async_fn_in_trait)]
pub trait Operator {
    /// Decides whether to keep the capture that just completed.
    async fn review(&mut self) -> Verdict;
}

/// Operator that keeps every capture, for unattended setups.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AutoKeep;

impl Operator for AutoKeep {
    async fn review(&mut self) -> Verdict {
        Verdict::Keep
    }
}
