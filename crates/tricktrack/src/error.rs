//! Error type for the gesture engine.

/// Error type for gesture engine operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The platform missed a sample tick deadline. Fatal: a gapped window
    /// would silently corrupt correlation, so there is no recovery policy.
    TickOverrun,
    /// More template definitions than the engine can hold.
    TemplateCapacity,
}
