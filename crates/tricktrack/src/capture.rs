//! Gesture window acquisition.

use crate::data::{SAMPLES_PER_BLOCK, Sample, Window};

/// Acquisition state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureState {
    /// Ignoring samples, waiting for a trigger.
    Idle,
    /// Writing one sample per tick into the window.
    Capturing,
    /// Window complete; processing may begin.
    Full,
}

/// Owns the capture window and drives `Idle → Capturing → Full`.
///
/// Writes are exactly-once in ascending index order: `push` stores one
/// sample per call while `Capturing` and ignores samples in every other
/// state, so a complete window can never contain a skipped or duplicated
/// tick. The engine owns the buffer and lends the window to the
/// classification stage.
#[derive(Clone, Debug)]
pub struct CaptureBuffer<const N: usize = SAMPLES_PER_BLOCK> {
    window: Window<N>,
    index: usize,
    state: CaptureState,
}

impl<const N: usize> CaptureBuffer<N> {
    /// Creates an idle buffer with a zeroed window.
    pub const fn new() -> Self {
        Self {
            window: Window::new(),
            index: 0,
            state: CaptureState::Idle,
        }
    }

    /// Current acquisition state.
    pub const fn state(&self) -> CaptureState {
        self.state
    }

    /// Number of samples written to the active capture.
    pub const fn len(&self) -> usize {
        self.index
    }

    /// Whether the active capture holds no samples yet.
    pub const fn is_empty(&self) -> bool {
        self.index == 0
    }

    /// Starts a capture: resets the write index and begins accepting
    /// samples. No-op unless idle, so a second trigger mid-capture cannot
    /// restart the window.
    pub fn arm(&mut self) {
        if matches!(self.state, CaptureState::Idle) {
            self.index = 0;
            self.state = CaptureState::Capturing;
        }
    }

    /// Stores one sample and returns the resulting state.
    ///
    /// Ignored while `Idle` or `Full`; extra ticks after the window fills
    /// do not advance the index.
    pub fn push(&mut self, sample: Sample) -> CaptureState {
        if matches!(self.state, CaptureState::Capturing) {
            self.window.set(self.index, sample);
            self.index += 1;
            if self.index == N {
                self.state = CaptureState::Full;
            }
        }
        self.state
    }

    /// Borrows the window. Contents are meaningful once `state()` is
    /// [`CaptureState::Full`].
    pub const fn window(&self) -> &Window<N> {
        &self.window
    }

    /// Returns to `Idle`, discarding the capture.
    pub fn reset(&mut self) {
        self.index = 0;
        self.state = CaptureState::Idle;
    }
}

impl<const N: usize> Default for CaptureBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
