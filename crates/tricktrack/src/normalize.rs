//! Per-axis amplitude normalization.
//!
//! Cross-correlation is scale-sensitive: a soft ollie and a hard ollie
//! trace the same shape at different amplitudes. Each captured axis is
//! therefore rescaled by a single linear gain so its peak magnitude lands
//! at full scale, using a log2-shift split of the gain instead of a naive
//! division that would overflow on a platform without floating point.

use crate::data::{Axis, SAMPLES_PER_BLOCK, Window, abs_count};

/// Normalization target: the peak sample maps to this value.
pub const FULL_SCALE: i32 = 0x7FFF;

/// Fractional bits of the normalization gain (Q15).
pub const FRACTION_BITS: u32 = 15;

/// Split fixed-point gain for one axis: `value * gain >> (FRACTION_BITS - shift)`.
///
/// The shift keeps the fractional multiplier inside Q15 for any peak
/// magnitude from 1 to 32768: `gain` always lands in `[2^14, 2^15]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisGain {
    /// Fractional multiplier, rounded to nearest.
    pub gain: i32,
    /// Power-of-two post-scale, `0..=FRACTION_BITS`.
    pub shift: u32,
}

impl AxisGain {
    /// Gain that maps `peak` to [`FULL_SCALE`]. `None` when the axis is
    /// flat (`peak == 0`): a zero axis has no shape to preserve and is
    /// handled as a degenerate case downstream.
    pub const fn for_peak(peak: u16) -> Option<Self> {
        if peak == 0 {
            return None;
        }
        let ratio = ((FULL_SCALE as u32) << FRACTION_BITS) / peak as u32;
        let shift = if ratio >= 1 << FRACTION_BITS {
            ratio.ilog2() + 1 - FRACTION_BITS
        } else {
            0
        };
        let gain = if shift == 0 {
            ratio
        } else {
            ((ratio >> (shift - 1)) + 1) >> 1
        };
        Some(Self {
            gain: gain as i32,
            shift,
        })
    }

    /// Applies the gain to one sample, rounding to nearest and saturating
    /// to the representable range.
    pub const fn apply(self, value: i16) -> i16 {
        let product = value as i32 * self.gain;
        let down = FRACTION_BITS - self.shift;
        let scaled = if down == 0 {
            product
        } else {
            let half = 1 << (down - 1);
            if product >= 0 {
                (product + half) >> down
            } else {
                -((-product + half) >> down)
            }
        };
        if scaled > i16::MAX as i32 {
            i16::MAX
        } else if scaled < i16::MIN as i32 {
            i16::MIN
        } else {
            scaled as i16
        }
    }
}

/// A normalized window plus per-axis liveness flags.
#[derive(Clone, Debug)]
pub struct Normalized<const N: usize = SAMPLES_PER_BLOCK> {
    /// The rescaled window. Degenerate axes are left all-zero.
    pub window: Window<N>,
    /// `true` for each axis that had a nonzero peak, indexed by
    /// [`Axis::index`].
    pub live: [bool; 3],
}

/// Peak absolute magnitude of one axis sequence.
pub fn peak_abs(axis: &[i16]) -> u16 {
    let mut peak = 0u16;
    for &value in axis {
        let mag = abs_count(value);
        if mag > peak {
            peak = mag;
        }
    }
    peak
}

/// Rescales one axis in place so its peak reaches [`FULL_SCALE`].
///
/// Returns `false` without touching the data when the axis is flat.
pub fn normalize_axis(axis: &mut [i16]) -> bool {
    let Some(scale) = AxisGain::for_peak(peak_abs(axis)) else {
        return false;
    };
    for value in &mut *axis {
        *value = scale.apply(*value);
    }
    true
}

/// Normalizes every axis of `window` into a fresh [`Normalized`] capture.
pub fn normalize_window<const N: usize>(window: &Window<N>) -> Normalized<N> {
    let mut out = Normalized {
        window: window.clone(),
        live: [false; 3],
    };
    for axis in Axis::ALL {
        out.live[axis.index()] = normalize_axis(out.window.axis_mut(axis));
    }
    out
}
