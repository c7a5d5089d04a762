//! Core sample and window types.

#[cfg(feature = "fixed")]
pub(crate) mod fixed;

/// Number of samples captured per axis for one gesture window.
///
/// 1600 samples is two seconds at the 800 Hz output data rate the sensor
/// runs at, which covers the longest supported gesture with margin.
pub const SAMPLES_PER_BLOCK: usize = 1600;

/// One tick's bias-corrected 3-axis accelerometer reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl Sample {
    /// Creates a sample from raw axis counts.
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Returns the reading for one axis.
    pub const fn axis(self, axis: Axis) -> i16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Accelerometer axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// All three axes, in storage order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Storage index of this axis.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// One fixed-duration capture: three equal-length axis sequences.
///
/// The length is a compile-time constant so a window is either complete or
/// does not exist; no partial windows reach the classification stage.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window<const N: usize = SAMPLES_PER_BLOCK> {
    /// X-axis samples.
    pub x: [i16; N],
    /// Y-axis samples.
    pub y: [i16; N],
    /// Z-axis samples.
    pub z: [i16; N],
}

impl<const N: usize> Window<N> {
    /// Creates an all-zero window.
    pub const fn new() -> Self {
        Self {
            x: [0; N],
            y: [0; N],
            z: [0; N],
        }
    }

    /// Number of samples per axis.
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the window holds zero samples per axis.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrows one axis sequence.
    pub const fn axis(&self, axis: Axis) -> &[i16; N] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Mutably borrows one axis sequence.
    pub fn axis_mut(&mut self, axis: Axis) -> &mut [i16; N] {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Writes one sample at `index` across all three axes.
    pub fn set(&mut self, index: usize, sample: Sample) {
        self.x[index] = sample.x;
        self.y[index] = sample.y;
        self.z[index] = sample.z;
    }
}

impl<const N: usize> Default for Window<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Absolute value of a raw count, covering `i16::MIN`.
pub(crate) const fn abs_count(value: i16) -> u16 {
    value.unsigned_abs()
}
