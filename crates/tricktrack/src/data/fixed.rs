//! Fixed-point conversion helpers.

use super::Sample;

/// Fixed-point number type used for sensor conversions (I32F32).
pub type Fixed = crate::fixed_crate::types::I32F32;

/// Raw counts per g for the sensor's 14-bit ±4 g data format.
pub const LSB_PER_G: i32 = 2_048;

/// Fixed-point acceleration sample in g.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccelG {
    /// X-axis acceleration in g.
    pub x: Fixed,
    /// Y-axis acceleration in g.
    pub y: Fixed,
    /// Z-axis acceleration in g.
    pub z: Fixed,
}

/// Converts a raw sample to g.
pub fn sample_to_g(sample: Sample) -> AccelG {
    let scale = Fixed::from_num(LSB_PER_G);
    AccelG {
        x: Fixed::from_num(sample.x) / scale,
        y: Fixed::from_num(sample.y) / scale,
        z: Fixed::from_num(sample.z) / scale,
    }
}
