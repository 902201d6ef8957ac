pub mod grayscale;
pub mod ycbcr;

use crate::consts::MAX_LEVEL;

/// Round to nearest (half away from zero) and clamp into a channel byte.
#[inline]
pub fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, MAX_LEVEL) as u8
}
