use crate::consts::{CHROMA_OFFSET, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

use super::to_channel;

/// Full-range BT.601 luma/chroma triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YCbCr {
    pub y: u8,
    pub cb: u8,
    pub cr: u8,
}

/// Luma only, rounded and clamped.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    to_channel(LUMINANCE_R * r as f64 + LUMINANCE_G * g as f64 + LUMINANCE_B * b as f64)
}

/// Forward RGB → YCbCr.
///
/// Chroma is offset by 128. Results are rounded and clamped into 0..=255;
/// with these coefficients pure blue would otherwise reach 255.5 in Cb.
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> YCbCr {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    YCbCr {
        y: to_channel(LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b),
        cb: to_channel(CHROMA_OFFSET - 0.169 * r - 0.331 * g + 0.500 * b),
        cr: to_channel(CHROMA_OFFSET + 0.500 * r - 0.419 * g - 0.081 * b),
    }
}

/// Inverse YCbCr → RGB, rounded and clamped.
pub fn ycbcr_to_rgb(px: YCbCr) -> [u8; 3] {
    let y = px.y as f64;
    let cb = px.cb as f64 - CHROMA_OFFSET;
    let cr = px.cr as f64 - CHROMA_OFFSET;
    [
        to_channel(y + 1.402 * cr),
        to_channel(y - 0.344_136 * cb - 0.714_136 * cr),
        to_channel(y + 1.772 * cb),
    ]
}
