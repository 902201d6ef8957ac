use crate::frame::{PixelBuffer, BLUE, GREEN, RED};

use super::ycbcr::luma;

/// Copy `image` with R, G and B replaced by the pixel's BT.601 luma.
///
/// Alpha is carried over. The input is not modified.
pub fn to_grayscale(image: &PixelBuffer) -> PixelBuffer {
    let mut gray = image.clone();
    gray.for_each_pixel_mut(|mut px| {
        let y = luma(px[RED], px[GREEN], px[BLUE]);
        px[RED] = y;
        px[GREEN] = y;
        px[BLUE] = y;
    });
    gray
}
