use image::imageops::{self, FilterType};

use crate::consts::DEFAULT_PREVIEW_SCALE;
use crate::error::Result;
use crate::frame::PixelBuffer;

use super::image_io::{from_rgba_image, to_rgba_image};

/// Target size after scaling by `factor`, each side floored.
pub fn scaled_dimensions(width: u32, height: u32, factor: f32) -> (u32, u32) {
    let scale = |v: u32| (v as f64 * factor.max(0.0) as f64).floor() as u32;
    (scale(width), scale(height))
}

/// Bilinear resize by `factor`.
///
/// May return a zero-area buffer for tiny inputs; the pipeline rejects
/// those on load.
pub fn rescale(buffer: &PixelBuffer, factor: f32) -> Result<PixelBuffer> {
    let (w, h) = scaled_dimensions(buffer.width(), buffer.height(), factor);
    if (w, h) == (buffer.width(), buffer.height()) {
        return Ok(buffer.clone());
    }
    if w == 0 || h == 0 {
        return Ok(PixelBuffer::new(w, h));
    }
    let resized = imageops::resize(&to_rgba_image(buffer), w, h, FilterType::Triangle);
    from_rgba_image(resized)
}

/// Halve both sides, as the preview step does before enhancement.
pub fn preview(buffer: &PixelBuffer) -> Result<PixelBuffer> {
    rescale(buffer, DEFAULT_PREVIEW_SCALE)
}
