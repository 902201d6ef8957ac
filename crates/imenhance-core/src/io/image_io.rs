use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::Result;
use crate::frame::PixelBuffer;

/// Convert a decoded `image` buffer into a `PixelBuffer`.
pub fn from_rgba_image(img: RgbaImage) -> Result<PixelBuffer> {
    let (w, h) = img.dimensions();
    PixelBuffer::from_raw(w, h, img.into_raw())
}

/// Convert a `PixelBuffer` into an `image` buffer for encoding or resizing.
pub fn to_rgba_image(buffer: &PixelBuffer) -> RgbaImage {
    RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.to_raw())
        .expect("buffer size matches dimensions")
}

/// Load any image format the `image` crate can decode, as 8-bit RGBA.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)?;
    from_rgba_image(img.to_rgba8())
}

/// Save as 8-bit RGBA PNG.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    to_rgba_image(buffer).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save as 8-bit RGB JPEG. Alpha is dropped.
pub fn save_jpeg(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let rgb = image::DynamicImage::ImageRgba8(to_rgba_image(buffer)).to_rgb8();
    rgb.save_with_format(path, ImageFormat::Jpeg)?;
    Ok(())
}

/// Save, choosing format from file extension. Unknown extensions get PNG.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => save_jpeg(buffer, path),
        Some("png") => save_png(buffer, path),
        Some(_) => {
            to_rgba_image(buffer).save(path)?;
            Ok(())
        }
        None => save_png(buffer, path),
    }
}
