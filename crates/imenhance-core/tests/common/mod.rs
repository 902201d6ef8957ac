#![allow(dead_code)]

use imenhance_core::frame::PixelBuffer;

/// Opaque solid-colour image.
pub fn solid(w: u32, h: u32, r: u8, g: u8, b: u8) -> PixelBuffer {
    PixelBuffer::filled(w, h, [r, g, b, 255])
}

/// Solid gray image with the given level.
pub fn gray(w: u32, h: u32, level: u8) -> PixelBuffer {
    solid(w, h, level, level, level)
}

/// Horizontal gradient: column `x` gets level `x * 255 / (w - 1)`, alpha varies by row.
pub fn gradient(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let level = (x * 255 / (w - 1).max(1)) as u8;
            let alpha = (255 - (y * 37) % 256) as u8;
            buf.set_pixel(x, y, [level, 255 - level, level / 2, alpha]);
        }
    }
    buf
}

/// Left half one gray level, right half another.
pub fn split_gray(w: u32, h: u32, left: u8, right: u8) -> PixelBuffer {
    let mut buf = gray(w, h, left);
    for y in 0..h {
        for x in w / 2..w {
            buf.set_pixel(x, y, [right, right, right, 255]);
        }
    }
    buf
}
