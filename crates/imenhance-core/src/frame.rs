use ndarray::{s, Array3, ArrayView1, ArrayView3, ArrayViewMut1, ArrayViewMut3, Axis};
use rayon::prelude::*;

use crate::consts::{CHANNEL_COUNT, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{EnhanceError, Result};

/// Channel indices within a pixel.
pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;
pub const ALPHA: usize = 3;

/// An 8-bit RGBA image.
///
/// Pixel data is row-major with shape `(height, width, 4)`; the last axis
/// holds red, green, blue and alpha in that order. A zero-area buffer is
/// representable, but the enhancement pipeline refuses to load one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Transparent black buffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: Array3::zeros((height as usize, width as usize, CHANNEL_COUNT)),
        }
    }

    /// Buffer where every pixel is `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let data = Array3::from_shape_fn(
            (height as usize, width as usize, CHANNEL_COUNT),
            |(_, _, c)| rgba[c],
        );
        Self { data }
    }

    /// Wrap interleaved RGBA bytes, as produced by `image::RgbaImage::into_raw`.
    pub fn from_raw(width: u32, height: u32, raw: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNEL_COUNT;
        let actual = raw.len();
        let data = Array3::from_shape_vec((height as usize, width as usize, CHANNEL_COUNT), raw)
            .map_err(|_| EnhanceError::BufferSizeMismatch { expected, actual })?;
        Ok(Self { data })
    }

    /// Wrap an existing `(height, width, 4)` array.
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let (h, w, c) = data.dim();
        if c != CHANNEL_COUNT {
            return Err(EnhanceError::BufferSizeMismatch {
                expected: h * w * CHANNEL_COUNT,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    pub fn pixel_count(&self) -> usize {
        let (h, w, _) = self.data.dim();
        h * w
    }

    /// True if the buffer has zero width or zero height.
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// RGBA value at column `x`, row `y`.
    ///
    /// Panics if the coordinates are outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let px = self.data.slice(s![y as usize, x as usize, ..]);
        [px[RED], px[GREEN], px[BLUE], px[ALPHA]]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let mut px = self.data.slice_mut(s![y as usize, x as usize, ..]);
        for (dst, src) in px.iter_mut().zip(rgba) {
            *dst = src;
        }
    }

    /// Iterate pixels in row-major order as `[r, g, b, a]` views.
    pub fn pixels(&self) -> impl Iterator<Item = ArrayView1<'_, u8>> {
        self.data.rows().into_iter()
    }

    /// Apply `f` to every `[r, g, b, a]` pixel in place.
    ///
    /// Rows are processed on the Rayon pool once the image reaches
    /// `PARALLEL_PIXEL_THRESHOLD` pixels.
    pub fn for_each_pixel_mut<F>(&mut self, f: F)
    where
        F: Fn(ArrayViewMut1<'_, u8>) + Send + Sync,
    {
        let parallel = self.pixel_count() >= PARALLEL_PIXEL_THRESHOLD;
        let rows = self.data.axis_iter_mut(Axis(0));
        if parallel {
            rows.into_par_iter()
                .for_each(|mut row| row.outer_iter_mut().for_each(&f));
        } else {
            rows.for_each(|mut row| row.outer_iter_mut().for_each(&f));
        }
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    pub fn view_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        self.data.view_mut()
    }

    /// Interleaved RGBA bytes in row-major order.
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    pub fn into_raw(self) -> Vec<u8> {
        if self.data.is_standard_layout() {
            self.data.into_raw_vec_and_offset().0
        } else {
            self.data.iter().copied().collect()
        }
    }
}
