use ndarray::s;

use crate::frame::PixelBuffer;

/// Place `left` and `right` next to each other, `gap` pixels apart.
///
/// The canvas is as tall as the taller input; uncovered area stays
/// transparent black. Both inputs are top-aligned.
pub fn side_by_side(left: &PixelBuffer, right: &PixelBuffer, gap: u32) -> PixelBuffer {
    let width = left.width() + gap + right.width();
    let height = left.height().max(right.height());
    let mut canvas = PixelBuffer::new(width, height);

    let (lh, lw) = (left.height() as usize, left.width() as usize);
    let (rh, rw) = (right.height() as usize, right.width() as usize);
    let right_x = lw + gap as usize;

    let mut view = canvas.view_mut();
    view.slice_mut(s![..lh, ..lw, ..]).assign(&left.view());
    view.slice_mut(s![..rh, right_x..right_x + rw, ..])
        .assign(&right.view());

    canvas
}
