use std::collections::HashSet;

use image::{Rgba, RgbaImage};

/// Collect the unique colors of the top-left `window`×`window` block.
///
/// The block is clipped to the image, so small images sample what they have
/// and an empty image yields no exemplars. Colors keep first-seen order.
pub(super) fn sample_exemplars(img: &RgbaImage, window: u32) -> Vec<Rgba<u8>> {
    let (width, height) = img.dimensions();
    let cols = window.min(width);
    let rows = window.min(height);

    let mut seen = HashSet::with_capacity(cols as usize * rows as usize);
    let mut exemplars = Vec::new();
    for y in 0..rows {
        for x in 0..cols {
            let pixel = *img.get_pixel(x, y);
            if seen.insert(pixel.0) {
                exemplars.push(pixel);
            }
        }
    }
    exemplars
}
