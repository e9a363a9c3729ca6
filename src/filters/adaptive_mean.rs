//! Adaptive mean thresholding over an integral image.
//!
//! Each pixel is compared against 0.9x the mean luminance of its 15x15
//! neighborhood, clamped to the image bounds. The integral image turns
//! every windowed sum into four table lookups, so the cost per pixel is
//! O(1) instead of O(k^2).

use crate::filters::luminance::luminance_plane;
use crate::models::{Image, IntegralImage};
use rayon::prelude::*;

/// Window side length.
const WINDOW: usize = 15;
/// Half-window radius on each side of the pixel.
const HALF_WINDOW: usize = WINDOW / 2;
/// Scale applied to the windowed mean before comparing.
const MEAN_SCALE: f64 = 0.9;

/// Binarize an image against its local windowed mean.
/// Output channels are 0 or 255; alpha is copied through unchanged.
pub fn adaptive_mean_binarize(image: &Image) -> Image {
    let width = image.width();
    let height = image.height();
    let plane = luminance_plane(image);
    let integral = IntegralImage::from_plane(&plane, width, height);

    let src = image.data();
    let mut out = vec![0u8; src.len()];
    out.par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let y1 = y.saturating_sub(HALF_WINDOW);
            let y2 = (y + HALF_WINDOW).min(height - 1);
            for x in 0..width {
                let x1 = x.saturating_sub(HALF_WINDOW);
                let x2 = (x + HALF_WINDOW).min(width - 1);
                // The clamped window shrinks near borders; divide by the
                // live pixel count, never the full 15x15.
                let count = ((x2 - x1 + 1) * (y2 - y1 + 1)) as f64;
                let mean = integral.window_sum(x1, y1, x2, y2) as f64 / count;
                let threshold = mean * MEAN_SCALE;

                let value = if plane[y * width + x] as f64 >= threshold {
                    255
                } else {
                    0
                };
                let idx = x * 4;
                row[idx] = value;
                row[idx + 1] = value;
                row[idx + 2] = value;
                row[idx + 3] = src[(y * width + x) * 4 + 3];
            }
        });

    Image::from_raw_unchecked(width, height, out)
}
