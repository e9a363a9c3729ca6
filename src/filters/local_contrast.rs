//! Local-contrast adaptive thresholding.
//!
//! Scans each pixel's 15x15 bounded window directly, accumulating sum,
//! count, min and max luminance. Windows whose contrast (max - min)
//! stays under the floor are treated as flat background and forced
//! white; the rest threshold against the window mean. min/max rule out
//! the integral-image shortcut, so this variant pays O(k^2) per pixel
//! where the adaptive mean pays O(1).

use crate::filters::luminance::luminance_plane;
use crate::models::Image;
use rayon::prelude::*;

/// Window side length.
const WINDOW: usize = 15;
/// Half-window radius on each side of the pixel.
const HALF_WINDOW: usize = WINDOW / 2;
/// Below this max-min spread a window counts as uniform.
const CONTRAST_FLOOR: u8 = 15;

/// Binarize an image against its local windowed mean, forcing
/// low-contrast regions to white.
/// Output channels are 0 or 255; alpha is copied through unchanged.
pub fn local_contrast_binarize(image: &Image) -> Image {
    let width = image.width();
    let height = image.height();
    let plane = luminance_plane(image);

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

                let mut sum = 0u32;
                let mut count = 0u32;
                let mut min = u8::MAX;
                let mut max = u8::MIN;
                for wy in y1..=y2 {
                    for wx in x1..=x2 {
                        let v = plane[wy * width + wx];
                        sum += v as u32;
                        count += 1;
                        min = min.min(v);
                        max = max.max(v);
                    }
                }

                let contrast = max - min;
                let value = if contrast < CONTRAST_FLOOR {
                    // Flat region: never thresholded into black.
                    255
                } else {
                    let mean = sum as f64 / count as f64;
                    if plane[y * width + x] as f64 >= mean {
                        255
                    } else {
                        0
                    }
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
