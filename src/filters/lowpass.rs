//! 3x3 box low-pass filter.
//!
//! Each output channel is the 1/9-weighted sum of the 3x3 neighborhood.
//! Taps outside the image are dropped from the sum without renormalizing,
//! so border pixels still divide by 9 and come out darker. The border
//! darkening is intentional and must not be compensated.

use crate::models::Image;
use rayon::prelude::*;

/// Kernel weight denominator: 9 taps at 1/9 each.
const KERNEL_TAPS: f64 = 9.0;

/// Smooth an image with the 3x3 box filter, per R/G/B channel.
/// Alpha is copied through unchanged.
pub fn box_filter(image: &Image) -> Image {
    let width = image.width();
    let height = image.height();
    let src = image.data();
    let mut out = vec![0u8; src.len()];

    out.par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let mut r = 0u32;
                let mut g = 0u32;
                let mut b = 0u32;
                for ky in -1i32..=1 {
                    for kx in -1i32..=1 {
                        let ny = y as i32 + ky;
                        let nx = x as i32 + kx;
                        if nx >= 0 && nx < width as i32 && ny >= 0 && ny < height as i32 {
                            let pos = (ny as usize * width + nx as usize) * 4;
                            r += src[pos] as u32;
                            g += src[pos + 1] as u32;
                            b += src[pos + 2] as u32;
                        }
                    }
                }
                let idx = x * 4;
                row[idx] = (r as f64 / KERNEL_TAPS).round() as u8;
                row[idx + 1] = (g as f64 / KERNEL_TAPS).round() as u8;
                row[idx + 2] = (b as f64 / KERNEL_TAPS).round() as u8;
                row[idx + 3] = src[(y * width + x) * 4 + 3];
            }
        });

    Image::from_raw_unchecked(width, height, out)
}
