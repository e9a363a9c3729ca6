//! RGBA to luminance conversion.
//!
//! Y = floor(0.299*R + 0.587*G + 0.114*B), evaluated in f64 in exactly
//! that order. Every thresholding filter compares against values from
//! this one formula, so it must stay bit-stable, roundoff artifacts
//! included (a uniform gray 128 lands on 127, not 128).

use crate::models::Image;
use rayon::prelude::*;

/// Luminance of a single RGB triple, in [0, 255].
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) as u8
}

/// Luminance plane of an image: one byte per pixel, row-major.
///
/// Rows are converted in parallel; the result is identical to a serial
/// scan since each output pixel reads only its own RGBA sample.
pub fn luminance_plane(image: &Image) -> Vec<u8> {
    let width = image.width();
    let src = image.data();
    let mut plane = vec![0u8; width * image.height()];

    plane.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 4;
        for (x, out) in row.iter_mut().enumerate() {
            let idx = row_start + x * 4;
            *out = luminance(src[idx], src[idx + 1], src[idx + 2]);
        }
    });

    plane
}
