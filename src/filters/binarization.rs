//! Global Otsu binarization.
//!
//! Builds a 256-bin luminance histogram, picks the threshold that
//! maximizes between-class variance with a single cumulative scan, and
//! maps each pixel to white (luminance >= threshold) or black.

use crate::filters::luminance::luminance_plane;
use crate::models::Image;
use rayon::prelude::*;

/// Build a 256-bin histogram of a luminance plane.
pub fn histogram(plane: &[u8]) -> [u32; 256] {
    let mut hist = [0u32; 256];
    for &v in plane {
        hist[v as usize] += 1;
    }
    hist
}

/// Otsu's optimal threshold for a luminance histogram.
///
/// Scans t = 0..255 accumulating background weight and weighted sum.
/// Thresholds with an empty background are skipped; the scan stops once
/// the foreground empties. Ties keep the lowest t (strict `>`), so a
/// histogram concentrated in one bin degenerates to threshold 0.
pub fn otsu_threshold(hist: &[u32; 256]) -> u8 {
    let total: u64 = hist.iter().map(|&c| c as u64).sum();
    let sum: f64 = hist
        .iter()
        .enumerate()
        .map(|(t, &c)| t as f64 * c as f64)
        .sum();

    let mut w_b = 0u64;
    let mut sum_b = 0.0f64;
    let mut var_max = 0.0f64;
    let mut threshold = 0u8;

    for (t, &count) in hist.iter().enumerate() {
        w_b += count as u64;
        if w_b == 0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f == 0 {
            break;
        }

        sum_b += t as f64 * count as f64;
        let m_b = sum_b / w_b as f64;
        let m_f = (sum - sum_b) / w_f as f64;

        let var_between = w_b as f64 * w_f as f64 * (m_b - m_f) * (m_b - m_f);
        if var_between > var_max {
            var_max = var_between;
            threshold = t as u8;
        }
    }

    threshold
}

/// Binarize an image against its global Otsu threshold.
/// Output channels are 0 or 255; alpha is copied through unchanged.
pub fn otsu_binarize(image: &Image) -> Image {
    let width = image.width();
    let plane = luminance_plane(image);
    let threshold = otsu_threshold(&histogram(&plane));
    log::debug!("otsu threshold selected: {threshold}");

    let src = image.data();
    let mut out = vec![0u8; src.len()];
    out.par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let value = if plane[y * width + x] >= threshold {
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

    Image::from_raw_unchecked(width, image.height(), out)
}
