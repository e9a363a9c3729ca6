//! Integration tests for the public filter API.
//!
//! These exercise the cross-cutting guarantees every filter shares:
//! deterministic output, preserved dimensions and alpha, strictly binary
//! channels from the thresholding filters, and agreement between the
//! integral-image fast path and a naive windowed reference.

use rust_binarize::filters::luminance::luminance;
use rust_binarize::{
    Filter, Image, apply_adaptive_contrast, apply_adaptive_mean, apply_low_pass, apply_otsu,
};

/// Deterministic pseudo-random RGBA image.
fn noise_image(width: usize, height: usize, seed: u32) -> Image {
    let mut state = seed | 1;
    let mut next = || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (state >> 24) as u8
    };
    let mut data = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        let (r, g, b, a) = (next(), next(), next(), next());
        data.extend_from_slice(&[r, g, b, a]);
    }
    Image::from_raw(width, height, data).unwrap()
}

#[test]
fn all_filters_are_deterministic() {
    let img = noise_image(33, 21, 7);
    for filter in Filter::ALL {
        assert_eq!(
            filter.apply(&img).data(),
            filter.apply(&img).data(),
            "{} output varies between runs",
            filter.name()
        );
    }
}

#[test]
fn all_filters_preserve_dimensions_and_alpha() {
    let img = noise_image(19, 27, 99);
    for filter in Filter::ALL {
        let out = filter.apply(&img);
        assert_eq!(out.width(), img.width(), "{} width", filter.name());
        assert_eq!(out.height(), img.height(), "{} height", filter.name());
        for (i, (o, s)) in out
            .data()
            .chunks_exact(4)
            .zip(img.data().chunks_exact(4))
            .enumerate()
        {
            assert_eq!(o[3], s[3], "{} alpha at pixel {i}", filter.name());
        }
    }
}

#[test]
fn thresholding_filters_emit_strictly_binary_channels() {
    let img = noise_image(25, 25, 42);
    for filter in [
        Filter::Otsu,
        Filter::AdaptiveMean,
        Filter::AdaptiveContrast,
    ] {
        let out = filter.apply(&img);
        for chunk in out.data().chunks_exact(4) {
            assert!(
                chunk[0] == 0 || chunk[0] == 255,
                "{} produced value {}",
                filter.name(),
                chunk[0]
            );
            assert_eq!(chunk[0], chunk[1]);
            assert_eq!(chunk[1], chunk[2]);
        }
    }
}

#[test]
fn otsu_output_is_consistent_with_some_global_cut() {
    // Whatever threshold Otsu picked, the output must be a monotone cut
    // of the luminance plane: no white pixel darker than a black one.
    let img = noise_image(30, 30, 5);
    let out = apply_otsu(&img);
    let mut darkest_white = u8::MAX;
    let mut brightest_black = u8::MIN;
    for (o, s) in out.data().chunks_exact(4).zip(img.data().chunks_exact(4)) {
        let lum = luminance(s[0], s[1], s[2]);
        if o[0] == 255 {
            darkest_white = darkest_white.min(lum);
        } else {
            brightest_black = brightest_black.max(lum);
        }
    }
    assert!(brightest_black < darkest_white);
}

#[test]
fn adaptive_mean_matches_naive_window_scan() {
    // The integral-image fast path must agree with a direct O(k^2)
    // evaluation of the same clamped 15x15 window at every pixel.
    let (width, height) = (30usize, 20usize);
    let img = noise_image(width, height, 1234);
    let out = apply_adaptive_mean(&img);

    let plane: Vec<u8> = img
        .data()
        .chunks_exact(4)
        .map(|p| luminance(p[0], p[1], p[2]))
        .collect();

    let half = 7usize;
    for y in 0..height {
        for x in 0..width {
            let x1 = x.saturating_sub(half);
            let x2 = (x + half).min(width - 1);
            let y1 = y.saturating_sub(half);
            let y2 = (y + half).min(height - 1);
            let mut sum = 0u64;
            let mut count = 0u64;
            for wy in y1..=y2 {
                for wx in x1..=x2 {
                    sum += plane[wy * width + wx] as u64;
                    count += 1;
                }
            }
            let threshold = (sum as f64 / count as f64) * 0.9;
            let expected = if plane[y * width + x] as f64 >= threshold {
                255
            } else {
                0
            };
            assert_eq!(out.pixel(x, y)[0], expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn uniform_image_outcomes() {
    let img = Image::filled(24, 24, [140, 140, 140, 200]).unwrap();

    // Low-pass: interior pixels average to themselves.
    let blurred = apply_low_pass(&img);
    for y in 1..23 {
        for x in 1..23 {
            assert_eq!(blurred.pixel(x, y), [140, 140, 140, 200]);
        }
    }

    // Otsu degenerates to threshold 0: everything white.
    assert!(
        apply_otsu(&img)
            .data()
            .chunks_exact(4)
            .all(|p| p[0] == 255)
    );

    // Adaptive mean: v >= 0.9v everywhere, so all white.
    assert!(
        apply_adaptive_mean(&img)
            .data()
            .chunks_exact(4)
            .all(|p| p[0] == 255)
    );

    // Local contrast: contrast 0 stays under the floor, forced white.
    assert!(
        apply_adaptive_contrast(&img)
            .data()
            .chunks_exact(4)
            .all(|p| p[0] == 255)
    );
}

#[test]
fn rejects_invalid_buffers() {
    assert!(Image::from_raw(0, 10, Vec::new()).is_err());
    assert!(Image::from_raw(10, 0, Vec::new()).is_err());
    assert!(Image::from_raw(3, 3, vec![0u8; 35]).is_err());
    assert!(Image::from_raw(3, 3, vec![0u8; 37]).is_err());
    assert!(Image::from_raw(3, 3, vec![0u8; 36]).is_ok());
}
