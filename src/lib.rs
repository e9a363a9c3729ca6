//! rust_binarize - Classic image binarization filters in pure Rust
//!
//! Converts an RGBA raster image into a binary (or smoothed) image with a
//! small family of classic algorithms: a 3x3 box low-pass filter, global
//! Otsu thresholding, and two local adaptive variants (integral-image
//! mean and min/max local contrast). Every filter is a deterministic pure
//! function: it borrows the source image, allocates a fresh output of the
//! same dimensions, and never touches the alpha channel beyond copying it.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Filter implementations (low-pass, Otsu, adaptive thresholding)
pub mod filters;
/// Core data structures (Image, IntegralImage)
pub mod models;
/// File I/O helpers and diagnostics for the CLI tools
pub mod tools;

pub use models::{Image, ImageError, IntegralImage};

use filters::adaptive_mean::adaptive_mean_binarize;
use filters::binarization::otsu_binarize;
use filters::local_contrast::local_contrast_binarize;
use filters::lowpass::box_filter;

/// Smooth an image with the 3x3 box low-pass filter.
///
/// Border pixels keep the full 1/9 tap weights with out-of-bounds taps
/// dropped, so edges darken; see [`filters::lowpass`].
pub fn apply_low_pass(image: &Image) -> Image {
    box_filter(image)
}

/// Binarize an image against its global Otsu threshold.
pub fn apply_otsu(image: &Image) -> Image {
    otsu_binarize(image)
}

/// Binarize an image against 0.9x its local 15x15 windowed mean,
/// computed through an integral image.
pub fn apply_adaptive_mean(image: &Image) -> Image {
    adaptive_mean_binarize(image)
}

/// Binarize an image against its local 15x15 windowed mean, forcing
/// low-contrast windows to white.
pub fn apply_adaptive_contrast(image: &Image) -> Image {
    local_contrast_binarize(image)
}

/// Selectable filter, for callers that pick the algorithm at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// 3x3 box low-pass smoothing.
    LowPass,
    /// Global Otsu binarization.
    Otsu,
    /// Integral-image adaptive mean binarization.
    AdaptiveMean,
    /// Local-contrast adaptive binarization.
    AdaptiveContrast,
}

impl Filter {
    /// All selectable filters, in menu order.
    pub const ALL: [Filter; 4] = [
        Filter::LowPass,
        Filter::Otsu,
        Filter::AdaptiveMean,
        Filter::AdaptiveContrast,
    ];

    /// Apply this filter to an image, returning a new image.
    pub fn apply(&self, image: &Image) -> Image {
        log::debug!(
            "applying {} to {}x{} image",
            self.name(),
            image.width(),
            image.height()
        );
        match self {
            Filter::LowPass => apply_low_pass(image),
            Filter::Otsu => apply_otsu(image),
            Filter::AdaptiveMean => apply_adaptive_mean(image),
            Filter::AdaptiveContrast => apply_adaptive_contrast(image),
        }
    }

    /// Stable name used by the CLI and log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::LowPass => "lowpass",
            Filter::Otsu => "otsu",
            Filter::AdaptiveMean => "adaptive-mean",
            Filter::AdaptiveContrast => "adaptive-contrast",
        }
    }
}
