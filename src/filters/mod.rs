//! Image filters operating on RGBA buffers
//!
//! This module provides the algorithmic core:
//! - Luminance conversion (RGBA to 8-bit intensity)
//! - Box low-pass smoothing (3x3 kernel)
//! - Global binarization (Otsu's method)
//! - Adaptive binarization (integral-image mean and local contrast)
//!
//! Every filter borrows its source image immutably and returns a freshly
//! allocated output of the same dimensions, with alpha copied through.

pub mod adaptive_mean;
pub mod binarization;
pub mod local_contrast;
pub mod lowpass;
pub mod luminance;
