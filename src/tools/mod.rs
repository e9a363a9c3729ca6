//! File loading/saving and diagnostics for the CLI tools.
//!
//! The filters themselves never touch the filesystem; everything format-
//! or path-shaped lives here, at the boundary.

use crate::filters::luminance::luminance_plane;
use crate::models::{Image, ImageError};
use std::path::Path;
use thiserror::Error;

/// Errors surfaced by the file-handling helpers.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Decoding or encoding failed inside the image crate.
    #[error("image file error: {0}")]
    File(#[from] image::ImageError),
    /// A decoded buffer failed the Image preconditions.
    #[error("invalid image buffer: {0}")]
    Buffer(#[from] ImageError),
}

/// Load an image file as RGBA along with its dimensions.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Image, ToolError> {
    let rgba = image::open(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    let img = Image::from_raw(width as usize, height as usize, rgba.into_raw())?;
    Ok(img)
}

/// Save an RGBA image to a file; the format follows the extension.
pub fn save_image<P: AsRef<Path>>(path: P, img: &Image) -> Result<(), ToolError> {
    image::save_buffer(
        path,
        img.data(),
        img.width() as u32,
        img.height() as u32,
        image::ColorType::Rgba8,
    )?;
    Ok(())
}

/// Summary statistics for the luminance plane of an image.
#[derive(Debug, Clone, Copy)]
pub struct LuminanceStats {
    /// Minimum luminance value.
    pub min: u8,
    /// Maximum luminance value.
    pub max: u8,
    /// Average luminance value.
    pub avg: u8,
}

/// Summary statistics for a binarized image.
#[derive(Debug, Clone, Copy)]
pub struct BinaryStats {
    /// Count of white pixels.
    pub white_pixels: usize,
    /// Total pixels in the image.
    pub total_pixels: usize,
    /// Ratio of white pixels to total pixels.
    pub white_ratio: f64,
}

/// Compute min/max/avg over an image's luminance plane.
pub fn luminance_stats(image: &Image) -> LuminanceStats {
    let plane = luminance_plane(image);
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum: u64 = 0;
    for &v in &plane {
        min = min.min(v);
        max = max.max(v);
        sum += v as u64;
    }
    let avg = (sum / plane.len() as u64) as u8;
    LuminanceStats { min, max, avg }
}

/// Compute white pixel stats for a binarized image.
pub fn binary_stats(image: &Image) -> BinaryStats {
    let white = image
        .data()
        .chunks_exact(4)
        .filter(|p| p[0] == 255)
        .count();
    let total = image.width() * image.height();
    BinaryStats {
        white_pixels: white,
        total_pixels: total,
        white_ratio: white as f64 / total as f64,
    }
}
