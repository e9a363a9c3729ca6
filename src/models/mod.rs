pub mod image;
pub mod integral;

pub use image::{Image, ImageError};
pub use integral::IntegralImage;
