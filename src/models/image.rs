use thiserror::Error;

/// Errors raised when an RGBA buffer fails the `Image` preconditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// Width or height was zero.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// Buffer length did not match `width * height * 4`.
    #[error("buffer length {len} does not match {width}x{height} RGBA ({expected} bytes)")]
    BufferMismatch {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// Actual buffer length.
        len: usize,
        /// Expected buffer length.
        expected: usize,
    },
}

/// Dense row-major RGBA image, 4 bytes per pixel.
///
/// Construction validates the dimension and buffer-length invariants, so
/// every filter can consume a borrowed `Image` without further checks.
/// Filters never mutate their input; each returns a freshly allocated
/// `Image` of the same dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Image {
    /// Create an image from a raw RGBA buffer.
    ///
    /// # Errors
    /// Returns `ImageError` when a dimension is zero or the buffer length
    /// is not `width * height * 4`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroDimension { width, height });
        }
        let expected = width * height * 4;
        if data.len() != expected {
            return Err(ImageError::BufferMismatch {
                width,
                height,
                len: data.len(),
                expected,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create an image with every pixel set to `pixel`.
    ///
    /// # Errors
    /// Returns `ImageError::ZeroDimension` when a dimension is zero.
    pub fn filled(width: usize, height: usize, pixel: [u8; 4]) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroDimension { width, height });
        }
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&pixel);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image from a buffer the caller already proved valid.
    /// Filters use this for their freshly allocated outputs.
    pub(crate) fn from_raw_unchecked(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(data.len(), width * height * 4);
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return its raw RGBA buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// RGBA channels at (x, y). Out-of-bounds coordinates read as
    /// transparent black.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let idx = (y * self.width + x) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}
