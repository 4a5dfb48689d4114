//! RGBA pixel buffer

use crate::error::FeatureError;
use crate::CHANNELS;

/// Decoded RGBA image, row-major, 4 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, checking that they cover `width * height` pixels
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, FeatureError> {
        check_dimensions(data.len(), width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Create a buffer where every pixel has the same RGBA value
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or the byte length overflows `usize`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let len = constructor_len(width, height);
        let data = rgba.iter().copied().cycle().take(len).collect();
        Self {
            data,
            width,
            height,
        }
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel
    ///
    /// # Panics
    ///
    /// Same conditions as [`PixelBuffer::filled`].
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(constructor_len(width, height));
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Get pixel at (x, y)
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }
}

/// Byte length of a `width` × `height` RGBA image, `None` on overflow
pub(crate) fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
}

fn constructor_len(width: u32, height: u32) -> usize {
    match byte_len(width, height) {
        Some(len) if len > 0 => len,
        _ => panic!("invalid pixel buffer dimensions {width}x{height}"),
    }
}

/// Check that `len` bytes are exactly `width * height` RGBA pixels.
/// Empty images and sizes that overflow `usize` are rejected.
pub(crate) fn check_dimensions(len: usize, width: u32, height: u32) -> Result<(), FeatureError> {
    match byte_len(width, height) {
        Some(expected) if expected > 0 && expected == len => Ok(()),
        expected => Err(FeatureError::InvalidDimensions {
            width,
            height,
            expected: expected.unwrap_or(usize::MAX),
            actual: len,
        }),
    }
}
