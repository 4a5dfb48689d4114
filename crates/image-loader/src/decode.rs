//! Decoding and resampling

use crate::LoadError;
use image::imageops::FilterType;
use image::DynamicImage;
use pixel_features::PixelBuffer;
use std::path::Path;
use tracing::debug;

/// Stretch `img` to `size` × `size` (aspect ratio is not kept) with a
/// bilinear filter and convert to RGBA8
pub fn resample(img: &DynamicImage, size: u32) -> Result<PixelBuffer, LoadError> {
    if size == 0 {
        return Err(LoadError::ZeroSize);
    }
    let rgba = img.resize_exact(size, size, FilterType::Triangle).to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::new(rgba.into_raw(), width, height)?)
}

/// Decode an in-memory image, guessing the format from its content
pub fn decode_rgba(bytes: &[u8], size: u32) -> Result<PixelBuffer, LoadError> {
    let img = image::load_from_memory(bytes)?;
    debug!(width = img.width(), height = img.height(), size, "decoded image");
    resample(&img, size)
}

/// Read and decode an image file
pub fn load_rgba(path: impl AsRef<Path>, size: u32) -> Result<PixelBuffer, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_rgba(&bytes, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_load_resamples_to_square_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan_normal_01.png");
        RgbImage::from_pixel(64, 32, Rgb([40, 80, 120])).save(&path).unwrap();

        let buffer = load_rgba(&path, 256).unwrap();
        assert_eq!(buffer.width(), 256);
        assert_eq!(buffer.height(), 256);
        assert_eq!(buffer.as_bytes().len(), 256 * 256 * 4);
        let pixel = buffer.get_pixel(200, 10).unwrap();
        for (got, want) in pixel.iter().zip([40u8, 80, 120, 255]) {
            assert!(got.abs_diff(want) <= 1, "{pixel:?}");
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rgba(dir.path().join("absent.png"), 256).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_undecodable_bytes() {
        let err = decode_rgba(b"DICM not really an image", 256).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])));
        assert!(matches!(resample(&img, 0), Err(LoadError::ZeroSize)));
    }
}
