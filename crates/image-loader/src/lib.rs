//! Image Loader
//!
//! Decodes PNG/JPEG/BMP/... files with the `image` crate and resamples them
//! to the square RGBA grid the feature extractor measures.

pub mod decode;

pub use decode::{decode_rgba, load_rgba, resample};

use pixel_features::FeatureError;
use std::path::PathBuf;
use thiserror::Error;

/// Loader error types
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Target size must be non-zero")]
    ZeroSize,

    #[error("Resampled buffer rejected: {0}")]
    Size(#[from] FeatureError),
}
