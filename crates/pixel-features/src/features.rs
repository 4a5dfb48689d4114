//! Feature Vector Assembly

use crate::buffer::{byte_len, check_dimensions, PixelBuffer};
use crate::edges::count_edges;
use crate::error::FeatureError;
use crate::statistics::ChannelStatistics;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Side length of the square grid images are resampled to before measurement
pub const DEFAULT_SIZE: u32 = 256;

/// Nine-scalar pixel statistics summary of one image.
///
/// Values are kept at full precision. Serialization and [`formatted`] render
/// them as fixed-precision decimal strings: two decimals for the color,
/// contrast and texture fields, four for edge density.
///
/// [`formatted`]: FeatureVector::formatted
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(into = "FormattedFeatures")]
pub struct FeatureVector {
    pub mean_r: f64,
    pub mean_g: f64,
    pub mean_b: f64,
    pub std_r: f64,
    pub std_g: f64,
    pub std_b: f64,
    /// Edge pixels per total pixels
    pub edge_density: f64,
    /// Mean of the three channel means
    pub contrast: f64,
    /// Sum of the three channel standard deviations
    pub texture_complexity: f64,
}

/// Display form of a [`FeatureVector`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedFeatures {
    pub mean_r: String,
    pub mean_g: String,
    pub mean_b: String,
    pub std_r: String,
    pub std_g: String,
    pub std_b: String,
    pub edge_density: String,
    pub contrast: String,
    pub texture_complexity: String,
}

impl FormattedFeatures {
    /// (label, value) rows in display order
    pub fn rows(&self) -> [(&'static str, &str); 9] {
        [
            ("Mean R", self.mean_r.as_str()),
            ("Mean G", self.mean_g.as_str()),
            ("Mean B", self.mean_b.as_str()),
            ("Std R", self.std_r.as_str()),
            ("Std G", self.std_g.as_str()),
            ("Std B", self.std_b.as_str()),
            ("Edge Density", self.edge_density.as_str()),
            ("Contrast", self.contrast.as_str()),
            ("Texture Complexity", self.texture_complexity.as_str()),
        ]
    }
}

/// Render `value` with `digits` decimals, rounding exact ties away from zero.
///
/// `{:.N}` rounds ties to even. A tie is only possible when `value` has at
/// most `digits + 1` fractional bits, in which case the next double away from
/// zero rounds the other way.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let scaled = value * 2f64.powi(digits as i32 + 1);
    if value != 0.0 && scaled.is_finite() && scaled.fract() == 0.0 {
        let exact = format!("{:.*}", digits + 1, value);
        if exact.ends_with('5') {
            return format!("{:.*}", digits, f64::from_bits(value.to_bits() + 1));
        }
    }
    format!("{:.*}", digits, value)
}

impl From<FeatureVector> for FormattedFeatures {
    fn from(f: FeatureVector) -> Self {
        Self {
            mean_r: to_fixed(f.mean_r, 2),
            mean_g: to_fixed(f.mean_g, 2),
            mean_b: to_fixed(f.mean_b, 2),
            std_r: to_fixed(f.std_r, 2),
            std_g: to_fixed(f.std_g, 2),
            std_b: to_fixed(f.std_b, 2),
            edge_density: to_fixed(f.edge_density, 4),
            contrast: to_fixed(f.contrast, 2),
            texture_complexity: to_fixed(f.texture_complexity, 2),
        }
    }
}

impl FeatureVector {
    /// Fixed-precision rendering of every field
    pub fn formatted(&self) -> FormattedFeatures {
        FormattedFeatures::from(*self)
    }
}

/// Compute the feature vector of a `width` × `height` RGBA buffer.
///
/// Fails with [`FeatureError::InvalidDimensions`] if `pixels` is not exactly
/// `width * height * 4` bytes.
pub fn extract_features(pixels: &[u8], width: u32, height: u32) -> Result<FeatureVector, FeatureError> {
    check_dimensions(pixels.len(), width, height)?;

    let [r, g, b] = ChannelStatistics::rgb(pixels);
    let edges = count_edges(pixels, width, height);
    let edge_density = edges as f64 / (width as f64 * height as f64);

    trace!(width, height, edges, "extracted pixel features");

    Ok(FeatureVector {
        mean_r: r.mean,
        mean_g: g.mean,
        mean_b: b.mean,
        std_r: r.std_dev,
        std_g: g.std_dev,
        std_b: b.std_dev,
        edge_density,
        contrast: (r.mean + g.mean + b.mean) / 3.0,
        texture_complexity: r.std_dev + g.std_dev + b.std_dev,
    })
}

/// Feature extractor bound to the grid size callers resample to
#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor {
    width: u32,
    height: u32,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl FeatureExtractor {
    /// Create a new feature extractor
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Expected (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Extract features from a buffer of the configured size
    pub fn extract(&self, buffer: &PixelBuffer) -> Result<FeatureVector, FeatureError> {
        if buffer.width() != self.width || buffer.height() != self.height {
            return Err(FeatureError::InvalidDimensions {
                width: buffer.width(),
                height: buffer.height(),
                expected: byte_len(self.width, self.height).unwrap_or(usize::MAX),
                actual: buffer.as_bytes().len(),
            });
        }
        extract_features(buffer.as_bytes(), self.width, self.height)
    }

    /// Extract a batch in parallel. Output order matches input order.
    pub fn extract_batch(&self, buffers: &[PixelBuffer]) -> Vec<Result<FeatureVector, FeatureError>> {
        buffers.par_iter().map(|buffer| self.extract(buffer)).collect()
    }
}
