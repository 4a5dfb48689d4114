//! Pixel Feature Engine
//!
//! Computes per-channel color statistics and a gradient-threshold edge
//! density over fixed-size RGBA buffers.

mod buffer;
mod edges;
mod error;
mod features;
mod statistics;

pub use buffer::PixelBuffer;
pub use edges::EDGE_THRESHOLD;
pub use error::FeatureError;
pub use features::{
    extract_features, to_fixed, FeatureExtractor, FeatureVector, FormattedFeatures, DEFAULT_SIZE,
};
pub use statistics::ChannelStatistics;

/// Bytes per RGBA pixel
pub const CHANNELS: usize = 4;
