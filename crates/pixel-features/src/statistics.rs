//! Per-channel Color Statistics

use crate::CHANNELS;

/// Mean and population standard deviation of one color channel
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelStatistics {
    /// Mean value
    pub mean: f64,
    /// Standard deviation
    pub std_dev: f64,
}

impl ChannelStatistics {
    /// Compute statistics for `channel` (0 = R, 1 = G, 2 = B, 3 = A) of an
    /// RGBA byte slice.
    ///
    /// Two passes: the first sums the channel to get the mean, the second
    /// accumulates squared deviation from it. The accumulation order is
    /// fixed, so identical buffers give bit-identical results.
    pub fn compute(pixels: &[u8], channel: usize) -> Self {
        debug_assert!(channel < CHANNELS);
        let n = pixels.len() / CHANNELS;
        if n == 0 {
            return Self::default();
        }
        let n = n as f64;

        let total: f64 = pixels
            .chunks_exact(CHANNELS)
            .map(|px| px[channel] as f64)
            .sum();
        let mean = total / n;

        let mut m2 = 0.0;
        for px in pixels.chunks_exact(CHANNELS) {
            let d = px[channel] as f64 - mean;
            m2 += d * d;
        }

        Self {
            mean,
            std_dev: (m2 / n).sqrt(),
        }
    }

    /// Statistics for the R, G and B channels
    pub fn rgb(pixels: &[u8]) -> [Self; 3] {
        [
            Self::compute(pixels, 0),
            Self::compute(pixels, 1),
            Self::compute(pixels, 2),
        ]
    }
}
