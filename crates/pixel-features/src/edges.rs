//! Gradient-threshold Edge Density

use crate::CHANNELS;

/// Grayscale step between neighbours above which a pixel counts as an edge
pub const EDGE_THRESHOLD: f64 = 30.0;

#[inline]
fn gray(pixels: &[u8], idx: usize) -> f64 {
    (pixels[idx] as f64 + pixels[idx + 1] as f64 + pixels[idx + 2] as f64) / 3.0
}

/// Count pixels whose unweighted gray level differs from the left or top
/// neighbour by more than [`EDGE_THRESHOLD`]. The first row and column have
/// no such neighbours and are never edges.
///
/// `pixels` must already be checked to hold `width * height` RGBA pixels.
pub(crate) fn count_edges(pixels: &[u8], width: u32, height: u32) -> usize {
    let (width, height) = (width as usize, height as usize);
    let stride = width * CHANNELS;
    let mut edges = 0;

    for y in 1..height {
        for x in 1..width {
            let idx = y * stride + x * CHANNELS;
            let current = gray(pixels, idx);
            let left = gray(pixels, idx - CHANNELS);
            let top = gray(pixels, idx - stride);

            if (current - left).abs() > EDGE_THRESHOLD || (current - top).abs() > EDGE_THRESHOLD {
                edges += 1;
            }
        }
    }

    edges
}
