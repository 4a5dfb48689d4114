//! Plain-text tables for terminal output

use dataset::{BucketCounts, Category, DatasetStatistics};
use pixel_features::FeatureVector;
use std::fmt::Write;

/// Shown wherever a category is printed: labels come from file names only
pub const HEURISTIC_NOTICE: &str =
    "Note: categories are filename keyword heuristics, not classifier output. No model is involved.";

fn bucket_row(out: &mut String, label: &str, counts: &BucketCounts) {
    let _ = writeln!(
        out,
        "{:<12}{:>8}{:>10}{:>8}",
        label, counts.normal, counts.abnormal, counts.total
    );
}

/// Bucket × category count table followed by feature totals
pub fn format_statistics(stats: &DatasetStatistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12}{:>8}{:>10}{:>8}", "Bucket", "Normal", "Abnormal", "Total");
    bucket_row(&mut out, "Training", &stats.training);
    bucket_row(&mut out, "Validation", &stats.validation);
    bucket_row(&mut out, "Testing", &stats.testing);
    let _ = writeln!(out, "Total images: {}", stats.total_images);
    let _ = writeln!(
        out,
        "Features extracted: {} (normal {}, abnormal {})",
        stats.features, stats.categories.normal, stats.categories.abnormal
    );
    let _ = writeln!(out, "{HEURISTIC_NOTICE}");
    out
}

/// Two-column feature/value table for one image
pub fn format_features(features: &FeatureVector, category: Category) -> String {
    let formatted = features.formatted();
    let mut out = String::new();
    let _ = writeln!(out, "{:<20}{}", "Feature", "Value");
    for (label, value) in formatted.rows() {
        let _ = writeln!(out, "{label:<20}{value}");
    }
    let _ = writeln!(out, "{:<20}{}", "Filename Category", category);
    let _ = writeln!(out, "{HEURISTIC_NOTICE}");
    out
}
