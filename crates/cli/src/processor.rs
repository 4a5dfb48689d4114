//! Dataset processing pipeline
//!
//! Scans a directory for images, categorizes and splits them, then extracts
//! pixel features for a capped number of samples.

use crate::settings::Settings;
use anyhow::{bail, Context, Result};
use dataset::{
    categorize, compute_statistics, is_supported_image, DatasetPartition, DatasetStatistics,
    DatasetSummary, FeatureRecord, Labeled,
};
use image_loader::load_rgba;
use pixel_features::{FeatureExtractor, FeatureVector};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use walkdir::WalkDir;

/// Image file found on disk, named by its file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    name: String,
}

impl ImageFile {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

impl Labeled for ImageFile {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Result of one processing run
#[derive(Debug)]
pub struct ProcessedDataset {
    pub partition: DatasetPartition<ImageFile>,
    pub records: Vec<FeatureRecord>,
    /// Files selected for extraction that failed to load or measure
    pub failed: usize,
}

impl ProcessedDataset {
    pub fn statistics(&self) -> DatasetStatistics {
        compute_statistics(&self.partition).with_features(&self.records)
    }

    pub fn summary(&self, limit: usize) -> DatasetSummary {
        DatasetSummary::build(&self.partition, &self.records, limit)
    }
}

/// Collect image files under `root`, sorted by path. Non-image files are
/// skipped with a warning.
pub fn scan_images(root: &Path) -> Result<Vec<ImageFile>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file = ImageFile::new(entry.into_path());
        if is_supported_image(file.name()) {
            files.push(file);
        } else {
            warn!("Skipping non-image file {}", file.path.display());
        }
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Load one file and measure it
pub fn extract_file(extractor: &FeatureExtractor, path: &Path) -> Result<FeatureVector> {
    let (size, _) = extractor.dimensions();
    let buffer = load_rgba(path, size)?;
    Ok(extractor.extract(&buffer)?)
}

/// Run the full pipeline over `root`
pub fn process_dataset(root: &Path, settings: &Settings) -> Result<ProcessedDataset> {
    info!("Processing dataset at {}", root.display());

    let files = scan_images(root)?;
    if files.is_empty() {
        bail!("no valid image files found in dataset {}", root.display());
    }
    info!("Found {} image files", files.len());

    let partition = categorize(files)?;

    let extractor = FeatureExtractor::new(settings.image_size, settings.image_size);
    let selected: Vec<_> = partition
        .iter()
        .take(settings.max_feature_images)
        .map(|(_, category, file)| (category, file))
        .collect();
    info!("Extracting features from {} of {} images", selected.len(), partition.len());

    let results: Vec<Option<FeatureRecord>> = selected
        .par_iter()
        .map(|(category, file)| match extract_file(&extractor, &file.path) {
            Ok(features) => Some(FeatureRecord {
                file_name: file.name().to_string(),
                category: *category,
                features,
            }),
            Err(e) => {
                error!("Error processing {}: {:#}", file.path.display(), e);
                None
            }
        })
        .collect();

    let failed = results.iter().filter(|r| r.is_none()).count();
    let records: Vec<FeatureRecord> = results.into_iter().flatten().collect();

    Ok(ProcessedDataset {
        partition,
        records,
        failed,
    })
}
