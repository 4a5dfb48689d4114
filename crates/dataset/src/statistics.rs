//! Dataset Statistics

use crate::category::Category;
use crate::partition::{BucketGroup, DatasetPartition};
use pixel_features::FeatureVector;
use serde::Serialize;

/// Features extracted from one sample
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    pub file_name: String,
    pub category: Category,
    pub features: FeatureVector,
}

/// Sample counts of one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub normal: usize,
    pub abnormal: usize,
    pub total: usize,
}

impl<S> From<&BucketGroup<S>> for BucketCounts {
    fn from(group: &BucketGroup<S>) -> Self {
        Self {
            normal: group.normal.len(),
            abnormal: group.abnormal.len(),
            total: group.total(),
        }
    }
}

/// Feature record counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub normal: usize,
    pub abnormal: usize,
}

/// Read-only summary of a partition, recomputed on demand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStatistics {
    pub total_images: usize,
    pub training: BucketCounts,
    pub validation: BucketCounts,
    pub testing: BucketCounts,
    /// Number of feature records
    pub features: usize,
    /// Feature records per category
    pub categories: CategoryCounts,
}

impl DatasetStatistics {
    /// Fill the feature totals from extracted records
    pub fn with_features(mut self, records: &[FeatureRecord]) -> Self {
        let normal = records.iter().filter(|r| r.category == Category::Normal).count();
        self.features = records.len();
        self.categories = CategoryCounts {
            normal,
            abnormal: records.len() - normal,
        };
        self
    }
}

/// Count every (bucket, category) cell of `partition`
pub fn compute_statistics<S>(partition: &DatasetPartition<S>) -> DatasetStatistics {
    let training = BucketCounts::from(&partition.training);
    let validation = BucketCounts::from(&partition.validation);
    let testing = BucketCounts::from(&partition.testing);

    DatasetStatistics {
        total_images: training.total + validation.total + testing.total,
        training,
        validation,
        testing,
        features: 0,
        categories: CategoryCounts::default(),
    }
}
