//! Exportable dataset summary

use crate::partition::{DatasetPartition, Labeled};
use crate::statistics::{compute_statistics, DatasetStatistics, FeatureRecord};
use serde::Serialize;

/// Feature records included in a summary unless configured otherwise
pub const DEFAULT_SUMMARY_LIMIT: usize = 10;

/// Statistics, a preview of the feature records, and the file names in
/// every partition cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub statistics: DatasetStatistics,
    pub features: Vec<FeatureRecord>,
    pub dataset: DatasetPartition<String>,
}

impl DatasetSummary {
    /// Summarize `partition`, keeping the first `limit` records
    pub fn build<S: Labeled>(partition: &DatasetPartition<S>, records: &[FeatureRecord], limit: usize) -> Self {
        Self {
            statistics: compute_statistics(partition).with_features(records),
            features: records.iter().take(limit).cloned().collect(),
            dataset: partition.map(|s| s.name().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::partition::categorize;
    use pixel_features::FeatureVector;

    #[test]
    fn test_build_summary() {
        let names: Vec<String> = (0..12).map(|i| format!("healthy_{i:02}.png")).collect();
        let partition = categorize(names).unwrap();
        let records: Vec<FeatureRecord> = partition
            .iter()
            .map(|(_, category, name)| FeatureRecord {
                file_name: name.clone(),
                category,
                features: FeatureVector::default(),
            })
            .collect();

        let summary = DatasetSummary::build(&partition, &records, DEFAULT_SUMMARY_LIMIT);
        assert_eq!(summary.features.len(), 10);
        assert_eq!(summary.statistics.features, 12);
        assert_eq!(summary.statistics.categories.normal, 12);
        assert_eq!(summary.dataset, partition);
        assert_eq!(summary.features[0].file_name, "healthy_00.png");
        assert_eq!(summary.features[0].category, Category::Normal);
    }

    #[test]
    fn test_summary_json_layout() {
        let partition = categorize(["a_tumor.png"]).unwrap();
        let summary = DatasetSummary::build(&partition, &[], DEFAULT_SUMMARY_LIMIT);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["statistics"]["totalImages"], 1);
        assert_eq!(json["features"].as_array().map(Vec::len), Some(0));
        assert_eq!(json["dataset"]["testing"]["abnormal"][0], "a_tumor.png");
        assert_eq!(json["dataset"]["training"]["normal"].as_array().map(Vec::len), Some(0));
    }
}
