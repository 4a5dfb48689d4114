//! Dataset Bucketing and Statistics
//!
//! Assigns labeled image samples to Normal/Abnormal by filename keyword,
//! splits each category 80/10/10 into Training/Validation/Testing, and
//! summarizes the resulting partition.

mod category;
mod error;
mod partition;
mod statistics;
mod summary;

pub use category::{is_supported_image, validate_file_type, Bucket, Category};
pub use error::DatasetError;
pub use partition::{categorize, split_counts, BucketGroup, DatasetPartition, ImageSample, Labeled, SplitCounts};
pub use statistics::{compute_statistics, BucketCounts, CategoryCounts, DatasetStatistics, FeatureRecord};
pub use summary::{DatasetSummary, DEFAULT_SUMMARY_LIMIT};
