//! Train/validation/test partitioning

use crate::category::{validate_file_type, Bucket, Category};
use crate::error::DatasetError;
use pixel_features::PixelBuffer;
use serde::Serialize;
use tracing::{debug, info};

/// Anything that carries a file name the category heuristic can inspect
pub trait Labeled {
    fn name(&self) -> &str;
}

impl Labeled for String {
    fn name(&self) -> &str {
        self
    }
}

impl Labeled for &str {
    fn name(&self) -> &str {
        self
    }
}

/// One labeled input image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSample {
    pub name: String,
    pub pixels: PixelBuffer,
}

impl ImageSample {
    pub fn new(name: impl Into<String>, pixels: PixelBuffer) -> Self {
        Self {
            name: name.into(),
            pixels,
        }
    }
}

impl Labeled for ImageSample {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Per-split sample counts for one category list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitCounts {
    pub train: usize,
    pub validation: usize,
    pub test: usize,
}

/// 80/10/10 split of `n` items.
///
/// Training and validation are floored; testing takes the remainder, so the
/// three counts always sum to `n`.
pub fn split_counts(n: usize) -> SplitCounts {
    // floor(0.8n) and floor(0.1n) without float rounding
    let train = n / 10 * 8 + n % 10 * 8 / 10;
    let validation = n / 10;
    SplitCounts {
        train,
        validation,
        test: n - train - validation,
    }
}

/// Normal and abnormal samples of one bucket, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketGroup<S> {
    pub normal: Vec<S>,
    pub abnormal: Vec<S>,
}

impl<S> Default for BucketGroup<S> {
    fn default() -> Self {
        Self {
            normal: Vec::new(),
            abnormal: Vec::new(),
        }
    }
}

impl<S> BucketGroup<S> {
    pub fn get(&self, category: Category) -> &[S] {
        match category {
            Category::Normal => &self.normal,
            Category::Abnormal => &self.abnormal,
        }
    }

    pub fn total(&self) -> usize {
        self.normal.len() + self.abnormal.len()
    }

    fn map<T>(&self, mut f: impl FnMut(&S) -> T) -> BucketGroup<T> {
        BucketGroup {
            normal: self.normal.iter().map(&mut f).collect(),
            abnormal: self.abnormal.iter().map(&mut f).collect(),
        }
    }
}

/// Training/Validation/Testing × Normal/Abnormal grouping of samples.
///
/// Every sample sits in exactly one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetPartition<S> {
    pub training: BucketGroup<S>,
    pub validation: BucketGroup<S>,
    pub testing: BucketGroup<S>,
}

impl<S> Default for DatasetPartition<S> {
    fn default() -> Self {
        Self {
            training: BucketGroup::default(),
            validation: BucketGroup::default(),
            testing: BucketGroup::default(),
        }
    }
}

impl<S> DatasetPartition<S> {
    pub fn bucket(&self, bucket: Bucket) -> &BucketGroup<S> {
        match bucket {
            Bucket::Training => &self.training,
            Bucket::Validation => &self.validation,
            Bucket::Testing => &self.testing,
        }
    }

    /// Total number of samples across all six cells
    pub fn len(&self) -> usize {
        self.training.total() + self.validation.total() + self.testing.total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every sample with its bucket and category, in cell order:
    /// training normal, training abnormal, validation normal, ...
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, Category, &S)> + '_ {
        Bucket::ALL.into_iter().flat_map(move |bucket| {
            let group = self.bucket(bucket);
            [Category::Normal, Category::Abnormal]
                .into_iter()
                .flat_map(move |category| group.get(category).iter().map(move |s| (bucket, category, s)))
        })
    }

    /// Apply `f` to every sample, keeping cell assignment
    pub fn map<T>(&self, mut f: impl FnMut(&S) -> T) -> DatasetPartition<T> {
        DatasetPartition {
            training: self.training.map(&mut f),
            validation: self.validation.map(&mut f),
            testing: self.testing.map(&mut f),
        }
    }
}

/// Slice an ordered list into (train, validation, test) runs
fn split_ordered<S>(mut items: Vec<S>) -> (Vec<S>, Vec<S>, Vec<S>) {
    let counts = split_counts(items.len());
    let test = items.split_off(counts.train + counts.validation);
    let validation = items.split_off(counts.train);
    (items, validation, test)
}

/// Categorize samples by file name and split each category 80/10/10.
///
/// All names are checked before anything is assigned; a single non-image
/// name rejects the whole batch with [`DatasetError::UnsupportedFileType`].
/// Assignment is order-preserving and deterministic. An empty input yields
/// an empty partition.
pub fn categorize<S: Labeled>(samples: impl IntoIterator<Item = S>) -> Result<DatasetPartition<S>, DatasetError> {
    let samples: Vec<S> = samples.into_iter().collect();
    for sample in &samples {
        validate_file_type(sample.name())?;
    }

    let mut normal = Vec::new();
    let mut abnormal = Vec::new();
    for sample in samples {
        match Category::from_file_name(sample.name()) {
            Category::Normal => normal.push(sample),
            Category::Abnormal => abnormal.push(sample),
        }
    }
    debug!(normal = normal.len(), abnormal = abnormal.len(), "categorized samples");

    let (train_normal, val_normal, test_normal) = split_ordered(normal);
    let (train_abnormal, val_abnormal, test_abnormal) = split_ordered(abnormal);

    let partition = DatasetPartition {
        training: BucketGroup {
            normal: train_normal,
            abnormal: train_abnormal,
        },
        validation: BucketGroup {
            normal: val_normal,
            abnormal: val_abnormal,
        },
        testing: BucketGroup {
            normal: test_normal,
            abnormal: test_abnormal,
        },
    };

    info!(
        "Dataset split: training={}, validation={}, testing={}",
        partition.training.total(),
        partition.validation.total(),
        partition.testing.total()
    );

    Ok(partition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(n: usize, label: &str) -> Vec<String> {
        (0..n).map(|i| format!("{label}_{i:03}.png")).collect()
    }

    #[test]
    fn test_split_examples() {
        assert_eq!(
            split_counts(10),
            SplitCounts {
                train: 8,
                validation: 1,
                test: 1
            }
        );
        assert_eq!(
            split_counts(3),
            SplitCounts {
                train: 2,
                validation: 0,
                test: 1
            }
        );
        assert_eq!(
            split_counts(0),
            SplitCounts {
                train: 0,
                validation: 0,
                test: 0
            }
        );
    }

    #[test]
    fn test_categorize_example() {
        let partition = categorize(["scan_normal_01.png", "scan_tumor_07.png", "scan_unlabeled.png"]).unwrap();

        let normal: Vec<&str> = partition.iter().filter(|(_, c, _)| *c == Category::Normal).map(|(_, _, s)| *s).collect();
        let abnormal: Vec<&str> = partition.iter().filter(|(_, c, _)| *c == Category::Abnormal).map(|(_, _, s)| *s).collect();

        assert_eq!(normal, vec!["scan_normal_01.png"]);
        assert_eq!(abnormal, vec!["scan_tumor_07.png", "scan_unlabeled.png"]);
        // One normal: floor(0.8) = 0 train, 0 val, 1 test
        assert_eq!(partition.testing.normal, vec!["scan_normal_01.png"]);
        // Two abnormal: 1 train, 0 val, 1 test
        assert_eq!(partition.training.abnormal, vec!["scan_tumor_07.png"]);
        assert_eq!(partition.testing.abnormal, vec!["scan_unlabeled.png"]);
    }

    #[test]
    fn test_categorize_is_order_preserving() {
        let input = names(10, "healthy");
        let partition = categorize(input.clone()).unwrap();
        assert_eq!(partition.training.normal, input[..8].to_vec());
        assert_eq!(partition.validation.normal, input[8..9].to_vec());
        assert_eq!(partition.testing.normal, input[9..].to_vec());
        assert!(partition.training.abnormal.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let partition = categorize(Vec::<String>::new()).unwrap();
        assert!(partition.is_empty());
        assert_eq!(partition, DatasetPartition::default());
    }

    #[test]
    fn test_rejects_non_image() {
        let err = categorize(["scan_normal_01.png", "notes.txt"]).unwrap_err();
        assert_eq!(err, DatasetError::UnsupportedFileType("notes.txt".to_string()));
    }

    #[test]
    fn test_image_samples() {
        let samples = vec![
            ImageSample::new("a_normal.png", PixelBuffer::filled(2, 2, [0, 0, 0, 255])),
            ImageSample::new("b_tumor.png", PixelBuffer::filled(2, 2, [9, 9, 9, 255])),
        ];
        let partition = categorize(samples).unwrap();
        let cells: Vec<(Bucket, Category, &str)> = partition.iter().map(|(b, c, s)| (b, c, s.name())).collect();
        assert_eq!(
            cells,
            vec![
                (Bucket::Testing, Category::Normal, "a_normal.png"),
                (Bucket::Testing, Category::Abnormal, "b_tumor.png"),
            ]
        );
    }

    #[test]
    fn test_iter_order() {
        let mut input = names(10, "tumor");
        input.extend(names(10, "normal"));
        let partition = categorize(input).unwrap();
        let buckets: Vec<(Bucket, Category)> = partition.iter().map(|(b, c, _)| (b, c)).collect();
        assert_eq!(buckets.len(), 20);
        assert_eq!(buckets[0], (Bucket::Training, Category::Normal));
        assert_eq!(buckets[8], (Bucket::Training, Category::Abnormal));
        assert_eq!(buckets[16], (Bucket::Validation, Category::Normal));
        assert_eq!(buckets[17], (Bucket::Validation, Category::Abnormal));
        assert_eq!(buckets[18], (Bucket::Testing, Category::Normal));
        assert_eq!(buckets[19], (Bucket::Testing, Category::Abnormal));
    }

    proptest! {
        #[test]
        fn prop_split_conserves_count(n in 0usize..100_000) {
            let counts = split_counts(n);
            prop_assert_eq!(counts.train + counts.validation + counts.test, n);
            prop_assert_eq!(counts.train, (n as f64 * 0.8).floor() as usize);
            prop_assert_eq!(counts.validation, (n as f64 * 0.1).floor() as usize);
        }

        #[test]
        fn prop_categorize_conserves_samples(normal in 0usize..60, abnormal in 0usize..60, other in 0usize..20) {
            let mut input = names(normal, "normal");
            input.extend(names(abnormal, "cancer"));
            input.extend(names(other, "scan"));
            let partition = categorize(input.clone()).unwrap();

            prop_assert_eq!(partition.len(), input.len());
            let mut seen: Vec<String> = partition.iter().map(|(_, _, s)| s.clone()).collect();
            seen.sort();
            input.sort();
            prop_assert_eq!(seen, input);

            let split = split_counts(normal);
            prop_assert_eq!(partition.training.normal.len(), split.train);
            prop_assert_eq!(partition.validation.normal.len(), split.validation);
            prop_assert_eq!(partition.testing.normal.len(), split.test);
        }
    }
}
