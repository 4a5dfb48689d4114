//! Category and bucket assignment

use crate::error::DatasetError;
use image::ImageFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

const NORMAL_KEYWORDS: [&str; 3] = ["normal", "healthy", "no_tumor"];
const ABNORMAL_KEYWORDS: [&str; 3] = ["tumor", "abnormal", "cancer"];

/// Heuristic label derived from a sample's file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Normal,
    Abnormal,
}

impl Category {
    /// Label a sample by case-insensitive keyword match on its name.
    ///
    /// Normal keywords are checked first, so `abnormal_vs_normal.png` is
    /// Normal. Names matching neither list fall back to Abnormal.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if NORMAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
            Category::Normal
        } else if ABNORMAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
            Category::Abnormal
        } else {
            debug!(name, "no category keyword, defaulting to Abnormal");
            Category::Abnormal
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Normal => write!(f, "Normal"),
            Category::Abnormal => write!(f, "Abnormal"),
        }
    }
}

/// Dataset split a sample belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    Training,
    Validation,
    Testing,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Training, Bucket::Validation, Bucket::Testing];
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Training => write!(f, "Training"),
            Bucket::Validation => write!(f, "Validation"),
            Bucket::Testing => write!(f, "Testing"),
        }
    }
}

/// Whether `name` has an image file extension. DICOM (`.dcm`) is accepted
/// here even though it cannot be decoded downstream.
pub fn is_supported_image(name: &str) -> bool {
    let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    ext == "dcm" || ImageFormat::from_extension(&ext).is_some()
}

/// Reject names that are not image files
pub fn validate_file_type(name: &str) -> Result<(), DatasetError> {
    if is_supported_image(name) {
        Ok(())
    } else {
        Err(DatasetError::UnsupportedFileType(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_keywords() {
        assert_eq!(Category::from_file_name("scan_normal_01.png"), Category::Normal);
        assert_eq!(Category::from_file_name("HEALTHY_brain.jpg"), Category::Normal);
        assert_eq!(Category::from_file_name("case_no_tumor.png"), Category::Normal);
    }

    #[test]
    fn test_abnormal_keywords() {
        assert_eq!(Category::from_file_name("scan_tumor_07.png"), Category::Abnormal);
        assert_eq!(Category::from_file_name("Cancer-12.jpeg"), Category::Abnormal);
    }

    #[test]
    fn test_normal_checked_before_abnormal() {
        // "abnormal" contains "normal"
        assert_eq!(Category::from_file_name("abnormal_3.png"), Category::Normal);
    }

    #[test]
    fn test_unlabeled_falls_back_to_abnormal() {
        assert_eq!(Category::from_file_name("scan_unlabeled.png"), Category::Abnormal);
        assert_eq!(Category::from_file_name(""), Category::Abnormal);
    }

    #[test]
    fn test_supported_images() {
        assert!(is_supported_image("a.png"));
        assert!(is_supported_image("b.JPG"));
        assert!(is_supported_image("c.jpeg"));
        assert!(is_supported_image("d.tif"));
        assert!(is_supported_image("slice_004.dcm"));
        assert!(!is_supported_image("notes.txt"));
        assert!(!is_supported_image("README"));
    }

    #[test]
    fn test_validate_file_type() {
        assert!(validate_file_type("scan.png").is_ok());
        assert_eq!(
            validate_file_type("notes.txt"),
            Err(DatasetError::UnsupportedFileType("notes.txt".to_string()))
        );
    }
}
