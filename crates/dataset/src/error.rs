//! Dataset Error Types

use thiserror::Error;

/// Errors during dataset categorization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Input is not a recognized image file
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
}
