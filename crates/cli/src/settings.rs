//! Runtime settings

use config::{Config, ConfigError, Environment, File};
use dataset::DEFAULT_SUMMARY_LIMIT;
use pixel_features::DEFAULT_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_NAME: &str = "mri-dataset";

/// Environment variable prefix, e.g. `MRI_DATASET_MAX_FEATURE_IMAGES`
pub const ENV_PREFIX: &str = "MRI_DATASET";

/// Dataset processing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side length images are resampled to before extraction
    pub image_size: u32,

    /// Maximum number of images to extract features from per run
    pub max_feature_images: usize,

    /// Feature records kept in the exported summary
    pub summary_feature_limit: usize,

    /// Summary export path
    pub output_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_size: DEFAULT_SIZE,
            max_feature_images: 50,
            summary_feature_limit: DEFAULT_SUMMARY_LIMIT,
            output_file: PathBuf::from("brain_tumor_dataset_summary.json"),
        }
    }
}

impl Settings {
    /// Layer defaults, a config file, and `MRI_DATASET_*` environment
    /// variables, later sources winning.
    ///
    /// An explicit `path` must exist; the default `mri-dataset.{toml,json,..}`
    /// is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        if settings.image_size == 0 {
            return Err(ConfigError::Message("image_size must be greater than 0".into()));
        }
        Ok(settings)
    }
}
