//! MRI Dataset Tools
//!
//! Command-line front end over the pixel feature extractor and the dataset
//! splitter.

pub mod processor;
pub mod report;
pub mod settings;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dataset::{validate_file_type, Category, FeatureRecord};
use pixel_features::FeatureExtractor;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use processor::{extract_file, process_dataset};
use settings::Settings;

#[derive(Parser, Debug, Clone)]
#[command(name = "mri-dataset", version, about = "Split an MRI image dataset and compute pixel statistics")]
pub struct Opts {
    #[command(subcommand)]
    pub command: Command,
    /// Settings file (TOML, JSON, YAML...). Defaults to ./mri-dataset.* if present
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Categorize and split a directory of images, then extract features
    Process(ProcessCommand),
    /// Extract features from a single image
    Extract(ExtractCommand),
}

#[derive(Args, Debug, Clone)]
pub struct ProcessCommand {
    /// Dataset root, searched recursively
    pub dir: PathBuf,
    /// Write the JSON summary to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Write the JSON summary to the configured output file
    #[arg(long)]
    pub export: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractCommand {
    pub image: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Initialize logging to stderr, keeping stdout for results
pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")?;
    Ok(())
}

/// Dispatch a parsed command line
pub fn run(opts: &Opts) -> Result<()> {
    let settings = Settings::load(opts.config.as_deref()).context("failed to load settings")?;

    match &opts.command {
        Command::Process(cmd) => run_process(cmd, &settings),
        Command::Extract(cmd) => run_extract(cmd, &settings),
    }
}

fn run_process(cmd: &ProcessCommand, settings: &Settings) -> Result<()> {
    let processed = process_dataset(&cmd.dir, settings)?;
    if processed.failed > 0 {
        warn!("{} images could not be processed", processed.failed);
    }

    let stats = processed.statistics();
    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Table => print!("{}", report::format_statistics(&stats)),
    }

    let output = match (&cmd.output, cmd.export) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(settings.output_file.clone()),
        (None, false) => None,
    };
    if let Some(path) = output {
        let summary = processed.summary(settings.summary_feature_limit);
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        info!("Dataset summary written to {}", path.display());
    }

    Ok(())
}

fn run_extract(cmd: &ExtractCommand, settings: &Settings) -> Result<()> {
    let name = cmd
        .image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    validate_file_type(&name)?;

    let extractor = FeatureExtractor::new(settings.image_size, settings.image_size);
    let features = extract_file(&extractor, &cmd.image)
        .with_context(|| format!("failed to extract features from {}", cmd.image.display()))?;
    let category = Category::from_file_name(&name);

    match cmd.format {
        OutputFormat::Json => {
            let record = FeatureRecord {
                file_name: name,
                category,
                features,
            };
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Table => print!("{}", report::format_features(&features, category)),
    }
    Ok(())
}
