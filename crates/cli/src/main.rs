//! MRI Dataset Tools - Main Entry Point

use clap::Parser;
use cli::{init_logging, run, Opts};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    init_logging(opts.verbose)?;

    info!("=== MRI Dataset Tools v{} ===", env!("CARGO_PKG_VERSION"));

    run(&opts)
}
