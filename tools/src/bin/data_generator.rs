//! data-generator: writes the four raw synthetic datasets.
//!
//! Usage:
//!   data-generator
//!   data-generator --data-dir ./data --seed 7

#[path = "../cli.rs"]
mod cli;

use anyhow::Result;
use std::env;
use supplychain_core::generator::{DatasetGenerator, SyntheticGenerator};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = cli::pipeline_config(&args)?;
    let paths = config.paths();
    paths.ensure_dirs()?;

    SyntheticGenerator::from_config(&config).generate(&paths)?;

    for (dataset, path) in paths.raw_files() {
        println!("  {dataset:<10} {}", path.display());
    }
    Ok(())
}
