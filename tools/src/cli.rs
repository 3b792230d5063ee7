//! Argument helpers shared by every binary. All flags are optional;
//! each tool runs with no arguments.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use supplychain_core::config::PipelineConfig;

/// Value of `flag` parsed as T, or `default` when the flag is absent.
/// An unparseable value also yields `default`, with a warning.
pub fn parse_arg<T: std::str::FromStr + Copy + std::fmt::Display>(
    args: &[String],
    flag: &str,
    default: T,
) -> T {
    match arg_value(args, flag) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("ignoring {flag} {raw:?}: not a valid value, using {default}");
            default
        }),
        None => default,
    }
}

pub fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// `--config <file>` first, then `--data-dir` and `--seed` overrides.
pub fn pipeline_config(args: &[String]) -> Result<PipelineConfig> {
    let mut config = match arg_value(args, "--config") {
        Some(path) => PipelineConfig::load(Path::new(path))?,
        None => PipelineConfig::default(),
    };
    if let Some(dir) = arg_value(args, "--data-dir") {
        config.data_dir = dir.into();
    }
    config.seed = parse_arg(args, "--seed", config.seed);
    Ok(config)
}
