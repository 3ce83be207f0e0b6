//! TOML configuration file parsing

use super::*;
use crate::config::cli::{Cli, StrategyArg};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Build the effective configuration from the CLI and an optional TOML file
pub fn load_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => parse_toml_file(path)?,
        None => Config::default(),
    };
    merge_cli_with_config(cli, base)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    if let Some(ref input) = cli.input {
        config.input.path = input.clone();
    }

    // Override worker settings
    if let Some(threads) = cli.threads {
        config.workers.threads = Some(threads);
    }
    if let Some(strategy) = cli.strategy {
        config.workers.strategy = match strategy {
            StrategyArg::Threads => DispatchStrategy::Threads,
            StrategyArg::Rayon => DispatchStrategy::Rayon,
        };
    }

    // Override benchmark settings
    if let Some(runs) = cli.runs {
        config.benchmark.runs = runs;
    }
    if cli.no_benchmark {
        config.benchmark.enabled = false;
    }

    // Override output settings
    if let Some(top) = cli.top {
        config.output.top = Some(top);
    }
    if cli.show_latency {
        config.output.show_latency = true;
    }
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if cli.quiet {
        config.output.quiet = true;
    }

    // Override runtime flags
    if cli.dry_run {
        config.runtime.dry_run = true;
    }
    if cli.debug {
        config.runtime.debug = true;
    }

    Ok(config)
}
