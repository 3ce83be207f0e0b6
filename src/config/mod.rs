//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod toml;
pub mod validator;

use crate::benchmark::DEFAULT_RUNS;
use crate::coordinator::DispatchStrategy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub workers: WorkerConfig,
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Input text source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Path to the UTF-8 text file to count
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("sample.txt")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

/// Worker configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkerConfig {
    /// Worker count override (defaults to the number of logical CPUs)
    pub threads: Option<usize>,
    /// How partitions are dispatched
    #[serde(default)]
    pub strategy: DispatchStrategy,
}

/// Benchmark configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkConfig {
    /// Whether to benchmark after counting
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Number of sequential counting runs
    #[serde(default = "default_runs")]
    pub runs: usize,
}

fn default_enabled() -> bool {
    true
}

fn default_runs() -> usize {
    DEFAULT_RUNS
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            runs: default_runs(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Print only the K most frequent words instead of the whole map
    pub top: Option<usize>,
    /// Print per-run latency figures after the benchmark summary
    #[serde(default)]
    pub show_latency: bool,
    /// JSON report file path
    pub json_output: Option<PathBuf>,
    /// Suppress the frequency map on stdout
    #[serde(default)]
    pub quiet: bool,
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    /// Dry run mode
    #[serde(default)]
    pub dry_run: bool,
    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input.path, PathBuf::from("sample.txt"));
        assert_eq!(config.workers.threads, None);
        assert_eq!(config.workers.strategy, DispatchStrategy::Threads);
        assert!(config.benchmark.enabled);
        assert_eq!(config.benchmark.runs, 100);
        assert_eq!(config.output.top, None);
        assert!(!config.runtime.dry_run);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = ::toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
