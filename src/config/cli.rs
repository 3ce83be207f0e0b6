//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Worker dispatch strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// One scoped thread per partition (default)
    Threads,
    /// Global rayon thread pool
    Rayon,
}

/// WordPulse - parallel word-frequency counter
#[derive(Parser, Debug)]
#[command(name = "wordpulse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input text file (defaults to sample.txt)
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    // === Worker Options ===
    /// Number of workers (defaults to the number of logical CPUs)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// How partitions are dispatched to workers
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    // === Benchmark Options ===
    /// Number of sequential benchmark runs
    #[arg(short = 'r', long)]
    pub runs: Option<usize>,

    /// Count once and skip the benchmark
    #[arg(long)]
    pub no_benchmark: bool,

    // === Output Options ===
    /// Print only the K most frequent words
    #[arg(long, value_name = "K")]
    pub top: Option<usize>,

    /// Show per-run latency after the benchmark summary
    #[arg(long)]
    pub show_latency: bool,

    /// Write a JSON report to this path
    #[arg(long, value_name = "PATH")]
    pub json_output: Option<PathBuf>,

    /// Do not print the frequency map
    #[arg(short = 'q', long)]
    pub quiet: bool,

    // === Configuration File ===
    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dry run - validate configuration without counting
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.threads == Some(0) {
            anyhow::bail!("threads must be at least 1");
        }
        if self.runs == Some(0) {
            anyhow::bail!("runs must be at least 1");
        }
        if self.top == Some(0) {
            anyhow::bail!("top must be at least 1");
        }
        if self.no_benchmark && self.show_latency {
            anyhow::bail!("--show-latency requires the benchmark; drop --no-benchmark");
        }
        Ok(())
    }
}
