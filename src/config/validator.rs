//! Configuration validation

use super::*;
use crate::worker::parallelism::warn_if_oversubscribed;
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_input(&config.input)?;
    validate_workers(&config.workers)?;
    validate_benchmark(&config.benchmark)?;
    validate_output(&config.output, &config.benchmark)?;

    Ok(())
}

/// Validate input configuration
pub fn validate_input(input: &InputConfig) -> Result<()> {
    if input.path.as_os_str().is_empty() {
        anyhow::bail!("input path must not be empty");
    }
    Ok(())
}

/// Validate worker configuration
///
/// The coordinator must always receive a positive worker count, so a zero
/// override is rejected here rather than at partition time.
pub fn validate_workers(workers: &WorkerConfig) -> Result<()> {
    if let Some(threads) = workers.threads {
        if threads == 0 {
            anyhow::bail!("workers.threads must be at least 1, got 0");
        }
        warn_if_oversubscribed(threads);
    }
    Ok(())
}

/// Validate benchmark configuration
pub fn validate_benchmark(benchmark: &BenchmarkConfig) -> Result<()> {
    if benchmark.enabled && benchmark.runs == 0 {
        anyhow::bail!("benchmark.runs must be at least 1 when benchmarking is enabled");
    }
    if u32::try_from(benchmark.runs).is_err() {
        anyhow::bail!("benchmark.runs must fit in 32 bits, got {}", benchmark.runs);
    }
    Ok(())
}

/// Validate output configuration
fn validate_output(output: &OutputConfig, benchmark: &BenchmarkConfig) -> Result<()> {
    if output.top == Some(0) {
        anyhow::bail!("output.top must be at least 1");
    }
    if output.show_latency && !benchmark.enabled {
        log::warn!("output.show_latency has no effect with benchmarking disabled");
    }
    if let Some(ref path) = output.json_output {
        if path.as_os_str().is_empty() {
            anyhow::bail!("output.json_output must not be empty");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut config = Config::default();
        config.workers.threads = Some(0);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("workers.threads"));
    }

    #[test]
    fn test_zero_runs_rejected_only_when_enabled() {
        let mut config = Config::default();
        config.benchmark.runs = 0;
        assert!(validate_config(&config).is_err());

        config.benchmark.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_top_rejected() {
        let mut config = Config::default();
        config.output.top = Some(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_input_path_rejected() {
        let mut config = Config::default();
        config.input.path = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_explicit_threads_accepted() {
        let mut config = Config::default();
        config.workers.threads = Some(3);
        assert!(validate_config(&config).is_ok());
    }
}
