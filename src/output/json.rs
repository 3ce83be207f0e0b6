//! JSON output formatting
//!
//! Serializes one invocation's results into a single report:
//! - resolved configuration summary
//! - the merged frequency table (or only the top K entries)
//! - per-worker breakdown of the reported count
//! - benchmark timing with per-run latency percentiles (if benchmarked)

use crate::benchmark::BenchmarkReport;
use crate::config::Config;
use crate::coordinator::{CountReport, DispatchStrategy};
use crate::util::time::format_duration;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Duration with both microseconds and human-readable format
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JsonDuration {
    pub micros: u64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        let micros = u64::try_from(d.as_micros()).unwrap_or(u64::MAX);
        Self {
            micros,
            human: format_duration(d),
        }
    }
}

/// Configuration summary embedded in the report
#[derive(Debug, Clone, Serialize)]
pub struct JsonConfig {
    pub input: PathBuf,
    pub workers: usize,
    pub strategy: DispatchStrategy,
}

/// One worker's share of the count
#[derive(Debug, Clone, Serialize)]
pub struct JsonWorker {
    pub worker_id: usize,
    pub tokens: usize,
    pub distinct: usize,
    pub elapsed: JsonDuration,
}

/// One ranked entry when only the top K words are reported
#[derive(Debug, Clone, Serialize)]
pub struct JsonRankedWord {
    pub word: String,
    pub count: u64,
}

/// Word frequencies: the whole table, or the top K entries
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JsonFrequencies {
    All(BTreeMap<String, u64>),
    Top(Vec<JsonRankedWord>),
}

/// Per-run latency spread
#[derive(Debug, Clone, Serialize)]
pub struct JsonLatency {
    pub min: JsonDuration,
    pub mean: JsonDuration,
    pub max: JsonDuration,
    pub p50: JsonDuration,
    pub p90: JsonDuration,
    pub p99: JsonDuration,
}

/// Benchmark figures
#[derive(Debug, Clone, Serialize)]
pub struct JsonBenchmark {
    pub runs: usize,
    pub total_ms: u64,
    pub average_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<JsonLatency>,
}

impl JsonBenchmark {
    pub fn from_report(report: &BenchmarkReport) -> Self {
        let hist = &report.histogram;
        let latency = match (
            hist.min(),
            hist.mean(),
            hist.max(),
            hist.percentile(50.0),
            hist.percentile(90.0),
            hist.percentile(99.0),
        ) {
            (Some(min), Some(mean), Some(max), Some(p50), Some(p90), Some(p99)) => Some(JsonLatency {
                min: JsonDuration::from_duration(min),
                mean: JsonDuration::from_duration(mean),
                max: JsonDuration::from_duration(max),
                p50: JsonDuration::from_duration(p50),
                p90: JsonDuration::from_duration(p90),
                p99: JsonDuration::from_duration(p99),
            }),
            _ => None,
        };

        Self {
            runs: report.runs,
            total_ms: report.total_millis(),
            average_ms: report.average_millis(),
            latency,
        }
    }
}

/// Complete JSON report for one invocation
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    pub config: JsonConfig,
    pub tokens: usize,
    pub distinct_words: usize,
    pub frequencies: JsonFrequencies,
    pub workers: Vec<JsonWorker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<JsonBenchmark>,
}

impl JsonReport {
    /// Build a report from a count and an optional benchmark
    pub fn build(
        config: &Config,
        workers: usize,
        count: &CountReport,
        benchmark: Option<&BenchmarkReport>,
    ) -> Self {
        let frequencies = match config.output.top {
            Some(k) => JsonFrequencies::Top(
                count
                    .frequencies
                    .top(k)
                    .into_iter()
                    .map(|(word, count)| JsonRankedWord {
                        word: word.to_owned(),
                        count,
                    })
                    .collect(),
            ),
            None => JsonFrequencies::All(
                count
                    .frequencies
                    .iter()
                    .map(|(word, count)| (word.to_owned(), count))
                    .collect(),
            ),
        };

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            config: JsonConfig {
                input: config.input.path.clone(),
                workers,
                strategy: config.workers.strategy,
            },
            tokens: count.tokens,
            distinct_words: count.frequencies.distinct(),
            frequencies,
            workers: count
                .workers
                .iter()
                .map(|w| JsonWorker {
                    worker_id: w.worker_id,
                    tokens: w.tokens,
                    distinct: w.distinct,
                    elapsed: JsonDuration::from_duration(w.elapsed),
                })
                .collect(),
            benchmark: benchmark.map(JsonBenchmark::from_report),
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn write_json_report(path: &Path, report: &JsonReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON output file: {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("Failed to write JSON report: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush JSON report: {}", path.display()))?;

    log::info!("Wrote JSON report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::Benchmark;
    use crate::coordinator::WordCounter;
    use tempfile::TempDir;

    const TEXT: &str = "The cat sat. The cat ran, fast.";

    fn count() -> CountReport {
        WordCounter::new(2).unwrap().count_detailed(TEXT).unwrap()
    }

    #[test]
    fn test_json_duration() {
        let d = JsonDuration::from_duration(Duration::from_micros(1500));
        assert_eq!(d.micros, 1500);
        assert_eq!(d.human, "1.50ms");
    }

    #[test]
    fn test_report_full_table() {
        let report = JsonReport::build(&Config::default(), 2, &count(), None);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["tokens"], 7);
        assert_eq!(value["distinct_words"], 5);
        assert_eq!(value["frequencies"]["the"], 2);
        assert_eq!(value["frequencies"]["fast"], 1);
        assert_eq!(value["config"]["strategy"], "threads");
        assert_eq!(value["workers"].as_array().unwrap().len(), 2);
        assert!(value.get("benchmark").is_none());
        assert!(value["generated_at"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_report_top_words() {
        let mut config = Config::default();
        config.output.top = Some(2);
        let report = JsonReport::build(&config, 2, &count(), None);
        let value = serde_json::to_value(&report).unwrap();

        let top = value["frequencies"].as_array().unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0]["word"], "cat");
        assert_eq!(top[0]["count"], 2);
        assert_eq!(top[1]["word"], "the");
    }

    #[test]
    fn test_report_with_benchmark() {
        let bench = Benchmark::new(WordCounter::new(2).unwrap(), 3)
            .unwrap()
            .run(TEXT)
            .unwrap();
        let report = JsonReport::build(&Config::default(), 2, &count(), Some(&bench));
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["benchmark"]["runs"], 3);
        assert!(value["benchmark"]["latency"]["p99"]["micros"].is_u64());
    }

    #[test]
    fn test_write_json_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        let report = JsonReport::build(&Config::default(), 2, &count(), None);

        write_json_report(&path, &report).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["frequencies"]["cat"], 2);
    }

    #[test]
    fn test_write_json_report_bad_path() {
        let report = JsonReport::build(&Config::default(), 2, &count(), None);
        let result = write_json_report(Path::new("/nonexistent/dir/report.json"), &report);
        assert!(result.is_err());
    }
}
