//! Human-readable text output

use crate::benchmark::BenchmarkReport;
use crate::config::Config;
use crate::coordinator::CountReport;
use crate::stats::FrequencyMap;
use crate::util::time::{calculate_rate, format_duration, format_rate};
use std::fmt::Write;

/// Frequency map in debug form with sorted keys
pub fn format_frequencies(frequencies: &FrequencyMap) -> String {
    frequencies.to_string()
}

pub fn print_frequencies(frequencies: &FrequencyMap) {
    println!("{}", format_frequencies(frequencies));
}

/// Ranked table of the `k` most frequent words
pub fn format_top_words(frequencies: &FrequencyMap, k: usize) -> String {
    let top = frequencies.top(k);
    let width = top.iter().map(|(word, _)| word.chars().count()).max().unwrap_or(4).max(4);

    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:<width$}  {:>10}", "rank", "word", "count");
    for (rank, (word, count)) in top.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:>10}",
            rank + 1,
            word,
            format_number(*count)
        );
    }
    let _ = write!(
        out,
        "({} distinct words, {} total)",
        format_number(frequencies.distinct() as u64),
        format_number(frequencies.total())
    );
    out
}

pub fn print_top_words(frequencies: &FrequencyMap, k: usize) {
    println!("{}", format_top_words(frequencies, k));
}

/// Benchmark summary in the fixed three-line form
pub fn format_results(report: &BenchmarkReport) -> String {
    format!(
        "amount of runs: {}\ntotal time: {} ms\naverage time/run: {:.2} ms",
        report.runs,
        report.total_millis(),
        report.average_millis()
    )
}

/// Print the results of a benchmark
pub fn print_results(report: &BenchmarkReport) {
    println!("{}", format_results(report));
}

/// Per-run latency block, plus throughput when the token count is known
pub fn format_latency(report: &BenchmarkReport, tokens: Option<usize>) -> String {
    let hist = &report.histogram;
    let mut out = String::from("Latency per run:");

    match (hist.min(), hist.mean(), hist.max()) {
        (Some(min), Some(mean), Some(max)) => {
            let _ = write!(out, "\n  Min:    {}", format_duration(min));
            let _ = write!(out, "\n  Mean:   {}", format_duration(mean));
            let _ = write!(out, "\n  Max:    {}", format_duration(max));
            for p in [50.0, 90.0, 99.0] {
                if let Some(value) = hist.percentile(p) {
                    let _ = write!(out, "\n  p{:<5}: {}", p, format_duration(value));
                }
            }
            if let Some(tokens) = tokens {
                let rate = calculate_rate(tokens as u64, mean);
                let _ = write!(out, "\n  Throughput: {} words/s", format_rate(rate));
            }
        }
        _ => out.push_str("\n  No runs recorded"),
    }
    out
}

pub fn print_latency(report: &BenchmarkReport, tokens: Option<usize>) {
    println!("{}", format_latency(report, tokens));
}

/// Resolved configuration summary
pub fn format_configuration(config: &Config, workers: usize) -> String {
    let mut out = String::from("Configuration:");
    let _ = write!(out, "\n  Input:     {}", config.input.path.display());
    let source = if config.workers.threads.is_some() { "configured" } else { "logical CPUs" };
    let _ = write!(out, "\n  Workers:   {} ({})", workers, source);
    let _ = write!(out, "\n  Strategy:  {}", config.workers.strategy);
    if config.benchmark.enabled {
        let _ = write!(out, "\n  Benchmark: {} runs", config.benchmark.runs);
    } else {
        out.push_str("\n  Benchmark: disabled");
    }
    if let Some(top) = config.output.top {
        let _ = write!(out, "\n  Top:       {}", top);
    }
    if let Some(ref path) = config.output.json_output {
        let _ = write!(out, "\n  JSON:      {}", path.display());
    }
    out
}

pub fn print_configuration(config: &Config, workers: usize) {
    println!("{}", format_configuration(config, workers));
}

/// Per-worker breakdown of one count, for debug logging
pub fn format_workers(report: &CountReport) -> String {
    let mut out = format!(
        "{} tokens across {} workers in {}",
        format_number(report.tokens as u64),
        report.workers.len(),
        format_duration(report.elapsed)
    );
    for worker in &report.workers {
        let _ = write!(
            out,
            "\n  worker {:>3}: {} tokens, {} distinct, {}",
            worker.worker_id,
            format_number(worker.tokens as u64),
            format_number(worker.distinct as u64),
            format_duration(worker.elapsed)
        );
    }
    out
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
