//! Benchmark harness
//!
//! Runs the counter a fixed number of times, strictly one run after the
//! other, and reports the total wall-clock time and the average per run. Each
//! run's own duration also goes into a histogram so the spread can be shown.
//!
//! # Example
//!
//! ```
//! use wordpulse::benchmark::Benchmark;
//! use wordpulse::coordinator::WordCounter;
//!
//! let bench = Benchmark::new(WordCounter::new(2)?, 5)?;
//! let report = bench.run("the quick brown fox jumps over the lazy dog")?;
//!
//! assert_eq!(report.runs, 5);
//! assert_eq!(report.histogram.len(), 5);
//! # Ok::<(), wordpulse::WordCountError>(())
//! ```

use crate::coordinator::WordCounter;
use crate::error::{Result, WordCountError};
use crate::stats::histogram::RunHistogram;
use crate::util::time::{duration_to_millis, Timestamp};
use std::time::Duration;

/// Run count used when none is configured
pub const DEFAULT_RUNS: usize = 100;

/// Timing figures from a benchmark
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub runs: usize,
    /// Wall-clock time across all runs
    pub total: Duration,
    /// Duration of each individual run
    pub histogram: RunHistogram,
}

impl BenchmarkReport {
    /// Total time in whole milliseconds
    pub fn total_millis(&self) -> u64 {
        duration_to_millis(self.total)
    }

    /// Average milliseconds per run: `total_millis / runs`
    pub fn average_millis(&self) -> f64 {
        self.total_millis() as f64 / self.runs as f64
    }

    /// Average run duration at full precision
    pub fn average(&self) -> Duration {
        // runs >= 1 is enforced by Benchmark::new
        self.total / self.runs as u32
    }
}

/// Repeated, sequential timing of a [`WordCounter`]
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    counter: WordCounter,
    runs: usize,
}

impl Benchmark {
    /// # Errors
    ///
    /// `WordCountError::InvalidRunCount` if `runs` is zero.
    pub fn new(counter: WordCounter, runs: usize) -> Result<Self> {
        if runs == 0 || u32::try_from(runs).is_err() {
            return Err(WordCountError::InvalidRunCount { runs });
        }
        Ok(Self { counter, runs })
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn counter(&self) -> &WordCounter {
        &self.counter
    }

    /// Count `text` once per run and time the whole sequence
    pub fn run(&self, text: &str) -> Result<BenchmarkReport> {
        log::info!(
            "Benchmarking {} runs with {} workers ({})",
            self.runs,
            self.counter.workers(),
            self.counter.strategy()
        );
        self.run_with(|| self.counter.count(text))
    }

    /// Time `probe` once per run
    ///
    /// The probe is invoked exactly `runs` times, never concurrently. The
    /// first error aborts the benchmark.
    pub fn run_with<T, F>(&self, mut probe: F) -> Result<BenchmarkReport>
    where
        F: FnMut() -> Result<T>,
    {
        let mut histogram = RunHistogram::new();
        let start = Timestamp::now();

        for run in 0..self.runs {
            let run_start = Timestamp::now();
            probe()?;
            let elapsed = run_start.elapsed();
            histogram.record(elapsed);
            log::trace!("Run {}/{} took {:?}", run + 1, self.runs, elapsed);
        }

        let total = start.elapsed();
        log::info!("Completed {} runs in {:?}", self.runs, total);

        Ok(BenchmarkReport {
            runs: self.runs,
            total,
            histogram,
        })
    }
}

/// Benchmark the default counter over `text` for `runs` runs
pub fn benchmark(text: &str, runs: usize) -> Result<BenchmarkReport> {
    Benchmark::new(WordCounter::with_available_parallelism(), runs)?.run(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::thread;

    fn counter() -> WordCounter {
        WordCounter::new(2).unwrap()
    }

    #[test]
    fn test_zero_runs_rejected() {
        let err = Benchmark::new(counter(), 0).unwrap_err();
        assert!(matches!(err, WordCountError::InvalidRunCount { runs: 0 }));
    }

    #[test]
    fn test_probe_invoked_exactly_runs_times() {
        let calls = Cell::new(0usize);
        let in_flight = Cell::new(false);

        let report = Benchmark::new(counter(), 5)
            .unwrap()
            .run_with(|| {
                assert!(!in_flight.replace(true), "runs overlapped");
                calls.set(calls.get() + 1);
                in_flight.set(false);
                Ok(())
            })
            .unwrap();

        assert_eq!(calls.get(), 5);
        assert_eq!(report.runs, 5);
        assert_eq!(report.histogram.len(), 5);
    }

    #[test]
    fn test_average_is_total_over_runs() {
        let report = Benchmark::new(counter(), 5)
            .unwrap()
            .run_with(|| {
                thread::sleep(Duration::from_millis(2));
                Ok(())
            })
            .unwrap();

        assert!(report.total_millis() >= 10);
        assert_eq!(report.average_millis(), report.total_millis() as f64 / 5.0);
        assert!(report.average() >= Duration::from_millis(2));
    }

    #[test]
    fn test_total_grows_with_runs() {
        let time = |runs| {
            Benchmark::new(counter(), runs)
                .unwrap()
                .run_with(|| {
                    thread::sleep(Duration::from_millis(3));
                    Ok(())
                })
                .unwrap()
                .total
        };

        let one = time(1);
        let eight = time(8);
        assert!(eight >= Duration::from_millis(24));
        assert!(eight >= one);
    }

    #[test]
    fn test_probe_error_aborts() {
        let calls = Cell::new(0usize);
        let result = Benchmark::new(counter(), 10).unwrap().run_with(|| {
            calls.set(calls.get() + 1);
            if calls.get() == 3 {
                Err(WordCountError::WorkerPanicked { worker_id: 0 })
            } else {
                Ok(())
            }
        });

        assert!(result.is_err());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_run_counts_real_text() {
        let report = Benchmark::new(counter(), 3)
            .unwrap()
            .run("The cat sat. The cat ran, fast.")
            .unwrap();
        assert_eq!(report.runs, 3);
        assert!(report.histogram.min().is_some());
    }

    #[test]
    fn test_benchmark_helper() {
        let report = benchmark("a b c", 2).unwrap();
        assert_eq!(report.runs, 2);
        assert!(benchmark("a b c", 0).is_err());
    }
}
