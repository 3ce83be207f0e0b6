//! Coordinator module
//!
//! Orchestrates workers and aggregates results. A count runs in four steps:
//!
//! 1. tokenize the text
//! 2. partition the tokens into at most `workers` contiguous slices
//! 3. dispatch one worker per slice and wait for every one of them
//! 4. merge the partial maps
//!
//! Callers only ever see the fully merged map; nothing is returned until the
//! last worker has reported.
//!
//! # Example
//!
//! ```
//! use wordpulse::coordinator::WordCounter;
//!
//! let counter = WordCounter::new(2)?;
//! let frequencies = counter.count("The cat sat. The cat ran, fast.")?;
//!
//! assert_eq!(frequencies.get("the"), 2);
//! assert_eq!(frequencies.get("cat"), 2);
//! assert_eq!(frequencies.get("fast"), 1);
//! assert_eq!(frequencies.distinct(), 5);
//! # Ok::<(), wordpulse::WordCountError>(())
//! ```

use crate::error::{Result, WordCountError};
use crate::partition::partition;
use crate::stats::aggregator::FrequencyAggregator;
use crate::stats::FrequencyMap;
use crate::tokenizer::tokenize;
use crate::util::time::Timestamp;
use crate::worker::parallelism::num_cpus;
use crate::worker::{count_frequencies, Worker, WorkerResult, WorkerSummary};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How partitions are handed to concurrent workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStrategy {
    /// One scoped OS thread per partition, results collected over a channel
    #[default]
    Threads,
    /// Partitions mapped on the global rayon pool
    Rayon,
}

impl fmt::Display for DispatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchStrategy::Threads => write!(f, "threads"),
            DispatchStrategy::Rayon => write!(f, "rayon"),
        }
    }
}

/// Outcome of one count with the per-worker breakdown
#[derive(Debug, Clone)]
pub struct CountReport {
    pub frequencies: FrequencyMap,
    /// Tokens produced by the tokenizer
    pub tokens: usize,
    /// Per-worker figures, ordered by worker id
    pub workers: Vec<WorkerSummary>,
    /// Wall-clock time for the whole count
    pub elapsed: Duration,
}

/// Parallel word-frequency counter
///
/// Holds only the worker count and dispatch strategy; every call to
/// [`WordCounter::count`] builds its partitions and maps from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCounter {
    workers: usize,
    strategy: DispatchStrategy,
}

impl WordCounter {
    /// Counter with an explicit worker count
    ///
    /// # Errors
    ///
    /// `WordCountError::InvalidPartitionRequest` if `workers` is zero.
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(WordCountError::InvalidPartitionRequest { workers });
        }
        Ok(Self {
            workers,
            strategy: DispatchStrategy::default(),
        })
    }

    /// Counter with one worker per logical CPU
    pub fn with_available_parallelism() -> Self {
        Self {
            workers: num_cpus().max(1),
            strategy: DispatchStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: DispatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn strategy(&self) -> DispatchStrategy {
        self.strategy
    }

    /// Count word frequencies in `text`
    pub fn count(&self, text: &str) -> Result<FrequencyMap> {
        Ok(self.count_detailed(text)?.frequencies)
    }

    /// Count word frequencies and keep the per-worker breakdown
    pub fn count_detailed(&self, text: &str) -> Result<CountReport> {
        let start = Timestamp::now();

        let tokens = tokenize(text);
        let partitions = partition(&tokens, self.workers)?;

        log::debug!(
            "Dispatching {} workers ({}) over {} tokens",
            partitions.len(),
            self.strategy,
            tokens.len()
        );

        let results = match self.strategy {
            DispatchStrategy::Threads => {
                fan_out(&partitions, |worker_id, part| Worker::new(worker_id, part).run())?
            }
            DispatchStrategy::Rayon => partitions
                .par_iter()
                .enumerate()
                .map(|(worker_id, &part)| Worker::new(worker_id, part).run())
                .collect(),
        };

        let mut workers: Vec<WorkerSummary> = results.iter().map(WorkerSummary::from).collect();
        workers.sort_unstable_by_key(|summary| summary.worker_id);

        let mut aggregator = FrequencyAggregator::with_capacity(results.len());
        for result in results {
            aggregator.add_worker(result.worker_id, result.frequencies)?;
        }
        let frequencies = aggregator.aggregate();

        Ok(CountReport {
            frequencies,
            tokens: tokens.len(),
            workers,
            elapsed: start.elapsed(),
        })
    }
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::with_available_parallelism()
    }
}

/// Count word frequencies in `text` using one worker per logical CPU
pub fn word_count(text: &str) -> Result<FrequencyMap> {
    WordCounter::with_available_parallelism().count(text)
}

/// Single-pass count on the calling thread, with no partitioning
pub fn count_sequential(text: &str) -> FrequencyMap {
    count_frequencies(&tokenize(text))
}

/// Run `task` once per partition on scoped threads and collect every result
///
/// Results travel over a channel with one slot per partition, so no worker
/// ever blocks on send. The scope joins every thread before returning.
fn fan_out<S, F>(partitions: &[&[S]], task: F) -> Result<Vec<WorkerResult>>
where
    S: Sync,
    F: Fn(usize, &[S]) -> WorkerResult + Sync,
{
    let expected = partitions.len();
    if expected == 0 {
        return Ok(Vec::new());
    }

    let (tx, rx) = crossbeam::channel::bounded(expected);
    let task = &task;

    let outcome = crossbeam::scope(|scope| {
        let mut handles = Vec::with_capacity(expected);
        for (worker_id, &part) in partitions.iter().enumerate() {
            let tx = tx.clone();
            handles.push(scope.spawn(move |_| {
                let result = task(worker_id, part);
                // The receiver lives until the scope ends; send cannot fail
                let _ = tx.send(result);
            }));
        }
        // Only worker clones remain, so the channel closes if one panics
        drop(tx);

        let mut results = Vec::with_capacity(expected);
        while results.len() < expected {
            match rx.recv() {
                Ok(result) => results.push(result),
                Err(_) => break,
            }
        }

        let mut panicked = None;
        for (worker_id, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(worker_id);
            }
        }
        (results, panicked)
    });

    let (results, panicked) = outcome.map_err(|_| WordCountError::MissingResults {
        expected,
        received: 0,
    })?;

    if let Some(worker_id) = panicked {
        return Err(WordCountError::WorkerPanicked { worker_id });
    }
    if results.len() != expected {
        return Err(WordCountError::MissingResults {
            expected,
            received: results.len(),
        });
    }
    Ok(results)
}
