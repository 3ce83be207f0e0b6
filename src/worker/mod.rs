//! Frequency counting workers
//!
//! A worker counts the tokens of exactly one partition. It borrows its slice,
//! owns its local map, and never touches another worker's data, which is what
//! lets the coordinator run workers concurrently without locks.
//!
//! # Example
//!
//! ```
//! use wordpulse::worker::Worker;
//!
//! let tokens: Vec<String> = ["the", "cat", "the"].iter().map(|s| s.to_string()).collect();
//! let result = Worker::new(0, &tokens).run();
//!
//! assert_eq!(result.worker_id, 0);
//! assert_eq!(result.tokens, 3);
//! assert_eq!(result.frequencies.get("the"), 2);
//! ```

pub mod parallelism;

use crate::stats::FrequencyMap;
use crate::util::time::Timestamp;
use std::time::Duration;

/// Count exact occurrences of every token in `tokens`
pub fn count_frequencies<S: AsRef<str>>(tokens: &[S]) -> FrequencyMap {
    let mut frequencies = FrequencyMap::new();
    for token in tokens {
        frequencies.increment(token.as_ref());
    }
    frequencies
}

/// Worker bound to one partition
///
/// # Lifecycle
///
/// 1. **Creation**: `Worker::new()` binds an id to a borrowed partition
/// 2. **Execution**: `run()` consumes the worker and counts its partition
/// 3. **Completion**: the returned `WorkerResult` carries the local map
#[derive(Debug)]
pub struct Worker<'a, S> {
    id: usize,
    partition: &'a [S],
}

impl<'a, S: AsRef<str>> Worker<'a, S> {
    pub fn new(id: usize, partition: &'a [S]) -> Self {
        Self { id, partition }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of tokens assigned to this worker
    pub fn len(&self) -> usize {
        self.partition.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partition.is_empty()
    }

    /// Count the partition and report the local result
    pub fn run(self) -> WorkerResult {
        let start = Timestamp::now();
        let frequencies = count_frequencies(self.partition);
        let elapsed = start.elapsed();

        log::trace!(
            "Worker {} counted {} tokens ({} distinct) in {:?}",
            self.id,
            self.partition.len(),
            frequencies.distinct(),
            elapsed
        );

        WorkerResult {
            worker_id: self.id,
            tokens: self.partition.len(),
            frequencies,
            elapsed,
        }
    }
}

/// Local result reported by one worker
#[derive(Debug, Clone)]
pub struct WorkerResult {
    pub worker_id: usize,
    /// Tokens in the worker's partition
    pub tokens: usize,
    pub frequencies: FrequencyMap,
    /// Time spent counting
    pub elapsed: Duration,
}

/// Per-worker figures kept after the partial map has been merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerSummary {
    pub worker_id: usize,
    pub tokens: usize,
    pub distinct: usize,
    pub elapsed: Duration,
}

impl From<&WorkerResult> for WorkerSummary {
    fn from(result: &WorkerResult) -> Self {
        Self {
            worker_id: result.worker_id,
            tokens: result.tokens,
            distinct: result.frequencies.distinct(),
            elapsed: result.elapsed,
        }
    }
}
