//! Error types for the counting core

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the counting core and its input collaborator
#[derive(Debug, Error)]
pub enum WordCountError {
    /// Partitioning was requested with zero workers
    #[error("invalid partition request: worker count must be at least 1, got {workers}")]
    InvalidPartitionRequest { workers: usize },

    /// Benchmark was requested with zero runs
    #[error("invalid run count: benchmark needs at least 1 run, got {runs}")]
    InvalidRunCount { runs: usize },

    /// A dispatched worker panicked before reporting its result
    #[error("worker {worker_id} panicked")]
    WorkerPanicked { worker_id: usize },

    /// The result channel closed before every worker reported
    #[error("expected {expected} worker results, received {received}")]
    MissingResults { expected: usize, received: usize },

    /// Two results arrived for the same worker
    #[error("duplicate result for worker {worker_id}")]
    DuplicateResult { worker_id: usize },

    /// The input text could not be read
    #[error("failed to read input {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type used by the counting core
pub type Result<T> = std::result::Result<T, WordCountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_partition_message() {
        let err = WordCountError::InvalidPartitionRequest { workers: 0 };
        assert_eq!(
            err.to_string(),
            "invalid partition request: worker count must be at least 1, got 0"
        );
    }

    #[test]
    fn test_input_read_keeps_source() {
        let err = WordCountError::InputRead {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
