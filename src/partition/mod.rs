//! Token partitioning
//!
//! Splits a token sequence into contiguous, balanced slices, one per worker.
//! Every slice holds `ceil(len / workers)` tokens except possibly the last,
//! which may be shorter. Slices are never empty: when there are fewer tokens
//! than workers, fewer slices are produced rather than padding with empty
//! ones.
//!
//! # Example
//!
//! ```
//! use wordpulse::partition::partition;
//!
//! let tokens: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
//! let parts = partition(&tokens, 2)?;
//! assert_eq!(parts.len(), 2);
//! assert_eq!(parts[0].len(), 3);
//! assert_eq!(parts[1].len(), 2);
//! # Ok::<(), wordpulse::WordCountError>(())
//! ```

use crate::error::{Result, WordCountError};

/// Compute the slice size for `len` tokens across `workers` workers
///
/// Returns `ceil(len / workers)`. Fails when `workers` is zero.
pub fn chunk_size(len: usize, workers: usize) -> Result<usize> {
    if workers == 0 {
        return Err(WordCountError::InvalidPartitionRequest { workers });
    }
    Ok(len.div_ceil(workers))
}

/// Partition `tokens` into at most `workers` contiguous slices
///
/// The slices borrow from `tokens`; concatenating them in order yields the
/// input exactly. An empty input yields zero slices.
///
/// # Errors
///
/// `WordCountError::InvalidPartitionRequest` if `workers` is zero.
pub fn partition<T>(tokens: &[T], workers: usize) -> Result<Vec<&[T]>> {
    let size = chunk_size(tokens.len(), workers)?;
    if size == 0 {
        return Ok(Vec::new());
    }

    let parts: Vec<&[T]> = tokens.chunks(size).collect();
    log::debug!(
        "Partitioned {} tokens into {} slices of up to {} (requested {} workers)",
        tokens.len(),
        parts.len(),
        size,
        workers
    );
    Ok(parts)
}
