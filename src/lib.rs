//! WordPulse - parallel word-frequency counting
//!
//! WordPulse splits a text into lowercase word tokens, partitions the token
//! stream across a pool of workers, counts each partition concurrently, and
//! merges the partial tables into one frequency map.
//!
//! # Architecture
//!
//! - **Tokenizer**: strips `.` and `,`, lowercases, splits on whitespace
//! - **Partitioner**: `ceil(L / W)` contiguous chunks, order preserved
//! - **Workers**: one count per partition, run on scoped threads or rayon
//! - **Aggregator**: sums per-worker tables after every worker has reported
//! - **Benchmark**: repeated end-to-end runs with total/average timing
//!
//! # Example
//!
//! ```
//! let counts = wordpulse::word_count("The cat sat. The cat ran, fast.")?;
//! assert_eq!(counts.get("the"), 2);
//! assert_eq!(counts.get("fast"), 1);
//! # Ok::<(), wordpulse::WordCountError>(())
//! ```

pub mod benchmark;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod partition;
pub mod stats;
pub mod tokenizer;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use coordinator::{word_count, DispatchStrategy, WordCounter};
pub use error::{Result, WordCountError};
pub use stats::FrequencyMap;
