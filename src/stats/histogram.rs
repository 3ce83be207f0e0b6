//! Per-run latency histogram using HdrHistogram
//!
//! The benchmark harness records the wall-clock duration of every counting run
//! here so that the spread between runs can be reported next to the average.
//!
//! # Example
//!
//! ```
//! use wordpulse::stats::histogram::RunHistogram;
//! use std::time::Duration;
//!
//! let mut hist = RunHistogram::new();
//! hist.record(Duration::from_micros(800));
//! hist.record(Duration::from_micros(1200));
//!
//! assert_eq!(hist.len(), 2);
//! assert!(hist.percentile(50.0).is_some());
//! ```

use hdrhistogram::Histogram;
use std::time::Duration;

/// Largest trackable run duration: one hour in nanoseconds
const MAX_TRACKABLE_NANOS: u64 = 3_600_000_000_000;

/// Histogram of run durations
///
/// Tracks values from 1ns to 1 hour with 3 significant digits, so reported
/// values are within 0.1% of the recorded ones.
#[derive(Debug, Clone)]
pub struct RunHistogram {
    histogram: Histogram<u64>,
}

impl RunHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        // Bounds are constant and valid (low >= 1, high >= 2 * low, sigfig <= 5)
        let histogram = Histogram::new_with_bounds(1, MAX_TRACKABLE_NANOS, 3)
            .expect("constant histogram bounds are valid");

        Self { histogram }
    }

    /// Record one run duration, clamped to the trackable range
    #[inline]
    pub fn record(&mut self, elapsed: Duration) {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        let value = nanos.clamp(1, MAX_TRACKABLE_NANOS);
        let _ = self.histogram.record(value);
    }

    /// Value at `percentile` (0.0 - 100.0), or None when empty
    pub fn percentile(&self, percentile: f64) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.value_at_percentile(percentile)))
    }

    pub fn min(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.min()))
    }

    pub fn max(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.max()))
    }

    pub fn mean(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.mean() as u64))
    }

    /// Number of recorded runs
    pub fn len(&self) -> u64 {
        self.histogram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.len() == 0
    }
}

impl Default for RunHistogram {
    fn default() -> Self {
        Self::new()
    }
}
