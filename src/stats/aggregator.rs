//! Frequency aggregation
//!
//! Collects the partial frequency maps reported by workers and merges them
//! into one table. Merging is plain per-token addition, so the result does not
//! depend on the order in which workers report.
//!
//! # Example
//!
//! ```
//! use wordpulse::stats::{FrequencyMap, aggregator::FrequencyAggregator};
//!
//! let mut aggregator = FrequencyAggregator::new();
//! aggregator.add_worker(1, FrequencyMap::from_tokens(["ran", "the"]))?;
//! aggregator.add_worker(0, FrequencyMap::from_tokens(["the", "cat"]))?;
//!
//! let merged = aggregator.aggregate();
//! assert_eq!(merged.get("the"), 2);
//! assert_eq!(merged.distinct(), 3);
//! # Ok::<(), wordpulse::WordCountError>(())
//! ```

use crate::error::{Result, WordCountError};
use crate::stats::FrequencyMap;
use std::collections::HashMap;

/// Aggregator for per-worker frequency maps
///
/// Keeps each worker's map keyed by worker id so that a worker reporting
/// twice is caught instead of being double-counted.
#[derive(Debug, Default)]
pub struct FrequencyAggregator {
    /// Per-worker partial maps (worker_id → map)
    workers: HashMap<usize, FrequencyMap>,
}

impl FrequencyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregator preallocated for `workers` results
    pub fn with_capacity(workers: usize) -> Self {
        Self {
            workers: HashMap::with_capacity(workers),
        }
    }

    /// Add the partial map from a worker
    ///
    /// # Errors
    ///
    /// `WordCountError::DuplicateResult` if `worker_id` already reported.
    pub fn add_worker(&mut self, worker_id: usize, frequencies: FrequencyMap) -> Result<()> {
        if self.workers.contains_key(&worker_id) {
            return Err(WordCountError::DuplicateResult { worker_id });
        }
        self.workers.insert(worker_id, frequencies);
        Ok(())
    }

    /// Number of workers that have reported
    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// Partial map for one worker, if it reported
    pub fn worker_frequencies(&self, worker_id: usize) -> Option<&FrequencyMap> {
        self.workers.get(&worker_id)
    }

    /// Reported worker ids in ascending order
    pub fn worker_ids(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.workers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Merge every reported map into one
    ///
    /// With no reports the result is an empty map.
    pub fn aggregate(self) -> FrequencyMap {
        let partials = self.workers.len();
        let merged = merge_all(self.workers.into_values());
        log::debug!(
            "Merged {} partial maps into {} distinct words ({} total)",
            partials,
            merged.distinct(),
            merged.total()
        );
        merged
    }
}

/// Merge any number of frequency maps by summing counts per token
pub fn merge_all<I>(maps: I) -> FrequencyMap
where
    I: IntoIterator<Item = FrequencyMap>,
{
    maps.into_iter().fold(FrequencyMap::new(), |mut acc, map| {
        acc.merge_owned(map);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partials() -> Vec<FrequencyMap> {
        vec![
            FrequencyMap::from_tokens(["the", "cat", "sat"]),
            FrequencyMap::from_tokens(["the", "cat"]),
            FrequencyMap::from_tokens(["ran", "fast"]),
            FrequencyMap::new(),
        ]
    }

    #[test]
    fn test_aggregate_empty() {
        let aggregator = FrequencyAggregator::new();
        assert_eq!(aggregator.num_workers(), 0);
        assert!(aggregator.aggregate().is_empty());
    }

    #[test]
    fn test_aggregate_sums_per_token() {
        let mut aggregator = FrequencyAggregator::with_capacity(4);
        for (id, map) in partials().into_iter().enumerate() {
            aggregator.add_worker(id, map).unwrap();
        }
        assert_eq!(aggregator.num_workers(), 4);

        let merged = aggregator.aggregate();
        assert_eq!(merged.get("the"), 2);
        assert_eq!(merged.get("cat"), 2);
        assert_eq!(merged.get("sat"), 1);
        assert_eq!(merged.get("ran"), 1);
        assert_eq!(merged.get("fast"), 1);
        assert_eq!(merged.distinct(), 5);
    }

    #[test]
    fn test_duplicate_worker_rejected() {
        let mut aggregator = FrequencyAggregator::new();
        aggregator.add_worker(3, FrequencyMap::from_tokens(["a"])).unwrap();
        let err = aggregator
            .add_worker(3, FrequencyMap::from_tokens(["a"]))
            .unwrap_err();
        assert!(matches!(err, WordCountError::DuplicateResult { worker_id: 3 }));
        assert_eq!(aggregator.worker_frequencies(3).unwrap().get("a"), 1);
    }

    #[test]
    fn test_worker_ids_sorted() {
        let mut aggregator = FrequencyAggregator::new();
        aggregator.add_worker(2, FrequencyMap::new()).unwrap();
        aggregator.add_worker(0, FrequencyMap::new()).unwrap();
        aggregator.add_worker(1, FrequencyMap::new()).unwrap();
        assert_eq!(aggregator.worker_ids(), vec![0, 1, 2]);
        assert!(aggregator.worker_frequencies(7).is_none());
    }

    #[test]
    fn test_merge_is_order_independent() {
        let maps = partials();
        let expected = merge_all(maps.clone());

        let mut orders = Vec::new();
        permutations(&mut (0..maps.len()).collect(), 0, &mut orders);
        assert_eq!(orders.len(), 24);

        for order in orders {
            let permuted: Vec<FrequencyMap> = order.iter().map(|&i| maps[i].clone()).collect();
            assert_eq!(merge_all(permuted), expected, "order {:?}", order);
        }
    }

    fn permutations(items: &mut Vec<usize>, start: usize, out: &mut Vec<Vec<usize>>) {
        if start == items.len() {
            out.push(items.clone());
            return;
        }
        for i in start..items.len() {
            items.swap(start, i);
            permutations(items, start + 1, out);
            items.swap(start, i);
        }
    }

    #[test]
    fn test_merge_is_associative() {
        let maps = partials();
        let left = merge_all([merge_all(maps[..2].to_vec()), merge_all(maps[2..].to_vec())]);
        let right = merge_all([maps[0].clone(), merge_all(maps[1..].to_vec())]);
        assert_eq!(left, right);
    }
}
