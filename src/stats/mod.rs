//! Frequency tables and run statistics
//!
//! [`FrequencyMap`] is the unit of exchange between workers and the
//! aggregator: every worker produces one for its partition, and the
//! aggregator folds them into the final table.
//!
//! # Example
//!
//! ```
//! use wordpulse::stats::FrequencyMap;
//!
//! let mut left = FrequencyMap::from_tokens(["the", "cat"]);
//! let right = FrequencyMap::from_tokens(["the", "dog"]);
//! left.merge(&right);
//!
//! assert_eq!(left.get("the"), 2);
//! assert_eq!(left.get("cat"), 1);
//! assert_eq!(left.get("bird"), 0);
//! assert_eq!(left.total(), 4);
//! ```

pub mod aggregator;
pub mod histogram;

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Mapping from token to occurrence count
///
/// Counts are always positive: a token that never occurred has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map by counting every token once
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for token in tokens {
            map.add(token.as_ref(), 1);
        }
        map
    }

    /// Record one occurrence of `token`
    #[inline]
    pub fn increment(&mut self, token: &str) {
        self.add(token, 1);
    }

    /// Add `count` occurrences of `token`
    ///
    /// A zero count is ignored so no zero entry is ever stored.
    pub fn add(&mut self, token: &str, count: u64) {
        if count == 0 {
            return;
        }
        // Look up by &str first so repeated tokens don't allocate
        if let Some(existing) = self.counts.get_mut(token) {
            *existing += count;
        } else {
            self.counts.insert(token.to_owned(), count);
        }
    }

    /// Merge another map into this one by summing counts
    pub fn merge(&mut self, other: &FrequencyMap) {
        for (token, &count) in &other.counts {
            self.add(token, count);
        }
    }

    /// Merge an owned map, reusing its keys
    pub fn merge_owned(&mut self, other: FrequencyMap) {
        // Fold the smaller map into the larger one
        let (mut base, extra) = if self.counts.len() >= other.counts.len() {
            (std::mem::take(&mut self.counts), other.counts)
        } else {
            (other.counts, std::mem::take(&mut self.counts))
        };
        for (token, count) in extra {
            *base.entry(token).or_insert(0) += count;
        }
        self.counts = base;
    }

    /// Count for `token` (0 when absent)
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Entries ordered by token, for stable printing
    pub fn sorted(&self) -> BTreeMap<&str, u64> {
        self.iter().collect()
    }

    /// The `k` most frequent tokens
    ///
    /// Ordered by count descending; ties are broken alphabetically so the
    /// ranking is deterministic.
    pub fn top(&self, k: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(k);
        entries
    }

    pub fn into_inner(self) -> HashMap<String, u64> {
        self.counts
    }
}

impl From<HashMap<String, u64>> for FrequencyMap {
    fn from(mut counts: HashMap<String, u64>) -> Self {
        counts.retain(|_, count| *count > 0);
        Self { counts }
    }
}

impl<'a> FromIterator<(&'a str, u64)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (token, count) in iter {
            map.add(token, count);
        }
        map
    }
}

/// Debug-style rendering with sorted keys: `{"cat": 2, "the": 2}`
impl fmt::Display for FrequencyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.sorted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens_counts() {
        let map = FrequencyMap::from_tokens(["a", "b", "a", "a"]);
        assert_eq!(map.get("a"), 3);
        assert_eq!(map.get("b"), 1);
        assert_eq!(map.distinct(), 2);
        assert_eq!(map.total(), 4);
    }

    #[test]
    fn test_add_zero_is_ignored() {
        let mut map = FrequencyMap::new();
        map.add("ghost", 0);
        assert!(map.is_empty());
    }

    #[test]
    fn test_from_hashmap_drops_zero_counts() {
        let mut raw = HashMap::new();
        raw.insert("kept".to_string(), 2);
        raw.insert("dropped".to_string(), 0);
        let map = FrequencyMap::from(raw);
        assert_eq!(map.distinct(), 1);
        assert_eq!(map.get("kept"), 2);
    }

    #[test]
    fn test_merge_sums_counts() {
        let mut left = FrequencyMap::from_tokens(["x", "y"]);
        let right = FrequencyMap::from_tokens(["y", "z", "z"]);
        left.merge(&right);

        assert_eq!(left.get("x"), 1);
        assert_eq!(left.get("y"), 2);
        assert_eq!(left.get("z"), 2);
    }

    #[test]
    fn test_merge_owned_matches_merge() {
        let a = FrequencyMap::from_tokens(["p", "q", "q"]);
        let b = FrequencyMap::from_tokens(["q", "r", "s", "s", "s"]);

        let mut by_ref = a.clone();
        by_ref.merge(&b);

        let mut owned = a.clone();
        owned.merge_owned(b.clone());

        let mut owned_rev = b;
        owned_rev.merge_owned(a);

        assert_eq!(by_ref, owned);
        assert_eq!(by_ref, owned_rev);
    }

    #[test]
    fn test_top_breaks_ties_alphabetically() {
        let map = FrequencyMap::from_tokens(["b", "a", "c", "c", "b", "a", "d"]);
        let top = map.top(3);
        assert_eq!(top, vec![("a", 2), ("b", 2), ("c", 2)]);

        assert_eq!(map.top(10).len(), 4);
        assert!(map.top(0).is_empty());
    }

    #[test]
    fn test_display_is_sorted() {
        let map = FrequencyMap::from_tokens(["the", "cat", "the"]);
        assert_eq!(map.to_string(), r#"{"cat": 1, "the": 2}"#);
        assert_eq!(FrequencyMap::new().to_string(), "{}");
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let map = FrequencyMap::from_tokens(["one"]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"one":1}"#);
    }
}
