//! Execution results.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Measurement counts from circuit execution.
///
/// Keys are bitstrings with the highest classical bit leftmost; see the
/// crate docs for the convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create empty counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a bitstring.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Get the total number of shots.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The outcome, if exactly one distinct bitstring was observed.
    pub fn single_outcome(&self) -> Option<&str> {
        if self.counts.len() == 1 {
            self.counts.keys().next().map(String::as_str)
        } else {
            None
        }
    }

    /// Get counts sorted by frequency (descending), then bitstring.
    pub fn sorted(&self) -> Vec<(&String, &u64)> {
        let mut sorted: Vec<_> = self.counts.iter().collect();
        sorted.sort_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)));
        sorted
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(bitstring, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.counts.iter()
    }

    /// Convert a bitstring key back to register order.
    ///
    /// Element `k` of the returned vector is classical bit `k`. Returns
    /// `None` if the key contains anything other than `'0'` and `'1'`.
    pub fn bits_in_register_order(bitstring: &str) -> Option<Vec<bool>> {
        bitstring
            .chars()
            .rev()
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect()
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        let mut counts = Counts::new();
        for (k, v) in iter {
            counts.insert(k, v);
        }
        counts
    }
}

/// Result of a circuit execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Execution time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Set the execution time.
    #[must_use]
    pub fn with_execution_time(mut self, ms: u64) -> Self {
        self.execution_time_ms = Some(ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut counts = Counts::new();
        counts.insert("01", 3);
        counts.insert("01", 2);
        counts.insert("10", 1);

        assert_eq!(counts.get("01"), 5);
        assert_eq!(counts.get("11"), 0);
        assert_eq!(counts.total_shots(), 6);
        assert_eq!(counts.len(), 2);
        assert!(!counts.is_empty());
    }

    #[test]
    fn test_sorted() {
        let counts: Counts = [
            ("10".to_string(), 1),
            ("00".to_string(), 7),
            ("01".to_string(), 1),
        ]
        .into_iter()
        .collect();
        let keys: Vec<_> = counts.sorted().into_iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["00", "01", "10"]);
    }

    #[test]
    fn test_single_outcome() {
        let mut counts = Counts::new();
        assert_eq!(counts.single_outcome(), None);
        counts.insert("001", 1);
        assert_eq!(counts.single_outcome(), Some("001"));
        counts.insert("100", 1);
        assert_eq!(counts.single_outcome(), None);
    }

    #[test]
    fn test_bits_in_register_order() {
        assert_eq!(
            Counts::bits_in_register_order("001"),
            Some(vec![true, false, false])
        );
        assert_eq!(Counts::bits_in_register_order("1"), Some(vec![true]));
        assert_eq!(Counts::bits_in_register_order(""), Some(vec![]));
        assert_eq!(Counts::bits_in_register_order("0x1"), None);
    }

    #[test]
    fn test_execution_result() {
        let result = ExecutionResult::new(Counts::new(), 1).with_execution_time(3);
        assert_eq!(result.shots, 1);
        assert_eq!(result.execution_time_ms, Some(3));

        let json = serde_json::to_string(&ExecutionResult::new(Counts::new(), 2)).unwrap();
        assert!(!json.contains("execution_time_ms"));
    }
}
