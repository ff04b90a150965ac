// Per-depth memo cache for the blink recurrence.
//
// Each depth level owns a sparse map from stone value to count. Keys are not
// limited to the output window: multiplications push values far above it and
// those entries are kept so later levels can reuse them.

use std::collections::HashMap;

use crate::error::LutError;

/// Sparse memo of resolved `(value, depth)` counts.
///
/// Pre-allocates one map per depth level in `0..num_depths`. Depth 0 is never
/// stored since its answer is always 1.
pub struct BlinkMemo {
    /// Per-depth maps: `levels[d][value] = count(value, d)`.
    levels: Vec<HashMap<u64, i64>>,
    /// Number of depth levels this memo supports.
    num_depths: usize,
    /// Lookups answered from the memo.
    hits: u64,
    /// Lookups that had to be computed.
    misses: u64,
}

impl BlinkMemo {
    /// Create an empty memo with room for depths `0..num_depths`.
    pub fn new(num_depths: usize) -> Self {
        Self {
            levels: (0..num_depths).map(|_| HashMap::new()).collect(),
            num_depths,
            hits: 0,
            misses: 0,
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), LutError> {
        if depth >= self.num_depths {
            return Err(LutError::DepthOutOfRange {
                depth,
                max: self.num_depths.saturating_sub(1),
            });
        }
        Ok(())
    }

    /// Look up a resolved count, recording a hit or a miss.
    pub fn get(&mut self, value: u64, depth: usize) -> Result<Option<i64>, LutError> {
        self.check_depth(depth)?;
        let found = self.levels[depth].get(&value).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        Ok(found)
    }

    /// Record the count for `(value, depth)`.
    pub fn insert(&mut self, value: u64, depth: usize, count: i64) -> Result<(), LutError> {
        self.check_depth(depth)?;
        self.levels[depth].insert(value, count);
        Ok(())
    }

    /// Number of memoized values at one depth level.
    ///
    /// # Panics
    ///
    /// Panics if `depth >= num_depths`. Use `num_depths()` to check bounds.
    pub fn level_len(&self, depth: usize) -> usize {
        self.levels[depth].len()
    }

    /// Total number of memoized entries across all levels.
    pub fn len(&self) -> usize {
        self.levels.iter().map(HashMap::len).sum()
    }

    /// Whether nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(HashMap::is_empty)
    }

    /// Largest value memoized at a depth level, if any.
    pub fn max_value(&self, depth: usize) -> Option<u64> {
        self.levels.get(depth)?.keys().copied().max()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// The number of depth levels.
    pub fn num_depths(&self) -> usize {
        self.num_depths
    }

    /// Drop all entries and statistics.
    pub fn clear(&mut self) {
        for level in &mut self.levels {
            level.clear();
        }
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_memo() {
        let memo = BlinkMemo::new(76);
        assert_eq!(memo.num_depths(), 76);
        assert_eq!(memo.len(), 0);
        assert!(memo.is_empty());
        assert_eq!(memo.hits(), 0);
        assert_eq!(memo.misses(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let mut memo = BlinkMemo::new(4);
        assert_eq!(memo.get(125, 2).unwrap(), None);
        memo.insert(125, 2, 2).unwrap();
        assert_eq!(memo.get(125, 2).unwrap(), Some(2));
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 1);
        assert_eq!(memo.level_len(2), 1);
    }

    #[test]
    fn test_levels_are_independent() {
        let mut memo = BlinkMemo::new(4);
        memo.insert(7, 1, 1).unwrap();
        memo.insert(7, 3, 4).unwrap();
        assert_eq!(memo.get(7, 1).unwrap(), Some(1));
        assert_eq!(memo.get(7, 2).unwrap(), None);
        assert_eq!(memo.get(7, 3).unwrap(), Some(4));
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn test_values_above_window_are_kept() {
        let mut memo = BlinkMemo::new(3);
        memo.insert(253_000, 1, 2).unwrap();
        memo.insert(5, 1, 1).unwrap();
        assert_eq!(memo.max_value(1), Some(253_000));
        assert_eq!(memo.max_value(2), None);
        assert_eq!(memo.max_value(10), None);
    }

    #[test]
    fn test_depth_out_of_range_returns_error() {
        let mut memo = BlinkMemo::new(2);
        let result = memo.insert(1, 2, 1);
        let err_msg = format!("{}", result.unwrap_err());
        assert!(err_msg.contains("out of range"), "Error: {}", err_msg);
        assert!(memo.get(1, 5).is_err());
    }

    #[test]
    fn test_clear() {
        let mut memo = BlinkMemo::new(3);
        memo.insert(1, 1, 1).unwrap();
        memo.get(1, 1).unwrap();
        memo.clear();
        assert!(memo.is_empty());
        assert_eq!(memo.hits(), 0);
        assert_eq!(memo.num_depths(), 3);
    }
}
