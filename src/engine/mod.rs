//! Blink-count recurrence engine.
//!
//! `count(value, depth)` is the number of stones a single stone of `value`
//! turns into after `depth` blinks:
//!
//! ```text
//! count(v, 0) = 1
//! count(v, d) = sum of count(s, d - 1) for each s in transform(v)
//! ```
//!
//! Without memoization the recursion tree is exponential in depth. The engine
//! owns a [`BlinkMemo`] for one precomputation run and fills the output table
//! depth by depth, so every lookup at depth `d - 1` needed by depth `d` is
//! already resolved.

pub mod memo;

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::LutError;
use crate::stone::{transform, Successors};
use crate::table::{BlinkTable, TableShape};

pub use memo::BlinkMemo;

/// Emitted after every value of one depth level has been written.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelEvent {
    /// The depth level just completed.
    pub depth: usize,
    /// Total memo entries across all levels at this point.
    pub memo_entries: usize,
    /// Time since the build started.
    pub elapsed: Duration,
}

/// Owns the memo for a single table build.
pub struct RecurrenceEngine {
    shape: TableShape,
    memo: BlinkMemo,
}

impl RecurrenceEngine {
    /// Create an engine whose memo covers depths `0..shape.depths`.
    pub fn new(shape: TableShape) -> Self {
        Self {
            shape,
            memo: BlinkMemo::new(shape.depths),
        }
    }

    pub fn shape(&self) -> TableShape {
        self.shape
    }

    /// The memo as filled so far.
    pub fn memo(&self) -> &BlinkMemo {
        &self.memo
    }

    /// Number of stones produced by one stone of `value` after `depth` blinks.
    ///
    /// Every resolved `(value, depth)` pair is cached, including values past
    /// the table window. Recursion depth is bounded by `depth`.
    ///
    /// Errors with [`LutError::DepthOutOfRange`] if `depth >= shape.depths`,
    /// and with [`LutError::Overflow`] if the count leaves the i64 range.
    pub fn count(&mut self, value: u64, depth: usize) -> Result<i64, LutError> {
        if depth >= self.shape.depths {
            return Err(LutError::DepthOutOfRange {
                depth,
                max: self.shape.depths.saturating_sub(1),
            });
        }
        if depth == 0 {
            return Ok(1);
        }
        if let Some(cached) = self.memo.get(value, depth)? {
            return Ok(cached);
        }

        let result = match transform(value, depth)? {
            Successors::One(next) => self.count(next, depth - 1)?,
            Successors::Two(left, right) => {
                let a = self.count(left, depth - 1)?;
                let b = self.count(right, depth - 1)?;
                a.checked_add(b).ok_or(LutError::Overflow { value, depth })?
            }
        };

        self.memo.insert(value, depth, result)?;
        Ok(result)
    }

    /// Fill the whole table, logging each completed level.
    ///
    /// Consumes the engine; the memo is dropped once the table is returned.
    pub fn build_table(self) -> Result<BlinkTable, LutError> {
        self.build_table_with(|event| {
            info!(
                depth = event.depth,
                memo_entries = event.memo_entries,
                "finished level"
            );
        })
    }

    /// Fill the whole table, reporting each completed level to `on_level`.
    ///
    /// Depth is the outer loop and value the inner one, so row `d` is
    /// complete before row `d + 1` starts.
    pub fn build_table_with<F>(mut self, mut on_level: F) -> Result<BlinkTable, LutError>
    where
        F: FnMut(&LevelEvent),
    {
        let start = Instant::now();
        let shape = self.shape;
        let mut data = Vec::with_capacity(shape.len());

        for depth in 0..shape.depths {
            for value in 0..shape.values as u64 {
                data.push(self.count(value, depth)?);
            }
            on_level(&LevelEvent {
                depth,
                memo_entries: self.memo.len(),
                elapsed: start.elapsed(),
            });
        }

        debug!(
            memo_entries = self.memo.len(),
            hits = self.memo.hits(),
            misses = self.memo.misses(),
            "blink table complete"
        );

        BlinkTable::from_entries(shape, data)
    }
}

/// Build the default 1000 x 76 table.
pub fn build_default_table() -> Result<BlinkTable, LutError> {
    RecurrenceEngine::new(TableShape::DEFAULT).build_table()
}
