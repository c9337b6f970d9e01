//! Append-ordered, capacity-bounded calculation history.
//!
//! The store is the only shared mutable state in the service. A single mutex
//! serializes appends, reads, clears, and stats scans, so concurrent callers
//! always observe a consistent sequence: no half-written records, no torn
//! mixes of pre- and post-clear contents, and eviction under capacity
//! pressure drops exactly the minimum number of oldest records.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

use crate::error::ErrorKind;
use crate::ops::Operation;
use crate::stats::{self, StatsSnapshot};

/// Operands exactly as the caller supplied them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Inputs {
    /// Ordered operand pair of a two-operand operation
    Pair([f64; 2]),
    /// Single operand of the square root
    Single([f64; 1]),
    /// Raw text of a free-form expression
    Text(String),
}

impl Inputs {
    pub fn pair(a: f64, b: f64) -> Self {
        Inputs::Pair([a, b])
    }

    pub fn single(n: f64) -> Self {
        Inputs::Single([n])
    }

    pub fn text(expression: impl Into<String>) -> Self {
        Inputs::Text(expression.into())
    }
}

/// How a calculation attempt ended. Exactly one of the result value or the
/// error kind exists; the type makes any other combination unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalculationOutcome {
    Succeeded { result: f64 },
    Failed { error: ErrorKind },
}

/// One immutable history entry describing a single calculation attempt,
/// successful or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationRecord {
    pub operation: Operation,
    pub inputs: Inputs,
    #[serde(flatten)]
    pub outcome: CalculationOutcome,
    /// Completion time from the injected clock; non-decreasing across the
    /// store's sequence
    pub timestamp: DateTime<Utc>,
    /// Elapsed evaluation time
    pub duration: Duration,
}

impl CalculationRecord {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, CalculationOutcome::Succeeded { .. })
    }

    /// Computed value, present only on success
    pub fn result(&self) -> Option<f64> {
        match self.outcome {
            CalculationOutcome::Succeeded { result } => Some(result),
            CalculationOutcome::Failed { .. } => None,
        }
    }

    /// Failure tag, present only on failure
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self.outcome {
            CalculationOutcome::Succeeded { .. } => None,
            CalculationOutcome::Failed { error } => Some(error),
        }
    }
}

/// Thread-safe calculation log with FIFO eviction at a fixed capacity.
///
/// Records are never mutated after insertion; readers get clones. The store
/// lives for the process lifetime and is emptied only by [`clear`], which
/// keeps the capacity unchanged.
///
/// [`clear`]: HistoryStore::clear
pub struct HistoryStore {
    records: Mutex<VecDeque<CalculationRecord>>,
    capacity: usize,
}

impl HistoryStore {
    /// Create an empty store that retains at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        HistoryStore {
            records: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Capacity fixed at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Append a record, evicting the oldest entry when the store is full.
    /// Never fails.
    pub fn append(&self, record: CalculationRecord) {
        if self.capacity == 0 {
            return;
        }
        let mut records = self.records.lock();
        while records.len() >= self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// Most recent records, newest first.
    ///
    /// `limit` is clamped to the store's current size; asking for more than
    /// exists simply returns everything.
    pub fn recent(&self, limit: usize) -> Vec<CalculationRecord> {
        let records = self.records.lock();
        records.iter().rev().take(limit).cloned().collect()
    }

    /// Remove every record. Capacity is unchanged.
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Usage statistics computed from the current contents in one atomic
    /// scan under the store lock. Nothing is cached between calls.
    pub fn stats(&self) -> StatsSnapshot {
        let records = self.records.lock();
        stats::aggregate(records.iter())
    }
}
