//! Usage statistics derived from the history store.

use std::time::Duration;

use serde::Serialize;

use crate::history::CalculationRecord;
use crate::ops::Operation;

/// Point-in-time aggregate over the records currently in the store.
///
/// Derived data only: a snapshot is recomputed from the log on every query,
/// so it can never drift from the records it summarizes. With no intervening
/// mutation, repeated queries return identical snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Operation with the highest occurrence count among the records
    /// currently retained; ties go to the operation that entered the store
    /// first. `None` when the store is empty.
    pub most_used_operation: Option<Operation>,
    /// Mean of record durations, zero when the store is empty
    pub average_duration: Duration,
}

impl StatsSnapshot {
    /// The all-zero snapshot of an empty store
    pub fn empty() -> Self {
        StatsSnapshot {
            total: 0,
            succeeded: 0,
            failed: 0,
            most_used_operation: None,
            average_duration: Duration::ZERO,
        }
    }
}

/// Scan records in insertion order and aggregate counts, per-operation usage,
/// and timing. Called under the store lock so the scan sees one consistent
/// sequence.
pub fn aggregate<'a>(records: impl Iterator<Item = &'a CalculationRecord>) -> StatsSnapshot {
    let mut total = 0usize;
    let mut succeeded = 0usize;
    let mut total_duration = Duration::ZERO;
    let mut counts = [0usize; Operation::ALL.len()];
    let mut first_seen = [usize::MAX; Operation::ALL.len()];

    for record in records {
        let idx = record.operation.index();
        if counts[idx] == 0 {
            first_seen[idx] = total;
        }
        counts[idx] += 1;
        if record.succeeded() {
            succeeded += 1;
        }
        total_duration += record.duration;
        total += 1;
    }

    if total == 0 {
        return StatsSnapshot::empty();
    }

    let mut best: Option<usize> = None;
    for (idx, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        best = Some(match best {
            None => idx,
            Some(current) => {
                let wins = count > counts[current]
                    || (count == counts[current] && first_seen[idx] < first_seen[current]);
                if wins {
                    idx
                } else {
                    current
                }
            }
        });
    }

    StatsSnapshot {
        total,
        succeeded,
        failed: total - succeeded,
        most_used_operation: best.map(|idx| Operation::ALL[idx]),
        average_duration: total_duration / total as u32,
    }
}
