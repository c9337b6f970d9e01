//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use calculator_core::{
    CalcConfig, CalculationOutcome, CalculationRecord, CalculatorService, ErrorKind, Inputs,
    ManualClock, Operation,
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};

/// Build a service on a deterministic clock, returning both so tests can
/// advance time between operations.
pub fn service_with_manual_clock(config: CalcConfig) -> (CalculatorService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let service = CalculatorService::with_clock(config, clock.clone());
    (service, clock)
}

/// A successful record for direct store manipulation in tests.
pub fn success_record(operation: Operation, seq: i64, duration: Duration) -> CalculationRecord {
    CalculationRecord {
        operation,
        inputs: Inputs::pair(1.0, 2.0),
        outcome: CalculationOutcome::Succeeded { result: 3.0 },
        timestamp: DateTime::<Utc>::UNIX_EPOCH + ChronoDuration::seconds(seq),
        duration,
    }
}

/// A failed record for direct store manipulation in tests.
pub fn failure_record(operation: Operation, seq: i64, error: ErrorKind) -> CalculationRecord {
    CalculationRecord {
        operation,
        inputs: Inputs::pair(1.0, 0.0),
        outcome: CalculationOutcome::Failed { error },
        timestamp: DateTime::<Utc>::UNIX_EPOCH + ChronoDuration::seconds(seq),
        duration: Duration::from_millis(1),
    }
}
