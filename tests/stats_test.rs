//! Tests for the stats aggregator
//!
//! Statistics are derived fresh from the history store on every query.
//! Tests cover the count invariants, the most-used-operation tie-break,
//! exact average durations under a manual clock, and snapshot idempotence.

mod common;

use std::time::Duration;

use calculator_core::{BinaryOp, CalcConfig, HistoryStore, Operation, StatsSnapshot};

/// succeeded + failed always equals total
#[test]
fn test_count_invariant() {
    let (service, _clock) = common::service_with_manual_clock(CalcConfig::default());

    service.calculate(BinaryOp::Add, 1.0, 2.0).unwrap();
    service.calculate(BinaryOp::Divide, 1.0, 0.0).unwrap_err();
    service.sqrt(16.0).unwrap();
    service.sqrt(-4.0).unwrap_err();
    service.expression("3 * 3").unwrap();

    let stats = service.get_stats();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.succeeded, 3);
    assert_eq!(stats.failed, 2);
    assert_eq!(stats.succeeded + stats.failed, stats.total);
}

/// The most-used operation is the one with the strict maximum count
#[test]
fn test_most_used_operation() {
    let (service, _clock) = common::service_with_manual_clock(CalcConfig::default());

    service.calculate(BinaryOp::Add, 1.0, 1.0).unwrap();
    service.calculate(BinaryOp::Multiply, 2.0, 2.0).unwrap();
    service.calculate(BinaryOp::Multiply, 3.0, 3.0).unwrap();

    assert_eq!(
        service.get_stats().most_used_operation,
        Some(Operation::Multiply)
    );
}

/// Ties go to the operation that entered the store first
#[test]
fn test_most_used_tie_breaks_on_first_inserted() {
    let (service, _clock) = common::service_with_manual_clock(CalcConfig::default());

    service.calculate(BinaryOp::Subtract, 5.0, 1.0).unwrap();
    service.calculate(BinaryOp::Add, 1.0, 1.0).unwrap();
    service.calculate(BinaryOp::Add, 2.0, 2.0).unwrap();
    service.calculate(BinaryOp::Subtract, 9.0, 1.0).unwrap();

    // Two apiece; subtract was inserted first
    assert_eq!(
        service.get_stats().most_used_operation,
        Some(Operation::Subtract)
    );
}

/// Failed attempts count toward operation usage too
#[test]
fn test_failures_count_toward_usage() {
    let (service, _clock) = common::service_with_manual_clock(CalcConfig::default());

    service.calculate(BinaryOp::Divide, 1.0, 0.0).unwrap_err();
    service.calculate(BinaryOp::Divide, 4.0, 2.0).unwrap();
    service.calculate(BinaryOp::Add, 1.0, 1.0).unwrap();

    assert_eq!(
        service.get_stats().most_used_operation,
        Some(Operation::Divide)
    );
}

/// Average duration is the exact mean under a deterministic clock
#[test]
fn test_average_duration_exact() {
    let store = HistoryStore::with_capacity(10);
    store.append(common::success_record(
        Operation::Add,
        0,
        Duration::from_millis(10),
    ));
    store.append(common::success_record(
        Operation::Add,
        1,
        Duration::from_millis(20),
    ));
    store.append(common::success_record(
        Operation::Add,
        2,
        Duration::from_millis(60),
    ));

    assert_eq!(store.stats().average_duration, Duration::from_millis(30));
}

/// An empty store produces the all-zero snapshot
#[test]
fn test_empty_store_snapshot() {
    let store = HistoryStore::with_capacity(10);
    assert_eq!(store.stats(), StatsSnapshot::empty());
    assert_eq!(store.stats().average_duration, Duration::ZERO);
    assert_eq!(store.stats().most_used_operation, None);
}

/// Clearing the history zeroes the next snapshot
#[test]
fn test_clear_then_stats_is_zero() {
    let (service, _clock) = common::service_with_manual_clock(CalcConfig::default());

    service.calculate(BinaryOp::Add, 1.0, 2.0).unwrap();
    service.clear_history();

    assert_eq!(service.get_stats(), StatsSnapshot::empty());
    assert!(service.get_history(10).is_empty());
}

/// With no intervening mutation, repeated queries return identical snapshots
#[test]
fn test_snapshot_idempotence() {
    let (service, _clock) = common::service_with_manual_clock(CalcConfig::default());

    service.calculate(BinaryOp::Power, 2.0, 8.0).unwrap();
    service.expression("1 + 1").unwrap();

    let first = service.get_stats();
    let second = service.get_stats();
    assert_eq!(first, second);
}

/// Statistics reflect only the records currently retained: evicted records
/// stop counting
#[test]
fn test_stats_follow_eviction() {
    let config = CalcConfig {
        history_capacity: 2,
        ..CalcConfig::default()
    };
    let (service, _clock) = common::service_with_manual_clock(config);

    service.calculate(BinaryOp::Add, 1.0, 1.0).unwrap();
    service.calculate(BinaryOp::Multiply, 2.0, 2.0).unwrap();
    service.calculate(BinaryOp::Multiply, 3.0, 3.0).unwrap();

    let stats = service.get_stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.most_used_operation, Some(Operation::Multiply));
}
