//! Tests for the two-operand operation dispatcher
//!
//! The dispatcher executes the six fixed operations (and the unary square
//! root) without going through the expression parser. Tests cover the full
//! operation table, the shared magnitude guard, and the domain failures.

use calculator_core::{BinaryOp, CalcConfig, CalcError, CalculatorService};

fn service() -> CalculatorService {
    CalculatorService::new(CalcConfig::default())
}

#[test]
fn test_add() {
    let service = service();
    assert_eq!(
        service.evaluate_two_operand(BinaryOp::Add, 2.0, 3.0).unwrap(),
        5.0
    );
}

#[test]
fn test_subtract() {
    let service = service();
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Subtract, 2.0, 3.0)
            .unwrap(),
        -1.0
    );
}

#[test]
fn test_multiply() {
    let service = service();
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Multiply, 4.0, 2.5)
            .unwrap(),
        10.0
    );
}

/// Division returns the IEEE double quotient, no rounding
#[test]
fn test_divide() {
    let service = service();
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Divide, 100.0, 7.0)
            .unwrap(),
        100.0 / 7.0
    );
}

#[test]
fn test_divide_by_zero() {
    let service = service();
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Divide, 5.0, 0.0)
            .unwrap_err(),
        CalcError::DivisionByZero
    );
}

#[test]
fn test_power() {
    let service = service();
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Power, 2.0, 10.0)
            .unwrap(),
        1024.0
    );
    let root = service
        .evaluate_two_operand(BinaryOp::Power, 9.0, 0.5)
        .unwrap();
    assert!((root - 3.0).abs() < 1e-12);
}

/// Power overflowing the ceiling, or overflowing to infinity, both trip the
/// magnitude guard
#[test]
fn test_power_overflow() {
    let service = service();
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Power, 10.0, 16.0)
            .unwrap_err(),
        CalcError::ResultOverflow
    );
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Power, 10.0, 400.0)
            .unwrap_err(),
        CalcError::ResultOverflow
    );
}

/// A NaN result (negative base, fractional exponent) leaves the representable
/// contract and is rejected the same way
#[test]
fn test_power_nan_is_overflow() {
    let service = service();
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Power, -8.0, 0.5)
            .unwrap_err(),
        CalcError::ResultOverflow
    );
}

/// The remainder keeps the dividend's sign
#[test]
fn test_modulo_sign_follows_dividend() {
    let service = service();
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Modulo, 7.0, 3.0)
            .unwrap(),
        1.0
    );
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Modulo, -7.0, 3.0)
            .unwrap(),
        -1.0
    );
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Modulo, 7.0, -3.0)
            .unwrap(),
        1.0
    );
}

#[test]
fn test_modulo_by_zero() {
    let service = service();
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Modulo, 7.0, 0.0)
            .unwrap_err(),
        CalcError::DivisionByZero
    );
}

#[test]
fn test_sqrt() {
    let service = service();
    assert_eq!(service.evaluate_sqrt(144.0).unwrap(), 12.0);
    assert_eq!(service.evaluate_sqrt(0.0).unwrap(), 0.0);
    assert_eq!(service.evaluate_sqrt(2.0).unwrap(), 2.0_f64.sqrt());
}

#[test]
fn test_sqrt_negative() {
    let service = service();
    assert_eq!(
        service.evaluate_sqrt(-1.0).unwrap_err(),
        CalcError::NegativeInput
    );
}

/// The ceiling is inclusive: a result exactly at the ceiling passes, one
/// just beyond it fails
#[test]
fn test_magnitude_guard_boundary() {
    let config = CalcConfig {
        overflow_ceiling: 100.0,
        ..CalcConfig::default()
    };
    let service = CalculatorService::new(config);

    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Multiply, 10.0, 10.0)
            .unwrap(),
        100.0
    );
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Multiply, 10.0, 10.1)
            .unwrap_err(),
        CalcError::ResultOverflow
    );
    // Negative results are guarded by magnitude
    assert_eq!(
        service
            .evaluate_two_operand(BinaryOp::Multiply, -20.0, 6.0)
            .unwrap_err(),
        CalcError::ResultOverflow
    );
}

/// Divide then multiply by the same divisor returns the original value
/// within floating-point tolerance
#[test]
fn test_divide_multiply_roundtrip() {
    let service = service();
    for &(a, b) in &[(100.0, 7.0), (-3.5, 0.25), (1e9, 3.0), (0.0, 5.0)] {
        let quotient = service.evaluate_two_operand(BinaryOp::Divide, a, b).unwrap();
        let back = service
            .evaluate_two_operand(BinaryOp::Multiply, quotient, b)
            .unwrap();
        assert!(
            (back - a).abs() <= 1e-9 * a.abs().max(1.0),
            "{} / {} * {} = {}",
            a,
            b,
            b,
            back
        );
    }
}
