//! Fixed two-operand operations and the operation enumeration recorded in
//! history.
//!
//! The dispatcher executes exactly six named operations without going through
//! the expression parser. `^` and `%` live here and only here: the free-form
//! expression grammar deliberately does not know them.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// The six fixed two-operand operations executed without expression parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
}

impl BinaryOp {
    /// Stable lowercase name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "subtract",
            BinaryOp::Multiply => "multiply",
            BinaryOp::Divide => "divide",
            BinaryOp::Power => "power",
            BinaryOp::Modulo => "modulo",
        }
    }

    /// Infix symbol used in log lines and diagnostics
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Power => "^",
            BinaryOp::Modulo => "%",
        }
    }

    /// Apply the operation to its operands and pass the result through the
    /// magnitude guard.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing or taking the remainder by an
    ///   exactly-zero divisor
    /// - `ResultOverflow` when the result magnitude exceeds `overflow_ceiling`
    ///   or is not a finite number (`power` can overflow to infinity or
    ///   produce NaN for some operand combinations)
    pub fn apply(self, a: f64, b: f64, overflow_ceiling: f64) -> CalcResult<f64> {
        let raw = match self {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
            BinaryOp::Power => a.powf(b),
            // Truncated remainder: the sign follows the dividend
            BinaryOp::Modulo => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a % b
            }
        };
        check_magnitude(raw, overflow_ceiling)
    }
}

/// Principal non-negative square root.
///
/// # Errors
/// - `NegativeInput` for n < 0
/// - `ResultOverflow` when the magnitude guard trips
pub fn sqrt(n: f64, overflow_ceiling: f64) -> CalcResult<f64> {
    if n < 0.0 {
        return Err(CalcError::NegativeInput);
    }
    check_magnitude(n.sqrt(), overflow_ceiling)
}

/// Shared magnitude guard applied to every successful result, from both the
/// dispatcher and the expression evaluator.
///
/// Non-finite values are rejected as well: overflow to infinity and NaN both
/// leave the representable contract.
pub fn check_magnitude(value: f64, ceiling: f64) -> CalcResult<f64> {
    if !value.is_finite() || value.abs() > ceiling {
        return Err(CalcError::ResultOverflow);
    }
    Ok(value)
}

/// Every kind of calculation the service records: the six two-operand
/// operations plus the unary square root and free-form expression variants
/// that are not part of [`BinaryOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    Sqrt,
    Expression,
}

impl Operation {
    /// All operations in declaration order (stats scans index into this)
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Modulo,
        Operation::Sqrt,
        Operation::Expression,
    ];

    /// Stable lowercase name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Modulo => "modulo",
            Operation::Sqrt => "sqrt",
            Operation::Expression => "expression",
        }
    }

    /// Position in [`Operation::ALL`]
    pub(crate) fn index(self) -> usize {
        match self {
            Operation::Add => 0,
            Operation::Subtract => 1,
            Operation::Multiply => 2,
            Operation::Divide => 3,
            Operation::Power => 4,
            Operation::Modulo => 5,
            Operation::Sqrt => 6,
            Operation::Expression => 7,
        }
    }
}

impl From<BinaryOp> for Operation {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => Operation::Add,
            BinaryOp::Subtract => Operation::Subtract,
            BinaryOp::Multiply => Operation::Multiply,
            BinaryOp::Divide => Operation::Divide,
            BinaryOp::Power => Operation::Power,
            BinaryOp::Modulo => Operation::Modulo,
        }
    }
}
