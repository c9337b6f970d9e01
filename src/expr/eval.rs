//! Tree evaluation over IEEE doubles.

use super::parser::Expr;
use crate::error::{CalcError, CalcResult};
use crate::ops;

/// Evaluate a parsed expression tree.
///
/// Arithmetic runs in plain `f64` with no intermediate rounding. Division by
/// an exactly-zero divisor fails immediately; the final result passes through
/// the same magnitude guard the two-operand dispatcher uses.
///
/// # Errors
/// - `DivisionByZero` when any division in the tree has a zero divisor
/// - `ResultOverflow` when the final result exceeds `overflow_ceiling` in
///   magnitude or is not finite
pub fn evaluate(tree: &Expr, overflow_ceiling: f64) -> CalcResult<f64> {
    let value = eval_node(tree)?;
    ops::check_magnitude(value, overflow_ceiling)
}

fn eval_node(node: &Expr) -> CalcResult<f64> {
    match node {
        Expr::Number(value) => Ok(*value),
        Expr::Negate(inner) => Ok(-eval_node(inner)?),
        Expr::Add(lhs, rhs) => Ok(eval_node(lhs)? + eval_node(rhs)?),
        Expr::Subtract(lhs, rhs) => Ok(eval_node(lhs)? - eval_node(rhs)?),
        Expr::Multiply(lhs, rhs) => Ok(eval_node(lhs)? * eval_node(rhs)?),
        Expr::Divide(lhs, rhs) => {
            let divisor = eval_node(rhs)?;
            if divisor == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(eval_node(lhs)? / divisor)
        }
    }
}
