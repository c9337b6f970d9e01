//! Free-form infix expression pipeline: tokenize, parse, evaluate.
//!
//! The expression alphabet is deliberately narrower than the two-operand
//! dispatcher: numbers, `+ - * /`, unary minus, and parentheses. `^` and `%`
//! are reachable only through [`crate::ops::BinaryOp`].

pub mod eval;
pub mod parser;
pub mod tokenizer;


pub use parser::Expr;
pub use tokenizer::{Token, TokenKind};

use crate::error::CalcResult;

/// Tokenize, parse, and evaluate an expression in one call.
///
/// # Examples
/// ```
/// use calculator_core::expr::evaluate_expression;
///
/// let value = evaluate_expression("2 + 3 * 4", 1e15).unwrap();
/// assert_eq!(value, 14.0);
/// ```
pub fn evaluate_expression(text: &str, overflow_ceiling: f64) -> CalcResult<f64> {
    log::debug!("Evaluating expression ({} bytes)", text.len());

    let tokens = tokenizer::tokenize(text)?;
    let tree = parser::parse(&tokens)?;
    eval::evaluate(&tree, overflow_ceiling)
}
