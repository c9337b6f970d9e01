//! Error types for the calculation core.
//!
//! Every failure a calculation can produce is one of the closed set of
//! variants below. Errors are ordinary values returned to the caller; nothing
//! in the core panics or retries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the calculation core
pub type CalcResult<T> = Result<T, CalcError>;

/// A calculation failure, carrying whatever diagnostic payload the failing
/// stage had at hand (offending character, byte position, token text).
///
/// All variants are local, recoverable-by-caller conditions. The boundary
/// layer translates them into user-visible messages and still records the
/// attempt in the history store via [`CalcError::kind`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A character outside the expression alphabet (digits, `+ - * /`,
    /// parentheses, decimal point, whitespace)
    #[error("invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// A malformed numeric literal, e.g. `1.2.3` or a bare `.`
    #[error("invalid numeric literal '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },

    /// Mismatched or unclosed parenthesis groups
    #[error("unbalanced parentheses in expression")]
    UnbalancedParentheses,

    /// A token sequence the grammar does not accept, e.g. two consecutive
    /// operators
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    /// Empty or whitespace-only input
    #[error("expression is empty")]
    EmptyExpression,

    /// Division or modulo by an exactly-zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative number
    #[error("cannot take the square root of a negative number")]
    NegativeInput,

    /// Result magnitude exceeded the configured ceiling, or the result was
    /// not a finite number
    #[error("result magnitude exceeds the configured ceiling")]
    ResultOverflow,
}

impl CalcError {
    /// Payload-free projection of this error, as stored in history records.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            CalcError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            CalcError::UnbalancedParentheses => ErrorKind::UnbalancedParentheses,
            CalcError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            CalcError::EmptyExpression => ErrorKind::EmptyExpression,
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
            CalcError::NegativeInput => ErrorKind::NegativeInput,
            CalcError::ResultOverflow => ErrorKind::ResultOverflow,
        }
    }
}

/// The closed error taxonomy as recorded in calculation history.
///
/// `ErrorKind` strips the diagnostic payload so records stay small and
/// serialize to a stable tag the boundary layer can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidCharacter,
    InvalidNumber,
    UnbalancedParentheses,
    UnexpectedToken,
    EmptyExpression,
    DivisionByZero,
    NegativeInput,
    ResultOverflow,
}

impl ErrorKind {
    /// Stable lowercase name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidCharacter => "invalid_character",
            ErrorKind::InvalidNumber => "invalid_number",
            ErrorKind::UnbalancedParentheses => "unbalanced_parentheses",
            ErrorKind::UnexpectedToken => "unexpected_token",
            ErrorKind::EmptyExpression => "empty_expression",
            ErrorKind::DivisionByZero => "division_by_zero",
            ErrorKind::NegativeInput => "negative_input",
            ErrorKind::ResultOverflow => "result_overflow",
        }
    }
}
