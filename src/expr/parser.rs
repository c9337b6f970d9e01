//! Recursive-descent parser for the expression grammar.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := '-' unary | primary
//! primary := Number | '(' expr ')'
//! ```
//!
//! Binary operators are left-associative; unary minus is right-associative
//! and binds tighter than `*` and `/`. The grammar has no `^` or `%`; those
//! operations exist only through the two-operand dispatcher.

use super::tokenizer::{Token, TokenKind};
use crate::error::{CalcError, CalcResult};

/// Parsed expression tree.
///
/// Only the constructs the grammar accepts are representable; there is no
/// power or modulo node to build.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Negate(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Subtract(Box<Expr>, Box<Expr>),
    Multiply(Box<Expr>, Box<Expr>),
    Divide(Box<Expr>, Box<Expr>),
}

/// Parse a token sequence into an expression tree.
///
/// # Errors
/// - `EmptyExpression` when there are no tokens (empty or whitespace-only
///   input)
/// - `UnbalancedParentheses` on unclosed groups (`(1+2`) or a stray closing
///   parenthesis (`1+2)`)
/// - `UnexpectedToken` on malformed sequences, e.g. two consecutive
///   operators or a missing operand
pub fn parse(tokens: &[Token]) -> CalcResult<Expr> {
    if tokens.is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let tree = parser.expr()?;

    // The whole token stream must be consumed; anything left over is either
    // a stray closing parenthesis or a malformed sequence like "1 2".
    if let Some(token) = parser.peek() {
        return Err(match token.kind {
            TokenKind::RParen => CalcError::UnbalancedParentheses,
            _ => unexpected(token),
        });
    }

    Ok(tree)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Position reported when the input ends mid-production
    fn end_offset(&self) -> usize {
        self.tokens.last().map(|token| token.offset + 1).unwrap_or(0)
    }

    fn current_offset(&self) -> usize {
        self.peek().map(|token| token.offset).unwrap_or(0)
    }

    fn expr(&mut self) -> CalcResult<Expr> {
        let mut lhs = self.term()?;
        loop {
            match self.peek_kind() {
                Some(TokenKind::Plus) => {
                    self.bump();
                    let rhs = self.term()?;
                    lhs = Expr::Add(Box::new(lhs), Box::new(rhs));
                }
                Some(TokenKind::Minus) => {
                    self.bump();
                    let rhs = self.term()?;
                    lhs = Expr::Subtract(Box::new(lhs), Box::new(rhs));
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    fn term(&mut self) -> CalcResult<Expr> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek_kind() {
                Some(TokenKind::Star) => {
                    self.bump();
                    let rhs = self.unary()?;
                    lhs = Expr::Multiply(Box::new(lhs), Box::new(rhs));
                }
                Some(TokenKind::Slash) => {
                    self.bump();
                    let rhs = self.unary()?;
                    lhs = Expr::Divide(Box::new(lhs), Box::new(rhs));
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> CalcResult<Expr> {
        if matches!(self.peek_kind(), Some(TokenKind::Minus)) {
            self.bump();
            let inner = self.unary()?;
            return Ok(Expr::Negate(Box::new(inner)));
        }
        self.primary()
    }

    fn primary(&mut self) -> CalcResult<Expr> {
        let Some(token) = self.peek() else {
            // Ran out of tokens where an operand was required, e.g. "1 +"
            return Err(CalcError::UnexpectedToken {
                token: "end of expression".to_string(),
                position: self.end_offset(),
            });
        };

        match token.kind {
            TokenKind::Number(value) => {
                self.bump();
                Ok(Expr::Number(value))
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.expr()?;
                match self.peek_kind() {
                    Some(TokenKind::RParen) => {
                        self.bump();
                        Ok(inner)
                    }
                    // Unclosed group
                    None => Err(CalcError::UnbalancedParentheses),
                    Some(kind) => Err(CalcError::UnexpectedToken {
                        token: kind.describe(),
                        position: self.current_offset(),
                    }),
                }
            }
            _ => Err(unexpected(token)),
        }
    }
}

fn unexpected(token: &Token) -> CalcError {
    CalcError::UnexpectedToken {
        token: token.kind.describe(),
        position: token.offset,
    }
}
