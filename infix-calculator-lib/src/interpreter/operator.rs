use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::Token;
use anyhow::{bail, Result};
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Dash,
            BinaryOperator::Multiply => Token::Asterisk,
            BinaryOperator::Divide => Token::ForwardSlash,
        }
    }

    /// Higher binds tighter. Zero is reserved for tokens that are not operators.
    ///
    /// Every operator is left-associative, so of two adjacent operators with equal
    /// precedence the left one is applied first.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Applies the operator to `a` (left) and `b` (right).
    ///
    /// Fails with [`ExpressionError::DivisionByZero`] instead of producing an
    /// infinity or NaN when dividing by zero.
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide => {
                if b == 0.0 {
                    bail!(ExpressionError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
