use std::fmt;
use std::fmt::Formatter;

/// Every way in which calculating an expression can fail.
///
/// The interpreter raises these through [`anyhow`], so callers that care about the
/// specific kind can recover it with `error.downcast_ref::<ExpressionError>()`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionError {
    /// A closing parenthesis without an opening one, or an opening parenthesis
    /// that is never closed.
    MismatchedParentheses,
    /// An operator without two operands, or a postfix stream that does not reduce
    /// to exactly one value.
    InvalidPostfixExpression,
    /// Division where the divisor is zero.
    DivisionByZero,
    /// A postfix word that is not one of the supported operators.
    InvalidOperator {
        /// The offending word.
        operator: String,
    },
    /// A character in the infix input that can not start any token.
    UnsupportedCharacter {
        /// The character encountered.
        character: char,
        /// Zero-based character index into the input.
        position: usize,
    },
    /// A run of digits and decimal points that is not a number, e.g. `1.2.3`.
    MalformedNumber {
        /// The run as it appeared in the input.
        lexeme: String,
        /// Zero-based character index of the start of the run.
        position: usize,
    },
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses."),
            Self::InvalidPostfixExpression => write!(f, "Invalid postfix expression."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::InvalidOperator { operator } => write!(f, "Invalid operator '{operator}'."),
            Self::UnsupportedCharacter {
                character,
                position,
            } => write!(
                f,
                "Unsupported character '{character}' at position {position}."
            ),
            Self::MalformedNumber { lexeme, position } => {
                write!(f, "Malformed number '{lexeme}' at position {position}.")
            }
        }
    }
}

impl std::error::Error for ExpressionError {}

/// Finds the [`ExpressionError`] behind an [`anyhow::Error`], if there is one.
pub fn kind_of(error: &anyhow::Error) -> Option<&ExpressionError> {
    error.downcast_ref::<ExpressionError>()
}
