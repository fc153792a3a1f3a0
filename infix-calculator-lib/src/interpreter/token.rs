use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use anyhow::{bail, Result};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    /// A numeric operand. `text` is kept as written so that the postfix form echoes
    /// the input, e.g. `2.50` stays `2.50`.
    Literal { text: String, value: f64 },
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    OpenParenthesis,
    CloseParenthesis,
}

pub static SYMBOLS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

impl Token {
    pub fn new_literal(text: impl Into<String>, value: f64) -> Token {
        Token::Literal {
            text: text.into(),
            value,
        }
    }

    /// The binary operator this token stands for, if it is one.
    pub fn operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Dash => Some(BinaryOperator::Subtract),
            Token::Asterisk => Some(BinaryOperator::Multiply),
            Token::ForwardSlash => Some(BinaryOperator::Divide),
            Token::Literal { .. } | Token::OpenParenthesis | Token::CloseParenthesis => None,
        }
    }

    /// Maps one of [`SYMBOLS`] to its token.
    pub(crate) fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Dash),
            '*' => Some(Token::Asterisk),
            '/' => Some(Token::ForwardSlash),
            '(' => Some(Token::OpenParenthesis),
            ')' => Some(Token::CloseParenthesis),
            _ => None,
        }
    }
}

/// True for characters that make up a numeric operand.
pub(crate) fn is_number_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

/// Parses a run of digits and decimal points into a literal.
///
/// `position` is only used to describe where the run was found if it is not a number.
pub(crate) fn parse_literal(text: &str, position: usize) -> Result<Token> {
    let is_well_formed =
        text.chars().all(is_number_character) && text.chars().filter(|c| *c == '.').count() <= 1;
    match text.parse::<f64>() {
        Ok(value) if is_well_formed => Ok(Token::new_literal(text, value)),
        _ => bail!(ExpressionError::MalformedNumber {
            lexeme: text.to_string(),
            position,
        }),
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal { text, .. } => write!(f, "{}", text),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Parses a single word of a postfix expression that starts at `position`.
pub(crate) fn parse_word(word: &str, position: usize) -> Result<Token> {
    let mut characters = word.chars();
    match (characters.next(), characters.next()) {
        (Some(first), _) if is_number_character(first) => parse_literal(word, position),
        (Some(symbol), None) => match Token::from_symbol(symbol) {
            Some(token) => Ok(token),
            None => bail!(ExpressionError::InvalidOperator {
                operator: word.to_string(),
            }),
        },
        _ => bail!(ExpressionError::InvalidOperator {
            operator: word.to_string(),
        }),
    }
}

/// Parses a single postfix word on its own, so positions count from its first character.
impl str::FromStr for Token {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        parse_word(input, 0)
    }
}
