use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::{is_number_character, parse_literal, Token};
use anyhow::{bail, Result};
use itertools::Itertools;
use log::trace;

/// Splits an infix expression into tokens.
///
/// Whitespace is skipped everywhere. A digit or decimal point starts an operand, which
/// greedily takes every following digit and decimal point. Any character that is neither
/// whitespace, part of a number nor one of `+ - * / ( )` is rejected right away.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("3 + 5 * (2 - 8)")?;
/// assert_eq!(tokens.len(), 9);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut tokens = vec![];
    let mut characters = expression.chars().enumerate().peekable();

    while let Some((position, character)) = characters.next() {
        if character.is_whitespace() {
            continue;
        }

        if is_number_character(character) {
            let rest: String = characters
                .peeking_take_while(|(_, next)| is_number_character(*next))
                .map(|(_, next)| next)
                .collect();
            let lexeme = format!("{}{}", character, rest);
            tokens.push(parse_literal(&lexeme, position)?);
            continue;
        }

        match Token::from_symbol(character) {
            Some(token) => tokens.push(token),
            None => bail!(ExpressionError::UnsupportedCharacter {
                character,
                position,
            }),
        }
    }

    trace!("tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}
