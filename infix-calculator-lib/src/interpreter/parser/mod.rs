mod infix_converter;

use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use anyhow::Result;
use log::debug;

/// Parses the given infix tokens into the equivalent postfix token stream,
/// which can be evaluated left to right without any precedence rules.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same operands and operators, in postfix order, without parentheses.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::interpreter::parser::parse;
/// use infix_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::new_literal("3", 3.0),
///     Token::Plus,
///     Token::new_literal("5", 5.0),
/// ];
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(postfix_tokens[2], Token::Plus);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    debug!("postfix tokens: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
