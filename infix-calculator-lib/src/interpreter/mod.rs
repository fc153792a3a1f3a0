pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// The outcome of calculating an infix expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// The expression in postfix notation, tokens separated by single spaces.
    pub postfix: String,
    /// The value of the expression.
    pub result: f64,
}

/// Converts an infix expression to postfix notation and evaluates it.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, using `+ - * / ( )`, non-negative
///   decimal numbers and any amount of whitespace.
///
/// returns: The postfix form of the expression together with its value.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::interpreter::calculate;
///
/// let calculation = calculate("3 + 5 * 2")?;
/// assert_eq!(calculation.postfix, "3 5 2 * +");
/// assert_eq!(calculation.result, 13.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate(expression: &str) -> Result<Calculation> {
    let postfix_tokens = convert(expression)?;
    let postfix = tokens_to_string(&postfix_tokens)?;
    let result = evaluator::evaluate(&postfix_tokens)?;
    debug!("{:?} = {}", postfix, result);
    Ok(Calculation { postfix, result })
}

/// Converts the given infix expression into the equivalent postfix token stream.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in postfix order.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::{convert, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = convert("(3 + 5) * 2")?;
/// assert_eq!(tokens_to_string(&postfix_tokens)?, "3 5 + 2 *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Vec<Token>> {
    let infix_tokens = lexer::tokenize(expression)?;
    let postfix_tokens = parser::parse(infix_tokens)?;
    Ok(postfix_tokens)
}

/// Evaluates an expression that is already written in postfix notation,
/// with operands and operators separated by whitespace.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::evaluate_postfix_text;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// assert_eq!(evaluate_postfix_text("8 3 - 2 -")?, 3.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_postfix_text(postfix: &str) -> Result<f64> {
    let postfix_tokens = evaluator::tokenize_postfix(postfix)?;
    evaluator::evaluate(&postfix_tokens)
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::tokens_to_string;
/// use infix_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::new_literal("2.5", 2.5),
///     Token::new_literal("4", 4.0),
///     Token::Asterisk,
/// ];
/// assert_eq!(tokens_to_string(&tokens)?, "2.5 4 *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}

const SIGNIFICANT_DIGITS: i32 = 6;

/// Formats a result the way it is shown to users, like C's `%g`: six significant digits,
/// no trailing zeros, and an exponent once the value is below `1e-4` or at least `1e6`.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::format_result;
///
/// assert_eq!(format_result(1.0 / 3.0), "0.333333");
/// assert_eq!(format_result(1e21), "1e+21");
/// ```
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.into();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.into();
    }

    // The exponent is read after rounding, so 999999.5 counts as 1e+06.
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return scientific,
        },
        None => return scientific,
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
