use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::{parse_word, Token};
use anyhow::{bail, Result};
use itertools::Itertools;
use log::trace;

/// Evaluates tokens ordered in postfix notation.
///
/// Operands are pushed onto a value stack. Each operator pops its right operand, then its
/// left operand, and pushes the result. The stream is valid only if exactly one value is
/// left at the end.
///
/// # Arguments
///
/// * `postfix_tokens`: Operands and operators in postfix order.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::interpreter::evaluator::evaluate;
/// use infix_calculator::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::new_literal("8", 8.0),
///     Token::new_literal("3", 3.0),
///     Token::Dash,
/// ];
/// assert_eq!(evaluate(&postfix_tokens)?, 5.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(postfix_tokens: &[Token]) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        if let Token::Literal { value, .. } = token {
            operands.push(*value);
            continue;
        }

        let operator = match token.operator() {
            Some(operator) => operator,
            None => bail!(ExpressionError::InvalidPostfixExpression),
        };
        let (left, right) = match (operands.pop(), operands.pop()) {
            (Some(right), Some(left)) => (left, right),
            _ => bail!(ExpressionError::InvalidPostfixExpression),
        };
        let result = operator.evaluate(left, right)?;
        trace!("{} {} {} = {}", left, operator, right, result);
        operands.push(result);
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        _ => bail!(ExpressionError::InvalidPostfixExpression),
    }
}

/// Splits a textual postfix expression on whitespace into tokens.
///
/// Unlike the infix lexer, every operand and operator must be separated by whitespace.
/// Errors report the zero-based character index at which the offending word starts.
pub fn tokenize_postfix(postfix: &str) -> Result<Vec<Token>> {
    let words = postfix
        .chars()
        .enumerate()
        .group_by(|(_, character)| character.is_whitespace());

    let mut tokens = vec![];
    for (is_whitespace, word) in &words {
        if is_whitespace {
            continue;
        }
        let characters: Vec<(usize, char)> = word.collect();
        let position = characters
            .first()
            .map(|(position, _)| *position)
            .unwrap_or_default();
        let text: String = characters.iter().map(|(_, character)| character).collect();
        tokens.push(parse_word(&text, position)?);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::error::kind_of;
    use parameterized_macro::parameterized;

    fn evaluate_text(postfix: &str) -> Result<f64> {
        evaluate(&tokenize_postfix(postfix)?)
    }

    #[parameterized(
        postfix = {
            "42",
            "3 5 +",
            "8 3 - 2 -",
            "3 5 2 * +",
            "3 5 + 2 *",
            "2.5 4 *",
            "7 2 /",
            "1 2 3 4 + + +",
        },
        expected = { 42.0, 8.0, 3.0, 13.0, 16.0, 10.0, 3.5, 10.0 }
    )]
    fn evaluate_valid_postfix_returns_value(postfix: &str, expected: f64) {
        let actual = evaluate_text(postfix).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn operator_pops_right_operand_first() {
        assert_eq!(evaluate_text("2 8 /").unwrap(), 0.25);
        assert_eq!(evaluate_text("2 8 -").unwrap(), -6.0);
    }

    #[parameterized(postfix = { "", "   ", "+", "3 +", "3 4", "1 2 + 3" })]
    fn evaluate_malformed_postfix_returns_err(postfix: &str) {
        let error = evaluate_text(postfix).unwrap_err();
        assert_eq!(
            kind_of(&error),
            Some(&ExpressionError::InvalidPostfixExpression)
        );
    }

    #[test]
    fn evaluate_division_by_zero_returns_err() {
        let error = evaluate_text("4 0 /").unwrap_err();
        assert_eq!(kind_of(&error), Some(&ExpressionError::DivisionByZero));
    }

    #[test]
    fn evaluate_division_by_computed_zero_returns_err() {
        let error = evaluate_text("4 2 2 - /").unwrap_err();
        assert_eq!(kind_of(&error), Some(&ExpressionError::DivisionByZero));
    }

    #[test]
    fn evaluate_parenthesis_in_postfix_returns_err() {
        let postfix = vec![
            Token::OpenParenthesis,
            Token::new_literal("1", 1.0),
            Token::CloseParenthesis,
        ];
        let error = evaluate(&postfix).unwrap_err();
        assert_eq!(
            kind_of(&error),
            Some(&ExpressionError::InvalidPostfixExpression)
        );
    }

    #[test]
    fn tokenize_postfix_malformed_number_reports_where_word_starts() {
        let error = evaluate_text("1 2 1.2.3 +").unwrap_err();
        assert_eq!(
            kind_of(&error),
            Some(&ExpressionError::MalformedNumber {
                lexeme: "1.2.3".to_string(),
                position: 4,
            })
        );
        assert_eq!(
            error.to_string(),
            "Malformed number '1.2.3' at position 4."
        );
    }

    #[test]
    fn tokenize_postfix_splits_on_any_whitespace() {
        let tokens = tokenize_postfix("  2.5\t4 \n *  ").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new_literal("2.5", 2.5),
                Token::new_literal("4", 4.0),
                Token::Asterisk,
            ]
        );
    }

    #[test]
    fn tokenize_postfix_unknown_operator_returns_err() {
        let error = evaluate_text("3 4 %").unwrap_err();
        assert_eq!(
            kind_of(&error),
            Some(&ExpressionError::InvalidOperator {
                operator: "%".to_string()
            })
        );
    }
}
