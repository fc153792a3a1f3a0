use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use anyhow::{bail, Context, Result};
use log::trace;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
pub(super) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());

    for token in infix_tokens {
        match token {
            Token::Literal { .. } => output.push(token),
            Token::OpenParenthesis => operators.push(token),
            Token::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            Token::Plus | Token::Dash | Token::Asterisk | Token::ForwardSlash => {
                let operator = token
                    .operator()
                    .context("Arithmetic token without an operator")?;
                parse_operator_token(&mut operators, &mut output, token, &operator)?
            }
        };
        trace!("operators: {:?}, output: {:?}", operators, output);
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<()> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                bail!(ExpressionError::MismatchedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => {
                bail!(ExpressionError::MismatchedParentheses);
            }
            // Discard the open parenthesis.
            Some(Token::OpenParenthesis) => break,
            Some(operator) => output.push(operator),
        }
    }
    Ok(())
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    token: Token,
    operator: &BinaryOperator,
) -> Result<()> {
    while let Some(top_of_operator_stack) = operators.last() {
        let other_operator = match top_of_operator_stack {
            Token::OpenParenthesis => break,
            other_token => match other_token.operator() {
                Some(other_operator) => other_operator,
                None => bail!("Found non-operator {} in operator stack", other_token),
            },
        };

        // Ties pop too, which makes every operator left-associative.
        if !other_operator.precedence_ge(operator) {
            break;
        }

        let other_operator_token = operators.pop().context("No operators left.")?;
        output.push(other_operator_token);
    }

    operators.push(token);
    Ok(())
}
