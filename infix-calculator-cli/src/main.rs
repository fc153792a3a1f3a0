use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_calculator::interpreter::{calculate, evaluate_postfix_text, format_result};
use log::{debug, info};
use std::io;
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter an infix expression (e.g., 3 + 5 * (2 - 8) / 2): ";

/// Converts arithmetic expressions to postfix notation and evaluates them.
///
/// Without an expression argument, expressions are read from standard input, one per line.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to calculate
    expression: Option<String>,

    /// Treat input as postfix notation and only evaluate it
    #[clap(short, long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();
    debug!("{:?}", args);

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match &args.expression {
        Some(expression) => process(expression, args.postfix, &mut output),
        None => {
            let stdin = io::stdin();
            let stderr = io::stderr();
            let mut errors = stderr.lock();
            run_loop(stdin.lock(), args.postfix, &mut output, &mut errors)
        }
    }
}

/// Reads expressions line by line until the end of input. A failing expression is
/// reported on `errors` and the loop carries on with the next line.
fn run_loop(
    input: impl BufRead,
    postfix: bool,
    output: &mut impl Write,
    errors: &mut impl Write,
) -> Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush().context("Failed to flush prompt")?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read input")?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        if let Err(error) = process(&line, postfix, output) {
            writeln!(errors, "Error: {}", error)?;
        }
    }

    writeln!(output)?;
    info!("end of input");
    Ok(())
}

fn process(expression: &str, postfix: bool, output: &mut impl Write) -> Result<()> {
    if postfix {
        let result = evaluate_postfix_text(expression)?;
        writeln!(output, "Result: {}", format_result(result))?;
        return Ok(());
    }

    let calculation = calculate(expression)?;
    writeln!(output, "Postfix Expression: {}", calculation.postfix)?;
    writeln!(output, "Result: {}", format_result(calculation.result))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_to_string(expression: &str, postfix: bool) -> Result<String> {
        let mut output = Vec::new();
        process(expression, postfix, &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn infix_expression_prints_postfix_and_result() {
        let printed = process_to_string("(3 + 5) * 2", false).unwrap();
        assert_eq!(printed, "Postfix Expression: 3 5 + 2 *\nResult: 16\n");
    }

    #[test]
    fn postfix_expression_prints_only_result() {
        let printed = process_to_string("8 3 - 2 -", true).unwrap();
        assert_eq!(printed, "Result: 3\n");
    }

    #[test]
    fn failing_expression_prints_nothing() {
        let mut output = Vec::new();
        let error = process("4 / 0", false, &mut output).unwrap_err();
        assert_eq!(error.to_string(), "Division by zero.");
        assert!(output.is_empty());
    }

    fn run_loop_to_strings(input: &str, postfix: bool) -> (String, String) {
        let mut output = Vec::new();
        let mut errors = Vec::new();
        run_loop(input.as_bytes(), postfix, &mut output, &mut errors).unwrap();
        (
            String::from_utf8(output).unwrap(),
            String::from_utf8(errors).unwrap(),
        )
    }

    #[test]
    fn loop_reports_error_and_continues_with_next_line() {
        let (output, errors) = run_loop_to_strings("4 / 0\n\n3 + 5\n", false);

        assert_eq!(errors, "Error: Division by zero.\n");
        assert_eq!(
            output,
            format!(
                "{prompt}{prompt}{prompt}Postfix Expression: 3 5 +\nResult: 8\n{prompt}\n",
                prompt = PROMPT
            )
        );
    }

    #[test]
    fn loop_skips_blank_lines_without_error() {
        let (output, errors) = run_loop_to_strings("\n   \n", false);

        assert!(errors.is_empty());
        assert_eq!(output, format!("{prompt}{prompt}{prompt}\n", prompt = PROMPT));
    }

    #[test]
    fn loop_in_postfix_mode_prints_only_results() {
        let (output, errors) = run_loop_to_strings("3 4 %\n8 3 - 2 -", true);

        assert_eq!(errors, "Error: Invalid operator '%'.\n");
        assert_eq!(
            output,
            format!("{prompt}{prompt}Result: 3\n{prompt}\n", prompt = PROMPT)
        );
    }

    #[test]
    fn arguments_accept_expression_and_postfix_flag() {
        let args =
            Arguments::try_parse_from(["infix-calculator-cli", "--postfix", "3 4 +"]).unwrap();
        assert!(args.postfix);
        assert_eq!(args.expression.as_deref(), Some("3 4 +"));
    }

    #[test]
    fn arguments_without_expression_select_loop() {
        let args = Arguments::try_parse_from(["infix-calculator-cli"]).unwrap();
        assert!(args.expression.is_none());
        assert!(!args.postfix);
    }
}
