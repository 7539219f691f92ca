//! Console interface to the expression system.
//!
//! The console holds one optional "current expression" (in serialized form) and processes one
//! line at a time:
//!
//! - an empty line exits;
//! - `!d/d<var>` differentiates the current expression with respect to `<var>`;
//! - `!simplify [var=value]...` simplifies the current expression under the given environment;
//! - anything else is parsed as a new expression.
//!
//! Successful commands print the resulting expression and make it the current one.

mod error;

use error::Error;
use poly_compute::{commands, symbolic};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::collections::HashMap;

const DIFFERENTIATE_PREFIX: &str = "!d/d";
const SIMPLIFY_PREFIX: &str = "!simplify";

const DIFFERENTIATE_USAGE: &str = "usage: !d/d<variable>, e.g. `!d/dx`";
const SIMPLIFY_USAGE: &str = "usage: !simplify [variable=value]..., e.g. `!simplify x=2 y=0.5`";
const NO_EXPRESSION: &str = "enter an expression before using this command";

/// Extracts the differentiation variable from a `!d/d<var>` command.
fn parse_differentiate(input: &str) -> Result<&str, Error> {
    let variable = input[DIFFERENTIATE_PREFIX.len()..].trim_end();
    if variable.is_empty() || !variable.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::Usage(DIFFERENTIATE_USAGE));
    }
    Ok(variable)
}

/// Extracts the `name=value` environment from a `!simplify` command.
fn parse_simplify(input: &str) -> Result<HashMap<String, f64>, Error> {
    let mut environment = HashMap::new();

    for assignment in input[SIMPLIFY_PREFIX.len()..].split_whitespace() {
        let Some((name, value)) = assignment.split_once('=') else {
            return Err(Error::Usage(SIMPLIFY_USAGE));
        };
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::Usage(SIMPLIFY_USAGE));
        }
        let Ok(value) = value.parse::<f64>() else {
            return Err(Error::Usage(SIMPLIFY_USAGE));
        };
        environment.insert(name.to_owned(), value);
    }

    Ok(environment)
}

/// Evaluates one line of input against the current expression, returning the serialized
/// expression that should become current.
fn evaluate(input: &str, current: Option<&str>) -> Result<String, Error> {
    if input.starts_with(DIFFERENTIATE_PREFIX) {
        let variable = parse_differentiate(input)?;
        let expression = current.ok_or(Error::Usage(NO_EXPRESSION))?;
        Ok(commands::differentiate(expression, variable)?)
    } else if input.starts_with(SIMPLIFY_PREFIX) {
        let environment = parse_simplify(input)?;
        let expression = current.ok_or(Error::Usage(NO_EXPRESSION))?;
        Ok(commands::simplify(expression, &environment)?)
    } else {
        let expr = symbolic::parse(input).map_err(Error::Parse)?;
        Ok(expr.to_string())
    }
}

/// Reads and processes one line of input, printing the result or the failure. Returns `false`
/// once the user asks to exit with an empty line.
fn process_line(rl: &mut DefaultEditor, current: &mut Option<String>) -> Result<bool, ReadlineError> {
    let input = rl.readline("> ")?;
    if input.trim().is_empty() {
        return Ok(false);
    }

    rl.add_history_entry(&input)?;

    match evaluate(&input, current.as_deref()) {
        Ok(expression) => {
            println!("{expression}");
            *current = Some(expression);
        },
        Err(err) => err.report_to_stderr(&input),
    }

    Ok(true)
}

fn main() {
    let mut rl = DefaultEditor::new().unwrap();
    let mut current: Option<String> = None;

    loop {
        match process_line(&mut rl, &mut current) {
            Ok(true) => (),
            Ok(false) => break,
            Err(err) => {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            },
        }
    }
}
