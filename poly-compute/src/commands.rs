//! String-based commands provided by the expression system.
//!
//! These are the entry points the console dispatches to: both take expression source text and
//! return the serialized result, so callers never handle [`Expr`](crate::symbolic::Expr) values
//! directly.

use poly_parser::parser::error::Error as ParseError;
use std::collections::HashMap;

use crate::symbolic::{self, derivative::derivative};

/// An error produced by a command.
#[derive(Debug)]
pub enum Error {
    /// The expression text failed to parse.
    Parse(ParseError),

    /// The differentiation variable is not a non-empty word of ASCII letters.
    InvalidVariable(String),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// Returns true if the given name is usable as a variable: non-empty, ASCII letters only.
fn is_valid_variable(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Differentiates `expression` with respect to `variable` and returns the serialized
/// derivative.
///
/// The result is a valid expression equal to the derivative, but not necessarily in simplest
/// form; only the identity elimination applied while parsing `expression` reduces it.
pub fn differentiate(expression: &str, variable: &str) -> Result<String, Error> {
    if !is_valid_variable(variable) {
        return Err(Error::InvalidVariable(variable.to_owned()));
    }

    let expr = symbolic::parse(expression)?;
    Ok(derivative(&expr, variable).to_string())
}

/// Simplifies `expression` under `environment` and returns the serialized result.
///
/// The current simplifier leaves the expression unchanged (see
/// [`simplify`](crate::symbolic::simplify::simplify)), so this returns a serialization of the
/// parsed input.
pub fn simplify(expression: &str, environment: &HashMap<String, f64>) -> Result<String, Error> {
    let expr = symbolic::parse(expression)?;
    Ok(symbolic::simplify::simplify(&expr, environment).to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn differentiate_number() {
        assert_eq!(differentiate("0", "x").unwrap(), "0.0");
        assert_eq!(differentiate("1", "x").unwrap(), "0.0");
        assert_eq!(differentiate("1.5", "x").unwrap(), "0.0");
    }

    #[test]
    fn differentiate_variable() {
        assert_eq!(differentiate("x", "x").unwrap(), "1.0");
        assert_eq!(differentiate("x", "y").unwrap(), "0.0");
    }

    #[test]
    fn differentiate_sum() {
        assert_eq!(differentiate("x + 1", "x").unwrap(), "(1.0 + 0.0)");
        assert_eq!(differentiate("1 + x", "x").unwrap(), "(0.0 + 1.0)");
        assert_eq!(differentiate("x + x", "x").unwrap(), "(1.0 + 1.0)");
        assert_eq!(differentiate("x + x", "y").unwrap(), "(0.0 + 0.0)");
    }

    #[test]
    fn differentiate_product() {
        // `x * 1` and `1 * x` reduce to `x` while parsing, so only the variable rule applies
        assert_eq!(differentiate("x * 1", "x").unwrap(), "1.0");
        assert_eq!(differentiate("1 * x", "x").unwrap(), "1.0");
        assert_eq!(differentiate("x * x", "x").unwrap(), "((1.0 * x) + (x * 1.0))");
        assert_eq!(differentiate("x * x", "y").unwrap(), "((0.0 * x) + (x * 0.0))");
    }

    #[test]
    fn differentiate_parenthesized() {
        assert_eq!(
            differentiate("(x + 1) * y", "x").unwrap(),
            "(((1.0 + 0.0) * y) + ((x + 1.0) * 0.0))",
        );
    }

    #[test]
    fn differentiate_rejects_malformed_expressions() {
        assert!(matches!(differentiate("", "x"), Err(Error::Parse(_))));
        assert!(matches!(differentiate("1 +", "x"), Err(Error::Parse(_))));
        assert!(matches!(differentiate("(1", "x"), Err(Error::Parse(_))));
    }

    #[test]
    fn differentiate_rejects_invalid_variables() {
        assert!(matches!(differentiate("x", ""), Err(Error::InvalidVariable(_))));
        assert!(matches!(differentiate("x", "x1"), Err(Error::InvalidVariable(_))));
        assert!(matches!(differentiate("x", "d x"), Err(Error::InvalidVariable(_))));
    }

    #[test]
    fn simplify_is_conservative() {
        let environment = HashMap::from([("x".to_string(), 2.0)]);
        assert_eq!(simplify("x + 1", &environment).unwrap(), "(x + 1.0)");
        assert_eq!(simplify("x", &environment).unwrap(), "x");
    }

    #[test]
    fn simplify_serializes_the_parsed_form() {
        // identity elimination happens while parsing, before the simplifier runs
        assert_eq!(simplify("0 * y", &HashMap::new()).unwrap(), "0.0");
        assert_eq!(simplify("(x)", &HashMap::new()).unwrap(), "x");
    }

    #[test]
    fn simplify_rejects_malformed_expressions() {
        assert!(matches!(simplify("1 *", &HashMap::new()), Err(Error::Parse(_))));
    }
}
