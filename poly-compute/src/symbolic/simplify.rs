//! Numeric simplification of [`Expr`]s under a variable environment.

use std::collections::HashMap;
use super::Expr;

/// Simplifies the given expression under an environment mapping variable names to values.
///
/// Substitution is not implemented yet: the expression is returned unchanged, which callers
/// must treat as a valid (if maximally conservative) simplification. The environment parameter
/// fixes the interface for the eventual substitution pass.
// TODO: substitute environment values for variables and fold constant subtrees
pub fn simplify(expr: &Expr, _environment: &HashMap<String, f64>) -> Expr {
    expr.clone()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::symbolic::parse;

    #[test]
    fn returns_input_unchanged() {
        let expr = parse("x + 2 * y").unwrap();
        let environment = HashMap::from([("x".to_string(), 2.0), ("y".to_string(), 0.5)]);
        assert_eq!(simplify(&expr, &environment), expr);
    }

    #[test]
    fn empty_environment() {
        let expr = parse("x").unwrap();
        assert_eq!(simplify(&expr, &HashMap::new()), expr);
    }
}
