//! Symbolic differentiation of [`Expr`]s.

use super::Expr;

/// `(f + g)' = f' + g'`
fn sum_rule(lhs: &Expr, rhs: &Expr, with: &str) -> Expr {
    Expr::Add(
        Box::new(derivative(lhs, with)),
        Box::new(derivative(rhs, with)),
    )
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(lhs: &Expr, rhs: &Expr, with: &str) -> Expr {
    Expr::Add(
        Box::new(Expr::Mul(
            Box::new(derivative(lhs, with)),
            Box::new(rhs.clone()),
        )),
        Box::new(Expr::Mul(
            Box::new(lhs.clone()),
            Box::new(derivative(rhs, with)),
        )),
    )
}

/// Computes the derivative of the given expression with respect to the variable `with`. The
/// name comparison is exact and case-sensitive.
///
/// The result is mathematically correct but deliberately unsimplified: the rules construct
/// `Add` / `Mul` nodes directly rather than going through [`Expr::sum`] / [`Expr::times`], so
/// differentiating `x * x` yields `((1.0 * x) + (x * 1.0))`. Every expression in this language
/// is differentiable, so this cannot fail.
pub fn derivative(f: &Expr, with: &str) -> Expr {
    match f {
        Expr::Number(_) => Expr::Number(0.0),
        Expr::Variable(name) => {
            if name == with {
                Expr::Number(1.0)
            } else {
                Expr::Number(0.0)
            }
        },
        Expr::Add(lhs, rhs) => sum_rule(lhs, rhs, with),
        Expr::Mul(lhs, rhs) => product_rule(lhs, rhs, with),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::symbolic::parse;

    #[test]
    fn constant_rule() {
        assert_eq!(derivative(&Expr::number(0.0), "x"), Expr::Number(0.0));
        assert_eq!(derivative(&Expr::number(1.5), "x"), Expr::Number(0.0));
    }

    #[test]
    fn variable_rule() {
        assert_eq!(derivative(&Expr::variable("x"), "x"), Expr::Number(1.0));
        assert_eq!(derivative(&Expr::variable("x"), "y"), Expr::Number(0.0));

        // names match exactly, case included
        assert_eq!(derivative(&Expr::variable("X"), "x"), Expr::Number(0.0));
        assert_eq!(derivative(&Expr::variable("xx"), "x"), Expr::Number(0.0));
    }

    #[test]
    fn sum_rule_derivative() {
        let expr = parse("x + 1").unwrap();
        assert_eq!(
            derivative(&expr, "x"),
            Expr::Add(Box::new(Expr::Number(1.0)), Box::new(Expr::Number(0.0))),
        );
    }

    #[test]
    fn product_rule_derivative() {
        // (x * x)' = 1 * x + x * 1, left unsimplified
        let expr = parse("x * x").unwrap();
        assert_eq!(
            derivative(&expr, "x"),
            Expr::Add(
                Box::new(Expr::Mul(
                    Box::new(Expr::Number(1.0)),
                    Box::new(Expr::Variable("x".to_string())),
                )),
                Box::new(Expr::Mul(
                    Box::new(Expr::Variable("x".to_string())),
                    Box::new(Expr::Number(1.0)),
                )),
            ),
        );
    }

    #[test]
    fn nested_rules_compose() {
        // ((x * y) + 3)' with respect to x is (1 * y + x * 0) + 0
        let expr = parse("x * y + 3").unwrap();
        assert_eq!(
            derivative(&expr, "x"),
            Expr::Add(
                Box::new(Expr::Add(
                    Box::new(Expr::Mul(
                        Box::new(Expr::Number(1.0)),
                        Box::new(Expr::Variable("y".to_string())),
                    )),
                    Box::new(Expr::Mul(
                        Box::new(Expr::Variable("x".to_string())),
                        Box::new(Expr::Number(0.0)),
                    )),
                )),
                Box::new(Expr::Number(0.0)),
            ),
        );
    }

    #[test]
    fn derivative_output_is_reparsable() {
        let expr = parse("x * x + y").unwrap();
        let derived = derivative(&expr, "x");

        // re-parsing runs the identity elimination, so the trees need not be identical, but
        // the rendering must still be a valid expression
        assert!(parse(&derived.to_string()).is_ok());
    }
}
