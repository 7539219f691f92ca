//! Reduces the parser's syntax tree into an [`Expr`].
//!
//! The reduction walks the syntax tree in left-to-right post-order, carrying one auxiliary
//! stack of partially built expressions: a literal pushes a leaf, a parenthesized node leaves
//! its already-built inner expression on the stack, and a binary node pops its two operands
//! and pushes the combination built by [`Expr::sum`] / [`Expr::times`]. The parser folds `+`
//! and `*` chains left-associatively, so the reduction yields `sum(sum(p1, p2), p3)` for
//! `p1 + p2 + p3`.
//!
//! A stack that does not end with exactly one expression means the grammar and this reduction
//! have drifted apart; that is a bug in this crate, never in user input, and panics.

use poly_parser::parser::ast::{Expr as AstExpr, Literal};
use poly_parser::parser::token::op::BinOpKind;
use super::Expr;

impl From<&AstExpr> for Expr {
    fn from(ast: &AstExpr) -> Self {
        let mut stack: Vec<Expr> = Vec::new();

        for node in ast.post_order_iter() {
            match node {
                AstExpr::Literal(Literal::Number(num)) => stack.push(Expr::number(num.value)),
                AstExpr::Literal(Literal::Symbol(sym)) => {
                    stack.push(Expr::variable(sym.name.as_str()));
                },
                // the inner expression is already on the stack
                AstExpr::Paren(_) => {},
                AstExpr::Binary(binary) => {
                    let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                        unreachable!("binary node reduced before both of its operands");
                    };
                    stack.push(match binary.op.kind {
                        BinOpKind::Add => Expr::sum(lhs, rhs),
                        BinOpKind::Mul => Expr::times(lhs, rhs),
                    });
                },
            }
        }

        let result = stack.pop();
        match (result, stack.is_empty()) {
            (Some(expr), true) => expr,
            _ => unreachable!("reduction stack must end with exactly one expression"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::{parse, Expr};

    #[test]
    fn precedence() {
        assert_eq!(
            parse("1.0 + 2.0 * x").unwrap(),
            Expr::Add(
                Box::new(Expr::Number(1.0)),
                Box::new(Expr::Mul(
                    Box::new(Expr::Number(2.0)),
                    Box::new(Expr::Variable("x".to_string())),
                )),
            ),
        );

        assert_eq!(
            parse("(1.0 + 2.0) * x").unwrap(),
            Expr::Mul(
                Box::new(Expr::Add(
                    Box::new(Expr::Number(1.0)),
                    Box::new(Expr::Number(2.0)),
                )),
                Box::new(Expr::Variable("x".to_string())),
            ),
        );
    }

    #[test]
    fn left_associative_reduction() {
        assert_eq!(
            parse("a + b + c").unwrap(),
            Expr::Add(
                Box::new(Expr::Add(
                    Box::new(Expr::Variable("a".to_string())),
                    Box::new(Expr::Variable("b".to_string())),
                )),
                Box::new(Expr::Variable("c".to_string())),
            ),
        );

        assert_eq!(
            parse("a * b * c").unwrap(),
            Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Variable("a".to_string())),
                    Box::new(Expr::Variable("b".to_string())),
                )),
                Box::new(Expr::Variable("c".to_string())),
            ),
        );
    }

    #[test]
    fn identities_eliminated_while_building() {
        assert_eq!(parse("0 * x").unwrap(), Expr::number(0.0));
        assert_eq!(parse("x * 1").unwrap(), Expr::variable("x"));
        assert_eq!(parse("1 * x * 1").unwrap(), Expr::variable("x"));
        assert_eq!(parse("x + 0").unwrap(), Expr::variable("x"));
        assert_eq!(parse("0 + x + 0").unwrap(), Expr::variable("x"));
    }

    #[test]
    fn parentheses_are_transparent() {
        assert_eq!(parse("((x))").unwrap(), Expr::variable("x"));
        assert_eq!(parse("(x + y)").unwrap(), parse("x + y").unwrap());
    }

    #[test]
    fn integers_and_decimals_share_a_representation() {
        assert_eq!(parse("3").unwrap(), parse("3.0").unwrap());
    }

    #[test]
    fn malformed_input() {
        assert!(parse("").is_err());
        assert!(parse("1 +").is_err());
        assert!(parse("(1").is_err());
        assert!(parse("1 2").is_err());
        assert!(parse("x % y").is_err());
    }
}
