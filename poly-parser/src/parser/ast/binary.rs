use std::ops::Range;
use super::{
    expr::{Expr, Primary},
    super::{
        error::{kind, Error},
        token::op::BinOp,
        Associativity,
        Parse,
        Parser,
        Precedence,
    },
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side should instead bind to a
    /// following operator with higher precedence.
    fn complete_rhs(
        input: &mut Parser,
        lhs: Expr,
        op: BinOp,
        mut rhs: Expr,
    ) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            // before creating the `lhs op rhs` node, check the precedence of the following
            // operator, if any; otherwise `1 + 2 * x` would be parsed as `(1 + 2) * x`

            // clone the input stream to emulate peeking
            let mut input_ahead = input.clone();
            if let Ok(next_op) = input_ahead.try_parse::<BinOp>() {
                if next_op.precedence() > precedence || next_op.associativity() == Associativity::Right {
                    // the following operator binds tighter, so it takes `rhs` as its
                    // left-hand-side
                    rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
                } else {
                    // the following operator has lower precedence, or equal precedence and
                    // left-associativity, as in `1 * 2 + 3` or `1 * 2 * 3`
                    //
                    // let `lhs op rhs` become the left-hand-side of that operator; the outer
                    // loop will parse it on its next iteration
                    break;
                }
            } else {
                break;
            }
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }))
    }

    /// Repeatedly parses `op primitive` pairs onto the given left-hand-side, as long as the
    /// operator's precedence is at least `precedence`, folding left-associatively.
    pub fn parse_expr(
        input: &mut Parser,
        mut lhs: Expr,
        precedence: Precedence,
    ) -> Result<Expr, Error> {
        loop {
            let mut input_ahead = input.clone();
            match input_ahead.try_parse_then::<BinOp, _>(|bin_op, input| {
                if bin_op.precedence() >= precedence {
                    Ok(())
                } else {
                    Err(input.error(kind::NonFatal))
                }
            }) {
                Ok(op) => {
                    input.set_cursor(&input_ahead);
                    let rhs = input.try_parse::<Primary>()?.into();
                    lhs = Self::complete_rhs(input, lhs, op, rhs)?;
                },
                Err(err) if err.fatal => return Err(err),
                Err(_) => break,
            }
        }

        Ok(lhs)
    }
}
