use std::ops::Range;
use crate::{
    parser::{
        ast::{binary::Binary, literal::Literal, paren::Paren},
        error::{kind, Error},
        iter::ExprIter,
        token::CloseParen,
        Parse,
        Parser,
        Precedence,
    },
    try_parse_catch_fatal,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a general expression in PolyScript.
///
/// An expression is any valid piece of source text that denotes a value: a literal, a
/// parenthesized expression, or a sum / product of expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A binary operation, such as `1 + 2` or `2 * x`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        if input.clone().try_parse::<CloseParen>().is_ok() {
            return Err(input.error_fatal(kind::UnclosedParenthesis { opening: false }));
        }

        let lhs = input.try_parse::<Primary>()?.into();
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

/// Represents a primary expression in PolyScript: the operand of a binary operation.
///
/// Primary expressions are the simplest expressions, and are the building blocks of more complex
/// expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let _ = try_parse_catch_fatal!(input.try_parse::<Literal>().map(Self::Literal));
        input.try_parse::<Paren>().map(Self::Paren)
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
        }
    }
}
