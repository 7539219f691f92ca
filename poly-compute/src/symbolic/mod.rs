//! Symbolic manipulation of PolyScript expressions.
//!
//! The submodules operate on [`Expr`], the core expression representation, which is built from
//! the parser's syntax tree by [`parse`] (or directly, through the constructors on [`Expr`]).

pub mod derivative;
pub mod expr;
pub mod simplify;

pub use expr::Expr;

use poly_parser::parser::{ast::Expr as AstExpr, error::Error, Parser};

/// Parses PolyScript source text into an [`Expr`].
///
/// The returned expression has already been through the identity elimination that
/// [`Expr::sum`] and [`Expr::times`] apply, so `x * 1` parses to the same expression as `x`.
pub fn parse(input: &str) -> Result<Expr, Error> {
    let ast = Parser::new(input).try_parse_full::<AstExpr>()?;
    Ok(Expr::from(&ast))
}
