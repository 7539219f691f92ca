//! The core representation of PolyScript expressions.
//!
//! The [`Expr`](poly_parser::parser::ast::Expr) type from `poly-parser` is convenient for
//! parsing, but it drags source spans and parenthesization around. This module defines the
//! [`Expr`] the rest of the system manipulates: an immutable tree of exactly four variants,
//! with no positions and no grouping nodes. All submodules that deal with symbolic
//! manipulation use this type, and any occurrence of the word `expression` refers to it.
//!
//! # Structural equality
//!
//! Two expressions are equal iff they have the same variant and:
//!
//! - both are [`Expr::Number`] and the values differ by less than `1e-10`;
//! - both are [`Expr::Variable`] and the names are identical (case-sensitive);
//! - both are [`Expr::Add`] or both are [`Expr::Mul`], the left operands are equal, and the
//!   right operands are equal, recursively.
//!
//! Equality is deliberately **not** commutative: `x + y` and `y + x` denote the same value but
//! are different expressions. The [`PartialEq`] implementation implements structural equality,
//! nothing more.
//!
//! # Hashing
//!
//! The hash of an interior node is the **sum** of its operand hashes, which satisfies "equal
//! implies equal hash" while letting commuted (unequal) operands collide. That collision is
//! part of the observable contract and must not be "fixed" here.

mod builder;

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The tolerance within which two [`Expr::Number`] values compare equal.
pub const NUMBER_EPSILON: f64 = 1e-10;

/// A PolyScript expression: an immutable tree of sums and products of non-negative numbers and
/// variables.
///
/// Interior nodes exclusively own their operands, so an expression is always a tree, never a
/// DAG, and never mutated after construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A non-negative, finite number, such as `2` or `1.5`.
    Number(f64),

    /// A variable, such as `x` or `foo`. Names are case-sensitive words of ASCII letters.
    Variable(String),

    /// The sum of the two operand expressions.
    Add(Box<Expr>, Box<Expr>),

    /// The product of the two operand expressions.
    Mul(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a number expression.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative, infinite, or NaN. Numbers outside that domain cannot be
    /// written in PolyScript source, so an out-of-domain value here is a caller bug.
    pub fn number(value: f64) -> Self {
        assert!(
            value.is_finite() && value >= 0.0,
            "number expressions must be finite and non-negative, got {value}",
        );
        Self::Number(value)
    }

    /// Creates a variable expression.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or contains anything other than ASCII letters.
    pub fn variable(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(
            !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic()),
            "variable names must be non-empty words of ASCII letters, got {name:?}",
        );
        Self::Variable(name)
    }

    /// Creates an expression representing `lhs + rhs`, eliminating the additive identity: if
    /// either operand equals `0`, the other operand is returned unchanged.
    ///
    /// The elimination is local to this call; operands are not simplified recursively.
    pub fn sum(lhs: Expr, rhs: Expr) -> Expr {
        if lhs == Expr::Number(0.0) {
            rhs
        } else if rhs == Expr::Number(0.0) {
            lhs
        } else {
            Expr::Add(Box::new(lhs), Box::new(rhs))
        }
    }

    /// Creates an expression representing `lhs * rhs`, eliminating multiplicative identities:
    /// if either operand equals `0` the result is `0`, and if either operand equals `1` the
    /// other operand is returned unchanged.
    ///
    /// The elimination is local to this call; operands are not simplified recursively.
    pub fn times(lhs: Expr, rhs: Expr) -> Expr {
        if lhs == Expr::Number(0.0) || rhs == Expr::Number(0.0) {
            Expr::Number(0.0)
        } else if lhs == Expr::Number(1.0) {
            rhs
        } else if rhs == Expr::Number(1.0) {
            lhs
        } else {
            Expr::Mul(Box::new(lhs), Box::new(rhs))
        }
    }

    /// Computes the hash of the expression as a value, so that interior nodes can combine their
    /// operand hashes by addition.
    fn structural_hash(&self) -> u64 {
        /// Runs a single value through the standard hasher.
        fn hash_one(value: impl Hash) -> u64 {
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        match self {
            Expr::Number(value) => hash_one(value.to_bits()),
            Expr::Variable(name) => hash_one(name),
            Expr::Add(lhs, rhs) | Expr::Mul(lhs, rhs) => {
                lhs.structural_hash().wrapping_add(rhs.structural_hash())
            },
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Number(lhs), Expr::Number(rhs)) => (lhs - rhs).abs() < NUMBER_EPSILON,
            (Expr::Variable(lhs), Expr::Variable(rhs)) => lhs == rhs,
            (Expr::Add(ll, lr), Expr::Add(rl, rr))
            | (Expr::Mul(ll, lr), Expr::Mul(rl, rr)) => ll == rl && lr == rr,
            _ => false,
        }
    }
}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

/// Renders the expression in parsable form: every interior node is parenthesized, and numbers
/// always carry a decimal point (`0` renders as `0.0`). Re-parsing the rendering yields an
/// equal expression.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => {
                if value.fract() == 0.0 {
                    write!(f, "{value:.1}")
                } else {
                    write!(f, "{value}")
                }
            },
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Add(lhs, rhs) => write!(f, "({lhs} + {rhs})"),
            Expr::Mul(lhs, rhs) => write!(f, "({lhs} * {rhs})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::symbolic::parse;

    /// Computes the hash an `Expr` would feed into a hashed collection.
    fn hash_of(expr: &Expr) -> u64 {
        expr.structural_hash()
    }

    #[test]
    fn display_numbers() {
        assert_eq!(Expr::number(0.0).to_string(), "0.0");
        assert_eq!(Expr::number(1.0).to_string(), "1.0");
        assert_eq!(Expr::number(1.5).to_string(), "1.5");
        assert_eq!(Expr::number(144.0).to_string(), "144.0");
    }

    #[test]
    fn display_nested() {
        let expr = Expr::times(
            Expr::variable("x"),
            Expr::sum(Expr::variable("y"), Expr::number(3.0)),
        );
        assert_eq!(expr.to_string(), "(x * (y + 3.0))");
    }

    #[test]
    fn number_equality_epsilon() {
        assert_eq!(Expr::number(0.0), Expr::number(1e-11));
        assert_ne!(Expr::number(0.0), Expr::number(1e-9));
        assert_eq!(Expr::number(1.5), Expr::number(1.5));
    }

    #[test]
    fn variable_equality_case_sensitive() {
        assert_eq!(Expr::variable("x"), Expr::variable("x"));
        assert_ne!(Expr::variable("x"), Expr::variable("X"));
        assert_ne!(Expr::variable("x"), Expr::variable("xx"));
    }

    #[test]
    fn equality_is_not_commutative() {
        let forward = Expr::sum(Expr::variable("x"), Expr::variable("y"));
        let backward = Expr::sum(Expr::variable("y"), Expr::variable("x"));
        assert_ne!(forward, backward);
    }

    #[test]
    fn equality_distinguishes_variants() {
        let add = Expr::Add(Box::new(Expr::variable("x")), Box::new(Expr::number(2.0)));
        let mul = Expr::Mul(Box::new(Expr::variable("x")), Box::new(Expr::number(2.0)));
        assert_ne!(add, mul);
        assert_ne!(Expr::number(1.0), Expr::variable("x"));
    }

    #[test]
    fn equal_expressions_hash_identically() {
        let build = || {
            Expr::sum(
                Expr::times(Expr::number(3.0), Expr::variable("x")),
                Expr::number(2.5),
            )
        };
        assert_eq!(build(), build());
        assert_eq!(hash_of(&build()), hash_of(&build()));
    }

    #[test]
    fn commuted_operands_collide_by_design() {
        // the additive hash combination makes `x + y` and `y + x` collide even though they
        // compare unequal; this is the documented contract
        let forward = Expr::sum(Expr::variable("x"), Expr::variable("y"));
        let backward = Expr::sum(Expr::variable("y"), Expr::variable("x"));
        assert_ne!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn sum_eliminates_additive_identity() {
        let x = Expr::variable("x");
        assert_eq!(Expr::sum(Expr::number(0.0), x.clone()), x);
        assert_eq!(Expr::sum(x.clone(), Expr::number(0.0)), x);

        // the operand comes back unwrapped, not as an `Add` around it
        assert!(matches!(Expr::sum(Expr::number(0.0), x.clone()), Expr::Variable(_)));

        // zero within the comparison tolerance is still an identity
        assert_eq!(Expr::sum(Expr::number(1e-11), x.clone()), x);
    }

    #[test]
    fn sum_keeps_non_identity_operands() {
        let expr = Expr::sum(Expr::number(1.0), Expr::number(2.0));
        assert!(matches!(expr, Expr::Add(_, _)));
    }

    #[test]
    fn times_absorbs_zero() {
        let x = Expr::variable("x");
        assert_eq!(Expr::times(Expr::number(0.0), x.clone()), Expr::number(0.0));
        assert_eq!(Expr::times(x, Expr::number(0.0)), Expr::number(0.0));
    }

    #[test]
    fn times_eliminates_multiplicative_identity() {
        let x = Expr::variable("x");
        assert_eq!(Expr::times(Expr::number(1.0), x.clone()), x);
        assert_eq!(Expr::times(x.clone(), Expr::number(1.0)), x);
        assert!(matches!(Expr::times(Expr::number(1.0), x), Expr::Variable(_)));
    }

    #[test]
    fn times_keeps_non_identity_operands() {
        let expr = Expr::times(Expr::number(2.0), Expr::variable("x"));
        assert!(matches!(expr, Expr::Mul(_, _)));
    }

    #[test]
    #[should_panic(expected = "finite and non-negative")]
    fn negative_number_rejected() {
        Expr::number(-1.0);
    }

    #[test]
    #[should_panic(expected = "finite and non-negative")]
    fn nan_rejected() {
        Expr::number(f64::NAN);
    }

    #[test]
    #[should_panic(expected = "words of ASCII letters")]
    fn empty_variable_name_rejected() {
        Expr::variable("");
    }

    #[test]
    #[should_panic(expected = "words of ASCII letters")]
    fn non_letter_variable_name_rejected() {
        Expr::variable("x1");
    }

    #[test]
    fn parse_preserves_literal_values() {
        use assert_float_eq::assert_float_absolute_eq;

        match parse("3.25").unwrap() {
            Expr::Number(value) => assert_float_absolute_eq!(value, 3.25),
            other => panic!("expected a number, got {other:?}"),
        }
    }

    #[test]
    fn round_trip() {
        let cases = [
            Expr::number(0.0),
            Expr::number(2.5),
            Expr::variable("foo"),
            Expr::sum(
                Expr::times(Expr::number(3.0), Expr::variable("x")),
                Expr::number(2.5),
            ),
            Expr::times(
                Expr::sum(Expr::variable("x"), Expr::variable("y")),
                Expr::sum(Expr::variable("x"), Expr::number(1.0)),
            ),
        ];

        for expr in cases {
            let rendered = expr.to_string();
            assert_eq!(parse(&rendered).unwrap(), expr, "round-tripping {rendered}");
        }
    }
}
