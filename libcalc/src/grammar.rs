//! The expression tree produced by the parser and consumed by every later stage.

mod collectors;
mod transformer;
mod visitor;
pub use collectors::*;
pub use transformer::*;
pub use visitor::*;

use crate::math::Complex;
use crate::scanner::types::{CONJ, EQUAL};

use core::fmt;
use std::rc::Rc;

/// A shared, immutable expression tree.
pub type RcExpr = Rc<Expr>;

/// An expression tree node.
///
/// Leaves are numerals, the imaginary unit, variables, and literal values. Operations carry their
/// children in [`BinaryExpr`] or [`UnaryExpr`], so an operator can never be built with the wrong
/// number of operands. Trees are never mutated; transformations build new trees.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    /// A decimal numeral, kept exactly as written.
    Num(String),
    /// The imaginary unit `i`.
    Imaginary,
    /// A free variable.
    Var(String),
    /// A literal complex value, produced by variable substitution.
    Lit(Complex),
    BinaryExpr(BinaryExpr),
    UnaryExpr(UnaryExpr),
}

impl Expr {
    /// Is this node a leaf?
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Expr::BinaryExpr(_) | Expr::UnaryExpr(_))
    }

    /// The top-level binary operator, if any.
    pub fn binary_op(&self) -> Option<BinaryOperator> {
        match self {
            Expr::BinaryExpr(BinaryExpr { op, .. }) => Some(*op),
            _ => None,
        }
    }

    /// The numeral/operator tree denoting the value `c`: `2`, `i`, `0 - i`, `3 * i`, `2 + 3 * i`,
    /// or `2 - 3 * i`. A negative real part is a single numeral, like `-2`.
    pub fn literal_tree(c: Complex) -> RcExpr {
        // `-0` prints as `0`.
        let num = |x: f64| Rc::new(Expr::Num((x + 0.0).to_string()));
        let imag_term = |im: f64| {
            if im == 1.0 {
                Rc::new(Expr::Imaginary)
            } else {
                BinaryExpr::rc(BinaryOperator::Mult, num(im), Rc::new(Expr::Imaginary))
            }
        };

        if c.im == 0.0 {
            num(c.re)
        } else if c.re == 0.0 {
            if c.im == -1.0 {
                Expr::negation(Rc::new(Expr::Imaginary))
            } else {
                imag_term(c.im)
            }
        } else if c.im > 0.0 {
            BinaryExpr::rc(BinaryOperator::Plus, num(c.re), imag_term(c.im))
        } else {
            BinaryExpr::rc(BinaryOperator::Minus, num(c.re), imag_term(-c.im))
        }
    }

    /// `-x`, desugared to `0 - x`.
    pub fn negation(rhs: RcExpr) -> RcExpr {
        BinaryExpr::rc(BinaryOperator::Minus, Rc::new(Expr::Num("0".into())), rhs)
    }
}

impl From<Complex> for Expr {
    fn from(c: Complex) -> Self {
        Expr::Lit(c)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(binary_expr: BinaryExpr) -> Self {
        Expr::BinaryExpr(binary_expr)
    }
}

impl From<UnaryExpr> for Expr {
    fn from(unary_expr: UnaryExpr) -> Self {
        Expr::UnaryExpr(unary_expr)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum BinaryOperator {
    // Discriminant values exist for ease of precedence comparison; see `precedence`.
    Equal = 0,
    Plus = 10,
    Minus = 11,
    Mult = 20,
    Div = 21,
    Exp = 30,
}

impl BinaryOperator {
    /// Binding strength. Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        *self as u8 / 10
    }

    /// Can operands be regrouped without changing the result?
    pub fn is_associative(&self) -> bool {
        matches!(self, Self::Plus | Self::Mult)
    }

    /// Can operands be swapped without changing the result? Only these operators are reordered
    /// by canonicalization.
    pub fn is_commutative(&self) -> bool {
        matches!(self, Self::Plus | Self::Mult)
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(self, Self::Exp)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => EQUAL,
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mult => "*",
            Self::Div => "/",
            Self::Exp => "^",
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum UnaryOperator {
    Sqrt,
    Conj,
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Conj => CONJ,
        }
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct BinaryExpr {
    pub op: BinaryOperator,
    pub lhs: RcExpr,
    pub rhs: RcExpr,
}

impl BinaryExpr {
    pub fn new(op: BinaryOperator, lhs: RcExpr, rhs: RcExpr) -> Self {
        Self { op, lhs, rhs }
    }

    /// Builds the binary expression as a shared tree node.
    pub fn rc(op: BinaryOperator, lhs: RcExpr, rhs: RcExpr) -> RcExpr {
        Rc::new(Self::new(op, lhs, rhs).into())
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct UnaryExpr {
    pub op: UnaryOperator,
    pub rhs: RcExpr,
}

impl UnaryExpr {
    pub fn new(op: UnaryOperator, rhs: RcExpr) -> Self {
        Self { op, rhs }
    }

    /// Builds the unary expression as a shared tree node.
    pub fn rc(op: UnaryOperator, rhs: RcExpr) -> RcExpr {
        Rc::new(Self::new(op, rhs).into())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        use BinaryOperator::*;
        assert!(Equal.precedence() < Plus.precedence());
        assert_eq!(Plus.precedence(), Minus.precedence());
        assert!(Minus.precedence() < Mult.precedence());
        assert_eq!(Mult.precedence(), Div.precedence());
        assert!(Div.precedence() < Exp.precedence());
    }

    #[test]
    fn only_plus_and_mult_commute() {
        use BinaryOperator::*;
        let commuting: Vec<_> = vec![Equal, Plus, Minus, Mult, Div, Exp]
            .into_iter()
            .filter(BinaryOperator::is_commutative)
            .collect();
        assert_eq!(commuting, vec![Plus, Mult]);
    }

    #[test]
    fn negation_desugars_to_subtraction() {
        let neg = Expr::negation(Rc::new(Expr::Var("x".into())));
        assert_eq!(
            *neg,
            Expr::BinaryExpr(BinaryExpr::new(
                BinaryOperator::Minus,
                Rc::new(Expr::Num("0".into())),
                Rc::new(Expr::Var("x".into()))
            ))
        );
    }

    #[test]
    fn literal_trees() {
        let num = |n: &str| Rc::new(Expr::Num(n.into()));
        assert_eq!(Expr::literal_tree(Complex::real(-2.5)), num("-2.5"));
        assert_eq!(Expr::literal_tree(Complex::I), Rc::new(Expr::Imaginary));
        assert_eq!(
            Expr::literal_tree(Complex::new(2.0, 3.0)),
            BinaryExpr::rc(
                BinaryOperator::Plus,
                num("2"),
                BinaryExpr::rc(BinaryOperator::Mult, num("3"), Rc::new(Expr::Imaginary))
            )
        );
    }

    #[test]
    fn leaves() {
        assert!(Expr::Imaginary.is_leaf());
        assert!(Expr::Lit(Complex::I).is_leaf());
        assert!(!Expr::negation(Rc::new(Expr::Imaginary)).is_leaf());
    }
}
