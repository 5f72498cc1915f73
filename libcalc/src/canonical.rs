//! Canonical forms for structural comparison.
//!
//! Operands of commutative operators are ordered by their s-expression serialization. No
//! arithmetic simplification happens here: `2 + 3` and `5` are different canonical trees.

use crate::emit::format_lisp;
use crate::grammar::*;
use crate::math::Complex;

/// Rewrites `expr` so that the operands of every `+` and `*` are in a fixed order.
///
/// Canonicalization is idempotent, and two trees that differ only in the order of commutative
/// operands canonicalize to the same tree.
pub fn canonicalize(expr: &RcExpr) -> RcExpr {
    let canonical = Canonicalizer.transform(expr);
    log::trace!("canonicalized {} to {}", format_lisp(expr), format_lisp(&canonical));
    canonical
}

/// Do `lhs` and `rhs` have the same canonical form?
pub fn structurally_equal(lhs: &RcExpr, rhs: &RcExpr) -> bool {
    format_lisp(&canonicalize(lhs)) == format_lisp(&canonicalize(rhs))
}

struct Canonicalizer;

impl ExprTransformer for Canonicalizer {
    fn transform_lit(&self, lit: Complex, _expr: &RcExpr) -> RcExpr {
        self.transform(&Expr::literal_tree(lit))
    }

    fn transform_binary(&self, expr: &BinaryExpr) -> RcExpr {
        let lhs = self.transform(&expr.lhs);
        let rhs = self.transform(&expr.rhs);
        if expr.op.is_commutative() && format_lisp(&lhs) > format_lisp(&rhs) {
            BinaryExpr::rc(expr.op, rhs, lhs)
        } else {
            BinaryExpr::rc(expr.op, lhs, rhs)
        }
    }
}
