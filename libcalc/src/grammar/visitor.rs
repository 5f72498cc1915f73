//! A read-only walk over expression trees.

use super::*;
use crate::math::Complex;

/// Describes an expression tree visitor. Every method defaults to walking children left to right,
/// so implementors override only the nodes they care about.
pub trait ExprVisitor<'a> {
    /// Visits an expression.
    fn visit_expr(&mut self, expr: &'a RcExpr) {
        match expr.as_ref() {
            Expr::Num(num) => self.visit_num(num),
            Expr::Imaginary => self.visit_imaginary(),
            Expr::Var(var) => self.visit_var(var),
            Expr::Lit(lit) => self.visit_lit(lit),
            Expr::BinaryExpr(binary) => self.visit_binary(binary),
            Expr::UnaryExpr(unary) => self.visit_unary(unary),
        }
    }

    /// Visits a numeral.
    fn visit_num(&mut self, _num: &'a str) {}

    /// Visits the imaginary unit.
    fn visit_imaginary(&mut self) {}

    /// Visits a variable.
    fn visit_var(&mut self, _var: &'a str) {}

    /// Visits a literal value.
    fn visit_lit(&mut self, _lit: &'a Complex) {}

    /// Visits a binary operator.
    fn visit_binary_op(&mut self, _op: BinaryOperator) {}

    /// Visits a binary expression.
    fn visit_binary(&mut self, expr: &'a BinaryExpr) {
        self.visit_expr(&expr.lhs);
        self.visit_binary_op(expr.op);
        self.visit_expr(&expr.rhs);
    }

    /// Visits a unary operator.
    fn visit_unary_op(&mut self, _op: UnaryOperator) {}

    /// Visits a unary expression.
    fn visit_unary(&mut self, expr: &'a UnaryExpr) {
        self.visit_unary_op(expr.op);
        self.visit_expr(&expr.rhs);
    }
}
