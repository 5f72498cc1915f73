use super::*;

/// A trait for transforming an expression tree into a new tree. The input is never modified;
/// untouched subtrees are shared with the output.
pub trait ExprTransformer {
    /// Transforms an expression.
    fn transform(&self, expr: &RcExpr) -> RcExpr {
        match expr.as_ref() {
            Expr::Var(var) => self.transform_var(var, expr),
            Expr::BinaryExpr(binary) => self.transform_binary(binary),
            Expr::UnaryExpr(unary) => self.transform_unary(unary),
            Expr::Lit(lit) => self.transform_lit(*lit, expr),
            Expr::Num(_) | Expr::Imaginary => expr.clone(),
        }
    }

    /// Transforms a literal value. `expr` is the literal's own node.
    fn transform_lit(&self, _lit: Complex, expr: &RcExpr) -> RcExpr {
        expr.clone()
    }

    /// Transforms a variable. `expr` is the variable's own node.
    fn transform_var(&self, _var: &str, expr: &RcExpr) -> RcExpr {
        expr.clone()
    }

    /// Transforms a binary expression, transforming its operands first.
    fn transform_binary(&self, expr: &BinaryExpr) -> RcExpr {
        BinaryExpr::rc(expr.op, self.transform(&expr.lhs), self.transform(&expr.rhs))
    }

    /// Transforms a unary expression, transforming its operand first.
    fn transform_unary(&self, expr: &UnaryExpr) -> RcExpr {
        UnaryExpr::rc(expr.op, self.transform(&expr.rhs))
    }
}
