//! Numeric evaluation of expression trees.

pub mod errors;

use crate::emit::format_lisp;
use crate::error::CalcError;
use crate::grammar::*;
use crate::math::Complex;

/// Evaluates `expr` to a complex value.
///
/// Operands are evaluated before their operator is applied. Fails on division by zero, on free
/// variables, on the `equal` operator, and on malformed numerals.
pub fn evaluate(expr: &RcExpr) -> Result<Complex, CalcError> {
    log::trace!("evaluating {}", format_lisp(expr));
    eval_expr(expr)
}

fn eval_expr(expr: &Expr) -> Result<Complex, CalcError> {
    match expr {
        Expr::Num(num) => eval_numeral(num),
        Expr::Imaginary => Ok(Complex::I),
        Expr::Lit(value) => Ok(*value),
        Expr::Var(var) => Err(CalcError::UnboundVariable(var.clone())),
        Expr::BinaryExpr(binary) => eval_binary(binary),
        Expr::UnaryExpr(UnaryExpr { op, rhs }) => {
            let rhs = eval_expr(rhs)?;
            Ok(match op {
                UnaryOperator::Sqrt => rhs.sqrt(),
                UnaryOperator::Conj => rhs.conj(),
            })
        }
    }
}

fn eval_binary(BinaryExpr { op, lhs, rhs }: &BinaryExpr) -> Result<Complex, CalcError> {
    if let BinaryOperator::Equal = op {
        return Err(CalcError::InvalidOperation(op.to_string()));
    }
    let lhs = eval_expr(lhs)?;
    let rhs = eval_expr(rhs)?;
    match op {
        BinaryOperator::Plus => Ok(lhs + rhs),
        BinaryOperator::Minus => Ok(lhs - rhs),
        BinaryOperator::Mult => Ok(lhs * rhs),
        BinaryOperator::Div => lhs.try_div(rhs),
        BinaryOperator::Exp => lhs.pow(rhs),
        BinaryOperator::Equal => Err(CalcError::InvalidOperation(op.to_string())),
    }
}

fn eval_numeral(num: &str) -> Result<Complex, CalcError> {
    let digits = num.strip_prefix('-').unwrap_or(num);
    let well_formed = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit() || c == '.');
    match num.parse::<f64>() {
        Ok(value) if well_formed => Ok(Complex::real(value)),
        _ => Err(CalcError::InvalidNumeral(num.to_owned())),
    }
}
