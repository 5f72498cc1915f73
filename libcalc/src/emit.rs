//! Emit strategies for expression trees and complex values.

use crate::grammar::*;
use crate::math::Complex;
use crate::scanner::types::IMAGINARY_UNIT;

use core::fmt;

/// The format in which an expression should be emitted.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum EmitFormat {
    /// Canonical, human-readable infix form.
    /// For example, `1+1` is output as `1 + 1`.
    Pretty,
    /// Fully-parenthesized prefix form.
    /// For example, `1+1` is output as `(+ 1 1)`.
    SExpression,
    /// Internal debug form.
    /// NB: this form is not stable, and no assumptions should be made about it.
    Debug,
}

impl From<&str> for EmitFormat {
    fn from(form: &str) -> Self {
        match form {
            "s-expression" => EmitFormat::SExpression,
            "debug" => EmitFormat::Debug,
            _ => EmitFormat::Pretty,
        }
    }
}

impl From<String> for EmitFormat {
    fn from(form: String) -> Self {
        form.as_str().into()
    }
}

/// Implements the emission of a type in an [EmitFormat][EmitFormat].
pub trait Emit
where
    Self: fmt::Display + fmt::Debug,
{
    /// Emit `self` with the given [EmitFormat][EmitFormat].
    fn emit(&self, form: EmitFormat) -> String {
        match form {
            EmitFormat::Pretty => self.emit_pretty(),
            EmitFormat::SExpression => self.emit_s_expression(),
            EmitFormat::Debug => self.emit_debug(),
        }
    }

    /// Emit `self` with the [pretty emit format][EmitFormat::Pretty]
    fn emit_pretty(&self) -> String;

    /// Emit `self` with the [s-expression emit format][EmitFormat::SExpression]
    fn emit_s_expression(&self) -> String;

    /// Emit `self` with the [debug emit format][EmitFormat::Debug]
    fn emit_debug(&self) -> String {
        format!("{:#?}", self)
    }
}

/// Formats an expression as a fully-parenthesized prefix string, `(op child₁ … childₙ)`.
///
/// This serialization doubles as the sort key for canonicalization, so it must stay stable.
pub fn format_lisp(expr: &Expr) -> String {
    expr.emit_s_expression()
}

/// Formats a complex value for display.
///
/// Both parts are rounded to 10 decimal places. The imaginary term is omitted when it rounds to
/// zero, a unit coefficient on `i` is omitted, and the sign of the imaginary part joins the two
/// terms.
pub fn format_complex(c: Complex) -> String {
    let re = round10(c.re);
    let im = round10(c.im);
    let imag_term = |im: f64| {
        if im == 1.0 {
            IMAGINARY_UNIT.to_owned()
        } else {
            format!("{}{}", im, IMAGINARY_UNIT)
        }
    };

    if im == 0.0 {
        re.to_string()
    } else if re == 0.0 {
        if im == -1.0 {
            format!("-{}", IMAGINARY_UNIT)
        } else {
            imag_term(im)
        }
    } else if im > 0.0 {
        format!("{} + {}", re, imag_term(im))
    } else {
        format!("{} - {}", re, imag_term(-im))
    }
}

/// Rounds to 10 decimal places, normalizing negative zero.
fn round10(x: f64) -> f64 {
    let rounded = format!("{:.10}", x).parse::<f64>().unwrap_or(x);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Implements `core::fmt::Display` for a type implementing `Emit`.
#[doc(hidden)]
macro_rules! fmt_emit_impl {
    ($S:path) => {
        impl core::fmt::Display for $S {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.emit_pretty())
            }
        }
    };
}

fmt_emit_impl!(Expr);
impl Emit for Expr {
    fn emit_pretty(&self) -> String {
        match self {
            Self::Num(num) => num.clone(),
            Self::Imaginary => IMAGINARY_UNIT.to_owned(),
            Self::Var(var) => var.clone(),
            Self::Lit(lit) => lit.emit_pretty(),
            Self::BinaryExpr(binary_expr) => binary_expr.emit_pretty(),
            Self::UnaryExpr(unary_expr) => unary_expr.emit_pretty(),
        }
    }

    fn emit_s_expression(&self) -> String {
        match self {
            Self::Num(num) => num.clone(),
            Self::Imaginary => IMAGINARY_UNIT.to_owned(),
            Self::Var(var) => var.clone(),
            Self::Lit(lit) => lit.emit_s_expression(),
            Self::BinaryExpr(BinaryExpr { op, lhs, rhs }) => format!(
                "({} {} {})",
                op,
                lhs.emit_s_expression(),
                rhs.emit_s_expression()
            ),
            Self::UnaryExpr(UnaryExpr { op, rhs }) => {
                format!("({} {})", op, rhs.emit_s_expression())
            }
        }
    }
}

/// Formats an operand of an operator, parenthesizing it where the infix form would otherwise
/// re-parse differently.
fn format_operand(arg: &RcExpr, parent: Option<BinaryOperator>, right_child: bool) -> String {
    match arg.as_ref() {
        // We want to format items like
        //    v--------- child op
        //         v---- parent op
        // (3 + 5) ^ 2
        //  3 + 5  + 2
        //  3 * 5  + 2
        // and
        //   v---------- parent op
        //        v----- child op
        // 2 +  3 + 5
        // 2 - (3 + 5)
        // 2 * (3 + 5)
        //
        // - a child of lower precedence is always parenthesized;
        // - a child of equal precedence is parenthesized on the right unless it repeats an
        //   associative parent, and on the left when the parent is right-associative.
        Expr::BinaryExpr(child) => {
            let parenthesize = match parent {
                None => true,
                Some(parent) => {
                    child.op.precedence() < parent.precedence()
                        || (child.op.precedence() == parent.precedence()
                            && ((right_child
                                && !(parent.is_associative() && child.op == parent))
                                || (!right_child && parent.is_right_associative())))
                }
            };
            if parenthesize {
                format!("({})", child.emit_pretty())
            } else {
                child.emit_pretty()
            }
        }
        // Only non-negative reals print as a bare numeral.
        Expr::Lit(lit) if !(lit.is_real() && lit.re >= 0.0) => format!("({})", lit.emit_pretty()),
        expr => expr.emit_pretty(),
    }
}

fmt_emit_impl!(BinaryExpr);
impl Emit for BinaryExpr {
    fn emit_pretty(&self) -> String {
        format!(
            "{} {} {}",
            format_operand(&self.lhs, Some(self.op), false),
            self.op,
            format_operand(&self.rhs, Some(self.op), true)
        )
    }

    fn emit_s_expression(&self) -> String {
        Expr::BinaryExpr(self.clone()).emit_s_expression()
    }
}

fmt_emit_impl!(UnaryExpr);
impl Emit for UnaryExpr {
    fn emit_pretty(&self) -> String {
        match (self.op, self.rhs.as_ref()) {
            (UnaryOperator::Sqrt, rhs) if rhs.is_leaf() => {
                format!("{}{}", self.op, format_operand(&self.rhs, None, false))
            }
            (UnaryOperator::Sqrt, _) => format!("{}({})", self.op, self.rhs.emit_pretty()),
            // `conj` is a word, so it always takes parentheses to stay apart from a following
            // variable name.
            (UnaryOperator::Conj, _) => format!("{}({})", self.op, self.rhs.emit_pretty()),
        }
    }

    fn emit_s_expression(&self) -> String {
        format!("({} {})", self.op, self.rhs.emit_s_expression())
    }
}

impl Emit for RcExpr {
    fn emit_pretty(&self) -> String {
        self.as_ref().emit_pretty()
    }

    fn emit_s_expression(&self) -> String {
        self.as_ref().emit_s_expression()
    }
}

fmt_emit_impl!(Complex);
impl Emit for Complex {
    fn emit_pretty(&self) -> String {
        format_complex(*self)
    }

    /// A literal value is emitted as the numeral/operator tree that denotes it: `2`, `i`,
    /// `(- 0 i)`, `(* 3 i)`, `(+ 2 (* 3 i))`, `(- 2 i)`.
    fn emit_s_expression(&self) -> String {
        Expr::literal_tree(*self).emit_s_expression()
    }
}
