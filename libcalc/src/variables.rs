//! Free variables: finding them and binding them to values.

use crate::emit::format_lisp;
use crate::grammar::*;
use crate::math::Complex;

use std::collections::HashMap;
use std::rc::Rc;

/// Values for free variables, by name.
pub type Bindings = HashMap<String, Complex>;

/// Returns the distinct variable names in `expr`, in order of first occurrence.
pub fn extract_variables(expr: &RcExpr) -> Vec<String> {
    collect_var_names(expr)
}

/// Replaces every variable bound in `bindings` with a literal leaf holding its value. Unbound
/// variables are left in place.
pub fn substitute_variables(expr: &RcExpr, bindings: &Bindings) -> RcExpr {
    let substituted = VariableSubstitutor { bindings }.transform(expr);
    log::trace!("substituted {}", format_lisp(&substituted));
    substituted
}

struct VariableSubstitutor<'a> {
    bindings: &'a Bindings,
}

impl ExprTransformer for VariableSubstitutor<'_> {
    fn transform_var(&self, var: &str, expr: &RcExpr) -> RcExpr {
        match self.bindings.get(var) {
            Some(value) => Rc::new(Expr::Lit(*value)),
            None => expr.clone(),
        }
    }
}
