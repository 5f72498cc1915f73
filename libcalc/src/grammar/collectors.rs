//! Module `collectors` provides utilities for collecting items in an expression tree.

use super::{ExprVisitor, RcExpr};

use std::collections::HashSet;

/// Collects the unique variable names in an expression, in order of first occurrence.
pub fn collect_var_names(expr: &RcExpr) -> Vec<String> {
    let mut collector = VarNameCollector::default();
    collector.visit_expr(expr);
    collector.vars
}

#[derive(Default)]
struct VarNameCollector<'a> {
    seen: HashSet<&'a str>,
    vars: Vec<String>,
}

impl<'a> ExprVisitor<'a> for VarNameCollector<'a> {
    fn visit_var(&mut self, var: &'a str) {
        if self.seen.insert(var) {
            self.vars.push(var.to_owned());
        }
    }
}

#[cfg(test)]
mod test {
    use crate::parse_expression;

    #[test]
    fn collect_var_names() {
        let parsed = parse_expression("a + b + c + a + d / b ^ e").unwrap();
        let vars = super::collect_var_names(&parsed);

        assert_eq!(vars, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn first_occurrence_order() {
        let parsed = parse_expression("z * (y equal x) + z").unwrap();
        assert_eq!(super::collect_var_names(&parsed), vec!["z", "y", "x"]);
    }

    #[test]
    fn no_vars() {
        let parsed = parse_expression("conj(2 + 3i) ^ √4").unwrap();
        assert!(super::collect_var_names(&parsed).is_empty());
    }
}
