//! A calculation session: the compute-then-display loop around the engine.
//!
//! An input either computes immediately or, when it has free variables, is held as a [`Pending`]
//! calculation until the caller supplies [`Bindings`] for it. Successful computations are kept in
//! a short history.

pub mod errors;

use crate::canonical::structurally_equal;
use crate::emit::{format_complex, format_lisp};
use crate::error::{BindingPart, CalcError};
use crate::evaluator::evaluate;
use crate::grammar::{BinaryExpr, BinaryOperator, Expr, RcExpr};
use crate::math::Complex;
use crate::parser::parse_expression;
use crate::variables::{extract_variables, substitute_variables, Bindings};

use std::collections::VecDeque;

/// The number of computations a [`Session`] remembers.
pub const HISTORY_LIMIT: usize = 10;

/// The result of submitting an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A numeric result.
    Value(Complex),
    /// The result of a top-level `equal` comparison.
    Verdict(bool),
    /// The expression has free variables, and is waiting for bindings.
    NeedsBindings(Pending),
}

/// A parsed calculation waiting for its free variables to be bound.
#[derive(Clone, Debug, PartialEq)]
pub struct Pending {
    /// The expression as the user wrote it.
    pub expression: String,
    pub ast: RcExpr,
    /// The s-expression form of `ast`, with preset bindings already substituted.
    pub lisp: String,
    /// Variables of `ast` still without a value, in order of first occurrence.
    pub variables: Vec<String>,
}

/// A remembered computation.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub expression: String,
    /// The formatted value, or `true`/`false` for a comparison.
    pub result: String,
}

/// A calculation session.
#[derive(Default, Debug)]
pub struct Session {
    history: VecDeque<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `input`, binds the variables `preset` has values for, and computes the result.
    ///
    /// A top-level `equal` comparison is always computed right away, since structural comparison
    /// does not need the remaining variables to have values. Any other expression with unbound
    /// variables yields [`Outcome::NeedsBindings`]; pass the [`Pending`] calculation to
    /// [`resume`](Session::resume).
    pub fn submit(&mut self, input: &str, preset: &Bindings) -> Result<Outcome, CalcError> {
        let ast = substitute_variables(&parse_expression(input)?, preset);
        let variables = extract_variables(&ast);
        if variables.is_empty() || ast.binary_op() == Some(BinaryOperator::Equal) {
            return self.compute(input, &ast);
        }

        let pending = Pending {
            expression: input.to_owned(),
            lisp: format_lisp(&ast),
            ast,
            variables,
        };
        log::debug!(
            "{} is pending bindings for {}",
            pending.lisp,
            pending.variables.join(", ")
        );
        Ok(Outcome::NeedsBindings(pending))
    }

    /// Binds the free variables of a pending calculation and computes it.
    ///
    /// Variables missing from `bindings` stay free, and fail evaluation as unbound.
    pub fn resume(&mut self, pending: Pending, bindings: &Bindings) -> Result<Outcome, CalcError> {
        log::debug!("resuming {}", pending.lisp);
        let ast = substitute_variables(&pending.ast, bindings);
        self.compute(&pending.expression, &ast)
    }

    /// Computed expressions, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn compute(&mut self, expression: &str, ast: &RcExpr) -> Result<Outcome, CalcError> {
        let (outcome, result) = match ast.as_ref() {
            Expr::BinaryExpr(BinaryExpr {
                op: BinaryOperator::Equal,
                lhs,
                rhs,
            }) => {
                let verdict = structurally_equal(lhs, rhs);
                (Outcome::Verdict(verdict), verdict.to_string())
            }
            _ => {
                let value = evaluate(ast)?;
                (Outcome::Value(value), format_complex(value))
            }
        };
        self.remember(HistoryEntry {
            expression: expression.to_owned(),
            result,
        });
        Ok(outcome)
    }

    fn remember(&mut self, entry: HistoryEntry) {
        self.history.push_front(entry);
        if self.history.len() > HISTORY_LIMIT {
            self.history.truncate(HISTORY_LIMIT);
            log::debug!("history trimmed to {} entries", HISTORY_LIMIT);
        }
    }
}

/// Builds the value of `var` from user-entered real and imaginary parts. An empty part is `0`.
pub fn parse_binding(var: &str, real: &str, imag: &str) -> Result<Complex, CalcError> {
    let parse_part = |part: BindingPart, value: &str| {
        let value = value.trim();
        if value.is_empty() {
            return Ok(0.0);
        }
        match value.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(parsed),
            _ => Err(CalcError::InvalidBinding {
                var: var.to_owned(),
                part,
                value: value.to_owned(),
            }),
        }
    };
    Ok(Complex::new(
        parse_part(BindingPart::Real, real)?,
        parse_part(BindingPart::Imaginary, imag)?,
    ))
}

/// The calculator's `%` key: divides a plain numeric display value by 100.
///
/// Returns `None` when there is nothing to divide, that is, when `display` is empty, `0`, or not
/// a plain number.
pub fn percent(display: &str) -> Option<String> {
    let display = display.trim();
    if display.is_empty() || display == "0" {
        return None;
    }
    match display.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(format_complex(Complex::real(value / 100.0))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn value(outcome: Outcome) -> Complex {
        match outcome {
            Outcome::Value(value) => value,
            other => panic!("expected a value, got {:?}", other),
        }
    }

    fn pending(outcome: Outcome) -> Pending {
        match outcome {
            Outcome::NeedsBindings(pending) => pending,
            other => panic!("expected a pending calculation, got {:?}", other),
        }
    }

    #[test]
    fn computes_closed_expressions() {
        let mut session = Session::new();
        let outcome = session.submit("2+3*4", &Bindings::new()).unwrap();
        assert_eq!(value(outcome), Complex::real(14.0));
    }

    #[test]
    fn equality_needs_no_bindings() {
        let mut session = Session::new();
        assert_eq!(
            session.submit("x+1 equal 1+x", &Bindings::new()).unwrap(),
            Outcome::Verdict(true)
        );
        assert_eq!(
            session.submit("x-1 equal 1-x", &Bindings::new()).unwrap(),
            Outcome::Verdict(false)
        );
        assert_eq!(
            session.submit("2+3 equal 5", &Bindings::new()).unwrap(),
            Outcome::Verdict(false)
        );
    }

    #[test]
    fn free_variables_pend() {
        let mut session = Session::new();
        let pending = pending(session.submit("x*y + x", &Bindings::new()).unwrap());
        assert_eq!(pending.expression, "x*y + x");
        assert_eq!(pending.lisp, "(+ (* x y) x)");
        assert_eq!(pending.variables, vec!["x", "y"]);
        assert_eq!(session.history().count(), 0);

        let bindings: Bindings = vec![
            ("x".to_owned(), Complex::real(2.0)),
            ("y".to_owned(), Complex::I),
        ]
        .into_iter()
        .collect();
        let result = session.resume(pending, &bindings).unwrap();
        assert_eq!(value(result), Complex::new(2.0, 2.0));
        assert_eq!(
            session.history().next(),
            Some(&HistoryEntry {
                expression: "x*y + x".into(),
                result: "2 + 2i".into(),
            })
        );
    }

    #[test]
    fn preset_bindings_reach_comparisons() {
        let mut session = Session::new();
        let x_is_one: Bindings = vec![("x".to_owned(), Complex::real(1.0))]
            .into_iter()
            .collect();
        assert_eq!(
            session.submit("x+1 equal 1+1", &x_is_one).unwrap(),
            Outcome::Verdict(true)
        );
        assert_eq!(
            session.submit("x+1 equal 2", &x_is_one).unwrap(),
            Outcome::Verdict(false)
        );
        // Variables without a preset value are compared as they are.
        assert_eq!(
            session.submit("x+y equal y+1", &x_is_one).unwrap(),
            Outcome::Verdict(true)
        );
    }

    #[test]
    fn preset_bindings_narrow_pending_variables() {
        let mut session = Session::new();
        let preset: Bindings = vec![("x".to_owned(), Complex::real(2.0))]
            .into_iter()
            .collect();
        let pending = pending(session.submit("x*y + x", &preset).unwrap());
        assert_eq!(pending.lisp, "(+ (* 2 y) 2)");
        assert_eq!(pending.variables, vec!["y"]);

        let bindings: Bindings = vec![("y".to_owned(), Complex::I)].into_iter().collect();
        let result = session.resume(pending, &bindings).unwrap();
        assert_eq!(value(result), Complex::new(2.0, 2.0));
    }

    #[test]
    fn resume_with_missing_binding() {
        let mut session = Session::new();
        let pending = pending(session.submit("x + y", &Bindings::new()).unwrap());
        let bindings: Bindings = vec![("x".to_owned(), Complex::real(1.0))]
            .into_iter()
            .collect();
        assert_eq!(
            session.resume(pending, &bindings),
            Err(CalcError::UnboundVariable("y".into()))
        );
    }

    #[test]
    fn errors_propagate_and_are_not_remembered() {
        let mut session = Session::new();
        assert_eq!(
            session.submit("5/(0)", &Bindings::new()),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            session.submit("@@", &Bindings::new()),
            Err(CalcError::InvalidInput)
        );
        assert_eq!(session.history().count(), 0);
    }

    #[test]
    fn history_is_most_recent_first_and_bounded() {
        let mut session = Session::new();
        for n in 0..12 {
            session.submit(&n.to_string(), &Bindings::new()).unwrap();
        }
        let results: Vec<_> = session.history().map(|e| e.result.as_str()).collect();
        assert_eq!(
            results,
            vec!["11", "10", "9", "8", "7", "6", "5", "4", "3", "2"]
        );

        session.submit("1 equal 1", &Bindings::new()).unwrap();
        assert_eq!(session.history().next().map(|e| e.result.as_str()), Some("true"));

        session.clear_history();
        assert_eq!(session.history().count(), 0);
    }

    macro_rules! binding_tests {
        ($($name:ident: ($real:expr, $imag:expr) => $result:expr)*) => {
        $(
            #[test]
            fn $name() {
                let expected: Result<Complex, CalcError> = $result;
                assert_eq!(parse_binding("x", $real, $imag), expected);
            }
        )*
        }
    }

    mod parse_binding {
        use super::*;
        use pretty_assertions::assert_eq;

        fn invalid(part: BindingPart, value: &str) -> Result<Complex, CalcError> {
            Err(CalcError::InvalidBinding {
                var: "x".into(),
                part,
                value: value.into(),
            })
        }

        binding_tests! {
            both_parts:      ("2", "-3")      => Ok(Complex::new(2.0, -3.0))
            empty_real:      ("", "1.5")      => Ok(Complex::new(0.0, 1.5))
            empty_imag:      ("4", "")        => Ok(Complex::real(4.0))
            both_empty:      ("  ", "")       => Ok(Complex::real(0.0))
            exponent:        ("1e3", "0")     => Ok(Complex::real(1000.0))
            bad_real:        ("two", "0")     => invalid(BindingPart::Real, "two")
            bad_imag:        ("1", "3i")      => invalid(BindingPart::Imaginary, "3i")
            not_finite:      ("inf", "0")     => invalid(BindingPart::Real, "inf")
        }
    }

    #[test]
    fn percent_key() {
        assert_eq!(percent("50"), Some("0.5".to_owned()));
        assert_eq!(percent("-12.5"), Some("-0.125".to_owned()));
        assert_eq!(percent("0"), None);
        assert_eq!(percent(""), None);
        assert_eq!(percent("3 + 2i"), None);
    }
}
