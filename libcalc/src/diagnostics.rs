//! Diagnostics describe engine errors in a form suitable for presenting to a user.
//!
//! Every [`CalcError`](crate::CalcError) has a stable code (`P0002`, `V0001`, ...) registered
//! alongside a long-form explanation by the `define_errors!` macro in the module that raises it.

use crate::error::{CalcError, Found, SyntaxError};

use std::collections::HashMap;

/// Defines a set of diagnostic records and a registry collecting their codes and explanations.
///
/// The doc comments on each record are its long-form explanation.
macro_rules! define_errors {
    (registry $registry:ident; $($(#[doc = $doc:expr])+ $code:ident: $error:ident)*) => {
        $(
            $(#[doc = $doc])+
            pub(crate) struct $error;

            impl crate::diagnostics::DiagnosticRecord for $error {
                const CODE: &'static str = stringify!($code);
                const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
            }
        )*

        /// Diagnostic records registered by this module.
        pub struct $registry;

        impl crate::diagnostics::DiagnosticRegistry for $registry {
            #[allow(clippy::vec_init_then_push)]
            fn codes_with_explanations() -> Vec<(&'static str, &'static str)> {
                use crate::diagnostics::DiagnosticRecord;
                let mut vec = Vec::new();
                $(vec.push(($error::CODE, $error::EXPLANATION));)*
                vec
            }
        }
    };
}

/// A diagnostic with a code and an explanation.
pub trait DiagnosticRecord {
    const CODE: &'static str;
    const EXPLANATION: &'static str;
}

/// A collection of [`DiagnosticRecord`]s.
pub trait DiagnosticRegistry {
    fn codes_with_explanations() -> Vec<(&'static str, &'static str)>;
}

/// Returns every diagnostic code known to the engine, mapped to its explanation.
pub fn all_codes_with_explanations() -> HashMap<&'static str, &'static str> {
    use crate::evaluator::errors::EvaluatorErrors;
    use crate::parser::errors::ParseErrors;
    use crate::scanner::errors::ScanErrors;
    use crate::session::errors::SessionErrors;

    let mut codes = HashMap::new();
    codes.extend(ScanErrors::codes_with_explanations());
    codes.extend(ParseErrors::codes_with_explanations());
    codes.extend(EvaluatorErrors::codes_with_explanations());
    codes.extend(SessionErrors::codes_with_explanations());
    codes
}

/// The kind of a diagnostic.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum DiagnosticKind {
    /// An error diagnostic. Every diagnostic built from a [`CalcError`] is an error.
    Error,
    /// A generic annotation expanding on a primary diagnostic.
    Note,
    /// Instructs the user how their input can be changed to work.
    Help,
}

/// A secondary message attached to a primary [`Diagnostic`].
#[derive(Clone, Debug)]
pub struct AssociatedDiagnostic {
    pub kind: DiagnosticKind,
    pub msg: String,
}

/// A user-facing description of an engine error.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub title: String,
    pub code: Option<&'static str>,
    pub associated_diagnostics: Vec<AssociatedDiagnostic>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn err<M>(title: M, code: &'static str) -> Diagnostic
    where
        M: Into<String>,
    {
        Diagnostic {
            kind: DiagnosticKind::Error,
            title: title.into(),
            code: Some(code),
            associated_diagnostics: Vec::with_capacity(2),
        }
    }

    /// Adds a note to the diagnostic.
    pub fn with_note<M>(mut self, note: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Note,
            msg: note.into(),
        });
        self
    }

    /// Adds a help message to the diagnostic.
    pub fn with_help<M>(mut self, help: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Help,
            msg: help.into(),
        });
        self
    }
}

impl From<&CalcError> for Diagnostic {
    fn from(err: &CalcError) -> Self {
        use CalcError::*;
        let diag = Diagnostic::err(err.to_string(), err.code());
        match err {
            InvalidInput => diag
                .with_note("expressions are built from numbers, letters, and + - * / ^ √ ( )"),
            Syntax(syntax) if syntax.found() == &Found::Token("equal".into()) => diag.with_note(
                r#""equal" may appear once, at the top of an expression or inside parentheses"#,
            ),
            Syntax(SyntaxError::TrailingTokens(_)) => {
                diag.with_help("consider joining the extra tokens with an operator")
            }
            Syntax(SyntaxError::UnexpectedToken(_)) => diag,
            Syntax(SyntaxError::MissingClosingParen(_)) => diag.with_help(r#"add a closing ")""#),
            Syntax(SyntaxError::NestingTooDeep(_)) => {
                diag.with_note("expressions may nest at most 128 levels deep")
            }
            DivisionByZero => diag,
            UnboundVariable(_) => diag.with_help("bind the variable to a value before evaluating"),
            InvalidOperation(_) => diag
                .with_note(r#""equal" compares the structure of two expressions; it has no numeric value"#),
            InvalidNumeral(_) => diag,
            InvalidBinding { .. } => diag.with_note("an empty part is treated as 0"),
        }
    }
}
