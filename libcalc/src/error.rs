//! The error type shared by every stage of the engine.

use crate::diagnostics::DiagnosticRecord;
use crate::evaluator::errors::*;
use crate::parser::errors::*;
use crate::scanner::errors::*;
use crate::session::errors::*;

use core::fmt;
use thiserror::Error;

/// What a parser found where it expected something else.
#[derive(Debug, Clone, PartialEq)]
pub enum Found {
    /// The text of the offending token.
    Token(String),
    /// The input ran out.
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(tok) => write!(f, r#""{}""#, tok),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A malformed token sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// A token that cannot start a factor.
    #[error("Expected an expression, found {0}")]
    UnexpectedToken(Found),
    /// A `(` whose matching `)` never came.
    #[error(r#"Expected closing ")", found {0}"#)]
    MissingClosingParen(Found),
    /// Tokens left over after a complete expression.
    #[error("Unexpected extra tokens, starting at {0}")]
    TrailingTokens(Found),
    /// A token that would open one nesting level too many.
    #[error("Expression nested too deeply at {0}")]
    NestingTooDeep(Found),
}

impl SyntaxError {
    /// The offending token, or end of input.
    pub fn found(&self) -> &Found {
        match self {
            SyntaxError::UnexpectedToken(found)
            | SyntaxError::MissingClosingParen(found)
            | SyntaxError::TrailingTokens(found)
            | SyntaxError::NestingTooDeep(found) => found,
        }
    }
}

/// Which half of a complex binding failed to parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindingPart {
    Real,
    Imaginary,
}

impl fmt::Display for BindingPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingPart::Real => write!(f, "real"),
            BindingPart::Imaginary => write!(f, "imaginary"),
        }
    }
}

/// Any failure raised by the engine. The first stage to detect a problem raises it; nothing is
/// retried or recovered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The scanner extracted no tokens at all.
    #[error("Invalid input: no recognizable tokens")]
    InvalidInput,

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("Division by zero")]
    DivisionByZero,

    /// A free variable reached the evaluator without a binding.
    #[error(r#"Unbound variable "{0}""#)]
    UnboundVariable(String),

    /// An operator that has no numeric meaning reached the evaluator.
    #[error(r#""{0}" cannot be evaluated numerically"#)]
    InvalidOperation(String),

    /// A numeral leaf whose text is not a number.
    #[error(r#"Invalid numeral "{0}""#)]
    InvalidNumeral(String),

    /// A user-supplied binding part that is not a number.
    #[error(r#"Invalid {part} part "{value}" for variable "{var}""#)]
    InvalidBinding {
        var: String,
        part: BindingPart,
        value: String,
    },
}

impl CalcError {
    /// The diagnostic code of this error. See
    /// [`all_codes_with_explanations`](crate::diagnostics::all_codes_with_explanations).
    pub fn code(&self) -> &'static str {
        use CalcError::*;
        match self {
            InvalidInput => NoTokens::CODE,
            Syntax(SyntaxError::TrailingTokens(_)) => ExtraTokens::CODE,
            Syntax(SyntaxError::UnexpectedToken(_)) => ExpectedExpr::CODE,
            Syntax(SyntaxError::MissingClosingParen(_)) => UnclosedParen::CODE,
            Syntax(SyntaxError::NestingTooDeep(_)) => TooDeep::CODE,
            DivisionByZero => DivideByZero::CODE,
            UnboundVariable(_) => UnboundVar::CODE,
            InvalidOperation(_) => NonNumericOperator::CODE,
            InvalidNumeral(_) => BadNumeral::CODE,
            InvalidBinding { .. } => BadBinding::CODE,
        }
    }

}
