//! An engine for complex-number expressions.
//!
//! Input text is scanned into [`Token`]s, parsed into an expression tree ([`RcExpr`]), and then
//! either evaluated to a [`Complex`] value or canonicalized for structural comparison. Free
//! variables can be found with [`extract_variables`] and bound with [`substitute_variables`]; a
//! [`Session`] ties these steps together the way an interactive calculator uses them.
//!
//! ```
//! use libcalc::{evaluate, format_complex, parse_expression};
//!
//! let expr = parse_expression("(2+3i)*(1-i)").unwrap();
//! assert_eq!(format_complex(evaluate(&expr).unwrap()), "5 + i");
//! ```
//!
//! Every stage is a pure function of its input.

#[macro_use]
pub mod diagnostics;
pub use diagnostics::{all_codes_with_explanations, Diagnostic, DiagnosticKind};

mod error;
pub use error::{BindingPart, CalcError, Found, SyntaxError};

mod utils;

mod math;
pub use math::Complex;

pub mod scanner;
pub use scanner::scan;
pub use scanner::types::Token;

mod grammar;
pub use grammar::{BinaryExpr, BinaryOperator, Expr, RcExpr, UnaryExpr, UnaryOperator};

mod parser;
pub use parser::{parse_expression, parse_tokens, MAX_NESTING};

mod emit;
pub use emit::{format_complex, format_lisp, Emit, EmitFormat};

mod canonical;
pub use canonical::{canonicalize, structurally_equal};

mod variables;
pub use variables::{extract_variables, substitute_variables, Bindings};

mod evaluator;
pub use evaluator::evaluate;

mod session;
pub use session::{parse_binding, percent, HistoryEntry, Outcome, Pending, Session, HISTORY_LIMIT};
