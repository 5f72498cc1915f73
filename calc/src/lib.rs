//! The calc app. For an overview of the engine, see [libcalc's documentation](libcalc).

#![deny(missing_docs)]

mod diagnostics;
pub use diagnostics::{emit_calc_diagnostics, emit_calc_error};

mod repl;
pub use repl::run_repl;

use libcalc::{
    all_codes_with_explanations, canonicalize, evaluate, format_complex, parse_expression,
    Bindings, CalcError, Diagnostic, Emit, EmitFormat, Outcome, Session,
};

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

// For wasm, use wee_alloc as a global allocator.
#[cfg(all(feature = "wasm", not(test)))]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Options to run calc with.
#[cfg_attr(feature = "wasm", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct Opts {
    /// Expression to compute. [None](Option::None) when calc should read expressions
    /// interactively.
    pub expression: Option<String>,
    /// How parsed expressions should be emitted with `parse_only` or `canonical`.
    pub emit_format: String,
    /// When true, calc will stop after parsing an expression and emit it.
    pub parse_only: bool,
    /// When true, calc will emit the canonical form of an expression instead of computing it.
    pub canonical: bool,
    /// Variable bindings, each of the form `name=value`.
    pub bindings: Vec<String>,
    /// When true, calc reads expressions line by line.
    pub interactive: bool,
    /// When is [Some](Option::Some) diagnostic code, will explain that code.
    pub explain_diagnostic: Option<String>,
    /// When true, calc diagnostics will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let app = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            clap::Arg::with_name("expression")
                .help("Expression to compute. When absent, expressions are read from stdin."),
        )
        .arg(
            clap::Arg::with_name("output-form")
                .short("-o")
                .long("--output-form")
                .next_line_help(true)
                .help(
                    "Emit format for --parse-only and --canonical. Possible values:\n\
                    \tpretty:       Human-readable text, like \"1 + 2 * i\".\n\
                    \ts-expression: Prefixed s-expression, like \"(+ 1 (* 2 i))\".\n\
                    \tdebug:        Opaque internal representation. Note: this format is not stable.\n\
                    ",
                )
                .hide_possible_values(true)
                .default_value("pretty")
                .takes_value(true)
                .possible_values(&["pretty", "s-expression", "debug"]),
        )
        .arg(
            clap::Arg::with_name("parse-only")
                .long("--parse-only")
                .help("Stop after parsing and dump the expression tree"),
        )
        .arg(
            clap::Arg::with_name("canonical")
                .long("--canonical")
                .conflicts_with("parse-only")
                .help("Dump the canonical form of the expression instead of computing it"),
        )
        .arg(
            clap::Arg::with_name("var")
                .short("-v")
                .long("--var")
                .value_name("name=value")
                .help("Bind a variable to the value of an expression, like \"x=2-3i\"")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|binding| {
                    if binding.contains('=') {
                        Ok(())
                    } else {
                        Err(format!(r#""{}" is not of the form name=value"#, binding))
                    }
                }),
        )
        .arg(
            clap::Arg::with_name("interactive")
                .short("-i")
                .long("--interactive")
                .help("Read expressions from stdin, one per line"),
        )
        .arg(
            clap::Arg::with_name("explain")
                .long("--explain")
                .value_name("diagnostic")
                .help("Provide a detailed explanation for a diagnostic code.")
                .takes_value(true),
        );
    let matches = parser(app)?;

    let expression = matches.value_of("expression").map(str::to_owned);
    let explain_diagnostic = matches.value_of("explain").map(str::to_owned);
    Ok(Opts {
        interactive: matches.is_present("interactive")
            || (expression.is_none() && explain_diagnostic.is_none()),
        expression,
        emit_format: matches.value_of("output-form").unwrap_or("pretty").into(),
        parse_only: matches.is_present("parse-only"),
        canonical: matches.is_present("canonical"),
        bindings: matches
            .values_of("var")
            .map(|vars| vars.map(str::to_owned).collect())
            .unwrap_or_default(),
        explain_diagnostic,
        color,
    })
}

/// Output of a calc execution.
#[cfg_attr(feature = "wasm", derive(Serialize, Deserialize))]
#[derive(Default, Debug)]
pub struct CalcResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
    /// Whether the stdout should be emit as paged
    pub page: bool,
}

/// Builds a [CalcResult](self::CalcResult).
struct CalcResultBuilder {
    emit_format: EmitFormat,
    color: bool,
    stdout: String,
    stderr: String,
    page: bool,
}

impl CalcResultBuilder {
    fn new(emit_format: impl Into<EmitFormat>, color: bool) -> Self {
        Self {
            emit_format: emit_format.into(),
            color,
            page: false,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn emit(&mut self, obj: &dyn Emit) {
        self.stdout.push_str(&obj.emit(self.emit_format));
    }

    fn out(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    fn err(&mut self, diagnostics: &[Diagnostic]) {
        self.stderr
            .push_str(&emit_calc_diagnostics(diagnostics, self.color));
    }

    fn page(&mut self, page: bool) {
        self.page = page;
    }

    fn ok(self) -> CalcResult {
        CalcResult {
            code: 0,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }

    fn failed(self) -> CalcResult {
        CalcResult {
            code: 1,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }

    /// Fails with a single diagnostic.
    fn fail_with(mut self, diagnostic: Diagnostic) -> CalcResult {
        self.err(&[diagnostic]);
        self.failed()
    }
}

/// Evaluates `name=value` variable bindings. Every value must be an expression without free
/// variables.
pub fn eval_bindings(bindings: &[String]) -> Result<Bindings, Diagnostic> {
    let mut evaluated = Bindings::with_capacity(bindings.len());
    for binding in bindings {
        let (name, value) = match binding.find('=') {
            Some(eq) => (binding[..eq].trim(), &binding[eq + 1..]),
            None => (binding.trim(), ""),
        };
        let value = parse_expression(value)
            .and_then(|expr| evaluate(&expr))
            .map_err(|err| {
                Diagnostic::from(&err)
                    .with_note(format!(r#"while evaluating the value bound to "{}""#, name))
            })?;
        log::debug!("bound {} to {}", name, format_complex(value));
        evaluated.insert(name.to_owned(), value);
    }
    Ok(evaluated)
}

/// Runs calc end-to-end on the expression in `opts`.
pub fn run_calc(opts: Opts) -> CalcResult {
    let mut result = CalcResultBuilder::new(opts.emit_format, opts.color);

    if let Some(diag_code) = opts.explain_diagnostic {
        let codes = all_codes_with_explanations();
        return match codes.get::<str>(&diag_code) {
            Some(explanation) => {
                result.out(explanation);
                result.page(true);
                result.ok()
            }
            None => {
                result
                    .stderr
                    .push_str(&format!("{} is not a diagnostic code", diag_code));
                result.failed()
            }
        };
    }

    let expression = match opts.expression {
        Some(expression) => expression,
        None => {
            result.stderr.push_str("no expression given");
            return result.failed();
        }
    };

    if opts.parse_only || opts.canonical {
        return match parse_expression(&expression) {
            Ok(expr) if opts.canonical => {
                result.emit(&canonicalize(&expr));
                result.ok()
            }
            Ok(expr) => {
                result.emit(&expr);
                result.ok()
            }
            Err(err) => result.fail_with(Diagnostic::from(&err)),
        };
    }

    let bindings = match eval_bindings(&opts.bindings) {
        Ok(bindings) => bindings,
        Err(diagnostic) => return result.fail_with(diagnostic),
    };

    let mut session = Session::new();
    let outcome = match session.submit(&expression, &bindings) {
        Ok(Outcome::NeedsBindings(pending)) => {
            let missing = pending.variables.join(", ");
            session.resume(pending, &Bindings::new()).map_err(|err| match err {
                CalcError::UnboundVariable(_) => Diagnostic::err(err.to_string(), err.code())
                    .with_note(format!("variables without a value: {}", missing))
                    .with_help("bind variables with --var name=value"),
                _ => Diagnostic::from(&err),
            })
        }
        outcome => outcome.map_err(|err| Diagnostic::from(&err)),
    };

    match outcome {
        Ok(Outcome::Value(value)) => result.out(&format_complex(value)),
        Ok(Outcome::Verdict(verdict)) => result.out(&verdict.to_string()),
        Ok(Outcome::NeedsBindings(_)) => unreachable!("resumed calculations are never pending"),
        Err(diagnostic) => return result.fail_with(diagnostic),
    }
    result.ok()
}

/// Runs calc through a wasm entry point.
/// `opts` must be a JS object with the same fields as [Opts](self::Opts).
/// Returns a JS object with the same fields as [CalcResult](self::CalcResult).
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn run_calc_wasm(opts: JsValue) -> JsValue {
    let result = match opts.into_serde::<Opts>() {
        Ok(opts) => run_calc(opts),
        Err(err) => CalcResult {
            code: 1,
            stderr: format!("invalid options: {}", err),
            ..CalcResult::default()
        },
    };
    JsValue::from_serde(&result).unwrap_or(JsValue::NULL)
}
