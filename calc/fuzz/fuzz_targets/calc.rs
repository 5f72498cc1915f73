#![no_main]
use libfuzzer_sys::fuzz_target;

use calc::{run_calc, Opts};
use libcalc::{canonicalize, extract_variables, parse_expression, structurally_equal};

fuzz_target!(|expression: String| {
    // Any input may be rejected, but none may panic.
    let _ = run_calc(Opts {
        expression: Some(expression.clone()),
        emit_format: "pretty".into(),
        ..Opts::default()
    });

    if let Ok(expr) = parse_expression(&expression) {
        let canonical = canonicalize(&expr);
        assert_eq!(canonicalize(&canonical), canonical);
        assert!(structurally_equal(&expr, &canonical));
        let _ = extract_variables(&expr);
    }
});
