//! Diagnostic errors produced by the evaluator.

define_errors! {
    registry EvaluatorErrors;

    ///This error fires when a division has a divisor that is exactly zero, that is, a complex
    ///number whose real and imaginary parts are both `0`.
    ///
    ///For example,
    ///
    ///```text
    ///5 / (0)
    ///1 / (2 - 2)
    ///1 / (i - i)
    ///```
    ///
    ///Divisors that are merely very small are divided normally.
    ///
    ///Powers never fire this error: any nonzero power of zero, including `0 ^ -1`, is `0`.
    V0001: DivideByZero

    ///This error fires when an expression with a free variable is evaluated before the variable
    ///is given a value.
    ///
    ///For example, `x + 1` cannot be evaluated until `x` is bound. On the command line, bind
    ///variables with `--var`:
    ///
    ///```text
    ///calc --var x=2-3i "x + 1"
    ///```
    ///
    ///The interactive prompt asks for the real and imaginary parts of each free variable instead.
    ///
    ///Note that `i`, `conj`, and `equal` are reserved words and never variables, but any other run
    ///of letters is, including multi-letter runs like `xi` (which is not `x * i`).
    V0002: UnboundVar

    ///This error fires when an operator without a numeric meaning reaches numeric evaluation.
    ///
    ///The only such operator is `equal`, which compares the canonical structure of its two sides
    ///and yields `true` or `false` rather than a number. It can only be computed at the top level
    ///of an expression:
    ///
    ///```text
    ///x + 1 equal 1 + x      - fine, yields true
    ///(1 equal 1) + 2        - fires this error
    ///```
    V0003: NonNumericOperator

    ///This error fires when a numeral leaf does not denote a number.
    ///
    ///Numerals written in an expression are always well-formed, so this error indicates an
    ///expression tree that was constructed by hand with a malformed numeral, like `1.2.3` or `1e`.
    V0004: BadNumeral
}
