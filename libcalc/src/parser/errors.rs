//! Diagnostic errors produced by the parser.

define_errors! {
    registry ParseErrors;

    ///This error fires on tokens that are not connected to the rest of an expression.
    ///
    ///For example, in the expression
    ///
    ///```text
    ///1 + 2 3 + 4
    ///      ^^^^^- offending tokens
    ///```
    ///
    ///`3 + 4` is not connected to the primary expression `1 + 2`, and it is not known how the two
    ///are intended to be combined. Implicit multiplication only applies before `i` or `(`, so
    ///`2 3` is not read as `2 * 3`; write the operator explicitly.
    ///
    ///Note that an implicit multiplication takes a single factor on its right, so `3i^2` also
    ///fires this error at `^`. Write `3(i^2)` or `3*i^2` instead.
    P0001: ExtraTokens

    ///This error fires on token sequences that are expected to parse as an expression, but do not.
    ///
    ///The following are examples of expressions that emit this error:
    ///
    ///```text
    ///1 + +
    ///    ^- offending token
    ///```
    ///
    ///```text
    ///2 *
    ///   ^- end of input
    ///```
    ///
    ///A common cause is using `equal` somewhere other than between two complete expressions, as
    ///in `equal 2`.
    P0002: ExpectedExpr

    ///This error fires when an opening parenthesis is not closed.
    ///
    ///For example,
    ///
    ///```text
    ///(1 + 2
    ///      ^- expected ")" here
    ///```
    ///
    ///Parentheses must be balanced; add the missing `)`.
    P0003: UnclosedParen

    ///This error fires when an expression nests too deeply.
    ///
    ///Parenthesized groups, the prefix operators `√`, `conj` and `-`, and the right-hand side of
    ///`^` each open a new nesting level. At most 128 levels are allowed, so an input like
    ///
    ///```text
    ///((((((((( … 1 … )))))))))
    ///```
    ///
    ///with more than 128 parentheses is rejected. Split the expression, or remove redundant
    ///parentheses.
    P0004: TooDeep
}
