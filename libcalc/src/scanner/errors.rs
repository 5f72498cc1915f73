//! Diagnostic errors produced by the scanner.

define_errors! {
    registry ScanErrors;

    ///An expression must contain at least one recognizable token. Recognizable tokens are
    ///
    ///  - numerals, like `12`, `3.5`, or `.25`
    ///  - runs of letters, like `x`, `rate`, `i`, `conj`, or `equal`
    ///  - the symbols `+ - * / ^ √ ( )`
    ///
    ///Characters outside of these classes are skipped during scanning, so `2 @ 3` scans the same as
    ///`2 3`. This error fires only when nothing at all is left, for example on the input `@#!` or on
    ///an empty string.
    S0001: NoTokens
}
