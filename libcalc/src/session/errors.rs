//! Diagnostic errors produced while binding variables in a calculation session.

define_errors! {
    registry SessionErrors;

    ///This error fires when a value given for a free variable is not a number.
    ///
    ///A free variable is bound by giving its real and imaginary parts separately, each as a plain
    ///decimal number such as `2`, `-0.5`, or `1e3`. An empty part is treated as `0`.
    ///
    ///For example, binding `x` with
    ///
    ///```text
    ///x real: 2
    ///x imag: three
    ///        ^^^^^- not a number
    ///```
    ///
    ///fires this error for the imaginary part.
    B0001: BadBinding
}
