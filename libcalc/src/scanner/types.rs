//! Definitions of types used in the libcalc scanner.

use core::fmt;

/// Reserved word for the imaginary unit.
pub const IMAGINARY_UNIT: &str = "i";
/// Reserved word for the complex conjugate.
pub const CONJ: &str = "conj";
/// Reserved word for structural equality.
pub const EQUAL: &str = "equal";

/// A lexical unit of an expression. Tokens carry no source position.
#[derive(PartialEq, Clone, Debug)]
pub enum Token {
    /// A decimal numeral, kept as written.
    Num(String),

    /// The imaginary unit `i`.
    Imaginary,

    /// A variable name: any run of letters that is not a reserved word.
    Variable(String),

    /// `conj`
    Conj,

    /// `equal`
    Equal,

    /// + symbol
    Plus,

    /// - symbol
    Minus,

    /// * symbol
    Mult,

    /// / symbol
    Div,

    /// ^ symbol
    Exp,

    /// √ symbol
    Sqrt,

    /// ( symbol
    OpenParen,

    /// ) symbol
    CloseParen,
}

impl Token {
    /// Classifies a run of letters as a reserved word or a variable.
    pub fn from_word(word: String) -> Token {
        match word.as_str() {
            IMAGINARY_UNIT => Token::Imaginary,
            CONJ => Token::Conj,
            EQUAL => Token::Equal,
            _ => Token::Variable(word),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Token::*;
        match self {
            Num(num) => f.write_str(num),
            Imaginary => f.write_str(IMAGINARY_UNIT),
            Variable(name) => f.write_str(name),
            Conj => f.write_str(CONJ),
            Equal => f.write_str(EQUAL),
            Plus => f.write_str("+"),
            Minus => f.write_str("-"),
            Mult => f.write_str("*"),
            Div => f.write_str("/"),
            Exp => f.write_str("^"),
            Sqrt => f.write_str("√"),
            OpenParen => f.write_str("("),
            CloseParen => f.write_str(")"),
        }
    }
}

#[cfg(test)]
mod tests {
    mod format {
        use crate::scanner::types::*;

        macro_rules! format_tests {
            ($($name:ident: $tok:expr, $format_str:expr)*) => {
            $(
                #[test]
                fn $name() {
                    use Token::*;
                    assert_eq!($tok.to_string(), $format_str);
                }
            )*
            }
        }

        format_tests! {
            num: Num("1.30".into()), "1.30"
            imaginary: Imaginary, "i"
            variable: Variable("ab".into()), "ab"
            conj: Conj, "conj"
            equal: Equal, "equal"
            plus: Plus, "+"
            minus: Minus, "-"
            mult: Mult, "*"
            div: Div, "/"
            exp: Exp, "^"
            sqrt: Sqrt, "√"
            open_paren: OpenParen, "("
            close_paren: CloseParen, ")"
        }
    }

    #[test]
    fn from_word() {
        use super::Token;
        assert_eq!(Token::from_word("i".into()), Token::Imaginary);
        assert_eq!(Token::from_word("conj".into()), Token::Conj);
        assert_eq!(Token::from_word("equal".into()), Token::Equal);
        assert_eq!(Token::from_word("xi".into()), Token::Variable("xi".into()));
    }
}
