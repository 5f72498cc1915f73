//! Recursive-descent parser from tokens to expression trees.
//!
//! The grammar, from loosest to tightest binding:
//!
//! ```text
//! equality   := expression ( "equal" expression )?
//! expression := term ( ("+" | "-") term )*
//! term       := power ( ("*" | "/") power | implicit )*
//! implicit   := <"i" or "(" next> factor
//! power      := factor ( "^" power )?
//! factor     := numeral | variable | "i"
//!             | "√" factor | "conj" factor | "-" factor
//!             | "(" equality ")"
//! ```
//!
//! Unary minus is desugared to `0 - factor`. Prefix operators, parentheses and exponents may
//! nest at most [`MAX_NESTING`] levels deep.

pub mod errors;

use crate::emit::format_lisp;
use crate::error::{CalcError, Found, SyntaxError};
use crate::grammar::*;
use crate::scanner::scan;
use crate::scanner::types::Token;
use crate::utils::PeekIter;

use std::rc::Rc;

/// How deeply prefix operators, parenthesized groups and exponents may nest.
pub const MAX_NESTING: usize = 128;

/// Scans and parses an input string into an expression tree.
pub fn parse_expression(input: &str) -> Result<RcExpr, CalcError> {
    parse_tokens(scan(input)?)
}

/// Parses a token sequence into an expression tree. Every token must be consumed.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<RcExpr, CalcError> {
    let mut parser = ExpressionParser::new(tokens);
    let parsed = parser.equality()?;
    if let Some(tok) = parser.input.next() {
        return Err(SyntaxError::TrailingTokens(Found::Token(tok.to_string())).into());
    }
    log::trace!("parsed {}", format_lisp(&parsed));
    Ok(parsed)
}

struct ExpressionParser {
    input: PeekIter<Token>,
    depth: usize,
}

type ParseResult = Result<RcExpr, CalcError>;

impl ExpressionParser {
    fn new(input: Vec<Token>) -> Self {
        Self {
            input: PeekIter::new(input.into_iter()),
            depth: 0,
        }
    }

    /// Runs `parse` one nesting level below the current one, after `opener` was consumed.
    fn nested(&mut self, opener: Token, parse: fn(&mut Self) -> ParseResult) -> ParseResult {
        if self.depth >= MAX_NESTING {
            return Err(SyntaxError::NestingTooDeep(Found::Token(opener.to_string())).into());
        }
        self.depth += 1;
        let parsed = parse(self);
        self.depth -= 1;
        parsed
    }

    fn found(tok: Option<&Token>) -> Found {
        match tok {
            Some(tok) => Found::Token(tok.to_string()),
            None => Found::EndOfInput,
        }
    }

    fn equality(&mut self) -> ParseResult {
        let lhs = self.expression()?;
        if let Some(Token::Equal) = self.input.peek() {
            self.input.next();
            let rhs = self.expression()?;
            return Ok(BinaryExpr::rc(BinaryOperator::Equal, lhs, rhs));
        }
        Ok(lhs)
    }

    fn expression(&mut self) -> ParseResult {
        let mut lhs = self.term()?;
        loop {
            let op = match self.input.peek() {
                Some(Token::Plus) => BinaryOperator::Plus,
                Some(Token::Minus) => BinaryOperator::Minus,
                _ => break,
            };
            self.input.next();
            let rhs = self.term()?;
            lhs = BinaryExpr::rc(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn term(&mut self) -> ParseResult {
        let mut lhs = self.power()?;
        loop {
            let rhs = match self.input.peek() {
                Some(Token::Mult) | Some(Token::Div) => {
                    let op = match self.input.next() {
                        Some(Token::Div) => BinaryOperator::Div,
                        _ => BinaryOperator::Mult,
                    };
                    lhs = BinaryExpr::rc(op, lhs, self.power()?);
                    continue;
                }
                // Juxtaposition with `i` or a parenthesized group is a multiplication whose right
                // operand is a single factor: `4i` is `4 * i`, but `3i^2` leaves `^ 2` unparsed.
                Some(Token::Imaginary) | Some(Token::OpenParen) => self.factor()?,
                _ => break,
            };
            lhs = BinaryExpr::rc(BinaryOperator::Mult, lhs, rhs);
        }
        Ok(lhs)
    }

    fn power(&mut self) -> ParseResult {
        let base = self.factor()?;
        if let Some(Token::Exp) = self.input.peek() {
            self.input.next();
            let exponent = self.nested(Token::Exp, Self::power)?;
            return Ok(BinaryExpr::rc(BinaryOperator::Exp, base, exponent));
        }
        Ok(base)
    }

    fn factor(&mut self) -> ParseResult {
        let tok = match self.input.next() {
            Some(tok) => tok,
            None => return Err(SyntaxError::UnexpectedToken(Found::EndOfInput).into()),
        };
        let factor = match tok {
            Token::Num(num) => Rc::new(Expr::Num(num)),
            Token::Variable(name) => Rc::new(Expr::Var(name)),
            Token::Imaginary => Rc::new(Expr::Imaginary),
            Token::Sqrt => {
                UnaryExpr::rc(UnaryOperator::Sqrt, self.nested(Token::Sqrt, Self::factor)?)
            }
            Token::Conj => {
                UnaryExpr::rc(UnaryOperator::Conj, self.nested(Token::Conj, Self::factor)?)
            }
            Token::Minus => Expr::negation(self.nested(Token::Minus, Self::factor)?),
            Token::OpenParen => {
                let inner = self.nested(Token::OpenParen, Self::equality)?;
                match self.input.next() {
                    Some(Token::CloseParen) => inner,
                    other => {
                        return Err(
                            SyntaxError::MissingClosingParen(Self::found(other.as_ref())).into(),
                        )
                    }
                }
            }
            other => return Err(SyntaxError::UnexpectedToken(Self::found(Some(&other))).into()),
        };
        Ok(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::Emit;
    use pretty_assertions::assert_eq;

    macro_rules! parser_tests {
        ($($name:ident: $program:expr => $s_expr:expr)*) => {
        $(
            #[test]
            fn $name() {
                let parsed = parse_expression($program).unwrap();
                assert_eq!(parsed.emit_s_expression(), $s_expr);
            }
        )*
        }
    }

    macro_rules! parser_error_tests {
        ($($name:ident: $program:expr => $error:expr)*) => {
        $(
            #[test]
            fn $name() {
                let expected: CalcError = $error;
                assert_eq!(parse_expression($program).unwrap_err(), expected);
            }
        )*
        }
    }

    mod parse {
        use super::*;
        use pretty_assertions::assert_eq;

        parser_tests! {
            numeral:              "42"                => "42"
            decimal:              ".5"                => ".5"
            variable:             "x"                 => "x"
            imaginary:            "i"                 => "i"
            addition:             "1 + 2"             => "(+ 1 2)"
            precedence:           "2+3*4"             => "(+ 2 (* 3 4))"
            left_assoc_add:       "1+2+3"             => "(+ (+ 1 2) 3)"
            left_assoc_sub:       "1-2-3"             => "(- (- 1 2) 3)"
            left_assoc_div:       "8/4/2"             => "(/ (/ 8 4) 2)"
            right_assoc_exp:      "2^3^2"             => "(^ 2 (^ 3 2))"
            exp_binds_tighter:    "2*3^2"             => "(* 2 (^ 3 2))"
            parens:               "(2+3)*4"           => "(* (+ 2 3) 4)"
            nested_parens:        "((x))"             => "x"
            unary_minus:          "-x"                => "(- 0 x)"
            unary_minus_binds:    "-2^2"              => "(^ (- 0 2) 2)"
            double_minus:         "--1"               => "(- 0 (- 0 1))"
            minus_after_op:       "2*-3"              => "(* 2 (- 0 3))"
            implicit_imaginary:   "4i"                => "(* 4 i)"
            implicit_paren:       "2(3)"              => "(* 2 3)"
            implicit_chain:       "2(3)(4)"           => "(* (* 2 3) 4)"
            implicit_var_i:       "xi"                => "xi"
            complex_literal:      "3 + 4i"            => "(+ 3 (* 4 i))"
            sqrt:                 "√4"                => "(√ 4)"
            sqrt_factor_only:     "√4+1"              => "(+ (√ 4) 1)"
            conj:                 "conj(1+2i)"        => "(conj (+ 1 (* 2 i)))"
            conj_bare:            "conj x"            => "(conj x)"
            equality:             "x+1 equal 1+x"     => "(equal (+ x 1) (+ 1 x))"
            nested_equality:      "(1 equal 1) equal x" => "(equal (equal 1 1) x)"
            equality_in_parens:   "(1 equal 1)"       => "(equal 1 1)"
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        fn unexpected(tok: &str) -> CalcError {
            SyntaxError::UnexpectedToken(Found::Token(tok.into())).into()
        }

        parser_error_tests! {
            empty:                ""          => CalcError::InvalidInput
            dangling_op:          "2 *"       => SyntaxError::UnexpectedToken(Found::EndOfInput).into()
            double_op:            "1 + +"     => unexpected("+")
            leading_close_paren:  ")"         => unexpected(")")
            leading_equal:        "equal 2"   => unexpected("equal")
            unclosed_paren:       "(1 + 2"    => SyntaxError::MissingClosingParen(Found::EndOfInput).into()
            unclosed_with_token:  "(1 2"      => SyntaxError::MissingClosingParen(Found::Token("2".into())).into()
            extra_tokens:         "1 + 2 3"   => SyntaxError::TrailingTokens(Found::Token("3".into())).into()
            extra_close_paren:    "1)"        => SyntaxError::TrailingTokens(Found::Token(")".into())).into()
            equality_chain:       "1 equal 1 equal 1" => SyntaxError::TrailingTokens(Found::Token("equal".into())).into()
            implicit_exp:         "3i^2"      => SyntaxError::TrailingTokens(Found::Token("^".into())).into()
        }

        fn too_deep(opener: &str) -> CalcError {
            SyntaxError::NestingTooDeep(Found::Token(opener.into())).into()
        }

        fn nest(open: &str, depth: usize, close: &str) -> String {
            format!("{}1{}", open.repeat(depth), close.repeat(depth))
        }

        #[test]
        fn nesting_at_the_limit() {
            assert!(parse_expression(&nest("(", MAX_NESTING, ")")).is_ok());
            assert!(parse_expression(&nest("-", MAX_NESTING, "")).is_ok());
            assert!(parse_expression(&nest("2^", MAX_NESTING, "")).is_ok());
        }

        #[test]
        fn nesting_past_the_limit() {
            assert_eq!(
                parse_expression(&nest("(", 500, ")")).unwrap_err(),
                too_deep("(")
            );
            assert_eq!(
                parse_expression(&nest("√", MAX_NESTING + 1, "")).unwrap_err(),
                too_deep("√")
            );
            assert_eq!(
                parse_expression(&nest("2^", 10_000, "")).unwrap_err(),
                too_deep("^")
            );
            assert_eq!(
                parse_expression(&nest("conj(", 300, ")")).unwrap_err(),
                too_deep("conj")
            );
        }

        #[test]
        fn depth_resets_between_groups() {
            let wide = vec![nest("(", MAX_NESTING, ")"); 4].join("+");
            assert!(parse_expression(&wide).is_ok());
        }
    }
}
