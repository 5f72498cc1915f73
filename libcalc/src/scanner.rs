//! Turns expression text into [tokens](types::Token).

pub mod errors;
pub mod types;

use crate::utils::PeekIter;
use crate::CalcError;
use types::*;

/// Scans `input` into tokens, left to right.
///
/// Whitespace is dropped. At each position the scanner takes the longest numeral, the longest run
/// of letters, or a single operator/parenthesis character. Any other character is skipped. Scanning
/// fails with [`CalcError::InvalidInput`] only when no token at all was extracted.
pub fn scan<T: Into<String>>(input: T) -> Result<Vec<Token>, CalcError> {
    let mut scanner = Scanner::new(input);
    scanner.scan();
    if scanner.output.is_empty() {
        return Err(CalcError::InvalidInput);
    }
    log::trace!(
        "scanned {} tokens: {}",
        scanner.output.len(),
        scanner
            .output
            .iter()
            .map(|tok| tok.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(scanner.output)
}

struct Scanner {
    input: PeekIter<char>,
    output: Vec<Token>,
}

impl Scanner {
    fn new<T: Into<String>>(input: T) -> Scanner {
        let chars: Vec<char> = input.into().chars().collect();

        Scanner {
            input: PeekIter::new(chars.into_iter()),
            output: Vec::new(),
        }
    }

    fn scan(&mut self) {
        while let Some(&c) = self.input.peek() {
            match c {
                _ if c.is_whitespace() => {
                    self.input.next();
                }
                _ if c.is_ascii_digit() => self.scan_num(),
                '.' if self.digit_at(1) => self.scan_num(),
                _ if c.is_ascii_alphabetic() => self.scan_word(),
                _ => self.scan_symbol(),
            }
        }
    }

    fn digit_at(&mut self, n: usize) -> bool {
        matches!(self.input.peek_nth(n), Some(c) if c.is_ascii_digit())
    }

    // matches token with symbol and creates it; unknown characters are dropped
    fn scan_symbol(&mut self) {
        use Token::*;
        let ty = match self.input.next() {
            Some('+') => Plus,
            Some('-') => Minus,
            Some('*') => Mult,
            Some('/') => Div,
            Some('^') => Exp,
            Some('√') => Sqrt,
            Some('(') => OpenParen,
            Some(')') => CloseParen,
            _ => return,
        };
        self.output.push(ty);
    }

    // `digits`, `digits.digits`, or `.digits`. A dot not followed by a digit ends the numeral.
    fn scan_num(&mut self) {
        let mut num: String = self.input.collect_while(|c| c.is_ascii_digit());
        if let Some('.') = self.input.peek() {
            if self.digit_at(1) {
                self.input.next();
                num.push('.');
                num.push_str(&self.input.collect_while::<_, String>(|c| c.is_ascii_digit()));
            }
        }
        self.output.push(Token::Num(num));
    }

    fn scan_word(&mut self) {
        let word: String = self.input.collect_while(|c| c.is_ascii_alphabetic());
        self.output.push(Token::from_word(word));
    }
}
