//! Lexer for Well-Known Text.
//!
//! Tokenises WKT source into a stream of tokens, lazily via the `Iterator`
//! trait. The alphabet is small: `(`, `)`, `,`, bare words, and numeric
//! literals, with insignificant whitespace between tokens.
//!
//! # Example
//!
//! ```
//! use geotext::wkt::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("POINT (1 2)").collect::<Result<_, _>>().unwrap();
//! assert!(matches!(tokens[0].kind, TokenKind::Word(ref w) if w == "POINT"));
//! assert!(matches!(tokens[2].kind, TokenKind::Number(x) if x == 1.0));
//! ```

use super::cursor::{Cursor, Position};
use super::error::WktError;
use super::token::{Span, Token, TokenKind};

/// Lexer for Well-Known Text.
///
/// Produces tokens via the `Iterator` trait. Each call to `next()` returns
/// the next token, or an error if the input is malformed.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Tokenise the entire source, returning all tokens or the first error.
    pub fn tokenise(source: &str) -> Result<Vec<Token>, WktError> {
        Lexer::new(source).collect()
    }

    /// A zero-length span at the current position, for end-of-input errors.
    pub(super) fn here(&self) -> Span {
        self.cursor.position().span_here()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, WktError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.skip_while(|c| c.is_ascii_whitespace());
        if self.cursor.is_eof() {
            return None;
        }

        let start = self.cursor.position();
        let kind = match self.lex_token() {
            Ok(kind) => kind,
            Err(e) => return Some(Err(e)),
        };
        let span = start.span_to(&self.cursor.position());

        Some(Ok(Token::new(kind, span)))
    }
}

impl<'a> Lexer<'a> {
    /// Lex a single token (after whitespace has been skipped).
    fn lex_token(&mut self) -> Result<TokenKind, WktError> {
        let start = self.cursor.position();

        match self.cursor.peek().unwrap() {
            '(' => {
                self.cursor.advance();
                Ok(TokenKind::LeftParen)
            }
            ')' => {
                self.cursor.advance();
                Ok(TokenKind::RightParen)
            }
            ',' => {
                self.cursor.advance();
                Ok(TokenKind::Comma)
            }
            '+' | '-' | '.' => self.lex_number(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if c.is_ascii_alphabetic() => {
                let word = self.cursor.take_while(|c| c.is_ascii_alphabetic());
                Ok(TokenKind::Word(word.to_string()))
            }
            c => {
                self.cursor.advance();
                Err(WktError::Lexical {
                    found: c,
                    span: start.span_to(&self.cursor.position()),
                })
            }
        }
    }

    /// Lex a numeric literal: optional sign, integer part, optional
    /// fractional part, optional exponent. At least one digit must appear
    /// before the exponent (`.5` and `1.` are fine, a lone `.` is not), and
    /// the result must be a finite `f64`.
    fn lex_number(&mut self) -> Result<TokenKind, WktError> {
        let start = self.cursor.position();

        if matches!(self.cursor.peek(), Some('+' | '-')) {
            self.cursor.advance();
        }

        let int_digits = self.cursor.take_while(|c| c.is_ascii_digit());
        let mut has_digits = !int_digits.is_empty();

        if self.cursor.peek() == Some('.') {
            self.cursor.advance();
            let frac_digits = self.cursor.take_while(|c| c.is_ascii_digit());
            has_digits |= !frac_digits.is_empty();
        }

        if !has_digits {
            return Err(self.invalid_number(start));
        }

        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            self.cursor.advance();
            if matches!(self.cursor.peek(), Some('+' | '-')) {
                self.cursor.advance();
            }
            let exp_digits = self.cursor.take_while(|c| c.is_ascii_digit());
            if exp_digits.is_empty() {
                return Err(self.invalid_number(start));
            }
        }

        let text = self.cursor.slice_from(&start);
        match text.parse::<f64>() {
            // Overflow to infinity is rejected: coordinates must be finite.
            Ok(value) if value.is_finite() => Ok(TokenKind::Number(value)),
            _ => Err(self.invalid_number(start)),
        }
    }

    fn invalid_number(&self, start: Position) -> WktError {
        WktError::InvalidNumber {
            text: self.cursor.slice_from(&start).to_string(),
            span: start.span_to(&self.cursor.position()),
        }
    }
}
