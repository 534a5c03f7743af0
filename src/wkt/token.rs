//! Token types for the WKT lexer.

use std::fmt;

/// A location in source text.
///
/// Spans track byte offsets (for slicing) and the line/column of the span's
/// start (for error messages). Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset just past the end of this span.
    pub end: usize,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A lexical token with its location in source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Where in the source this token appears.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of token, with associated data where relevant.
///
/// WKT has a small lexical alphabet: three punctuation characters, bare
/// words (geometry keywords and the `Z`/`M`/`ZM` markers), and numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Opening parenthesis `(`.
    LeftParen,

    /// Closing parenthesis `)`.
    RightParen,

    /// Comma `,`, the list separator.
    Comma,

    /// A bare alphabetic word such as `POINT` or `ZM`.
    ///
    /// The reader upper-cases input before lexing, so words are always
    /// upper-case here.
    Word(String),

    /// A numeric literal, already parsed to a finite `f64`.
    Number(f64),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Word(word) => write!(f, "{}", word),
            TokenKind::Number(value) => write!(f, "{}", value),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_display_is_line_colon_column() {
        assert_eq!(Span::new(4, 9, 2, 3).to_string(), "2:3");
    }

    #[test]
    fn token_kind_display() {
        assert_eq!(TokenKind::LeftParen.to_string(), "'('");
        assert_eq!(TokenKind::RightParen.to_string(), "')'");
        assert_eq!(TokenKind::Comma.to_string(), "','");
        assert_eq!(TokenKind::Word("POINT".into()).to_string(), "POINT");
        assert_eq!(TokenKind::Number(-1.5).to_string(), "-1.5");
    }

    #[test]
    fn token_display_includes_position() {
        let token = Token::new(TokenKind::Word("ZM".into()), Span::new(6, 8, 1, 7));
        assert_eq!(token.to_string(), "ZM at 1:7");
    }
}
