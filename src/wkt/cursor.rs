//! Character-level cursor over WKT source text.
//!
//! Tracks byte offset plus line/column so that every error can point at the
//! exact place in the input that caused it.

use super::token::Span;

/// A saved position in source text.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    /// Byte offset from start of source.
    pub offset: usize,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, counts characters).
    pub column: u32,
}

impl Position {
    /// Create a span from this position to another position.
    #[must_use]
    pub fn span_to(self, end: &Position) -> Span {
        Span::new(self.offset, end.offset, self.line, self.column)
    }

    /// Create a zero-length span at this position.
    #[must_use]
    pub fn span_here(self) -> Span {
        Span::new(self.offset, self.offset, self.line, self.column)
    }
}

/// A cursor over source text, consumed one character at a time.
///
/// Columns count characters rather than bytes so that positions display
/// correctly even for non-ASCII input (which the lexer will reject, but the
/// error for it should still point at the right column).
pub struct Cursor<'a> {
    /// The complete source text.
    source: &'a str,
    /// Remaining source text (slice starting at current position).
    remaining: &'a str,
    /// Current byte offset from start of source.
    offset: usize,
    /// Current line number (1-indexed).
    line: u32,
    /// Current column number (1-indexed).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            remaining: source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the current position.
    pub fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Whether the end of input has been reached.
    pub fn is_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Peek at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    /// Consume and return the next character, updating position tracking.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.remaining.chars().next()?;
        let char_len = c.len_utf8();

        self.remaining = &self.remaining[char_len..];
        self.offset += char_len;

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Consume characters while the predicate returns true.
    pub fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Consume characters while the predicate returns true, returning the
    /// consumed slice.
    pub fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.offset;
        self.skip_while(predicate);
        &self.source[start..self.offset]
    }

    /// The source slice from a saved position to the current position.
    pub fn slice_from(&self, start: &Position) -> &'a str {
        &self.source[start.offset..self.offset]
    }
}
