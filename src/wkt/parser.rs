//! Parser primitives over the WKT token stream.
//!
//! [`WktParser`] wraps the lexer with a single token of lookahead and
//! exposes the handful of operations the grammar needs: fetch a word, fetch
//! a number, match parentheses, and fetch the closer-or-comma separator that
//! drives every comma-separated list production. All lexical and token-class
//! failures are reported from here with the offending token and position.

use super::error::WktError;
use super::lexer::Lexer;
use super::token::{Span, Token, TokenKind};

/// A word token with its location, as returned by [`WktParser::next_word`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word text (upper-case when lexing `read`-prepared input).
    pub text: String,
    /// Where the word appeared.
    pub span: Span,
}

/// The token that terminates one step of a comma-separated list: either the
/// list continues (`,`) or it is complete (`)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSep {
    /// A `,`: another item follows.
    Comma,
    /// A `)`: the list is complete.
    Closer,
}

/// Stateful token-stream wrapper owning all lexical error reporting.
///
/// One parser is bound to one input string for one parse; nothing is shared
/// between parses.
pub struct WktParser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Token>,
}

impl<'a> WktParser<'a> {
    /// Create a parser over the given source text.
    ///
    /// Keyword matching is case-sensitive at this level; callers wanting
    /// case-insensitive WKT should upper-case the text first, as
    /// [`read`](super::read) does.
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            peeked: None,
        }
    }

    /// Peek at the next token without consuming it.
    fn peek(&mut self) -> Result<Option<&Token>, WktError> {
        if self.peeked.is_none() {
            self.peeked = self.lexer.next().transpose()?;
        }
        Ok(self.peeked.as_ref())
    }

    /// Consume and return the next token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, WktError> {
        self.peek()?;
        Ok(self.peeked.take())
    }

    /// Build the syntax error for an unexpected token (or end of input).
    fn syntax_error(&self, expected: &'static str, found: Option<Token>) -> WktError {
        match found {
            Some(token) => WktError::Syntax {
                expected,
                found: token.kind.to_string(),
                span: token.span,
            },
            None => WktError::Syntax {
                expected,
                found: "end of input".to_string(),
                span: self.lexer.here(),
            },
        }
    }

    /// Consume and return the next word token.
    pub fn next_word(&mut self) -> Result<Word, WktError> {
        match self.next_token()? {
            Some(Token {
                kind: TokenKind::Word(text),
                span,
            }) => Ok(Word { text, span }),
            other => Err(self.syntax_error("a word", other)),
        }
    }

    /// Return the next word token if one is immediately present, consuming
    /// nothing otherwise. Used to detect an absent `Z`/`M`/`ZM` marker.
    pub fn optional_next_word(&mut self) -> Result<Option<Word>, WktError> {
        self.peek()?;
        match self.peeked.take() {
            Some(Token {
                kind: TokenKind::Word(text),
                span,
            }) => Ok(Some(Word { text, span })),
            other => {
                self.peeked = other;
                Ok(None)
            }
        }
    }

    /// Consume and return the next numeric token.
    pub fn next_number(&mut self) -> Result<f64, WktError> {
        match self.next_token()? {
            Some(Token {
                kind: TokenKind::Number(value),
                ..
            }) => Ok(value),
            other => Err(self.syntax_error("a number", other)),
        }
    }

    /// Consume a `(`.
    pub fn match_opener(&mut self) -> Result<(), WktError> {
        match self.next_token()? {
            Some(Token {
                kind: TokenKind::LeftParen,
                ..
            }) => Ok(()),
            other => Err(self.syntax_error("'('", other)),
        }
    }

    /// Consume a `)`.
    pub fn match_closer(&mut self) -> Result<(), WktError> {
        match self.next_token()? {
            Some(Token {
                kind: TokenKind::RightParen,
                ..
            }) => Ok(()),
            other => Err(self.syntax_error("')'", other)),
        }
    }

    /// Consume either a `)` or a `,`, the loop-continuation decision of
    /// every list production.
    pub fn next_closer_or_comma(&mut self) -> Result<ListSep, WktError> {
        match self.next_token()? {
            Some(Token {
                kind: TokenKind::RightParen,
                ..
            }) => Ok(ListSep::Closer),
            Some(Token {
                kind: TokenKind::Comma,
                ..
            }) => Ok(ListSep::Comma),
            other => Err(self.syntax_error("')' or ','", other)),
        }
    }

    /// Whether no further non-whitespace input remains.
    ///
    /// Peeking may surface a lexical error if the remaining input starts
    /// with an invalid token.
    pub fn is_end_of_stream(&mut self) -> Result<bool, WktError> {
        Ok(self.peek()?.is_none())
    }

    /// Require end of input, reporting any remaining token as trailing
    /// input.
    pub fn expect_end_of_stream(&mut self) -> Result<(), WktError> {
        match self.peek()? {
            None => Ok(()),
            Some(token) => Err(WktError::TrailingInput { span: token.span }),
        }
    }
}
