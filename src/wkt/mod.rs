//! Well-Known Text (WKT) parsing.
//!
//! A hand-written recursive-descent parser for WKT geometry literals. The
//! layers, bottom up: a character cursor with position tracking, a lazy
//! [`Lexer`], the [`WktParser`] primitives (one token of lookahead), and the
//! grammar in [`read`]/[`read_geometry`].
//!
//! # Example
//!
//! ```
//! use geotext::wkt;
//!
//! let geometry = wkt::read("MULTIPOINT (1 2, 3 4)").unwrap();
//! assert_eq!(geometry.type_name(), "MULTIPOINT");
//! ```
//!
//! # Error Handling
//!
//! All failures are [`WktError`] values carrying the offending token and its
//! position. A failure aborts the whole parse; there is no recovery:
//!
//! ```
//! use geotext::wkt;
//!
//! assert!(wkt::read("POINT (1 2) trailing").is_err());
//! ```

mod cursor;
mod error;
mod lexer;
mod parser;
mod reader;
mod token;

pub use error::WktError;
pub use lexer::Lexer;
pub use parser::{ListSep, WktParser, Word};
pub use reader::{read, read_geometry};
pub use token::{Span, Token, TokenKind};
