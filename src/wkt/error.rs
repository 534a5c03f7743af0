//! Error type for WKT parsing.

use super::token::Span;
use crate::geometry::{Dim, GeometryError};
use thiserror::Error;

/// A failure while reading WKT: the input is not a single, complete,
/// grammatically valid geometry.
///
/// Every failure aborts the whole `read` call. Partially built geometry
/// values are discarded; there is no recovery or best-effort mode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WktError {
    /// A character that is not whitespace, punctuation, part of a number, or
    /// part of a word.
    #[error("{span}: unexpected character {found:?}")]
    Lexical { found: char, span: Span },

    /// A malformed numeric literal, e.g. a lone sign, an exponent with no
    /// digits, or a literal too large for a finite `f64`.
    #[error("{span}: invalid numeric literal {text:?}")]
    InvalidNumber { text: String, span: Span },

    /// An expected token class was not found at the current position.
    #[error("{span}: expected {expected}, found {found}")]
    Syntax {
        expected: &'static str,
        found: String,
        span: Span,
    },

    /// The leading word is not one of the seven supported geometry types.
    #[error("{span}: unknown geometry type: {word}")]
    UnknownGeometryType { word: String, span: Span },

    /// A structurally complete geometry parsed successfully, but input
    /// remains.
    #[error("{span}: unexpected input after complete geometry")]
    TrailingInput { span: Span },

    /// A member of a geometry collection declared a different dimensionality
    /// than the collection itself.
    #[error("geometry collection declared {expected} contains a {found} {type_name}")]
    DimensionalityMismatch {
        expected: Dim,
        found: Dim,
        type_name: &'static str,
    },

    /// A geometry factory rejected the parsed values.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_position_and_offender() {
        let err = WktError::Lexical {
            found: '#',
            span: Span::new(3, 4, 1, 4),
        };
        assert_eq!(err.to_string(), "1:4: unexpected character '#'");

        let err = WktError::Syntax {
            expected: "a number",
            found: "')'".into(),
            span: Span::new(10, 11, 2, 5),
        };
        assert_eq!(err.to_string(), "2:5: expected a number, found ')'");
    }

    #[test]
    fn dimensionality_mismatch_names_the_member() {
        let err = WktError::DimensionalityMismatch {
            expected: Dim::XY,
            found: Dim::XYZ,
            type_name: "POINT",
        };
        assert_eq!(
            err.to_string(),
            "geometry collection declared XY contains a XYZ POINT"
        );
    }

    #[test]
    fn geometry_error_is_transparent() {
        let err = WktError::from(GeometryError::NonFinite(f64::INFINITY));
        assert_eq!(err.to_string(), "coordinate value inf is not finite");
    }
}
