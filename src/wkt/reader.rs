//! Recursive-descent reader: WKT text -> geometry values.
//!
//! One function per production of the WKT grammar. Every list production
//! shares the same control flow (opener, then item/closer-or-comma until the
//! closer), implemented once in [`read_list`] and parameterised over the
//! item-reading closure.
//!
//! Dimensionality is driven solely by the `Z`/`M`/`ZM` marker after the type
//! keyword, never inferred from coordinate count: `POINT (1 2 3)` is an
//! error because the unmarked grammar only reads two numbers per coordinate.
//!
//! Recursion depth equals the nesting depth of `GEOMETRYCOLLECTION`s in the
//! input; there is no explicit depth guard, so pathologically nested input
//! is limited only by the call stack.

use super::error::WktError;
use super::parser::{ListSep, WktParser};
use crate::geometry::{
    Coord, Dim, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Read a single complete geometry from WKT text.
///
/// Keywords are matched case-insensitively (the input is upper-cased before
/// lexing). Fails if the text is not a single grammatically valid geometry
/// followed only by end of input.
///
/// # Example
///
/// ```
/// use geotext::wkt;
/// use geotext::Geometry;
///
/// let geometry = wkt::read("Point Z (1 2 3)").unwrap();
/// assert!(geometry.is_3d());
/// assert!(!geometry.is_measured());
/// match geometry {
///     Geometry::Point(point) => assert_eq!(point.z(), Some(3.0)),
///     _ => unreachable!(),
/// }
/// ```
pub fn read(wkt: &str) -> Result<Geometry, WktError> {
    let source = wkt.to_ascii_uppercase();
    let mut parser = WktParser::new(&source);
    let geometry = read_geometry(&mut parser)?;
    parser.expect_end_of_stream()?;
    Ok(geometry)
}

/// Read one geometry from an existing parser, leaving any remaining input
/// unconsumed.
///
/// This is the recursive entry point: `GEOMETRYCOLLECTION` members are read
/// by calling back into it, each call establishing its own dimensionality
/// for the sub-tree it parses. Unlike [`read`] it does not enforce end of
/// stream, so a caller parsing WKT embedded in a larger buffer can use it
/// directly.
pub fn read_geometry(parser: &mut WktParser<'_>) -> Result<Geometry, WktError> {
    let keyword = parser.next_word()?;
    let dim = read_dim_marker(parser)?;

    match keyword.text.as_str() {
        "POINT" => Ok(Geometry::Point(read_point_text(parser, dim)?)),
        "LINESTRING" => Ok(Geometry::LineString(read_line_string_text(parser, dim)?)),
        "POLYGON" => Ok(Geometry::Polygon(read_polygon_text(parser, dim)?)),
        "MULTIPOINT" => Ok(Geometry::MultiPoint(read_multi_point_text(parser, dim)?)),
        "MULTILINESTRING" => Ok(Geometry::MultiLineString(read_multi_line_string_text(
            parser, dim,
        )?)),
        "MULTIPOLYGON" => Ok(Geometry::MultiPolygon(read_multi_polygon_text(
            parser, dim,
        )?)),
        "GEOMETRYCOLLECTION" => Ok(Geometry::GeometryCollection(read_collection_text(
            parser, dim,
        )?)),
        _ => Err(WktError::UnknownGeometryType {
            word: keyword.text,
            span: keyword.span,
        }),
    }
}

/// Read the optional dimensionality marker after the type keyword:
/// absent, `Z`, `M`, or `ZM`. Any other word is a syntax error.
fn read_dim_marker(parser: &mut WktParser<'_>) -> Result<Dim, WktError> {
    match parser.optional_next_word()? {
        None => Ok(Dim::XY),
        Some(word) => match word.text.as_str() {
            "Z" => Ok(Dim::XYZ),
            "M" => Ok(Dim::XYM),
            "ZM" => Ok(Dim::XYZM),
            _ => Err(WktError::Syntax {
                expected: "dimensionality marker Z, M or ZM",
                found: word.text,
                span: word.span,
            }),
        },
    }
}

/// The shared list shape: opener, then (item, closer-or-comma) repeated
/// until the closer.
fn read_list<T>(
    parser: &mut WktParser<'_>,
    mut read_item: impl FnMut(&mut WktParser<'_>) -> Result<T, WktError>,
) -> Result<Vec<T>, WktError> {
    parser.match_opener()?;
    let mut items = Vec::new();
    loop {
        items.push(read_item(parser)?);
        match parser.next_closer_or_comma()? {
            ListSep::Comma => continue,
            ListSep::Closer => return Ok(items),
        }
    }
}

/// `x y`, then `z` iff 3D, then `m` iff measured, in that fixed order.
fn read_coord(parser: &mut WktParser<'_>, dim: Dim) -> Result<Coord, WktError> {
    let x = parser.next_number()?;
    let y = parser.next_number()?;
    let z = if dim.has_z {
        Some(parser.next_number()?)
    } else {
        None
    };
    let m = if dim.has_m {
        Some(parser.next_number()?)
    } else {
        None
    };
    Ok(Coord { x, y, z, m })
}

/// One point member: a bare coordinate tuple, not wrapped in parens.
fn read_point(parser: &mut WktParser<'_>, dim: Dim) -> Result<Point, WktError> {
    let coord = read_coord(parser, dim)?;
    Ok(Point::new(coord)?)
}

/// `(x y)`
fn read_point_text(parser: &mut WktParser<'_>, dim: Dim) -> Result<Point, WktError> {
    parser.match_opener()?;
    let point = read_point(parser, dim)?;
    parser.match_closer()?;
    Ok(point)
}

/// `(x y, x y, ...)` — the body shared by LineString and MultiPoint. Note
/// that MultiPoint members are bare `x y` tuples here, not individually
/// parenthesised.
fn read_point_list(parser: &mut WktParser<'_>, dim: Dim) -> Result<Vec<Point>, WktError> {
    read_list(parser, |parser| read_point(parser, dim))
}

/// `(x y, ...)`
fn read_line_string_text(parser: &mut WktParser<'_>, dim: Dim) -> Result<LineString, WktError> {
    let points = read_point_list(parser, dim)?;
    Ok(LineString::new(points, dim)?)
}

/// `(x y, ...)`
fn read_multi_point_text(parser: &mut WktParser<'_>, dim: Dim) -> Result<MultiPoint, WktError> {
    let points = read_point_list(parser, dim)?;
    Ok(MultiPoint::new(points, dim)?)
}

/// `((x y, ...), ...)` — the body shared by Polygon and MultiLineString.
fn read_ring_list(parser: &mut WktParser<'_>, dim: Dim) -> Result<Vec<LineString>, WktError> {
    read_list(parser, |parser| read_line_string_text(parser, dim))
}

/// `((x y, ...), ...)`
fn read_polygon_text(parser: &mut WktParser<'_>, dim: Dim) -> Result<Polygon, WktError> {
    let rings = read_ring_list(parser, dim)?;
    Ok(Polygon::new(rings, dim)?)
}

/// `((x y, ...), ...)`
fn read_multi_line_string_text(
    parser: &mut WktParser<'_>,
    dim: Dim,
) -> Result<MultiLineString, WktError> {
    let lines = read_ring_list(parser, dim)?;
    Ok(MultiLineString::new(lines, dim)?)
}

/// `(((x y, ...), ...), ...)`
fn read_multi_polygon_text(
    parser: &mut WktParser<'_>,
    dim: Dim,
) -> Result<MultiPolygon, WktError> {
    let polygons = read_list(parser, |parser| read_polygon_text(parser, dim))?;
    Ok(MultiPolygon::new(polygons, dim)?)
}

/// `(<geometry>, ...)` — each member parsed recursively and required to
/// declare the collection's own dimensionality.
fn read_collection_text(
    parser: &mut WktParser<'_>,
    dim: Dim,
) -> Result<GeometryCollection, WktError> {
    let members = read_list(parser, |parser| {
        let member = read_geometry(parser)?;
        if member.dim() != dim {
            return Err(WktError::DimensionalityMismatch {
                expected: dim,
                found: member.dim(),
                type_name: member.type_name(),
            });
        }
        Ok(member)
    })?;
    Ok(GeometryCollection::new(members, dim)?)
}

impl TryFrom<&str> for Geometry {
    type Error = WktError;

    fn try_from(wkt: &str) -> Result<Self, Self::Error> {
        read(wkt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point() {
        let geometry = read("POINT (1 2)").unwrap();
        match &geometry {
            Geometry::Point(point) => {
                assert_eq!(point.x(), Some(1.0));
                assert_eq!(point.y(), Some(2.0));
                assert_eq!(point.z(), None);
                assert_eq!(point.m(), None);
            }
            other => panic!("expected point, got {:?}", other),
        }
        assert!(!geometry.is_3d());
        assert!(!geometry.is_measured());
    }

    #[test]
    fn point_with_markers() {
        let geometry = read("POINT Z (1 2 3)").unwrap();
        match geometry {
            Geometry::Point(point) => {
                assert_eq!(point.z(), Some(3.0));
                assert_eq!(point.m(), None);
            }
            _ => unreachable!(),
        }

        let geometry = read("POINT M (1 2 4)").unwrap();
        match geometry {
            Geometry::Point(point) => {
                assert_eq!(point.z(), None);
                assert_eq!(point.m(), Some(4.0));
            }
            _ => unreachable!(),
        }

        let geometry = read("POINT ZM (1 2 3 4)").unwrap();
        match geometry {
            Geometry::Point(point) => {
                // Z precedes M in the coordinate order.
                assert_eq!(point.z(), Some(3.0));
                assert_eq!(point.m(), Some(4.0));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(read("point zm (1 2 3 4)"), read("POINT ZM (1 2 3 4)"));
        assert_eq!(read("LineString (0 0, 1 1)"), read("LINESTRING (0 0, 1 1)"));
    }

    #[test]
    fn line_string_preserves_order() {
        let geometry = read("LINESTRING (0 0, 1 1, 2 2)").unwrap();
        match geometry {
            Geometry::LineString(line) => {
                let xs: Vec<_> = line.points().iter().map(|p| p.x().unwrap()).collect();
                assert_eq!(xs, vec![0.0, 1.0, 2.0]);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn polygon_with_hole() {
        let geometry =
            read("POLYGON ((0 0, 0 9, 9 9, 0 0), (1 1, 1 2, 2 2, 1 1))").unwrap();
        match geometry {
            Geometry::Polygon(polygon) => {
                assert_eq!(polygon.rings().len(), 2);
                assert_eq!(polygon.exterior().unwrap().points().len(), 4);
                assert_eq!(polygon.interiors().len(), 1);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn multi_point_members_are_bare_tuples() {
        let geometry = read("MULTIPOINT (1 2, 3 4)").unwrap();
        match geometry {
            Geometry::MultiPoint(multi) => {
                assert_eq!(multi.points().len(), 2);
                assert_eq!(multi.points()[1].y(), Some(4.0));
            }
            _ => unreachable!(),
        }

        // Individually parenthesised members are not part of this grammar.
        assert!(read("MULTIPOINT ((1 2), (3 4))").is_err());
    }

    #[test]
    fn multi_line_string() {
        let geometry = read("MULTILINESTRING ((0 0, 1 1), (2 2, 3 3, 4 4))").unwrap();
        match geometry {
            Geometry::MultiLineString(multi) => {
                assert_eq!(multi.lines().len(), 2);
                assert_eq!(multi.lines()[1].points().len(), 3);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn multi_polygon() {
        let geometry = read(
            "MULTIPOLYGON (((0 0, 0 1, 1 1, 0 0)), ((10 10, 10 11, 11 11, 10 10)))",
        )
        .unwrap();
        match geometry {
            Geometry::MultiPolygon(multi) => {
                assert_eq!(multi.polygons().len(), 2);
                for polygon in multi.polygons() {
                    assert_eq!(polygon.rings().len(), 1);
                    assert_eq!(polygon.rings()[0].points().len(), 4);
                }
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn nested_collections() {
        let geometry = read(
            "GEOMETRYCOLLECTION (POINT (1 2), GEOMETRYCOLLECTION (LINESTRING (0 0, 1 1)))",
        )
        .unwrap();
        match geometry {
            Geometry::GeometryCollection(outer) => {
                assert_eq!(outer.len(), 2);
                assert!(matches!(
                    outer.geometries()[1],
                    Geometry::GeometryCollection(ref inner) if inner.len() == 1
                ));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn collection_members_must_match_declared_dim() {
        let err = read("GEOMETRYCOLLECTION (POINT (1 2), POINT Z (1 2 3))").unwrap_err();
        assert_eq!(
            err,
            WktError::DimensionalityMismatch {
                expected: Dim::XY,
                found: Dim::XYZ,
                type_name: "POINT",
            }
        );

        // The marker on the collection applies to members too.
        assert!(read("GEOMETRYCOLLECTION Z (POINT Z (1 2 3))").is_ok());
        assert!(read("GEOMETRYCOLLECTION Z (POINT (1 2))").is_err());
    }

    #[test]
    fn dimensionality_is_never_inferred_from_coordinate_count() {
        // Three numbers without a Z marker: the grammar reads two and then
        // requires the closer, so the stray number is a syntax error.
        let err = read("POINT (1 2 3)").unwrap_err();
        assert!(matches!(
            err,
            WktError::Syntax {
                expected: "')'",
                ..
            }
        ));

        // And a marker requires its ordinate to be present.
        assert!(read("POINT Z (1 2)").is_err());
    }

    #[test]
    fn unknown_dimensionality_marker() {
        let err = read("POINT X (1 2)").unwrap_err();
        assert!(matches!(
            err,
            WktError::Syntax { ref found, .. } if found == "X"
        ));
    }

    #[test]
    fn unknown_geometry_type() {
        let err = read("CIRCLE (1 2)").unwrap_err();
        assert_eq!(
            err,
            WktError::UnknownGeometryType {
                word: "CIRCLE".into(),
                span: crate::wkt::Span::new(0, 6, 1, 1),
            }
        );
    }

    #[test]
    fn trailing_input_is_rejected() {
        assert!(matches!(
            read("POINT (1 2) X").unwrap_err(),
            WktError::TrailingInput { .. }
        ));
        assert!(matches!(
            read("POINT (1 2) POINT (3 4)").unwrap_err(),
            WktError::TrailingInput { .. }
        ));
    }

    #[test]
    fn structural_errors() {
        assert!(read("").is_err());
        assert!(read("POINT").is_err());
        assert!(read("POINT (1 2").is_err());
        assert!(read("POINT 1 2)").is_err());
        assert!(read("LINESTRING (0 0,, 1 1)").is_err());
        assert!(read("LINESTRING (0 0, 1 1,)").is_err());
    }

    #[test]
    fn read_geometry_leaves_trailing_input() {
        let source = "POINT (1 2) LINESTRING (0 0, 1 1)";
        let mut parser = WktParser::new(source);

        let first = read_geometry(&mut parser).unwrap();
        assert!(matches!(first, Geometry::Point(_)));
        assert!(!parser.is_end_of_stream().unwrap());

        let second = read_geometry(&mut parser).unwrap();
        assert!(matches!(second, Geometry::LineString(_)));
        assert!(parser.is_end_of_stream().unwrap());
    }

    #[test]
    fn try_from_str() {
        let geometry = Geometry::try_from("POINT (1 2)").unwrap();
        assert_eq!(geometry.type_name(), "POINT");
        assert!(Geometry::try_from("nonsense").is_err());
    }

    #[test]
    fn parsing_is_idempotent() {
        let source = "GEOMETRYCOLLECTION ZM (POINT ZM (1 2 3 4), MULTIPOINT ZM (5 6 7 8))";
        assert_eq!(read(source).unwrap(), read(source).unwrap());
    }
}
