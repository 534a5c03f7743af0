//! The geometry value model.
//!
//! Defines the seven geometry types of the simple-features model (Point,
//! LineString, Polygon, MultiPoint, MultiLineString, MultiPolygon,
//! GeometryCollection) plus the [`Geometry`] enum that unites them.
//!
//! All types are immutable once constructed. Construction goes through
//! validating factories which enforce two invariants:
//!
//! - every coordinate value is a finite `f64` (no NaN, no infinities);
//! - every child of a composite geometry has the same dimensionality as
//!   its parent.
//!
//! Containers own their children by value, so a geometry is always a strict
//! tree. Cloning a geometry deep-copies the whole tree.

use std::fmt;
use thiserror::Error;

/// An invalid geometry construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A coordinate value was NaN or infinite.
    #[error("coordinate value {0} is not finite")]
    NonFinite(f64),

    /// A child geometry's dimensionality differs from its container's.
    #[error("child geometry has dimensionality {found}, expected {expected}")]
    MixedDimensionality {
        /// The container's dimensionality.
        expected: Dim,
        /// The offending child's dimensionality.
        found: Dim,
    },
}

// ============================================================================
// Dimensionality
// ============================================================================

/// The dimensionality of a geometry: whether its coordinates carry a third
/// spatial ordinate (Z) and/or a measure value (M).
///
/// Fixed at construction for every geometry; all children of a composite
/// share the composite's dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dim {
    /// Coordinates carry a Z ordinate.
    pub has_z: bool,
    /// Coordinates carry an M (measure) value.
    pub has_m: bool,
}

impl Dim {
    /// Plain 2D coordinates.
    pub const XY: Dim = Dim {
        has_z: false,
        has_m: false,
    };
    /// 3D coordinates.
    pub const XYZ: Dim = Dim {
        has_z: true,
        has_m: false,
    };
    /// 2D coordinates with a measure.
    pub const XYM: Dim = Dim {
        has_z: false,
        has_m: true,
    };
    /// 3D coordinates with a measure.
    pub const XYZM: Dim = Dim {
        has_z: true,
        has_m: true,
    };

    /// Whether coordinates carry a Z ordinate.
    #[must_use]
    pub fn is_3d(self) -> bool {
        self.has_z
    }

    /// Whether coordinates carry a measure value.
    #[must_use]
    pub fn is_measured(self) -> bool {
        self.has_m
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.has_z, self.has_m) {
            (false, false) => write!(f, "XY"),
            (true, false) => write!(f, "XYZ"),
            (false, true) => write!(f, "XYM"),
            (true, true) => write!(f, "XYZM"),
        }
    }
}

// ============================================================================
// Coordinates
// ============================================================================

/// A single coordinate tuple: `x`, `y`, optional `z`, optional `m`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    /// A 2D coordinate.
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// A 3D coordinate.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    /// A 2D coordinate with a measure.
    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    /// A 3D coordinate with a measure.
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// The dimensionality implied by which ordinates are present.
    #[must_use]
    pub fn dim(&self) -> Dim {
        Dim {
            has_z: self.z.is_some(),
            has_m: self.m.is_some(),
        }
    }

    /// Check that every present ordinate is finite.
    fn validate(&self) -> Result<(), GeometryError> {
        for value in [Some(self.x), Some(self.y), self.z, self.m].into_iter().flatten() {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite(value));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Point
// ============================================================================

/// A point: a single coordinate tuple, or the empty point.
///
/// The empty point is a distinct value from any coordinate pair. It still
/// carries a dimensionality, since `POINT Z` and plain `POINT` are different
/// types even when empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coord: Option<Coord>,
    dim: Dim,
}

impl Point {
    /// Construct a point from a coordinate tuple.
    ///
    /// The dimensionality is taken from which ordinates the coordinate
    /// carries. Fails if any ordinate is not finite.
    pub fn new(coord: Coord) -> Result<Self, GeometryError> {
        coord.validate()?;
        Ok(Self {
            dim: coord.dim(),
            coord: Some(coord),
        })
    }

    /// Construct an empty point with the given dimensionality.
    pub fn empty(dim: Dim) -> Self {
        Self { coord: None, dim }
    }

    /// Whether this is the empty point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }

    /// The coordinate tuple, or `None` for the empty point.
    #[must_use]
    pub fn coord(&self) -> Option<&Coord> {
        self.coord.as_ref()
    }

    /// The X ordinate, or `None` for the empty point.
    #[must_use]
    pub fn x(&self) -> Option<f64> {
        self.coord.map(|c| c.x)
    }

    /// The Y ordinate, or `None` for the empty point.
    #[must_use]
    pub fn y(&self) -> Option<f64> {
        self.coord.map(|c| c.y)
    }

    /// The Z ordinate, if present.
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        self.coord.and_then(|c| c.z)
    }

    /// The M value, if present.
    #[must_use]
    pub fn m(&self) -> Option<f64> {
        self.coord.and_then(|c| c.m)
    }

    /// This point's dimensionality.
    #[must_use]
    pub fn dim(&self) -> Dim {
        self.dim
    }
}

// ============================================================================
// LineString
// ============================================================================

/// An ordered sequence of points sharing one dimensionality.
///
/// The factory enforces dimensional homogeneity only; it does not require a
/// minimum point count, so degenerate single-point or empty line strings can
/// be represented.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    points: Vec<Point>,
    dim: Dim,
}

impl LineString {
    /// Construct a line string, checking each point against `dim`.
    pub fn new(points: Vec<Point>, dim: Dim) -> Result<Self, GeometryError> {
        check_homogeneous(points.iter().map(Point::dim), dim)?;
        Ok(Self { points, dim })
    }

    /// The points of this line string, in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether this line string has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// This line string's dimensionality.
    #[must_use]
    pub fn dim(&self) -> Dim {
        self.dim
    }
}

// ============================================================================
// Polygon
// ============================================================================

/// An ordered sequence of rings. The first ring is the exterior boundary,
/// the remainder are holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
    dim: Dim,
}

impl Polygon {
    /// Construct a polygon, checking each ring against `dim`.
    pub fn new(rings: Vec<LineString>, dim: Dim) -> Result<Self, GeometryError> {
        check_homogeneous(rings.iter().map(LineString::dim), dim)?;
        Ok(Self { rings, dim })
    }

    /// All rings, exterior first.
    #[must_use]
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// The exterior ring, or `None` for an empty polygon.
    #[must_use]
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// The interior rings (holes).
    #[must_use]
    pub fn interiors(&self) -> &[LineString] {
        if self.rings.is_empty() {
            &[]
        } else {
            &self.rings[1..]
        }
    }

    /// This polygon's dimensionality.
    #[must_use]
    pub fn dim(&self) -> Dim {
        self.dim
    }
}

// ============================================================================
// Multi-geometries
// ============================================================================

/// An ordered collection of points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
    dim: Dim,
}

impl MultiPoint {
    /// Construct a multi-point, checking each member against `dim`.
    pub fn new(points: Vec<Point>, dim: Dim) -> Result<Self, GeometryError> {
        check_homogeneous(points.iter().map(Point::dim), dim)?;
        Ok(Self { points, dim })
    }

    /// The member points, in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// This collection's dimensionality.
    #[must_use]
    pub fn dim(&self) -> Dim {
        self.dim
    }
}

/// An ordered collection of line strings.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    lines: Vec<LineString>,
    dim: Dim,
}

impl MultiLineString {
    /// Construct a multi-line-string, checking each member against `dim`.
    pub fn new(lines: Vec<LineString>, dim: Dim) -> Result<Self, GeometryError> {
        check_homogeneous(lines.iter().map(LineString::dim), dim)?;
        Ok(Self { lines, dim })
    }

    /// The member line strings, in order.
    #[must_use]
    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    /// This collection's dimensionality.
    #[must_use]
    pub fn dim(&self) -> Dim {
        self.dim
    }
}

/// An ordered collection of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    dim: Dim,
}

impl MultiPolygon {
    /// Construct a multi-polygon, checking each member against `dim`.
    pub fn new(polygons: Vec<Polygon>, dim: Dim) -> Result<Self, GeometryError> {
        check_homogeneous(polygons.iter().map(Polygon::dim), dim)?;
        Ok(Self { polygons, dim })
    }

    /// The member polygons, in order.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// This collection's dimensionality.
    #[must_use]
    pub fn dim(&self) -> Dim {
        self.dim
    }
}

/// An ordered collection of arbitrary geometries, including nested
/// collections. Every member must share the collection's dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    dim: Dim,
}

impl GeometryCollection {
    /// Construct a collection, checking each member against `dim`.
    pub fn new(geometries: Vec<Geometry>, dim: Dim) -> Result<Self, GeometryError> {
        check_homogeneous(geometries.iter().map(Geometry::dim), dim)?;
        Ok(Self { geometries, dim })
    }

    /// The member geometries, in order.
    #[must_use]
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// The number of member geometries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    /// Whether the collection has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// This collection's dimensionality.
    #[must_use]
    pub fn dim(&self) -> Dim {
        self.dim
    }
}

/// Check that every child dimensionality equals the container's.
fn check_homogeneous(
    children: impl IntoIterator<Item = Dim>,
    dim: Dim,
) -> Result<(), GeometryError> {
    for child in children {
        if child != dim {
            return Err(GeometryError::MixedDimensionality {
                expected: dim,
                found: child,
            });
        }
    }
    Ok(())
}

// ============================================================================
// Geometry
// ============================================================================

/// Any geometry value: the closed union of the seven geometry types.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// This geometry's dimensionality.
    #[must_use]
    pub fn dim(&self) -> Dim {
        match self {
            Geometry::Point(g) => g.dim(),
            Geometry::LineString(g) => g.dim(),
            Geometry::Polygon(g) => g.dim(),
            Geometry::MultiPoint(g) => g.dim(),
            Geometry::MultiLineString(g) => g.dim(),
            Geometry::MultiPolygon(g) => g.dim(),
            Geometry::GeometryCollection(g) => g.dim(),
        }
    }

    /// Whether coordinates carry a Z ordinate.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.dim().is_3d()
    }

    /// Whether coordinates carry a measure value.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.dim().is_measured()
    }

    /// The WKT keyword for this geometry's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "POINT",
            Geometry::LineString(_) => "LINESTRING",
            Geometry::Polygon(_) => "POLYGON",
            Geometry::MultiPoint(_) => "MULTIPOINT",
            Geometry::MultiLineString(_) => "MULTILINESTRING",
            Geometry::MultiPolygon(_) => "MULTIPOLYGON",
            Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_display() {
        assert_eq!(Dim::XY.to_string(), "XY");
        assert_eq!(Dim::XYZ.to_string(), "XYZ");
        assert_eq!(Dim::XYM.to_string(), "XYM");
        assert_eq!(Dim::XYZM.to_string(), "XYZM");
    }

    #[test]
    fn coord_dim_follows_ordinates() {
        assert_eq!(Coord::xy(1.0, 2.0).dim(), Dim::XY);
        assert_eq!(Coord::xyz(1.0, 2.0, 3.0).dim(), Dim::XYZ);
        assert_eq!(Coord::xym(1.0, 2.0, 3.0).dim(), Dim::XYM);
        assert_eq!(Coord::xyzm(1.0, 2.0, 3.0, 4.0).dim(), Dim::XYZM);
    }

    #[test]
    fn point_accessors() {
        let point = Point::new(Coord::xyzm(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(point.x(), Some(1.0));
        assert_eq!(point.y(), Some(2.0));
        assert_eq!(point.z(), Some(3.0));
        assert_eq!(point.m(), Some(4.0));
        assert!(!point.is_empty());
        assert_eq!(point.dim(), Dim::XYZM);
    }

    #[test]
    fn empty_point_is_distinct() {
        let empty = Point::empty(Dim::XY);
        assert!(empty.is_empty());
        assert_eq!(empty.x(), None);
        assert_eq!(empty.dim(), Dim::XY);
        assert_ne!(empty, Point::new(Coord::xy(0.0, 0.0)).unwrap());

        // Empty points with different dimensionality are different values.
        assert_ne!(Point::empty(Dim::XY), Point::empty(Dim::XYZ));
    }

    #[test]
    fn non_finite_coordinates_rejected() {
        let err = Point::new(Coord::xy(f64::NAN, 0.0)).unwrap_err();
        assert!(matches!(err, GeometryError::NonFinite(v) if v.is_nan()));
        assert!(Point::new(Coord::xyz(0.0, 0.0, f64::INFINITY)).is_err());
        assert!(Point::new(Coord::xym(0.0, 0.0, f64::NEG_INFINITY)).is_err());
    }

    #[test]
    fn nan_error_equality() {
        // GeometryError::NonFinite(NaN) != itself because NaN != NaN; make
        // sure the derive doesn't panic and infinity compares as expected.
        assert_eq!(
            GeometryError::NonFinite(f64::INFINITY),
            GeometryError::NonFinite(f64::INFINITY)
        );
    }

    #[test]
    fn line_string_homogeneity() {
        let points = vec![
            Point::new(Coord::xy(0.0, 0.0)).unwrap(),
            Point::new(Coord::xyz(1.0, 1.0, 1.0)).unwrap(),
        ];
        assert_eq!(
            LineString::new(points, Dim::XY).unwrap_err(),
            GeometryError::MixedDimensionality {
                expected: Dim::XY,
                found: Dim::XYZ,
            }
        );
    }

    #[test]
    fn empty_line_string_keeps_declared_dim() {
        let line = LineString::new(vec![], Dim::XYZM).unwrap();
        assert!(line.is_empty());
        assert_eq!(line.dim(), Dim::XYZM);
    }

    #[test]
    fn polygon_exterior_and_interiors() {
        let ring = |coords: &[(f64, f64)]| {
            let points = coords
                .iter()
                .map(|&(x, y)| Point::new(Coord::xy(x, y)).unwrap())
                .collect();
            LineString::new(points, Dim::XY).unwrap()
        };

        let shell = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (0.0, 0.0)]);
        let hole = ring(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (1.0, 1.0)]);
        let polygon = Polygon::new(vec![shell.clone(), hole.clone()], Dim::XY).unwrap();

        assert_eq!(polygon.exterior(), Some(&shell));
        assert_eq!(polygon.interiors(), &[hole]);

        let empty = Polygon::new(vec![], Dim::XY).unwrap();
        assert_eq!(empty.exterior(), None);
        assert!(empty.interiors().is_empty());
    }

    #[test]
    fn collection_rejects_mixed_members() {
        let flat = Geometry::Point(Point::new(Coord::xy(1.0, 2.0)).unwrap());
        let tall = Geometry::Point(Point::new(Coord::xyz(1.0, 2.0, 3.0)).unwrap());
        let err = GeometryCollection::new(vec![flat, tall], Dim::XY).unwrap_err();
        assert_eq!(
            err,
            GeometryError::MixedDimensionality {
                expected: Dim::XY,
                found: Dim::XYZ,
            }
        );
    }

    #[test]
    fn geometry_type_names() {
        let point = Geometry::Point(Point::empty(Dim::XY));
        assert_eq!(point.type_name(), "POINT");

        let collection =
            Geometry::GeometryCollection(GeometryCollection::new(vec![], Dim::XYM).unwrap());
        assert_eq!(collection.type_name(), "GEOMETRYCOLLECTION");
        assert!(!collection.is_3d());
        assert!(collection.is_measured());
    }
}
