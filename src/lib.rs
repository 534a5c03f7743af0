//! A Well-Known Text (WKT) geometry parser.
//!
//! geotext parses WKT geometry literals into an immutable geometry value
//! model: the seven simple-features types (Point, LineString, Polygon,
//! MultiPoint, MultiLineString, MultiPolygon, GeometryCollection) with
//! optional Z and M ordinates declared by the `Z`/`M`/`ZM` markers.
//!
//! # Modules
//!
//! - [`geometry`] -- The geometry value model and its validating factories.
//! - [`wkt`] -- Tokenizer, parser primitives, and the recursive-descent
//!   grammar reader.
//!
//! # Example
//!
//! ```
//! use geotext::{wkt, Geometry};
//!
//! let geometry = wkt::read("LINESTRING (0 0, 1 1, 2 2)").unwrap();
//! assert!(!geometry.is_3d());
//! match geometry {
//!     Geometry::LineString(line) => assert_eq!(line.points().len(), 3),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! Parsing is a pure function of the input text: no state is shared between
//! calls, so independent parses may run concurrently from any number of
//! threads.

pub mod geometry;
pub mod wkt;

pub use geometry::{
    Coord, Dim, Geometry, GeometryCollection, GeometryError, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
pub use wkt::{read, WktError};
