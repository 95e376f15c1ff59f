//! Read-only view over `geo` geometries
//!
//! Renderers never match on `geo::Geometry` directly. They work on a [`Shape`],
//! which folds the ten `geo` variants into the four kinds that have their own
//! rendering rules, and query it for centroid, bounding box and coordinates.

use std::borrow::Cow;
use std::fmt;

use geo::{BoundingRect, Centroid, Coord, Geometry, LineString, Point, Polygon, Rect};

/// The geometry kinds renderers are registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    CoordinateSequence,
    Polygon,
    Collection,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 4] = [
        GeometryKind::Point,
        GeometryKind::CoordinateSequence,
        GeometryKind::Polygon,
        GeometryKind::Collection,
    ];
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryKind::Point => write!(f, "point"),
            GeometryKind::CoordinateSequence => write!(f, "coordinate sequence"),
            GeometryKind::Polygon => write!(f, "polygon"),
            GeometryKind::Collection => write!(f, "collection"),
        }
    }
}

/// Axis-aligned bounds as lower-left / upper-right corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lower_left: Coord<f64>,
    pub upper_right: Coord<f64>,
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        // Rect keeps min/max normalized whichever corner it was built from
        BoundingBox {
            lower_left: rect.min(),
            upper_right: rect.max(),
        }
    }
}

/// A geometry tagged by rendering kind
#[derive(Debug, Clone)]
pub enum Shape<'a> {
    Point(Point<f64>),
    Sequence(Cow<'a, LineString<f64>>),
    Polygon(Cow<'a, Polygon<f64>>),
    Collection {
        source: Cow<'a, Geometry<f64>>,
        children: Vec<Shape<'a>>,
    },
}

impl<'a> From<&'a Geometry<f64>> for Shape<'a> {
    fn from(geometry: &'a Geometry<f64>) -> Self {
        match geometry {
            Geometry::Point(p) => Shape::Point(*p),
            Geometry::Line(line) => {
                Shape::Sequence(Cow::Owned(LineString::new(vec![line.start, line.end])))
            }
            Geometry::LineString(ls) => Shape::Sequence(Cow::Borrowed(ls)),
            Geometry::Polygon(poly) => Shape::Polygon(Cow::Borrowed(poly)),
            Geometry::Rect(rect) => Shape::Polygon(Cow::Owned(rect.to_polygon())),
            Geometry::Triangle(tri) => Shape::Polygon(Cow::Owned(tri.to_polygon())),
            Geometry::MultiPoint(mp) => Shape::Collection {
                source: Cow::Borrowed(geometry),
                children: mp.0.iter().map(|p| Shape::Point(*p)).collect(),
            },
            Geometry::MultiLineString(mls) => Shape::Collection {
                source: Cow::Borrowed(geometry),
                children: mls.0.iter().map(|ls| Shape::Sequence(Cow::Borrowed(ls))).collect(),
            },
            Geometry::MultiPolygon(mp) => Shape::Collection {
                source: Cow::Borrowed(geometry),
                children: mp.0.iter().map(|p| Shape::Polygon(Cow::Borrowed(p))).collect(),
            },
            Geometry::GeometryCollection(gc) => Shape::Collection {
                source: Cow::Borrowed(geometry),
                children: gc.0.iter().map(Shape::from).collect(),
            },
        }
    }
}

impl Shape<'_> {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Shape::Point(_) => GeometryKind::Point,
            Shape::Sequence(_) => GeometryKind::CoordinateSequence,
            Shape::Polygon(_) => GeometryKind::Polygon,
            Shape::Collection { .. } => GeometryKind::Collection,
        }
    }

    /// Centroid, or `None` for empty geometries
    pub fn centroid(&self) -> Option<Point<f64>> {
        match self {
            Shape::Point(p) => Some(*p),
            Shape::Sequence(ls) => ls.centroid(),
            Shape::Polygon(poly) => poly.centroid(),
            Shape::Collection { source, .. } => source.centroid(),
        }
    }

    /// Bounding box, or `None` for empty geometries
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let rect = match self {
            Shape::Point(p) => Some(p.bounding_rect()),
            Shape::Sequence(ls) => ls.bounding_rect(),
            Shape::Polygon(poly) => poly.bounding_rect(),
            Shape::Collection { source, .. } => source.bounding_rect(),
        };
        rect.map(BoundingBox::from)
    }

    /// The coordinate sequence this shape renders as a path.
    ///
    /// Polygons yield their exterior ring only. Collections have no single
    /// sequence.
    pub fn coordinates(&self) -> Option<Cow<'_, [Coord<f64>]>> {
        match self {
            Shape::Point(p) => Some(Cow::Owned(vec![p.0])),
            Shape::Sequence(ls) => Some(Cow::Borrowed(ls.0.as_slice())),
            Shape::Polygon(poly) => Some(Cow::Borrowed(poly.exterior().0.as_slice())),
            Shape::Collection { .. } => None,
        }
    }

    pub fn exterior_ring(&self) -> Option<&LineString<f64>> {
        match self {
            Shape::Polygon(poly) => Some(poly.exterior()),
            _ => None,
        }
    }

    pub fn interior_rings(&self) -> &[LineString<f64>] {
        match self {
            Shape::Polygon(poly) => poly.interiors(),
            _ => &[],
        }
    }
}
