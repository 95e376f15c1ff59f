//! Version independent structured descriptions
//!
//! These are plain data for a client that builds its own overlays from JSON,
//! so they do not consult the active API version.

use geo::{BoundingRect, Coord, LineString};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::encoding::{encode_path, DEFAULT_LEVEL};
use crate::error::RenderError;
use crate::geometry::{BoundingBox, Shape};
use crate::options::{camelize_keys, OptionMap};

/// Options for [`describe`]
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeOptions {
    /// Emit encoded polylines with a levels string. Default: `true`
    pub encoded: bool,
    /// Level written for every point. Default: [`DEFAULT_LEVEL`]
    pub level: u32,
    /// Add one sub-path per polygon hole. Default: `false`
    pub interior_rings: bool,
    /// Style options copied (camelized) into `options`. Default: empty
    pub style: OptionMap,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            encoded: true,
            level: DEFAULT_LEVEL,
            interior_rings: false,
            style: OptionMap::new(),
        }
    }
}

impl DescribeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encoded(mut self, encoded: bool) -> Self {
        self.encoded = encoded;
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn interior_rings(mut self, interior_rings: bool) -> Self {
        self.interior_rings = interior_rings;
        self
    }

    pub fn style(mut self, style: OptionMap) -> Self {
        self.style = style;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Description {
    Point {
        lat: f64,
        lng: f64,
    },
    LineString {
        polylines: Vec<SubPath>,
        options: Map<String, Value>,
        encoded: bool,
    },
    Polygon {
        polylines: Vec<SubPath>,
        options: Map<String, Value>,
        encoded: bool,
    },
    Collection {
        geometries: Vec<Description>,
    },
}

/// One ring or line of a described geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubPath {
    pub points: PathPoints,
    pub bounds: SubPathBounds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathPoints {
    Encoded(String),
    /// `[x, y]` pairs
    Raw(Vec<[f64; 2]>),
}

/// Corners as `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubPathBounds {
    pub sw: [f64; 2],
    pub ne: [f64; 2],
}

impl From<BoundingBox> for SubPathBounds {
    fn from(bounds: BoundingBox) -> Self {
        Self {
            sw: [bounds.lower_left.x, bounds.lower_left.y],
            ne: [bounds.upper_right.x, bounds.upper_right.y],
        }
    }
}

/// `{east, west, north, south}` bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLonBox {
    pub east: f64,
    pub west: f64,
    pub north: f64,
    pub south: f64,
}

/// `{coordinates: [x, y, 0]}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JsonPoint {
    pub coordinates: [f64; 3],
}

/// Describe a geometry as plain data.
pub fn describe(shape: &Shape<'_>, options: &DescribeOptions) -> Result<Description, RenderError> {
    match shape {
        Shape::Point(p) => Ok(Description::Point { lat: p.y(), lng: p.x() }),
        Shape::Sequence(ls) => Ok(Description::LineString {
            polylines: vec![sub_path(ls, options)?],
            options: style_map(options),
            encoded: options.encoded,
        }),
        Shape::Polygon(poly) => {
            let mut polylines = vec![sub_path(poly.exterior(), options)?];
            if options.interior_rings {
                for ring in poly.interiors() {
                    polylines.push(sub_path(ring, options)?);
                }
            }
            Ok(Description::Polygon {
                polylines,
                options: style_map(options),
                encoded: options.encoded,
            })
        }
        Shape::Collection { children, .. } => Ok(Description::Collection {
            geometries: children
                .iter()
                .map(|child| describe(child, options))
                .collect::<Result<_, _>>()?,
        }),
    }
}

fn sub_path(line: &LineString<f64>, options: &DescribeOptions) -> Result<SubPath, RenderError> {
    let bounds = line
        .bounding_rect()
        .map(BoundingBox::from)
        .ok_or(RenderError::EmptyGeometry { operation: "describe" })?;

    let (points, levels) = if options.encoded {
        let path = encode_path(&line.0, options.level)?;
        (PathPoints::Encoded(path.points), Some(path.levels))
    } else {
        let raw = line.0.iter().map(|c: &Coord<f64>| [c.x, c.y]).collect();
        (PathPoints::Raw(raw), None)
    };

    Ok(SubPath {
        points,
        bounds: bounds.into(),
        levels,
    })
}

fn style_map(options: &DescribeOptions) -> Map<String, Value> {
    camelize_keys(&options.style).into_iter().collect()
}

pub fn lat_lon_box(shape: &Shape<'_>) -> Result<LatLonBox, RenderError> {
    let bounds = shape
        .bounding_box()
        .ok_or(RenderError::EmptyGeometry { operation: "lat_lon_box" })?;
    Ok(LatLonBox {
        east: bounds.upper_right.x,
        west: bounds.lower_left.x,
        north: bounds.upper_right.y,
        south: bounds.lower_left.y,
    })
}

/// Point coordinates; other kinds use their centroid
pub fn json_point(shape: &Shape<'_>) -> Result<JsonPoint, RenderError> {
    let point = shape
        .centroid()
        .ok_or(RenderError::EmptyGeometry { operation: "json_point" })?;
    Ok(JsonPoint {
        coordinates: [point.x(), point.y(), 0.0],
    })
}
