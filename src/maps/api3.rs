//! Google Maps JavaScript API v3 renderers
//!
//! Shapes are built as `new google.maps.<Class>({...})` with a single options
//! object. Paths go in `path` (polylines) or `paths` (polygons) as either a
//! `LatLng` array or an encoded polyline handed to
//! `google.maps.geometry.encoding.decodePath`.

use std::borrow::Cow;

use geo::Coord;
use serde_json::Value;

use super::renderer::{ApiTable, GeometryRenderer, Rendered};
use crate::encoding::{self, format_number, lat_lng_pair, round_to_precision, url_value};
use crate::error::RenderError;
use crate::geometry::{GeometryKind, Shape};
use crate::options::{
    camelize_keys, to_object_literal, LatLngOptions, OptionMap, RenderOptions, ShapeSchema,
    MARKER_SCHEMA, POLYGON_SCHEMA, POLYLINE_SCHEMA,
};

pub const VERSION: u32 = 3;

const NAMESPACE: &str = "google.maps";

/// Renderer table for API v3
pub fn table() -> ApiTable {
    ApiTable::new(VERSION)
        .with_renderer(GeometryKind::Point, PointRenderer)
        .with_renderer(GeometryKind::CoordinateSequence, SequenceRenderer)
        .with_renderer(GeometryKind::Polygon, PolygonRenderer)
        .with_renderer(GeometryKind::Collection, CollectionRenderer)
}

/// Polyline or polygon: which class, which path field
#[derive(Debug, Clone, Copy)]
enum PathShape {
    Polyline,
    Polygon,
}

impl PathShape {
    fn class(self) -> &'static str {
        match self {
            PathShape::Polyline => "Polyline",
            PathShape::Polygon => "Polygon",
        }
    }

    fn path_field(self) -> &'static str {
        match self {
            PathShape::Polyline => "path",
            PathShape::Polygon => "paths",
        }
    }

    fn operation(self) -> &'static str {
        match self {
            PathShape::Polyline => "polyline",
            PathShape::Polygon => "polygon",
        }
    }

    fn schema(self) -> &'static ShapeSchema {
        match self {
            PathShape::Polyline => &POLYLINE_SCHEMA,
            PathShape::Polygon => &POLYGON_SCHEMA,
        }
    }
}

fn lat_lng_literal(coord: Coord<f64>, options: &LatLngOptions) -> String {
    let coord = match options.precision {
        Some(digits) => Coord {
            x: round_to_precision(coord.x, digits),
            y: round_to_precision(coord.y, digits),
        },
        None => coord,
    };
    let no_wrap = if options.no_wrap { ", true" } else { "" };
    format!("new {}.LatLng({}{})", NAMESPACE, lat_lng_pair(coord), no_wrap)
}

fn path_value(coords: &[Coord<f64>], render: &RenderOptions) -> Result<String, RenderError> {
    if render.encoded {
        // encoded text may contain backslashes; quote it as a JS string
        let quoted = serde_json::to_string(&encoding::encode(coords)?)
            .map_err(|e| RenderError::malformed("path", e.to_string()))?;
        return Ok(format!("{}.geometry.encoding.decodePath({})", NAMESPACE, quoted));
    }

    let points: Vec<String> = coords
        .iter()
        .map(|c| lat_lng_literal(*c, &render.lat_lng))
        .collect();
    Ok(format!("[{}]", points.join(", ")))
}

/// Camelize caller options, force the schema's required fields, serialize
fn constructor_call(
    class: &str,
    schema: &ShapeSchema,
    options: &OptionMap,
    required: &[(&'static str, String)],
    render: &RenderOptions,
) -> Result<Rendered, RenderError> {
    let mut opts = camelize_keys(options);

    for name in schema.required_fields() {
        let value = required
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| RenderError::malformed(name, "no value for required field"))?;
        // forced fields always come last and replace anything the caller set
        opts.shift_remove(name);
        opts.insert(name.to_string(), Value::String(value));
    }

    let unescaped = schema.unescaped_keys(render.escape.as_slice());
    let literal = to_object_literal(&opts, &unescaped)?;
    Ok(Rendered::Literal(format!("new {}.{}({})", NAMESPACE, class, literal)))
}

fn render_path(
    shape: &Shape<'_>,
    kind: PathShape,
    options: &OptionMap,
    render: &RenderOptions,
    api: &ApiTable,
) -> Result<Rendered, RenderError> {
    let coords = shape
        .coordinates()
        .ok_or_else(|| api.unsupported(shape.kind(), kind.operation()))?;
    let path = path_value(&coords, render)?;
    constructor_call(
        kind.class(),
        kind.schema(),
        options,
        &[(kind.path_field(), path)],
        render,
    )
}

/// Marker at the centroid; `position` always comes from the geometry
fn render_marker(
    shape: &Shape<'_>,
    options: &OptionMap,
    render: &RenderOptions,
) -> Result<Rendered, RenderError> {
    let centroid = shape
        .centroid()
        .ok_or(RenderError::EmptyGeometry { operation: "marker" })?;
    let position = lat_lng_literal(centroid.0, &render.lat_lng);
    constructor_call(
        "Marker",
        &MARKER_SCHEMA,
        options,
        &[("position", position)],
        render,
    )
}

fn render_bounds(shape: &Shape<'_>, options: &LatLngOptions) -> Result<Rendered, RenderError> {
    let bounds = shape
        .bounding_box()
        .ok_or(RenderError::EmptyGeometry { operation: "lat_lng_bounds" })?;
    Ok(Rendered::Literal(format!(
        "new {}.LatLngBounds({}, {})",
        NAMESPACE,
        lat_lng_literal(bounds.lower_left, options),
        lat_lng_literal(bounds.upper_right, options),
    )))
}

/// `LatLngBounds#toString()` format
fn render_bounds_string(shape: &Shape<'_>, precision: u32) -> Result<Rendered, RenderError> {
    let bounds = shape
        .bounding_box()
        .ok_or(RenderError::EmptyGeometry { operation: "lat_lng_bounds" })?;
    Ok(Rendered::Literal(format!(
        "(({}), ({}))",
        url_value(bounds.lower_left, precision),
        url_value(bounds.upper_right, precision),
    )))
}

pub struct PointRenderer;

impl GeometryRenderer for PointRenderer {
    fn lat_lng(
        &self,
        shape: &Shape<'_>,
        options: &LatLngOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        match shape {
            Shape::Point(p) => Ok(Rendered::Literal(lat_lng_literal(p.0, options))),
            _ => Err(api.unsupported(shape.kind(), "lat_lng")),
        }
    }

    fn point(&self, shape: &Shape<'_>, api: &ApiTable) -> Result<Rendered, RenderError> {
        match shape {
            Shape::Point(p) => Ok(Rendered::Literal(format!(
                "new {}.Point({}, {})",
                NAMESPACE,
                format_number(p.x()),
                format_number(p.y()),
            ))),
            _ => Err(api.unsupported(shape.kind(), "point")),
        }
    }

    fn lat_lng_bounds(
        &self,
        shape: &Shape<'_>,
        options: &LatLngOptions,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_bounds(shape, options)
    }

    fn lat_lng_bounds_string(
        &self,
        shape: &Shape<'_>,
        precision: u32,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_bounds_string(shape, precision)
    }

    fn polyline(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_path(shape, PathShape::Polyline, options, render, api)
    }

    fn polygon(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_path(shape, PathShape::Polygon, options, render, api)
    }

    fn marker(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_marker(shape, options, render)
    }
}

pub struct SequenceRenderer;

impl GeometryRenderer for SequenceRenderer {
    /// One `LatLng` per coordinate, in order
    fn lat_lng(
        &self,
        shape: &Shape<'_>,
        options: &LatLngOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        let coords = shape
            .coordinates()
            .ok_or_else(|| api.unsupported(shape.kind(), "lat_lng"))?;
        Ok(Rendered::List(
            coords
                .iter()
                .map(|c| Rendered::Literal(lat_lng_literal(*c, options)))
                .collect(),
        ))
    }

    fn lat_lng_bounds(
        &self,
        shape: &Shape<'_>,
        options: &LatLngOptions,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_bounds(shape, options)
    }

    fn lat_lng_bounds_string(
        &self,
        shape: &Shape<'_>,
        precision: u32,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_bounds_string(shape, precision)
    }

    fn polyline(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_path(shape, PathShape::Polyline, options, render, api)
    }

    fn polygon(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_path(shape, PathShape::Polygon, options, render, api)
    }

    fn marker(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_marker(shape, options, render)
    }
}

/// Polygons render through their exterior ring. Interior rings are dropped.
pub struct PolygonRenderer;

impl PolygonRenderer {
    fn exterior<'s>(
        shape: &'s Shape<'_>,
        api: &ApiTable,
        operation: &'static str,
    ) -> Result<Shape<'s>, RenderError> {
        shape
            .exterior_ring()
            .map(|ring| Shape::Sequence(Cow::Borrowed(ring)))
            .ok_or_else(|| api.unsupported(shape.kind(), operation))
    }
}

impl GeometryRenderer for PolygonRenderer {
    fn lat_lng_bounds(
        &self,
        shape: &Shape<'_>,
        options: &LatLngOptions,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_bounds(shape, options)
    }

    fn lat_lng_bounds_string(
        &self,
        shape: &Shape<'_>,
        precision: u32,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_bounds_string(shape, precision)
    }

    fn polyline(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        api.polyline(&Self::exterior(shape, api, "polyline")?, options, render)
    }

    fn polygon(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        api.polygon(&Self::exterior(shape, api, "polygon")?, options, render)
    }

    fn marker(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_marker(shape, options, render)
    }
}

/// Collections render each child independently, in child order
pub struct CollectionRenderer;

impl CollectionRenderer {
    fn each<F>(
        shape: &Shape<'_>,
        api: &ApiTable,
        operation: &'static str,
        mut f: F,
    ) -> Result<Rendered, RenderError>
    where
        F: FnMut(&Shape<'_>) -> Result<Rendered, RenderError>,
    {
        match shape {
            Shape::Collection { children, .. } => {
                let rendered = children.iter().map(&mut f).collect::<Result<Vec<_>, _>>()?;
                Ok(Rendered::List(rendered))
            }
            _ => Err(api.unsupported(shape.kind(), operation)),
        }
    }
}

impl GeometryRenderer for CollectionRenderer {
    fn lat_lng_bounds(
        &self,
        shape: &Shape<'_>,
        options: &LatLngOptions,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_bounds(shape, options)
    }

    fn lat_lng_bounds_string(
        &self,
        shape: &Shape<'_>,
        precision: u32,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_bounds_string(shape, precision)
    }

    fn polyline(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        Self::each(shape, api, "polyline", |child| api.polyline(child, options, render))
    }

    fn polygon(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        Self::each(shape, api, "polygon", |child| api.polygon(child, options, render))
    }

    fn marker(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
        _api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        render_marker(shape, options, render)
    }
}
