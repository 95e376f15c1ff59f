//! Google Maps rendering entry points
//!
//! The free functions here render against the process-wide active API
//! version (see [`use_api`]). Code that wants an explicit, immutable rule set
//! can hold an [`ApiTable`] from [`ApiTable::for_version`] and call it
//! directly.
//!
//! # Submodules
//! - `renderer` - `GeometryRenderer` strategy trait, `ApiTable`, `Rendered`
//! - `registry` - Registered tables and the active version
//! - `api3` - Google Maps JavaScript API v3 renderers
//! - `describe` - Version independent structured descriptions

pub mod api3;
mod describe;
mod registry;
mod renderer;

use geo::Geometry;

use crate::error::RenderError;
use crate::geometry::Shape;
use crate::options::{LatLngOptions, OptionMap, RenderOptions};

pub use describe::{
    DescribeOptions,
    Description,
    JsonPoint,
    LatLonBox,
    PathPoints,
    SubPath,
    SubPathBounds,
};

pub use registry::{
    active_api,
    active_version,
    register_api,
    registered_versions,
    use_api,
};

pub use renderer::{ApiTable, GeometryRenderer, Rendered};

/// `new google.maps.LatLng(lat, lng)` for a point; one per coordinate for
/// a coordinate sequence
pub fn lat_lng(geometry: &Geometry<f64>, options: &LatLngOptions) -> Result<Rendered, RenderError> {
    active_api()?.lat_lng(&Shape::from(geometry), options)
}

pub fn point(geometry: &Geometry<f64>) -> Result<Rendered, RenderError> {
    active_api()?.point(&Shape::from(geometry))
}

pub fn lat_lng_bounds(
    geometry: &Geometry<f64>,
    options: &LatLngOptions,
) -> Result<Rendered, RenderError> {
    active_api()?.lat_lng_bounds(&Shape::from(geometry), options)
}

pub fn lat_lng_bounds_string(
    geometry: &Geometry<f64>,
    precision: u32,
) -> Result<Rendered, RenderError> {
    active_api()?.lat_lng_bounds_string(&Shape::from(geometry), precision)
}

pub fn polyline(
    geometry: &Geometry<f64>,
    options: &OptionMap,
    render: &RenderOptions,
) -> Result<Rendered, RenderError> {
    active_api()?.polyline(&Shape::from(geometry), options, render)
}

pub fn polygon(
    geometry: &Geometry<f64>,
    options: &OptionMap,
    render: &RenderOptions,
) -> Result<Rendered, RenderError> {
    active_api()?.polygon(&Shape::from(geometry), options, render)
}

pub fn marker(
    geometry: &Geometry<f64>,
    options: &OptionMap,
    render: &RenderOptions,
) -> Result<Rendered, RenderError> {
    active_api()?.marker(&Shape::from(geometry), options, render)
}

pub fn describe(
    geometry: &Geometry<f64>,
    options: &DescribeOptions,
) -> Result<Description, RenderError> {
    describe::describe(&Shape::from(geometry), options)
}

pub fn lat_lon_box(geometry: &Geometry<f64>) -> Result<LatLonBox, RenderError> {
    describe::lat_lon_box(&Shape::from(geometry))
}

pub fn json_point(geometry: &Geometry<f64>) -> Result<JsonPoint, RenderError> {
    describe::json_point(&Shape::from(geometry))
}
