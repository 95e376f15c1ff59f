//! Render `geo` geometries for the Google Maps JavaScript client
//!
//! Output comes in three forms:
//! - constructor-call literals (`new google.maps.Polygon({...})`) for the
//!   API version selected with [`maps::use_api`]
//! - structured descriptions and bounds boxes that serialize with `serde`
//! - encoded polylines ([`encoding::encode`] / [`encoding::decode`])
//!
//! ```
//! use geo::{point, Geometry};
//! use gmaps_render::maps;
//! use gmaps_render::options::LatLngOptions;
//!
//! maps::use_api(3).unwrap();
//! let geom: Geometry<f64> = point!(x: 10.0, y: 10.01).into();
//! let literal = maps::lat_lng(&geom, &LatLngOptions::default()).unwrap();
//! assert_eq!(literal.to_string(), "new google.maps.LatLng(10.01, 10.0)");
//! ```

pub mod encoding;
pub mod error;
pub mod geometry;
pub mod maps;
pub mod options;

pub use error::{PolylineError, RenderError};
pub use geometry::{BoundingBox, GeometryKind, Shape};
pub use maps::{ApiTable, GeometryRenderer, Rendered};
pub use options::{LatLngOptions, OptionMap, RenderOptions};
