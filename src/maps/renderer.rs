//! Renderer strategy trait and the per-version renderer table

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::RenderError;
use crate::geometry::{GeometryKind, Shape};
use crate::options::{LatLngOptions, OptionMap, RenderOptions};

/// Output of a render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// A single constructor expression
    Literal(String),
    /// One result per element, in element order (coordinate sequences,
    /// collections)
    List(Vec<Rendered>),
}

impl Rendered {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Rendered::Literal(s) => Some(s),
            Rendered::List(_) => None,
        }
    }

    pub fn into_literal(self) -> Option<String> {
        match self {
            Rendered::Literal(s) => Some(s),
            Rendered::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Rendered]> {
        match self {
            Rendered::Literal(_) => None,
            Rendered::List(items) => Some(items),
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Literal(s) => write!(f, "{}", s),
            Rendered::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Rendering rules for one geometry kind under one API version.
///
/// Every operation defaults to `UnsupportedGeometryKind`; a renderer overrides
/// the ones its kind supports. `api` is the table the call was dispatched
/// from, used for rendering contained geometries.
pub trait GeometryRenderer: Send + Sync {
    /// `LatLng` constructor(s)
    fn lat_lng(
        &self,
        shape: &Shape<'_>,
        _options: &LatLngOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        Err(api.unsupported(shape.kind(), "lat_lng"))
    }

    /// Pixel `Point` constructor (no axis swap)
    fn point(&self, shape: &Shape<'_>, api: &ApiTable) -> Result<Rendered, RenderError> {
        Err(api.unsupported(shape.kind(), "point"))
    }

    fn lat_lng_bounds(
        &self,
        shape: &Shape<'_>,
        _options: &LatLngOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        Err(api.unsupported(shape.kind(), "lat_lng_bounds"))
    }

    fn lat_lng_bounds_string(
        &self,
        shape: &Shape<'_>,
        _precision: u32,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        Err(api.unsupported(shape.kind(), "lat_lng_bounds_string"))
    }

    fn polyline(
        &self,
        shape: &Shape<'_>,
        _options: &OptionMap,
        _render: &RenderOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        Err(api.unsupported(shape.kind(), "polyline"))
    }

    fn polygon(
        &self,
        shape: &Shape<'_>,
        _options: &OptionMap,
        _render: &RenderOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        Err(api.unsupported(shape.kind(), "polygon"))
    }

    fn marker(
        &self,
        shape: &Shape<'_>,
        _options: &OptionMap,
        _render: &RenderOptions,
        api: &ApiTable,
    ) -> Result<Rendered, RenderError> {
        Err(api.unsupported(shape.kind(), "marker"))
    }
}

/// Immutable (geometry kind -> renderer) table for a single API version
#[derive(Clone)]
pub struct ApiTable {
    version: u32,
    renderers: HashMap<GeometryKind, Arc<dyn GeometryRenderer>>,
}

impl fmt::Debug for ApiTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<String> = self.renderers.keys().map(|k| k.to_string()).collect();
        kinds.sort();
        f.debug_struct("ApiTable")
            .field("version", &self.version)
            .field("kinds", &kinds)
            .finish()
    }
}

impl ApiTable {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            renderers: HashMap::new(),
        }
    }

    pub fn with_renderer<R>(mut self, kind: GeometryKind, renderer: R) -> Self
    where
        R: GeometryRenderer + 'static,
    {
        self.renderers.insert(kind, Arc::new(renderer));
        self
    }

    /// Table registered for `version`, independent of the active selection
    pub fn for_version(version: u32) -> Result<Arc<ApiTable>, RenderError> {
        super::registry::registered(version)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn supports(&self, kind: GeometryKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    pub(crate) fn unsupported(&self, kind: GeometryKind, operation: &'static str) -> RenderError {
        RenderError::UnsupportedGeometryKind {
            kind,
            operation,
            version: self.version,
        }
    }

    fn renderer(
        &self,
        shape: &Shape<'_>,
        operation: &'static str,
    ) -> Result<&dyn GeometryRenderer, RenderError> {
        let kind = shape.kind();
        tracing::trace!("api {}: {} for {}", self.version, operation, kind);
        self.renderers
            .get(&kind)
            .map(|r| r.as_ref())
            .ok_or_else(|| self.unsupported(kind, operation))
    }

    pub fn lat_lng(&self, shape: &Shape<'_>, options: &LatLngOptions) -> Result<Rendered, RenderError> {
        self.renderer(shape, "lat_lng")?.lat_lng(shape, options, self)
    }

    pub fn point(&self, shape: &Shape<'_>) -> Result<Rendered, RenderError> {
        self.renderer(shape, "point")?.point(shape, self)
    }

    pub fn lat_lng_bounds(
        &self,
        shape: &Shape<'_>,
        options: &LatLngOptions,
    ) -> Result<Rendered, RenderError> {
        self.renderer(shape, "lat_lng_bounds")?
            .lat_lng_bounds(shape, options, self)
    }

    pub fn lat_lng_bounds_string(
        &self,
        shape: &Shape<'_>,
        precision: u32,
    ) -> Result<Rendered, RenderError> {
        self.renderer(shape, "lat_lng_bounds_string")?
            .lat_lng_bounds_string(shape, precision, self)
    }

    pub fn polyline(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
    ) -> Result<Rendered, RenderError> {
        self.renderer(shape, "polyline")?
            .polyline(shape, options, render, self)
    }

    pub fn polygon(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
    ) -> Result<Rendered, RenderError> {
        self.renderer(shape, "polygon")?
            .polygon(shape, options, render, self)
    }

    pub fn marker(
        &self,
        shape: &Shape<'_>,
        options: &OptionMap,
        render: &RenderOptions,
    ) -> Result<Rendered, RenderError> {
        self.renderer(shape, "marker")?
            .marker(shape, options, render, self)
    }
}
