//! Per-call rendering configuration

/// Coordinate formatting passed down to every `LatLng` a render produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatLngOptions {
    /// Append `, true` so the client does not wrap longitudes at the antimeridian.
    /// Default: `false`
    pub no_wrap: bool,
    /// Round coordinates to this many fractional digits.
    /// Default: `None` (shortest exact form)
    pub precision: Option<u32>,
}

impl LatLngOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    pub fn precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }
}

/// Rendering switches that are not constructor options
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Keys to quote even though the shape normally emits them as raw code.
    /// Can only remove keys from the shape's default set. Default: empty
    pub escape: Vec<String>,
    pub lat_lng: LatLngOptions,
    /// Send paths as an encoded polyline instead of a `LatLng` array.
    /// Default: `false`
    pub encoded: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn escape(mut self, key: impl Into<String>) -> Self {
        self.escape.push(key.into());
        self
    }

    pub fn lat_lng(mut self, lat_lng: LatLngOptions) -> Self {
        self.lat_lng = lat_lng;
        self
    }

    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.lat_lng.no_wrap = no_wrap;
        self
    }

    pub fn encoded(mut self, encoded: bool) -> Self {
        self.encoded = encoded;
        self
    }
}
