//! Error types for rendering and polyline decoding

use thiserror::Error;

use crate::geometry::GeometryKind;

/// Errors returned by render operations.
///
/// Every variant is a caller or configuration error. Nothing is retried and
/// no partial output is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Render requested before any API version was selected
    #[error("no Google Maps API version selected; call use_api first")]
    NoActiveVersion,
    /// A version with no registered renderer table
    #[error("unsupported Google Maps API version: {0}")]
    UnsupportedVersion(u32),
    #[error("{operation} is not supported for {kind} geometries in API version {version}")]
    UnsupportedGeometryKind {
        kind: GeometryKind,
        operation: &'static str,
        version: u32,
    },
    #[error("malformed option '{key}': {reason}")]
    MalformedOptions { key: String, reason: String },
    /// The geometry has no centroid or bounding box (e.g. an empty collection)
    #[error("{operation} needs a non-empty geometry")]
    EmptyGeometry { operation: &'static str },
    #[error("cannot encode path: {0}")]
    Polyline(#[from] PolylineError),
}

impl RenderError {
    pub(crate) fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        RenderError::MalformedOptions {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur when encoding or decoding a polyline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// Input ended in the middle of a value or between a latitude and its longitude
    #[error("unexpected end of encoded polyline at byte {0}")]
    UnexpectedEnd(usize),
    #[error("invalid character {ch:?} at byte {position} in encoded polyline")]
    InvalidCharacter { ch: char, position: usize },
    /// A single value needed more than 32 bits
    #[error("encoded value starting at byte {0} overflows 32 bits")]
    Overflow(usize),
    /// The point at this index is too far from its predecessor: the
    /// 1e5-scaled delta does not fit in 32 bits
    #[error("coordinate {0} is out of range for an encoded polyline")]
    OutOfRange(usize),
}
