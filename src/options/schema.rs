//! Per-shape option schemas
//!
//! A schema lists the option fields a constructor gives special treatment:
//! fields the renderer always fills in itself, and fields whose values are
//! emitted as raw code (map instance names, nested constructor calls) rather
//! than quoted literals. Any option not listed is passed through escaped.

use indexmap::IndexSet;

/// One field of a constructor's options object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Filled in by the renderer, overriding anything the caller passed
    pub required: bool,
    /// Emitted as raw code unless the caller asks for it to be escaped
    pub unescaped: bool,
}

const fn spec(name: &'static str, required: bool, unescaped: bool) -> FieldSpec {
    FieldSpec { name, required, unescaped }
}

/// Static description of one constructor's options object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSchema {
    pub fields: &'static [FieldSpec],
}

impl ShapeSchema {
    /// Default unescaped keys minus the ones the caller wants escaped
    pub fn unescaped_keys<S: AsRef<str>>(&self, escape: &[S]) -> IndexSet<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.unescaped)
            .map(|f| f.name)
            .filter(|name| !escape.iter().any(|e| e.as_ref() == *name))
            .collect()
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

pub const MARKER_SCHEMA: ShapeSchema = ShapeSchema {
    fields: &[
        spec("icon", false, true),
        spec("map", false, true),
        spec("position", true, true),
        spec("shadow", false, true),
        spec("shape", false, true),
    ],
};

const POLY_FIELDS_COMMON: [FieldSpec; 7] = [
    spec("clickable", false, true),
    spec("fillOpacity", false, true),
    spec("geodesic", false, true),
    spec("map", false, true),
    spec("strokeOpacity", false, true),
    spec("strokeWeight", false, true),
    spec("zIndex", false, true),
];

/// Open paths carry `path`; `paths` is still unescaped if a caller passes it
pub const POLYLINE_SCHEMA: ShapeSchema = ShapeSchema {
    fields: &[
        POLY_FIELDS_COMMON[0],
        POLY_FIELDS_COMMON[1],
        POLY_FIELDS_COMMON[2],
        POLY_FIELDS_COMMON[3],
        spec("path", true, true),
        spec("paths", false, true),
        POLY_FIELDS_COMMON[4],
        POLY_FIELDS_COMMON[5],
        POLY_FIELDS_COMMON[6],
    ],
};

pub const POLYGON_SCHEMA: ShapeSchema = ShapeSchema {
    fields: &[
        POLY_FIELDS_COMMON[0],
        POLY_FIELDS_COMMON[1],
        POLY_FIELDS_COMMON[2],
        POLY_FIELDS_COMMON[3],
        spec("path", false, true),
        spec("paths", true, true),
        POLY_FIELDS_COMMON[4],
        POLY_FIELDS_COMMON[5],
        POLY_FIELDS_COMMON[6],
    ],
};
