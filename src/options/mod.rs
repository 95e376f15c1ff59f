//! Option transformation for map client constructors
//!
//! Callers pass options with underscore keys (`stroke_weight`); the client
//! expects camel case (`strokeWeight`) inside an object literal where some
//! values are live code references rather than strings.
//!
//! # Submodules
//! - `keys` - Key camelization and the `OptionMap` type
//! - `schema` - Per-shape field schemas (required and unescaped fields)
//! - `literal` - Object literal serializer
//! - `config` - `RenderOptions` / `LatLngOptions` configuration structs

mod config;
mod keys;
mod literal;
mod schema;

pub use config::{LatLngOptions, RenderOptions};

pub use keys::{camelize, camelize_keys, OptionMap};

pub use literal::{options_from, to_object_literal};

pub use schema::{
    FieldSpec,
    ShapeSchema,
    MARKER_SCHEMA,
    POLYGON_SCHEMA,
    POLYLINE_SCHEMA,
};
