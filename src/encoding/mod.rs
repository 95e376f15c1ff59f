//! Numeric payload encoding for map client output
//!
//! # Submodules
//! - `coords` - Coordinate formatting (literal text, url values, 1e5 fixed point)
//! - `polyline` - Delta-compressed polyline codec and levels strings

mod coords;
mod polyline;

pub use coords::{
    format_number,
    lat_lng_pair,
    round_to_precision,
    url_value,
    from_e5,
    to_e5,
    DEFAULT_URL_PRECISION,
};

pub use polyline::{
    decode,
    encode,
    encode_levels,
    encode_path,
    EncodedPath,
    DEFAULT_LEVEL,
};
