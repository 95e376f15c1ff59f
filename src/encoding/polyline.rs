//! Encoded polyline codec
//!
//! # Format
//!
//! Each point contributes its latitude then its longitude, scaled to 1e5 fixed
//! point and stored as a delta from the previous point (the first point is a
//! delta from `(0, 0)`). Deltas are taken between already rounded integers so
//! rounding error never accumulates along the path.
//!
//! A signed delta is zig-zagged (`v << 1`, bits inverted when negative), split
//! into 5-bit chunks least significant first, every chunk but the last tagged
//! with `0x20`, and offset by 63 into the printable range `'?'..='~'`.
//! Every delta must fit in 32 bits, on both the encode and the decode side.
//!
//! ```text
//! -179.98321  ->  -17998321  ->  `~oia@`
//! ```

use geo::Coord;
use serde::Serialize;

use super::coords::{from_e5, to_e5};
use crate::error::PolylineError;

/// Zoom level written for every point when no simplification is done
pub const DEFAULT_LEVEL: u32 = 3;

const OFFSET: u8 = 63;
const CONTINUATION: u64 = 0x20;
const CHUNK_MASK: u64 = 0x1f;

/// Encoded points plus the per-point levels string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedPath {
    pub points: String,
    pub levels: String,
}

/// Encode a coordinate sequence. Coordinates are `(x = lng, y = lat)`.
///
/// Fails with [`PolylineError::OutOfRange`] when a point's scaled delta from
/// its predecessor does not fit in 32 bits, which [`decode`] could not read back.
pub fn encode(coords: &[Coord<f64>]) -> Result<String, PolylineError> {
    let mut out = String::with_capacity(coords.len() * 8);
    let (mut prev_lat, mut prev_lng) = (0i64, 0i64);

    for (index, coord) in coords.iter().enumerate() {
        let lat = to_e5(coord.y);
        let lng = to_e5(coord.x);
        let lat_delta = delta(lat, prev_lat).ok_or(PolylineError::OutOfRange(index))?;
        let lng_delta = delta(lng, prev_lng).ok_or(PolylineError::OutOfRange(index))?;
        encode_signed(lat_delta, &mut out);
        encode_signed(lng_delta, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    Ok(out)
}

/// Encode points and a matching levels string with every point at `level`
pub fn encode_path(coords: &[Coord<f64>], level: u32) -> Result<EncodedPath, PolylineError> {
    Ok(EncodedPath {
        points: encode(coords)?,
        levels: encode_levels(coords.len(), level),
    })
}

fn delta(current: i64, previous: i64) -> Option<i32> {
    current
        .checked_sub(previous)
        .and_then(|d| i32::try_from(d).ok())
}

/// One level token per point
pub fn encode_levels(count: usize, level: u32) -> String {
    let mut token = String::new();
    encode_unsigned(level as u64, &mut token);
    token.repeat(count)
}

fn encode_signed(value: i32, out: &mut String) {
    let mut zigzag = (value as i64) << 1;
    if value < 0 {
        zigzag = !zigzag;
    }
    encode_unsigned(zigzag as u64, out);
}

fn encode_unsigned(mut value: u64, out: &mut String) {
    while value >= CONTINUATION {
        out.push(((CONTINUATION | (value & CHUNK_MASK)) as u8 + OFFSET) as char);
        value >>= 5;
    }
    out.push((value as u8 + OFFSET) as char);
}

/// Decode an encoded polyline back into `(x = lng, y = lat)` coordinates.
///
/// The result is the 1e5-rounded form of whatever was encoded.
pub fn decode(encoded: &str) -> Result<Vec<Coord<f64>>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut coords = Vec::new();
    let mut pos = 0;
    let (mut lat, mut lng) = (0i64, 0i64);

    while pos < bytes.len() {
        lat += decode_signed(encoded, &mut pos)?;
        if pos >= bytes.len() {
            return Err(PolylineError::UnexpectedEnd(pos));
        }
        lng += decode_signed(encoded, &mut pos)?;
        coords.push(Coord {
            x: from_e5(lng),
            y: from_e5(lat),
        });
    }

    Ok(coords)
}

fn decode_signed(encoded: &str, pos: &mut usize) -> Result<i64, PolylineError> {
    let bytes = encoded.as_bytes();
    let start = *pos;
    let mut result: u64 = 0;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(*pos) else {
            return Err(PolylineError::UnexpectedEnd(*pos));
        };
        if !(OFFSET..=b'~').contains(&byte) {
            let ch = encoded[*pos..].chars().next().unwrap_or(byte as char);
            return Err(PolylineError::InvalidCharacter { ch, position: *pos });
        }
        // 7 chunks already exceed 32 bits
        if shift >= 35 {
            return Err(PolylineError::Overflow(start));
        }

        let chunk = (byte - OFFSET) as u64;
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        *pos += 1;

        if chunk & CONTINUATION == 0 {
            break;
        }
    }

    if result > u32::MAX as u64 {
        return Err(PolylineError::Overflow(start));
    }

    let value = (result >> 1) as i64;
    Ok(if result & 1 == 1 { !value } else { value })
}
