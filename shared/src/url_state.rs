//! Selected-position permalink encoding.
//!
//! The query parameter [`POSITION_PARAM`] holds `percent-encode("x y")`: two base-10
//! numbers, horizontal first, joined by a single space.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::coords::MapPoint;

pub const POSITION_PARAM: &str = "p";

/// Bytes escaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one URI component (a path segment or a query value).
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Reverse of [`encode_component`]. Escapes that don't decode to UTF-8 yield `None`.
pub fn decode_component(encoded: &str) -> Option<String> {
    percent_decode_str(encoded)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Encode a point as the `p` parameter value. Non-finite points have no encoding.
pub fn encode_position(p: MapPoint) -> Option<String> {
    if !p.is_finite() {
        return None;
    }
    Some(encode_component(&format!("{} {}", p.x, p.y)))
}

/// Reverse of [`encode_position`]. Anything that doesn't decode to exactly two
/// finite numbers separated by one space yields `None`.
pub fn decode_position(raw: &str) -> Option<MapPoint> {
    let decoded = decode_component(raw.trim())?;
    let mut parts = decoded.split(' ');
    let x = parse_axis(parts.next()?)?;
    let y = parse_axis(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(MapPoint::new(x, y))
}

fn parse_axis(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
