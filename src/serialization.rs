//! Byte-level codecs for curve coordinates and points.
//!
//! Coordinates travel as fixed 57-byte little-endian strings, the canonical
//! Ed448 coordinate length. A serialized point is the 114-byte concatenation
//! `x ‖ y`; deserialization re-checks the curve equation, so a forged or
//! corrupted point never enters the group arithmetic.

use num_bigint::BigUint;

use crate::curve::AffinePoint;
use crate::errors::Error;

/// Serialized length of one field coordinate.
pub const COORDINATE_LEN: usize = 57;

/// Serialized length of an affine point: `x ‖ y`.
pub const POINT_LEN: usize = 2 * COORDINATE_LEN;

/// Encodes a reduced field element as 57 little-endian bytes.
pub fn serialize_coordinate(v: &BigUint) -> [u8; COORDINATE_LEN] {
    let mut out = [0u8; COORDINATE_LEN];
    let bytes = v.to_bytes_le();
    debug_assert!(bytes.len() <= COORDINATE_LEN, "coordinate must be reduced mod p");
    out[..bytes.len()].copy_from_slice(&bytes);
    out
}

/// Decodes a 57-byte little-endian field element.
pub fn deserialize_coordinate(bytes: &[u8; COORDINATE_LEN]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Encodes a point as `x ‖ y`, 114 bytes.
pub fn serialize_point(point: &AffinePoint) -> [u8; POINT_LEN] {
    let mut out = [0u8; POINT_LEN];
    out[..COORDINATE_LEN].copy_from_slice(&serialize_coordinate(point.x()));
    out[COORDINATE_LEN..].copy_from_slice(&serialize_coordinate(point.y()));
    out
}

/// Decodes a 114-byte point encoding, validating curve membership.
///
/// # Errors
/// - [`Error::InvalidInputLength`] if `bytes` is not exactly 114 bytes.
/// - [`Error::InvalidCurvePoint`] if the coordinates fail the curve equation.
pub fn deserialize_point(bytes: &[u8]) -> Result<AffinePoint, Error> {
    let encoded: &[u8; POINT_LEN] = bytes.try_into().map_err(|_| Error::InvalidInputLength {
        len: bytes.len(),
        min: POINT_LEN,
    })?;
    let (x_bytes, y_bytes) = encoded.split_at(COORDINATE_LEN);
    let x = BigUint::from_bytes_le(x_bytes);
    let y = BigUint::from_bytes_le(y_bytes);
    AffinePoint::new(x, y)
}
