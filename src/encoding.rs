//! SP 800-185 string framing primitives.
//!
//! `left_encode`, `right_encode`, `encode_string`, and `bytepad` are the small
//! encoding functions from NIST SP 800-185 section 2.3 that give cSHAKE256 and
//! KMACXOF256 their unambiguous domain separation. A single wrong byte here
//! produces output that is wrong yet looks perfectly random, so the tests pin
//! the exact octets.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::Error;

/// Maximum bit size of an encodable integer: arguments must be below 2^2040,
/// so the byte-count prefix always fits in one octet.
const MAX_ENCODABLE_BITS: u64 = 2040;

/// Encodes `n` with its minimal big-endian byte count *prefixed*: `[k, b_{k-1}, …, b_0]`.
///
/// # Errors
/// [`Error::EncodingOutOfRange`] if `n >= 2^2040`.
pub fn left_encode(n: &BigUint) -> Result<Vec<u8>, Error> {
    let digits = minimal_be_bytes(n)?;
    let mut out = Vec::with_capacity(digits.len() + 1);
    out.push(digits.len() as u8);
    out.extend_from_slice(&digits);
    Ok(out)
}

/// Encodes `n` with its minimal big-endian byte count *suffixed*: `[b_{k-1}, …, b_0, k]`.
///
/// # Errors
/// [`Error::EncodingOutOfRange`] if `n >= 2^2040`.
pub fn right_encode(n: &BigUint) -> Result<Vec<u8>, Error> {
    let mut out = minimal_be_bytes(n)?;
    let count = out.len() as u8;
    out.push(count);
    Ok(out)
}

/// `encode_string(S) = left_encode(8·|S|) ‖ S`; the empty string encodes as `left_encode(0)`.
pub fn encode_string(s: &[u8]) -> Result<Vec<u8>, Error> {
    let bit_len = BigUint::from(s.len()) * 8u8;
    let mut out = left_encode(&bit_len)?;
    out.extend_from_slice(s);
    Ok(out)
}

/// `bytepad(X, w) = left_encode(w) ‖ X`, zero padded up to the next multiple of `w`.
///
/// `w` must be positive; every caller in this crate passes the sponge rate.
pub fn bytepad(x: &[u8], w: usize) -> Result<Vec<u8>, Error> {
    debug_assert!(w > 0, "bytepad width must be positive");
    let mut z = left_encode(&BigUint::from(w))?;
    z.extend_from_slice(x);
    let rem = z.len() % w;
    if rem != 0 {
        z.resize(z.len() + w - rem, 0);
    }
    Ok(z)
}

/// Minimal big-endian representation of `n`, one zero byte for `n = 0`.
fn minimal_be_bytes(n: &BigUint) -> Result<Vec<u8>, Error> {
    if n.bits() > MAX_ENCODABLE_BITS {
        return Err(Error::EncodingOutOfRange);
    }
    if n.is_zero() {
        Ok(vec![0])
    } else {
        Ok(n.to_bytes_be())
    }
}
