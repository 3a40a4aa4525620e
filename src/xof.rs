//! Domain-separated extendable-output functions.
//!
//! [`shake256`] is plain FIPS 202 SHAKE256. [`cshake256`] prepends the
//! SP 800-185 function-name/customization frame, and [`kmacxof256`] builds the
//! keyed XOF variant of KMAC on top of it. [`hash`] and [`mac`] are the two
//! fixed-length conveniences the toolkit exposes for callers that just want a
//! 512-bit digest or authentication tag.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::encoding::{bytepad, encode_string, right_encode};
use crate::sponge::{sponge, CAPACITY, RATE_BYTES};

/// SHAKE256 of `input`, producing `bit_len / 8` bytes.
///
/// Appends the SHAKE domain separator before the sponge: 0x1F ordinarily, or
/// the fused 0x9F (0x1F | 0x80) when the separator itself completes a block.
pub fn shake256(input: &[u8], bit_len: usize) -> Vec<u8> {
    let mut framed = Vec::with_capacity(input.len() + 1);
    framed.extend_from_slice(input);
    let remaining = RATE_BYTES - input.len() % RATE_BYTES;
    framed.push(if remaining == 1 { 0x9F } else { 0x1F });
    sponge(&framed, bit_len, CAPACITY)
}

/// cSHAKE256 with a function `name` and customization string `custom`.
///
/// Falls through to [`shake256`] when both strings are empty, as SP 800-185
/// requires. Otherwise the framed input is
/// `bytepad(encode_string(name) ‖ encode_string(custom), 136) ‖ input ‖ 0x04`.
pub fn cshake256(input: &[u8], bit_len: usize, name: &[u8], custom: &[u8]) -> Vec<u8> {
    if name.is_empty() && custom.is_empty() {
        return shake256(input, bit_len);
    }

    let mut prefix = encode_string(name).expect("name length fits an SP 800-185 encoding");
    let custom = encode_string(custom).expect("customization length fits an SP 800-185 encoding");
    prefix.extend_from_slice(&custom);

    let mut framed = bytepad(&prefix, RATE_BYTES).expect("rate fits an SP 800-185 encoding");
    framed.reserve(input.len() + 1);
    framed.extend_from_slice(input);
    framed.push(0x04);
    sponge(&framed, bit_len, CAPACITY)
}

/// KMACXOF256: keyed, domain-separated cSHAKE256 in its extendable-output form.
///
/// The framed payload is `bytepad(encode_string(key), 136) ‖ message ‖ right_encode(0)`,
/// hashed under the function name `"KMAC"`. The trailing `right_encode(0)` is
/// what distinguishes the XOF variant from fixed-length KMAC.
pub fn kmacxof256(key: &[u8], message: &[u8], bit_len: usize, custom: &[u8]) -> Vec<u8> {
    let keyed = encode_string(key).expect("key length fits an SP 800-185 encoding");
    let mut payload = bytepad(&keyed, RATE_BYTES).expect("rate fits an SP 800-185 encoding");
    payload.reserve(message.len() + 2);
    payload.extend_from_slice(message);
    let xof_marker = right_encode(&BigUint::zero()).expect("zero is always encodable");
    payload.extend_from_slice(&xof_marker);
    cshake256(&payload, bit_len, b"KMAC", custom)
}

/// Plain 512-bit cryptographic hash: `KMACXOF256("", data, 512, "D")`.
pub fn hash(data: &[u8]) -> Vec<u8> {
    kmacxof256(b"", data, 512, b"D")
}

/// 512-bit authentication tag over `data` under `passphrase`:
/// `KMACXOF256(passphrase, data, 512, "T")`.
pub fn mac(passphrase: &[u8], data: &[u8]) -> Vec<u8> {
    kmacxof256(passphrase, data, 512, b"T")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kmacxof256_is_deterministic() {
        let a = kmacxof256(b"key", b"message", 512, b"custom");
        let b = kmacxof256(b"key", b"message", 512, b"custom");
        assert_eq!(a, b);
    }

    #[test]
    fn kmacxof256_separates_domains() {
        let tagged = kmacxof256(b"key", b"message", 512, b"T");
        let derived = kmacxof256(b"key", b"message", 512, b"S");
        assert_ne!(tagged, derived);
    }

    #[test]
    fn cshake256_with_empty_strings_is_shake256() {
        assert_eq!(cshake256(b"abc", 512, b"", b""), shake256(b"abc", 512));
        assert_ne!(cshake256(b"abc", 512, b"", b"c"), shake256(b"abc", 512));
    }

    #[test]
    fn hash_and_mac_use_distinct_domains() {
        assert_ne!(hash(b"data"), mac(b"", b"data"));
    }

    #[test]
    fn output_length_is_honoured() {
        assert_eq!(shake256(b"", 256).len(), 32);
        assert_eq!(kmacxof256(b"", b"", 1024, b"S").len(), 128);
    }
}
