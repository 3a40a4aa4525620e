//! The Keccak sponge construction.
//!
//! Absorbs framed input at the rate determined by the requested capacity, then
//! squeezes out as many rate-sized blocks as the caller's output length needs.
//! Domain-separation bytes (0x1F/0x9F for SHAKE, 0x04 for cSHAKE) are appended
//! by the callers in [`crate::xof`] before the data reaches this module.

use zeroize::Zeroize;

use crate::keccak::{self, State};

/// Sponge capacity, in bits, shared by all the 256-bit-strength functions here.
pub const CAPACITY: usize = 512;

/// Sponge rate in bytes at capacity 512.
pub const RATE_BYTES: usize = (1600 - CAPACITY) / 8;

/// Runs the sponge over `input`, producing `out_bit_len / 8` bytes.
///
/// `out_bit_len` must be a multiple of 8. Input that is not a whole number of
/// rate-sized blocks is completed with pad10*1: zero bytes with a final 0x80.
/// Input that already fills its last block is absorbed as is, which is exactly
/// how the framing layer expects the boundary case to behave.
pub fn sponge(input: &[u8], out_bit_len: usize, capacity: usize) -> Vec<u8> {
    debug_assert_eq!(out_bit_len % 8, 0, "output bit length must be a whole number of bytes");
    let rate = (1600 - capacity) / 8;

    let padded;
    let framed: &[u8] = if input.len() % rate == 0 {
        input
    } else {
        padded = pad_ten_one(input, rate);
        &padded
    };

    let mut state: State = [0; 25];
    for block in framed.chunks_exact(rate) {
        absorb_block(&mut state, block);
        keccak::permute(&mut state);
    }

    let lanes_per_block = rate / 8;
    let mut out = Vec::with_capacity(out_bit_len / 8 + rate);
    while out.len() * 8 < out_bit_len {
        for lane in &state[..lanes_per_block] {
            out.extend_from_slice(&lane.to_le_bytes());
        }
        keccak::permute(&mut state);
    }
    out.truncate(out_bit_len / 8);

    state.zeroize();
    out
}

/// XORs one rate-sized block into the low lanes of the state, little-endian.
///
/// Byte `i` of the block lands in lane `i / 8` at bit position `8 * (i % 8)`;
/// the capacity lanes are never touched.
fn absorb_block(state: &mut State, block: &[u8]) {
    for (lane, bytes) in state.iter_mut().zip(block.chunks_exact(8)) {
        *lane ^= u64::from_le_bytes(bytes.try_into().expect("chunks_exact yields 8-byte slices"));
    }
}

/// pad10*1 at the byte level: zero fill, final byte 0x80.
///
/// The leading 1 bit of the padding rule is carried by the domain-separation
/// byte the caller has already appended, so the fill here starts at zero.
fn pad_ten_one(input: &[u8], rate: usize) -> Vec<u8> {
    let padded_len = input.len() + rate - input.len() % rate;
    let mut padded = vec![0u8; padded_len];
    padded[..input.len()].copy_from_slice(input);
    padded[padded_len - 1] = 0x80;
    padded
}
