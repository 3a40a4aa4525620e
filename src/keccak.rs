//! The Keccak-f[1600] permutation.
//!
//! This module implements the permutation at the bottom of every function in the
//! crate: 24 rounds over a state of 25 lanes of 64 bits, each round applying the
//! step mappings θ, the combined ρ+π, χ, and ι of FIPS 202 section 3.2.

/// The 25-lane Keccak state, in the little-endian lane convention of FIPS 202.
///
/// Lane `(i, j)` of the 5×5 sheet lives at index `i + 5 * j`.
pub type State = [u64; 25];

/// Number of rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// The standard Keccak round constants, XORed into lane 0 by ι.
const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808A,
    0x8000000080008000,
    0x000000000000808B,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008A,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000A,
    0x000000008000808B,
    0x800000000000008B,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800A,
    0x800000008000000A,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rotation offsets for the combined ρ+π step.
const RHO_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane visiting order for the combined ρ+π step. Lane 0 is a fixed point.
const PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Applies the full 24-round Keccak-f[1600] permutation in place.
pub fn permute(state: &mut State) {
    for &round_constant in &ROUND_CONSTANTS {
        theta(state);
        rho_pi(state);
        chi(state);
        // ι
        state[0] ^= round_constant;
    }
}

/// θ: XOR every lane with the parity of two neighbouring columns.
fn theta(state: &mut State) {
    let mut parity = [0u64; 5];
    for (i, column) in parity.iter_mut().enumerate() {
        *column = state[i] ^ state[i + 5] ^ state[i + 10] ^ state[i + 15] ^ state[i + 20];
    }
    for i in 0..5 {
        let d = parity[(i + 4) % 5] ^ parity[(i + 1) % 5].rotate_left(1);
        for j in 0..5 {
            state[i + 5 * j] ^= d;
        }
    }
}

/// ρ+π combined: rotate each lane and move it to its π destination.
///
/// The chained `carried` value makes the in-place update safe: each step saves
/// the destination lane before overwriting it, and lane 0 is never touched.
fn rho_pi(state: &mut State) {
    let mut carried = state[1];
    for (&lane, &offset) in PI_LANES.iter().zip(RHO_OFFSETS.iter()) {
        let saved = state[lane];
        state[lane] = carried.rotate_left(offset);
        carried = saved;
    }
}

/// χ: the only non-linear step, combining each lane with the two lanes to its
/// right within the same row.
fn chi(state: &mut State) {
    for j in 0..5 {
        let row = [
            state[5 * j],
            state[5 * j + 1],
            state[5 * j + 2],
            state[5 * j + 3],
            state[5 * j + 4],
        ];
        for i in 0..5 {
            state[i + 5 * j] = row[i] ^ (!row[(i + 1) % 5] & row[(i + 2) % 5]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // State after one permutation of the all-zero state, from the Keccak team's
    // KeccakF-1600 intermediate values.
    const ZERO_STATE_IMAGE: State = [
        0xF1258F7940E1DDE7,
        0x84D5CCF933C0478A,
        0xD598261EA65AA9EE,
        0xBD1547306F80494D,
        0x8B284E056253D057,
        0xFF97A42D7F8E6FD4,
        0x90FEE5A0A44647C4,
        0x8C5BDA0CD6192E76,
        0xAD30A6F71B19059C,
        0x30935AB7D08FFC64,
        0xEB5AA93F2317D635,
        0xA9A6E6260D712103,
        0x81A57C16DBCF555F,
        0x43B831CD0347C826,
        0x01F22F1A11A5569F,
        0x05E5635A21D9AE61,
        0x64BEFEF28CC970F2,
        0x613670957BC46611,
        0xB87C5A554FD00ECB,
        0x8C3EE88A1CCF32C8,
        0x940C7922AE3A2614,
        0x1841F924A2C509E4,
        0x16F53526E70465C2,
        0x75F644E97F30A13B,
        0xEAF1FF7B5CECA249,
    ];

    #[test]
    fn permutation_of_zero_state() {
        let mut state: State = [0; 25];
        permute(&mut state);
        assert_eq!(state, ZERO_STATE_IMAGE);
    }

    #[test]
    fn permutation_changes_every_lane() {
        let mut state = ZERO_STATE_IMAGE;
        permute(&mut state);
        for (lane, original) in state.iter().zip(ZERO_STATE_IMAGE.iter()) {
            assert_ne!(lane, original);
        }
    }
}
