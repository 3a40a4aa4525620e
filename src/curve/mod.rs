//! Ed448-Goldilocks arithmetic.
//!
//! The curve is the Edwards form `x² + y² = 1 + d·x²·y² (mod p)` with
//! `d = −39081` and `p = 2^448 − 2^224 − 1`. Coordinates and scalars are
//! arbitrary-precision [`BigUint`]s reduced into their canonical ranges; the
//! negative `d` is carried as `p − 39081`. Field inversion goes through
//! Fermat's little theorem, which keeps the addition law free of any
//! exceptional cases.

pub mod point;

pub use point::AffinePoint;

use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::Error;

/// The field prime p = 2^448 − 2^224 − 1.
pub fn field_prime() -> &'static BigUint {
    static P: OnceLock<BigUint> = OnceLock::new();
    P.get_or_init(|| (BigUint::one() << 448u32) - (BigUint::one() << 224u32) - BigUint::one())
}

/// The prime order r of the subgroup generated by [`generator`]:
/// r = 2^446 − 13818066809895115352007386748515426880336692474882178609894547503885.
pub fn subgroup_order() -> &'static BigUint {
    static R: OnceLock<BigUint> = OnceLock::new();
    R.get_or_init(|| {
        let offset = BigUint::parse_bytes(
            b"13818066809895115352007386748515426880336692474882178609894547503885",
            10,
        )
        .expect("order offset is a valid decimal literal");
        (BigUint::one() << 446u32) - offset
    })
}

/// The Edwards coefficient d = −39081, represented as p − 39081.
pub(crate) fn edwards_d() -> &'static BigUint {
    static D: OnceLock<BigUint> = OnceLock::new();
    D.get_or_init(|| field_prime() - BigUint::from(39081u32))
}

/// The fixed base point G = (8, y_G).
pub fn generator() -> &'static AffinePoint {
    static G: OnceLock<AffinePoint> = OnceLock::new();
    G.get_or_init(|| {
        let y = BigUint::parse_bytes(
            b"5634002009290881526136096293786413854101026821172585664047502140220596869295\
              83319585040850282322731241505930835997382613319689400286258",
            10,
        )
        .expect("generator ordinate is a valid decimal literal");
        AffinePoint::new_unchecked(BigUint::from(8u32), y)
    })
}

/// Addition mod p.
pub(crate) fn add_mod(a: &BigUint, b: &BigUint) -> BigUint {
    (a + b) % field_prime()
}

/// Subtraction mod p; both operands must already be reduced.
pub(crate) fn sub_mod(a: &BigUint, b: &BigUint) -> BigUint {
    let p = field_prime();
    ((a + p) - b) % p
}

/// Multiplication mod p.
pub(crate) fn mul_mod(a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % field_prime()
}

/// Multiplicative inverse mod p via Fermat: v^(p−2). Zero inverts to zero,
/// which the complete Edwards addition law never asks for.
pub(crate) fn inv_mod(v: &BigUint) -> BigUint {
    let p = field_prime();
    v.modpow(&(p - BigUint::from(2u32)), p)
}

/// A square root of `v` mod p with the requested least-significant bit.
///
/// Since p ≡ 3 (mod 4) the candidate root is `v^((p+1)/4)`; it is negated when
/// its parity disagrees with `lsb`, then verified by squaring.
///
/// # Errors
/// [`Error::RootNotFound`] when `v` is not a quadratic residue.
pub fn sqrt(v: &BigUint, lsb: bool) -> Result<BigUint, Error> {
    let p = field_prime();
    let v = v % p;
    if v.is_zero() {
        return Ok(BigUint::zero());
    }

    let exponent = (p >> 2u32) + BigUint::one();
    let mut root = v.modpow(&exponent, p);
    if root.bit(0) != lsb {
        root = p - root;
    }

    if mul_mod(&root, &root) == v {
        Ok(root)
    } else {
        Err(Error::RootNotFound)
    }
}
