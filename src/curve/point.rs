//! Points on Ed448-Goldilocks and their group law.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{add_mod, edwards_d, field_prime, inv_mod, mul_mod, sqrt, sub_mod};
use crate::errors::Error;

/// A point on the curve in affine coordinates, both reduced into [0, p).
///
/// Points are immutable values; every group operation produces a fresh point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    x: BigUint,
    y: BigUint,
}

impl AffinePoint {
    /// The neutral element (0, 1).
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::one(),
        }
    }

    /// Builds a point from affine coordinates, rejecting pairs that are not on
    /// the curve.
    ///
    /// # Errors
    /// [`Error::InvalidCurvePoint`] if the reduced coordinates fail the curve
    /// equation.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self, Error> {
        let p = field_prime();
        let point = Self { x: x % p, y: y % p };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::InvalidCurvePoint)
        }
    }

    /// Builds a point from coordinates already known to be reduced and valid.
    pub(crate) fn new_unchecked(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// Recovers a point from its ordinate and the parity of its abscissa.
    ///
    /// Solves x² = (1 − y²) / (1 − d·y²) and picks the root whose
    /// least-significant bit matches `x_lsb`.
    ///
    /// # Errors
    /// [`Error::RootNotFound`] when no such point exists.
    pub fn from_y(y: &BigUint, x_lsb: bool) -> Result<Self, Error> {
        let p = field_prime();
        let y = y % p;
        let y_squared = mul_mod(&y, &y);
        let numerator = sub_mod(&BigUint::one(), &y_squared);
        let denominator = sub_mod(&BigUint::one(), &mul_mod(edwards_d(), &y_squared));
        let x_squared = mul_mod(&numerator, &inv_mod(&denominator));
        let x = sqrt(&x_squared, x_lsb)?;
        Ok(Self { x, y })
    }

    /// The affine abscissa.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// The affine ordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Whether the coordinates satisfy x² + y² ≡ 1 + d·x²·y² (mod p).
    pub fn is_on_curve(&self) -> bool {
        let x_squared = mul_mod(&self.x, &self.x);
        let y_squared = mul_mod(&self.y, &self.y);
        let lhs = add_mod(&x_squared, &y_squared);
        let rhs = add_mod(&BigUint::one(), &mul_mod(edwards_d(), &mul_mod(&x_squared, &y_squared)));
        lhs == rhs
    }

    /// The complete Edwards addition law:
    ///
    /// ```text
    /// x₃ = (x₁·y₂ + y₁·x₂) / (1 + d·x₁·x₂·y₁·y₂)
    /// y₃ = (y₁·y₂ − x₁·x₂) / (1 − d·x₁·x₂·y₁·y₂)
    /// ```
    ///
    /// The denominators are never zero on this curve, so no case split is
    /// needed; doubling is simply `add(P, P)`.
    pub fn add(&self, other: &Self) -> Self {
        let xx = mul_mod(&self.x, &other.x);
        let yy = mul_mod(&self.y, &other.y);
        let cross = mul_mod(edwards_d(), &mul_mod(&xx, &yy));

        let x_numerator = add_mod(&mul_mod(&self.x, &other.y), &mul_mod(&self.y, &other.x));
        let x_denominator = add_mod(&BigUint::one(), &cross);
        let y_numerator = sub_mod(&yy, &xx);
        let y_denominator = sub_mod(&BigUint::one(), &cross);

        Self {
            x: mul_mod(&x_numerator, &inv_mod(&x_denominator)),
            y: mul_mod(&y_numerator, &inv_mod(&y_denominator)),
        }
    }

    /// The point with the abscissa negated: −P = (−x, y).
    pub fn negate(&self) -> Self {
        Self {
            x: sub_mod(&BigUint::zero(), &self.x),
            y: self.y.clone(),
        }
    }

    /// Left-to-right double-and-add scalar multiplication.
    ///
    /// The accumulator starts at the identity and consumes every bit of `s`,
    /// so s = 0 yields the identity and s = 1 yields the point itself without
    /// special cases.
    pub fn scalar_mul(&self, s: &BigUint) -> Self {
        let mut acc = Self::identity();
        for i in (0..s.bits()).rev() {
            acc = acc.add(&acc);
            if s.bit(i) {
                acc = acc.add(self);
            }
        }
        acc
    }
}
