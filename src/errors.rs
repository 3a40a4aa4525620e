//! # Error: Failure Modes of the Toolkit.
//!
//! This module defines the [`Error`] enum, which enumerates the possible failure modes
//! encountered while decrypting cryptograms or manipulating curve points.
//!
//! These errors include:
//! - Malformed or truncated cryptograms,
//! - Failed authentication-tag verification,
//! - Byte strings that do not decode to a point on the curve.

/// Represents an error encountered during decryption, decoding, or curve arithmetic.
///
/// Authentication failures are deliberately coarse: a [`Error::TagMismatch`] does not
/// reveal whether the cryptogram was tampered with or the passphrase was wrong.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cryptogram is shorter than its fixed framing (salt or ephemeral point, plus tag).
    #[error("cryptogram of {len} bytes is shorter than the minimum of {min}")]
    InvalidInputLength {
        /// Length of the rejected cryptogram.
        len: usize,
        /// Minimum length the operation accepts.
        min: usize,
    },
    /// The recomputed authentication tag does not match the transmitted one.
    #[error("authentication tag mismatch")]
    TagMismatch,
    /// The radicand has no square root modulo the field prime.
    #[error("no square root exists modulo the field prime")]
    RootNotFound,
    /// An SP 800-185 length encoding was requested for an integer of 2^2040 or more.
    #[error("integer too large for an SP 800-185 length encoding")]
    EncodingOutOfRange,
    /// Deserialized coordinates do not satisfy the Edwards curve equation.
    #[error("coordinates do not satisfy the curve equation")]
    InvalidCurvePoint,
}
