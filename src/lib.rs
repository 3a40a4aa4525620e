//! # kmac448
//!
//! A sponge-based cryptographic toolkit: the Keccak-f[1600] permutation, the
//! SP 800-185 derived functions SHAKE256 / cSHAKE256 / KMACXOF256, symmetric
//! authenticated encryption keyed by a passphrase, and ECIES-style public-key
//! authenticated encryption over Ed448-Goldilocks.
//!
//! The layering is strict: [`keccak`] knows nothing but the permutation,
//! [`sponge`] absorbs and squeezes over it, [`encoding`] and [`xof`] add the
//! SP 800-185 framing, and [`symmetric`] / [`pke`] build the two encryption
//! schemes on KMACXOF256. [`curve`] holds the Ed448-Goldilocks group used by
//! the public-key scheme.
//!
//! ## Note
//!
//! The arithmetic here is not constant-time; callers in adversarial timing
//! environments should harden before deployment. Authentication-tag
//! comparison is the one place where constant time is guaranteed.

pub mod curve;
pub mod encoding;
pub mod errors;
pub mod keccak;
pub mod pke;
pub mod serialization;
pub mod sponge;
pub mod symmetric;
pub mod xof;

pub use curve::AffinePoint;
pub use errors::Error;
pub use pke::KeyPair;
pub use xof::{cshake256, hash, kmacxof256, mac, shake256};
