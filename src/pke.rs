//! Public-key authenticated encryption over Ed448-Goldilocks.
//!
//! Key pairs are derived deterministically from a passphrase: the secret
//! scalar is `s = 4 · KMACXOF256(pw, "", 448, "SK") mod r` and the public key
//! is `V = s·G`. Encryption is ECIES-style: a fresh scalar `k` yields the
//! ephemeral point `Z = k·G` and the shared point `W = k·V`, whose abscissa
//! seeds the "PK" key expansion; the message is XORed with a "PKE" keystream
//! and authenticated with a 448-bit "PKA" tag. A cryptogram is
//! `Z[114] ‖ ciphertext ‖ tag[56]`.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::instrument;
use zeroize::Zeroize;

use crate::curve::{generator, subgroup_order, AffinePoint};
use crate::errors::Error;
use crate::serialization::{deserialize_point, serialize_coordinate, serialize_point, POINT_LEN};
use crate::xof::kmacxof256;

/// Length of the authentication tag: 448 bits.
pub const TAG_LEN: usize = 56;

/// Fixed overhead of a public-key cryptogram: ephemeral point plus tag.
pub const OVERHEAD: usize = POINT_LEN + TAG_LEN;

/// Length of the random seed drawn per encryption.
const EPHEMERAL_SEED_LEN: usize = 56;

/// An Ed448-Goldilocks key pair derived from a passphrase.
///
/// The secret scalar never leaves this struct (there is deliberately no
/// `Debug` impl); decryption re-derives it from the passphrase instead of
/// transporting it.
#[derive(Clone)]
pub struct KeyPair {
    secret: BigUint,
    public: AffinePoint,
}

impl KeyPair {
    /// Derives the key pair owned by `passphrase`.
    #[instrument(skip_all)]
    pub fn from_passphrase(passphrase: &[u8]) -> Self {
        let secret = derive_scalar(passphrase);
        let public = generator().scalar_mul(&secret);
        Self { secret, public }
    }

    /// The public key V = s·G, for distribution to senders.
    pub fn public(&self) -> &AffinePoint {
        &self.public
    }

    /// Decrypts a cryptogram addressed to this key pair.
    ///
    /// Equivalent to [`decrypt`] with the passphrase this pair was derived
    /// from, without re-deriving the scalar.
    ///
    /// # Errors
    /// Same as [`decrypt`].
    pub fn decrypt(&self, cryptogram: &[u8]) -> Result<Vec<u8>, Error> {
        decrypt_with_scalar(&self.secret, cryptogram)
    }
}

/// Encrypts `message` to the holder of `recipient`'s passphrase.
///
/// Returns `Z ‖ ciphertext ‖ tag`. `rng` must be cryptographically secure; it
/// is consumed exactly once, for the ephemeral scalar seed.
#[instrument(skip_all, fields(message_len = message.len()))]
pub fn encrypt(
    recipient: &AffinePoint,
    message: &[u8],
    rng: &mut (impl RngCore + CryptoRng),
) -> Vec<u8> {
    let mut seed = [0u8; EPHEMERAL_SEED_LEN];
    rng.fill_bytes(&mut seed);
    let k = (BigUint::from_bytes_be(&seed) * 4u8) % subgroup_order();
    seed.zeroize();

    let shared = recipient.scalar_mul(&k);
    let ephemeral = generator().scalar_mul(&k);

    let (mut ke, mut ka) = derive_keys(&shared);
    let mut ciphertext = kmacxof256(&ke, b"", 8 * message.len(), b"PKE");
    for (keystream_byte, message_byte) in ciphertext.iter_mut().zip(message) {
        *keystream_byte ^= message_byte;
    }
    let tag = kmacxof256(&ka, message, 8 * TAG_LEN, b"PKA");
    ke.zeroize();
    ka.zeroize();

    let mut cryptogram = Vec::with_capacity(message.len() + OVERHEAD);
    cryptogram.extend_from_slice(&serialize_point(&ephemeral));
    cryptogram.extend_from_slice(&ciphertext);
    cryptogram.extend_from_slice(&tag);
    cryptogram
}

/// Decrypts a `Z ‖ ciphertext ‖ tag` cryptogram with the recipient passphrase.
///
/// # Errors
/// - [`Error::InvalidInputLength`] if the cryptogram cannot hold the
///   ephemeral point and tag.
/// - [`Error::InvalidCurvePoint`] if the transmitted point is not on the
///   curve.
/// - [`Error::TagMismatch`] if authentication fails (tampering or a wrong
///   passphrase); no plaintext is released.
#[instrument(skip_all, fields(cryptogram_len = cryptogram.len()))]
pub fn decrypt(cryptogram: &[u8], passphrase: &[u8]) -> Result<Vec<u8>, Error> {
    decrypt_with_scalar(&derive_scalar(passphrase), cryptogram)
}

fn decrypt_with_scalar(secret: &BigUint, cryptogram: &[u8]) -> Result<Vec<u8>, Error> {
    if cryptogram.len() < OVERHEAD {
        return Err(Error::InvalidInputLength {
            len: cryptogram.len(),
            min: OVERHEAD,
        });
    }

    let (point_bytes, rest) = cryptogram.split_at(POINT_LEN);
    let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LEN);
    let ephemeral = deserialize_point(point_bytes)?;

    let shared = ephemeral.scalar_mul(secret);

    let (mut ke, mut ka) = derive_keys(&shared);
    let mut message = kmacxof256(&ke, b"", 8 * ciphertext.len(), b"PKE");
    for (keystream_byte, ciphertext_byte) in message.iter_mut().zip(ciphertext) {
        *keystream_byte ^= ciphertext_byte;
    }
    let expected_tag = kmacxof256(&ka, &message, 8 * TAG_LEN, b"PKA");
    ke.zeroize();
    ka.zeroize();

    if bool::from(expected_tag.ct_eq(tag)) {
        Ok(message)
    } else {
        message.zeroize();
        Err(Error::TagMismatch)
    }
}

/// `s = 4 · KMACXOF256(pw, "", 448, "SK") mod r`, interpreting the digest as
/// a big-endian integer. The factor of 4 clears the curve cofactor.
fn derive_scalar(passphrase: &[u8]) -> BigUint {
    let mut digest = kmacxof256(passphrase, b"", 448, b"SK");
    let scalar = (BigUint::from_bytes_be(&digest) * 4u8) % subgroup_order();
    digest.zeroize();
    scalar
}

/// Expands the shared abscissa into the encryption and authentication keys:
/// `(ke, ka) = split(KMACXOF256(W.x, "", 896, "PK"))`.
fn derive_keys(shared: &AffinePoint) -> (Vec<u8>, Vec<u8>) {
    let mut abscissa = serialize_coordinate(shared.x());
    let mut keys = kmacxof256(&abscissa, b"", 896, b"PK");
    abscissa.zeroize();

    let ka = keys.split_off(keys.len() / 2);
    (keys, ka)
}
