//! Symmetric authenticated encryption built from KMACXOF256.
//!
//! A cryptogram is `salt[64] ‖ ciphertext ‖ tag[64]`: a fresh 512-bit salt,
//! the message XORed with a KMACXOF256 keystream, and a 512-bit KMACXOF256
//! tag over the plaintext. Key material is expanded from `salt ‖ passphrase`
//! under the customization "S", the keystream under "SKE", and the tag under
//! "SKA". Decryption recomputes the tag and compares it in constant time
//! before releasing the plaintext.

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::instrument;
use zeroize::Zeroize;

use crate::errors::Error;
use crate::xof::kmacxof256;

/// Length of the random salt prepended to every cryptogram.
pub const SALT_LEN: usize = 64;

/// Length of the authentication tag appended to every cryptogram.
pub const TAG_LEN: usize = 64;

/// Fixed overhead a cryptogram adds on top of the message length.
pub const OVERHEAD: usize = SALT_LEN + TAG_LEN;

/// Encrypts `message` under `passphrase`, returning `salt ‖ ciphertext ‖ tag`.
///
/// `rng` must be cryptographically secure; it is consumed exactly once, for
/// the salt.
#[instrument(skip_all, fields(message_len = message.len()))]
pub fn encrypt(
    message: &[u8],
    passphrase: &[u8],
    rng: &mut (impl RngCore + CryptoRng),
) -> Vec<u8> {
    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);

    let (mut ke, mut ka) = derive_keys(&salt, passphrase);
    let mut ciphertext = kmacxof256(&ke, b"", 8 * message.len(), b"SKE");
    for (keystream_byte, message_byte) in ciphertext.iter_mut().zip(message) {
        *keystream_byte ^= message_byte;
    }
    let tag = kmacxof256(&ka, message, 8 * TAG_LEN, b"SKA");
    ke.zeroize();
    ka.zeroize();

    let mut cryptogram = Vec::with_capacity(message.len() + OVERHEAD);
    cryptogram.extend_from_slice(&salt);
    cryptogram.extend_from_slice(&ciphertext);
    cryptogram.extend_from_slice(&tag);
    cryptogram
}

/// Decrypts a `salt ‖ ciphertext ‖ tag` cryptogram produced by [`encrypt`].
///
/// # Errors
/// - [`Error::InvalidInputLength`] if the cryptogram cannot hold its salt and
///   tag (an empty message is fine: its cryptogram is exactly 128 bytes).
/// - [`Error::TagMismatch`] if authentication fails; no plaintext is released.
#[instrument(skip_all, fields(cryptogram_len = cryptogram.len()))]
pub fn decrypt(cryptogram: &[u8], passphrase: &[u8]) -> Result<Vec<u8>, Error> {
    if cryptogram.len() < OVERHEAD {
        return Err(Error::InvalidInputLength {
            len: cryptogram.len(),
            min: OVERHEAD,
        });
    }

    let (salt, rest) = cryptogram.split_at(SALT_LEN);
    let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LEN);

    let (mut ke, mut ka) = derive_keys(salt, passphrase);
    let mut message = kmacxof256(&ke, b"", 8 * ciphertext.len(), b"SKE");
    for (keystream_byte, ciphertext_byte) in message.iter_mut().zip(ciphertext) {
        *keystream_byte ^= ciphertext_byte;
    }
    let expected_tag = kmacxof256(&ka, &message, 8 * TAG_LEN, b"SKA");
    ke.zeroize();
    ka.zeroize();

    if bool::from(expected_tag.ct_eq(tag)) {
        Ok(message)
    } else {
        message.zeroize();
        Err(Error::TagMismatch)
    }
}

/// Expands `salt ‖ passphrase` into the encryption and authentication keys:
/// `(ke, ka) = split(KMACXOF256(salt ‖ passphrase, "", 1024, "S"))`.
fn derive_keys(salt: &[u8], passphrase: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut seed = Vec::with_capacity(salt.len() + passphrase.len());
    seed.extend_from_slice(salt);
    seed.extend_from_slice(passphrase);
    let mut keys = kmacxof256(&seed, b"", 1024, b"S");
    seed.zeroize();

    let ka = keys.split_off(keys.len() / 2);
    (keys, ka)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn cryptogram_layout() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let cryptogram = encrypt(b"hello", b"password", &mut rng);
        assert_eq!(cryptogram.len(), 5 + OVERHEAD);
    }

    #[test]
    fn fresh_salt_per_call() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let first = encrypt(b"hello", b"password", &mut rng);
        let second = encrypt(b"hello", b"password", &mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn rejects_truncated_cryptograms() {
        let err = decrypt(&[0u8; OVERHEAD - 1], b"pw").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInputLength { len: 127, min: 128 }
        ));
    }
}
