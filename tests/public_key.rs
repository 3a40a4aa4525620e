//! End-to-end behaviour of the Ed448-Goldilocks public-key scheme.

use kmac448::curve::{generator, subgroup_order, AffinePoint};
use kmac448::pke::{self, KeyPair, OVERHEAD};
use kmac448::Error;
use num_bigint::BigUint;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x504B45)
}

#[test]
fn encrypt_decrypt_round_trip() {
    let mut rng = rng();
    let recipient = KeyPair::from_passphrase(b"recipient passphrase");
    let cryptogram = pke::encrypt(recipient.public(), b"attack at dawn", &mut rng);
    assert_eq!(cryptogram.len(), 14 + OVERHEAD);
    assert_eq!(
        pke::decrypt(&cryptogram, b"recipient passphrase").unwrap(),
        b"attack at dawn"
    );
    assert_eq!(recipient.decrypt(&cryptogram).unwrap(), b"attack at dawn");
}

#[test]
fn empty_passphrase_key_pair_works() {
    let mut rng = rng();
    let recipient = KeyPair::from_passphrase(b"");
    assert!(recipient.public().is_on_curve());
    let cryptogram = pke::encrypt(recipient.public(), b"m", &mut rng);
    assert_eq!(pke::decrypt(&cryptogram, b"").unwrap(), b"m");
}

#[test]
fn empty_and_bulk_messages_round_trip() {
    let mut rng = rng();
    let recipient = KeyPair::from_passphrase(b"pw");

    let empty = pke::encrypt(recipient.public(), b"", &mut rng);
    assert_eq!(empty.len(), OVERHEAD);
    assert_eq!(pke::decrypt(&empty, b"pw").unwrap(), b"");

    let mut message = vec![0u8; 4096];
    rng.fill_bytes(&mut message);
    let bulk = pke::encrypt(recipient.public(), &message, &mut rng);
    assert_eq!(pke::decrypt(&bulk, b"pw").unwrap(), message);
}

#[test]
fn wrong_passphrase_is_a_tag_mismatch() {
    let mut rng = rng();
    let recipient = KeyPair::from_passphrase(b"right");
    let cryptogram = pke::encrypt(recipient.public(), b"secret", &mut rng);
    assert!(matches!(
        pke::decrypt(&cryptogram, b"wrong"),
        Err(Error::TagMismatch)
    ));
}

#[test]
fn ciphertext_tampering_is_detected() {
    let mut rng = rng();
    let recipient = KeyPair::from_passphrase(b"pw");
    let cryptogram = pke::encrypt(recipient.public(), b"payload", &mut rng);
    for index in [114, 118, cryptogram.len() - 1] {
        let mut tampered = cryptogram.clone();
        tampered[index] ^= 0x20;
        assert!(
            matches!(pke::decrypt(&tampered, b"pw"), Err(Error::TagMismatch)),
            "flip at byte {index} went undetected"
        );
    }
}

#[test]
fn mangled_ephemeral_points_are_rejected() {
    let mut rng = rng();
    let recipient = KeyPair::from_passphrase(b"pw");
    let mut cryptogram = pke::encrypt(recipient.public(), b"payload", &mut rng);
    cryptogram[0] ^= 1;
    assert!(matches!(
        pke::decrypt(&cryptogram, b"pw"),
        Err(Error::InvalidCurvePoint)
    ));
}

#[test]
fn truncated_cryptograms_are_rejected() {
    let err = pke::decrypt(&[0u8; OVERHEAD - 1], b"pw").unwrap_err();
    assert!(matches!(err, Error::InvalidInputLength { .. }));
}

// exponentiation(G, s) + exponentiation(G, t) == exponentiation(G, s + t mod r)
#[test]
fn scalar_multiplication_is_linear() {
    let g = generator();
    let r = subgroup_order();
    let mut rng = rng();

    let mut seed = [0u8; 56];
    for _ in 0..2 {
        rng.fill_bytes(&mut seed);
        let s = BigUint::from_bytes_be(&seed) % r;
        rng.fill_bytes(&mut seed);
        let t = BigUint::from_bytes_be(&seed) % r;

        let lhs = g.scalar_mul(&s).add(&g.scalar_mul(&t));
        let rhs = g.scalar_mul(&((&s + &t) % r));
        assert_eq!(lhs, rhs);
        assert!(lhs.is_on_curve());
    }
}

#[test]
fn shared_secret_agreement() {
    // k·(s·G) == s·(k·G), the identity the scheme rests on.
    let g = generator();
    let s = BigUint::from(0xDEADBEEFu32);
    let k = BigUint::from(0x1234_5678u32);
    let lhs = g.scalar_mul(&s).scalar_mul(&k);
    let rhs = g.scalar_mul(&k).scalar_mul(&s);
    assert_eq!(lhs, rhs);
}

#[test]
fn identity_round_trips_through_scalar_zero() {
    assert_eq!(
        generator().scalar_mul(&BigUint::from(0u32)),
        AffinePoint::identity()
    );
}
