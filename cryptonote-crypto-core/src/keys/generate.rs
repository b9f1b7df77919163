//! Key pair generation and public key validation.

use curve25519_dalek::{constants::ED25519_BASEPOINT_TABLE, traits::IsIdentity, Scalar};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::random::{random_scalar_with_rng, RandomDevice};
use crate::types::errors::{CryptoError, CryptoResult};
use crate::types::{PublicKey, SecretKey};

/// Generates a fresh key pair from the OS CSPRNG.
///
/// # Panics
///
/// Panics if secure randomness is unavailable.
#[must_use]
pub fn generate_keys() -> (PublicKey, SecretKey) {
    generate_keys_with_rng(&mut RandomDevice)
}

/// Generates a key pair with secret drawn from `rng`.
pub fn generate_keys_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> (PublicKey, SecretKey) {
    let secret = Zeroizing::new(random_scalar_with_rng(rng));
    key_pair_from_scalar(&secret)
}

/// Deterministic "recovery" generation: the seed is reduced mod L and used
/// as the secret key.
///
/// Wallets restore from a mnemonic this way. The seed is taken as-is, so the
/// caller is responsible for it having been drawn uniformly.
#[must_use]
pub fn generate_keys_from_seed(seed: &SecretKey) -> (PublicKey, SecretKey) {
    key_pair_from_scalar(&seed.to_scalar_mod_order())
}

fn key_pair_from_scalar(secret: &Scalar) -> (PublicKey, SecretKey) {
    let public = ED25519_BASEPOINT_TABLE * secret;
    (PublicKey::from_point(&public), SecretKey::from_scalar(secret))
}

/// True iff `key` is a usable public key.
///
/// The encoding must be canonical and decode to a point of the prime-order
/// subgroup other than the identity. Null, malformed and small-order
/// encodings are rejected.
#[must_use]
pub fn check_key(key: &PublicKey) -> bool {
    let Some(point) = key.decompress() else {
        tracing::trace!("public key is not a canonical point encoding");
        return false;
    };

    if point.is_identity() || !point.is_torsion_free() {
        tracing::trace!("public key is outside the prime-order subgroup");
        return false;
    }

    true
}

/// Computes `secret * G`.
///
/// # Errors
///
/// `InvalidSecretKey` if the secret is not a canonical scalar or is zero.
pub fn secret_key_to_public_key(secret: &SecretKey) -> CryptoResult<PublicKey> {
    let scalar = secret.to_canonical().ok_or_else(|| {
        tracing::debug!("secret key is not reduced mod L");
        CryptoError::InvalidSecretKey("secret key is not a canonical scalar".into())
    })?;

    if *scalar == Scalar::ZERO {
        return Err(CryptoError::InvalidSecretKey("secret key is zero".into()));
    }

    Ok(PublicKey::from_point(&(ED25519_BASEPOINT_TABLE * &*scalar)))
}
