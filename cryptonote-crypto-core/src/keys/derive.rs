//! One-time key derivation
//!
//! This module provides the stealth-address arithmetic:
//! - The sender/receiver Diffie-Hellman derivation `D = 8*r*A = 8*a*R`
//! - Per-output scalars `Hs(D || varint(index))`
//! - One-time public and secret keys, and the inverse used for subaddresses
//!
//! ## Formulas
//!
//! ```text
//! D   = 8 * a * R
//! s_i = Hs(D || varint(i))
//! P_i = B + s_i*G            (derive_public_key)
//! x_i = b + s_i              (derive_secret_key)
//! B   = P_i - s_i*G          (derive_subaddress_public_key)
//! ```

use curve25519_dalek::{constants::ED25519_BASEPOINT_TABLE, traits::IsIdentity, Scalar};
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

use super::varint::encode_varint;
use crate::hash::finalize_to_scalar;
use crate::types::errors::{CryptoError, CryptoResult};
use crate::types::{EcScalar, KeyDerivation, PublicKey, SecretKey};

// =============================================================================
// Shared Secret
// =============================================================================

/// Computes the cofactor-cleared shared point `8 * key2 * key1`.
///
/// Called by the sender with the recipient's view key and the transaction
/// secret, and by the recipient with the transaction public key and the view
/// secret; both obtain the same derivation.
///
/// # Errors
///
/// `InvalidPublicKey` if `key1` does not decode to a curve point.
pub fn generate_key_derivation(
    key1: &PublicKey,
    key2: &SecretKey,
) -> CryptoResult<KeyDerivation> {
    let point = key1.decompress().ok_or_else(|| {
        tracing::debug!("derivation input is not a valid point");
        CryptoError::InvalidPublicKey("derivation public key does not decode".into())
    })?;

    let secret = key2.to_scalar_mod_order();
    let shared = (*secret * point).mul_by_cofactor();

    Ok(KeyDerivation::from_point(&shared))
}

/// `Hs(derivation || varint(output_index))`.
#[must_use]
pub fn derivation_to_scalar(derivation: &KeyDerivation, output_index: u64) -> EcScalar {
    EcScalar::from_scalar(&derivation_scalar(derivation, output_index))
}

fn derivation_scalar(derivation: &KeyDerivation, output_index: u64) -> Scalar {
    let mut hasher = Keccak256::new();
    hasher.update(derivation.as_bytes());
    hasher.update(encode_varint(output_index));
    finalize_to_scalar(hasher)
}

// =============================================================================
// One-Time Keys
// =============================================================================

/// One-time output public key `base + Hs(D || i)*G`.
///
/// # Errors
///
/// - `InvalidPublicKey` if `base` does not decode
/// - `InvalidDerivedKey` if the result is the identity
pub fn derive_public_key(
    derivation: &KeyDerivation,
    output_index: u64,
    base: &PublicKey,
) -> CryptoResult<PublicKey> {
    let base_point = base.decompress().ok_or_else(|| {
        tracing::debug!(output_index, "base public key is not a valid point");
        CryptoError::InvalidPublicKey("base public key does not decode".into())
    })?;

    let scalar = derivation_scalar(derivation, output_index);
    let derived = base_point + ED25519_BASEPOINT_TABLE * &scalar;

    if derived.is_identity() {
        tracing::debug!(output_index, "derived public key is the identity");
        return Err(CryptoError::InvalidDerivedKey(
            "derived public key is the identity".into(),
        ));
    }

    Ok(PublicKey::from_point(&derived))
}

/// One-time output secret key `base + Hs(D || i)` mod L.
#[must_use]
pub fn derive_secret_key(
    derivation: &KeyDerivation,
    output_index: u64,
    base: &SecretKey,
) -> SecretKey {
    let scalar = derivation_scalar(derivation, output_index);
    let derived = Zeroizing::new(*base.to_scalar_mod_order() + scalar);
    SecretKey::from_scalar(&derived)
}

/// Recovers the spend key an output was sent to: `output_key - Hs(D || i)*G`.
///
/// Wallets compare the result against their subaddress table.
///
/// # Errors
///
/// `InvalidPublicKey` if `output_key` does not decode.
pub fn derive_subaddress_public_key(
    output_key: &PublicKey,
    derivation: &KeyDerivation,
    output_index: u64,
) -> CryptoResult<PublicKey> {
    let output_point = output_key.decompress().ok_or_else(|| {
        tracing::debug!(output_index, "output public key is not a valid point");
        CryptoError::InvalidPublicKey("output public key does not decode".into())
    })?;

    let scalar = derivation_scalar(derivation, output_index);
    let spend = output_point - ED25519_BASEPOINT_TABLE * &scalar;

    Ok(PublicKey::from_point(&spend))
}
