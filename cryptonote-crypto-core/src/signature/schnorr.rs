//! Single-key Schnorr signatures over a pre-hashed message.
//!
//! Not Ed25519: the nonce is random, the message must already be a 32-byte
//! digest, and the challenge hashes `(prefix_hash, pub, R)` in that order.
//!
//! ```text
//! k  random
//! c  = Hs(prefix_hash || P || k*G)
//! r  = k - c*x
//! ```
//! Verification recomputes `R' = c*P + r*G` and compares `Hs(prefix_hash || P || R')`
//! with `c`.

use curve25519_dalek::{
    constants::ED25519_BASEPOINT_TABLE, edwards::EdwardsPoint, traits::IsIdentity, Scalar,
};
use rand_core::{CryptoRng, RngCore};
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

use crate::hash::{finalize_to_scalar, Hash};
use crate::random::{random_scalar_with_rng, RandomDevice};
use crate::types::{EcScalar, PublicKey, SecretKey, Signature};

/// Signs `prefix_hash` with the OS CSPRNG supplying the nonce.
///
/// # Panics
///
/// Panics if secure randomness is unavailable.
#[must_use]
pub fn generate_signature(prefix_hash: &Hash, public: &PublicKey, secret: &SecretKey) -> Signature {
    generate_signature_with_rng(prefix_hash, public, secret, &mut RandomDevice)
}

/// Signs `prefix_hash` drawing the nonce from `rng`.
///
/// `public` must be `secret*G`; this is only checked in debug builds.
pub fn generate_signature_with_rng<R: RngCore + CryptoRng>(
    prefix_hash: &Hash,
    public: &PublicKey,
    secret: &SecretKey,
    rng: &mut R,
) -> Signature {
    let secret = secret.to_scalar_mod_order();
    debug_assert_eq!(
        PublicKey::from_point(&(ED25519_BASEPOINT_TABLE * &*secret)),
        *public,
        "signing key does not match public key"
    );

    let nonce = Zeroizing::new(random_scalar_with_rng(rng));
    let commitment = ED25519_BASEPOINT_TABLE * &*nonce;

    let c = challenge(prefix_hash, public, &commitment);
    let r = *nonce - c * *secret;

    Signature::new(EcScalar::from_scalar(&c), EcScalar::from_scalar(&r))
}

/// True iff `signature` is a valid signature of `prefix_hash` by `public`.
///
/// Rejects non-canonical scalars, a zero challenge (so the null signature
/// never verifies) and public keys that do not decode.
#[must_use]
pub fn check_signature(prefix_hash: &Hash, public: &PublicKey, signature: &Signature) -> bool {
    let (Some(c), Some(r)) = (signature.c.to_canonical(), signature.r.to_canonical()) else {
        tracing::trace!("signature scalar is not canonical");
        return false;
    };
    if c == Scalar::ZERO {
        tracing::trace!("signature challenge is zero");
        return false;
    }

    let Some(public_point) = public.decompress() else {
        tracing::trace!("signature public key does not decode");
        return false;
    };

    let commitment = EdwardsPoint::vartime_double_scalar_mul_basepoint(&c, &public_point, &r);
    if commitment.is_identity() {
        return false;
    }

    challenge(prefix_hash, public, &commitment) == c
}

fn challenge(prefix_hash: &Hash, public: &PublicKey, commitment: &EdwardsPoint) -> Scalar {
    let mut hasher = Keccak256::new();
    hasher.update(prefix_hash.as_bytes());
    hasher.update(public.as_bytes());
    hasher.update(commitment.compress().as_bytes());
    finalize_to_scalar(hasher)
}
