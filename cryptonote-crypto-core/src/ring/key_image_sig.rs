//! Signatures over a single key image.
//!
//! Proves that the holder of `x` with `P = x*G` produced `I = x*Hp(P)`.
//! Used when exporting key images and when publishing the key images of
//! staked outputs. The result is exactly a one-member ring signature whose
//! message is the key image itself, so either verifier accepts it.

use curve25519_dalek::{
    constants::ED25519_BASEPOINT_TABLE, edwards::EdwardsPoint, traits::IsIdentity,
};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::hash::RingHasher;
use crate::hash::{hp, Hash};
use crate::random::{random_scalar_with_rng, RandomDevice};
use crate::types::errors::{CryptoError, CryptoResult};
use crate::types::{EcScalar, KeyImage, PublicKey, SecretKey, Signature};

/// Signs `image` with the OS CSPRNG supplying the nonce.
///
/// # Errors
///
/// `InvalidPublicKey` if `public` does not decode.
///
/// # Panics
///
/// Panics if secure randomness is unavailable.
pub fn generate_key_image_signature(
    image: &KeyImage,
    public: &PublicKey,
    secret: &SecretKey,
) -> CryptoResult<Signature> {
    generate_key_image_signature_with_rng(image, public, secret, &mut RandomDevice)
}

/// Signs `image` drawing the nonce from `rng`.
///
/// ```text
/// c = Hs(I || k*G || k*Hp(P))
/// r = k - c*x
/// ```
///
/// # Errors
///
/// `InvalidPublicKey` if `public` does not decode.
pub fn generate_key_image_signature_with_rng<R: RngCore + CryptoRng>(
    image: &KeyImage,
    public: &PublicKey,
    secret: &SecretKey,
    rng: &mut R,
) -> CryptoResult<Signature> {
    if public.decompress().is_none() {
        tracing::debug!("key image signer public key is not a valid point");
        return Err(CryptoError::InvalidPublicKey(
            "public key does not decode".into(),
        ));
    }

    let x = secret.to_scalar_mod_order();
    debug_assert_eq!(
        PublicKey::from_point(&(ED25519_BASEPOINT_TABLE * &*x)),
        *public,
        "secret key does not belong to public key"
    );
    debug_assert_eq!(
        *image,
        crate::keys::generate_key_image(public, secret),
        "key image does not belong to public key"
    );

    let nonce = Zeroizing::new(random_scalar_with_rng(rng));
    let mut hasher = RingHasher::new(&image_as_prefix(image));
    hasher.absorb(&(ED25519_BASEPOINT_TABLE * &*nonce), &(*nonce * hp(public)));

    let c = hasher.finalize();
    let r = *nonce - c * *x;

    Ok(Signature::new(EcScalar::from_scalar(&c), EcScalar::from_scalar(&r)))
}

/// True iff `signature` proves `image` is the key image of `public`.
#[must_use]
pub fn check_key_image_signature(
    image: &KeyImage,
    public: &PublicKey,
    signature: &Signature,
) -> bool {
    let Some(image_point) = image.decompress() else {
        tracing::trace!("key image does not decode");
        return false;
    };
    if image_point.is_identity() || !image_point.is_torsion_free() {
        tracing::trace!("key image is outside the prime-order subgroup");
        return false;
    }

    let (Some(c), Some(r)) = (signature.c.to_canonical(), signature.r.to_canonical()) else {
        tracing::trace!("signature scalar is not canonical");
        return false;
    };
    let Some(point) = public.decompress() else {
        tracing::trace!("public key does not decode");
        return false;
    };

    let l = EdwardsPoint::vartime_double_scalar_mul_basepoint(&c, &point, &r);
    let r_point = r * hp(public) + c * image_point;

    let mut hasher = RingHasher::new(&image_as_prefix(image));
    hasher.absorb(&l, &r_point);
    hasher.finalize() == c
}

fn image_as_prefix(image: &KeyImage) -> Hash {
    Hash::from_bytes(image.to_bytes())
}
