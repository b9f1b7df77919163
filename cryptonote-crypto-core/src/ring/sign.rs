//! Ring signature generation.

use alloc::format;
use alloc::vec::Vec;

use curve25519_dalek::{
    constants::ED25519_BASEPOINT_TABLE,
    edwards::EdwardsPoint,
    traits::Identity,
    Scalar,
};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::hash::RingHasher;
use crate::hash::{hp, Hash};
use crate::random::{random_scalar_with_rng, RandomDevice};
use crate::types::errors::{CryptoError, CryptoResult};
use crate::types::{EcScalar, KeyImage, PublicKey, SecretKey, Signature};

/// Signs `prefix_hash` as one anonymous member of `ring`.
///
/// See [`generate_ring_signature_with_rng`].
///
/// # Errors
///
/// - `EmptyRing` if `ring` is empty
/// - `InvalidPublicKey` if a ring member or the key image does not decode
///
/// # Panics
///
/// Panics if `sec_index >= ring.len()` or secure randomness is unavailable.
pub fn generate_ring_signature(
    prefix_hash: &Hash,
    image: &KeyImage,
    ring: &[PublicKey],
    secret: &SecretKey,
    sec_index: usize,
) -> CryptoResult<Vec<Signature>> {
    generate_ring_signature_with_rng(prefix_hash, image, ring, secret, sec_index, &mut RandomDevice)
}

/// Signs `prefix_hash` as member `sec_index` of `ring`, drawing nonces and
/// decoy scalars from `rng`.
///
/// ## Construction
///
/// For the signer slot `s`, with fresh nonce `k`:
/// ```text
/// L_s = k*G
/// R_s = k*Hp(P_s)
/// ```
/// For every other slot, visited cyclically from `s + 1`, with random
/// `c_i`, `r_i`:
/// ```text
/// L_i = c_i*P_i + r_i*G
/// R_i = r_i*Hp(P_i) + c_i*I
/// ```
/// The ring closes on the signer:
/// ```text
/// c_s = Hs(prefix_hash || L_0 || R_0 || ... ) - sum(c_i, i != s)
/// r_s = k - c_s*x
/// ```
///
/// # Errors
///
/// - `EmptyRing` if `ring` is empty
/// - `InvalidPublicKey` if a ring member or the key image does not decode
///
/// # Panics
///
/// Panics if `sec_index >= ring.len()`. Debug builds also panic if `secret`
/// does not belong to `ring[sec_index]` or `image` is not its key image.
pub fn generate_ring_signature_with_rng<R: RngCore + CryptoRng>(
    prefix_hash: &Hash,
    image: &KeyImage,
    ring: &[PublicKey],
    secret: &SecretKey,
    sec_index: usize,
    rng: &mut R,
) -> CryptoResult<Vec<Signature>> {
    let ring_size = ring.len();
    if ring_size == 0 {
        return Err(CryptoError::EmptyRing);
    }
    assert!(
        sec_index < ring_size,
        "signer index {sec_index} out of bounds for ring of size {ring_size}"
    );

    let members = ring
        .iter()
        .enumerate()
        .map(|(i, key)| {
            key.decompress().ok_or_else(|| {
                tracing::debug!(member = i, "ring member is not a valid point");
                CryptoError::InvalidPublicKey(format!("ring member {i} does not decode"))
            })
        })
        .collect::<CryptoResult<Vec<EdwardsPoint>>>()?;

    let image_point = image
        .decompress()
        .ok_or_else(|| CryptoError::InvalidPublicKey("key image does not decode".into()))?;

    let x = secret.to_scalar_mod_order();
    debug_assert_eq!(
        PublicKey::from_point(&(ED25519_BASEPOINT_TABLE * &*x)),
        ring[sec_index],
        "secret key does not belong to the signer slot"
    );
    debug_assert_eq!(
        *image,
        crate::keys::generate_key_image(&ring[sec_index], secret),
        "key image does not belong to the signer slot"
    );

    let mut signatures = alloc::vec![Signature::NULL; ring_size];
    let mut pairs = alloc::vec![(EdwardsPoint::identity(), EdwardsPoint::identity()); ring_size];

    let nonce = Zeroizing::new(random_scalar_with_rng(rng));
    pairs[sec_index] = (
        ED25519_BASEPOINT_TABLE * &*nonce,
        *nonce * hp(&ring[sec_index]),
    );

    let mut decoy_sum = Scalar::ZERO;
    for offset in 1..ring_size {
        let i = (sec_index + offset) % ring_size;
        let c = random_scalar_with_rng(rng);
        let r = random_scalar_with_rng(rng);

        pairs[i] = (
            EdwardsPoint::vartime_double_scalar_mul_basepoint(&c, &members[i], &r),
            r * hp(&ring[i]) + c * image_point,
        );
        decoy_sum += c;
        signatures[i] = Signature::new(EcScalar::from_scalar(&c), EcScalar::from_scalar(&r));
    }

    let mut hasher = RingHasher::new(prefix_hash);
    for (l, r) in &pairs {
        hasher.absorb(l, r);
    }

    let c = hasher.finalize() - decoy_sum;
    let r = *nonce - c * *x;
    signatures[sec_index] = Signature::new(EcScalar::from_scalar(&c), EcScalar::from_scalar(&r));

    Ok(signatures)
}
