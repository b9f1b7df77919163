//! Ring signature verification.

use curve25519_dalek::{edwards::EdwardsPoint, traits::IsIdentity, Scalar};

use super::hash::RingHasher;
use crate::hash::{hp, Hash};
use crate::types::{KeyImage, PublicKey, Signature};

/// Verify a ring signature.
///
/// ## Verification Equation
///
/// For each ring member i, in ring order:
/// ```text
/// L_i = c_i*P_i + r_i*G
/// R_i = r_i*Hp(P_i) + c_i*I
/// ```
/// The signature is valid iff `Hs(prefix_hash || L_0 || R_0 || ...) == sum(c_i)`.
///
/// Returns `false`, before any curve operation, when `ring` and `signatures`
/// differ in length or are empty. Also rejects a key image outside the
/// prime-order subgroup, non-canonical scalars and ring members that do not
/// decode.
#[must_use]
pub fn check_ring_signature(
    prefix_hash: &Hash,
    image: &KeyImage,
    ring: &[PublicKey],
    signatures: &[Signature],
) -> bool {
    if ring.len() != signatures.len() {
        tracing::trace!(
            ring_size = ring.len(),
            signatures = signatures.len(),
            "ring and signature lengths differ"
        );
        return false;
    }
    if ring.is_empty() {
        tracing::trace!("empty ring");
        return false;
    }

    let Some(image_point) = image.decompress() else {
        tracing::trace!("key image does not decode");
        return false;
    };
    if image_point.is_identity() || !image_point.is_torsion_free() {
        tracing::trace!("key image is outside the prime-order subgroup");
        return false;
    }

    let mut hasher = RingHasher::new(prefix_hash);
    let mut challenge_sum = Scalar::ZERO;

    for (i, (key, signature)) in ring.iter().zip(signatures).enumerate() {
        let (Some(c), Some(r)) = (signature.c.to_canonical(), signature.r.to_canonical()) else {
            tracing::trace!(member = i, "signature scalar is not canonical");
            return false;
        };
        let Some(point) = key.decompress() else {
            tracing::trace!(member = i, "ring member is not a valid point");
            return false;
        };

        let l = EdwardsPoint::vartime_double_scalar_mul_basepoint(&c, &point, &r);
        let r_point = r * hp(key) + c * image_point;
        hasher.absorb(&l, &r_point);
        challenge_sum += c;
    }

    hasher.finalize() == challenge_sum
}
