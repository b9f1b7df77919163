//! Key image generation.
//!
//! Key images prevent double-spending. Each output can only be spent once,
//! and its key image is the value nodes store to detect a second spend
//! without learning which ring member was the real one.
//!
//! For a one-time key pair `(P, x)`:
//! ```text
//! KI = x * Hp(P)
//! ```
//! Where `Hp` is hash-to-point (Monero's `ge_fromfe_frombytes_vartime`
//! followed by cofactor clearing).

use crate::hash::hp;
use crate::types::{KeyImage, PublicKey, SecretKey};

/// Computes `secret * Hp(public)`.
///
/// Deterministic in `(public, secret)`. The caller is expected to pass the
/// secret belonging to `public`; nothing here checks that.
#[must_use]
pub fn generate_key_image(public: &PublicKey, secret: &SecretKey) -> KeyImage {
    let secret = secret.to_scalar_mod_order();
    KeyImage::from_point(&(*secret * hp(public)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::generate_keys;

    #[test]
    fn test_key_image_deterministic() {
        let (public, secret) = generate_keys();
        assert_eq!(
            generate_key_image(&public, &secret),
            generate_key_image(&public, &secret)
        );
    }

    #[test]
    fn test_key_images_differ_between_outputs() {
        let (p1, s1) = generate_keys();
        let (p2, s2) = generate_keys();
        assert_ne!(generate_key_image(&p1, &s1), generate_key_image(&p2, &s2));
    }

    #[test]
    fn test_key_image_is_prime_order_point() {
        let (public, secret) = generate_keys();
        let image = generate_key_image(&public, &secret);
        let point = image.decompress().unwrap();
        assert!(point.is_torsion_free());
        assert!(image.is_nonnull());
    }

    #[test]
    fn test_key_image_depends_on_public_key() {
        let (p1, secret) = generate_keys();
        let (p2, _) = generate_keys();
        assert_ne!(
            generate_key_image(&p1, &secret),
            generate_key_image(&p2, &secret)
        );
    }
}
