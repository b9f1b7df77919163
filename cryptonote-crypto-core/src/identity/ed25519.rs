//! Ed25519 identity keys.
//!
//! Standard RFC 8032 signatures, unrelated to the Cryptonote Schnorr
//! variant. Verification is strict: small-order keys and malleable
//! signatures are refused.

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::x25519::{X25519PublicKey, X25519SecretKey};
use crate::random::RandomDevice;
use crate::types::bytes::{public_bytes, secret_bytes};
use crate::types::errors::{CryptoError, CryptoResult};

public_bytes!(
    /// Ed25519 verifying key.
    Ed25519PublicKey,
    32
);

public_bytes!(
    /// Ed25519 signature `R || s`.
    Ed25519Signature,
    64
);

secret_bytes!(
    /// Ed25519 secret key stored as `seed || public key`.
    Ed25519SecretKey,
    64
);

impl Ed25519SecretKey {
    /// Fresh key from the OS CSPRNG.
    ///
    /// # Panics
    ///
    /// Panics if secure randomness is unavailable.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut RandomDevice)
    }

    /// Fresh key with the seed drawn from `rng`.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut seed = Zeroizing::new([0u8; 32]);
        rng.fill_bytes(&mut *seed);
        Self::from_seed(&seed)
    }

    /// Expands a 32-byte seed.
    #[must_use]
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing = SigningKey::from_bytes(seed);
        let keypair = Zeroizing::new(signing.to_keypair_bytes());
        Self::from_bytes(*keypair)
    }

    /// The 32-byte seed half.
    #[must_use]
    pub fn seed(&self) -> &[u8] {
        &self.0[..32]
    }

    fn signing_key(&self) -> SigningKey {
        let mut seed = Zeroizing::new([0u8; 32]);
        seed.copy_from_slice(self.seed());
        SigningKey::from_bytes(&seed)
    }

    /// The matching public key, recomputed from the seed.
    #[must_use]
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key().verifying_key().to_bytes())
    }

    /// Signs `message`.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        Ed25519Signature(self.signing_key().sign(message).to_bytes())
    }

    /// The X25519 secret with the same Diffie-Hellman behaviour as this key
    /// (libsodium `sk_to_curve25519`).
    #[must_use]
    pub fn to_x25519(&self) -> X25519SecretKey {
        let scalar = Zeroizing::new(self.signing_key().to_scalar_bytes());
        X25519SecretKey::from_bytes(*scalar)
    }
}

impl Ed25519PublicKey {
    /// Strict RFC 8032 verification of `signature` over `message`.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> bool {
        let Ok(key) = VerifyingKey::from_bytes(&self.0) else {
            tracing::trace!("ed25519 public key does not decode");
            return false;
        };
        let signature = ed25519_dalek::Signature::from_bytes(&signature.0);
        key.verify_strict(message, &signature).is_ok()
    }

    /// The birationally equivalent Montgomery key (libsodium
    /// `pk_to_curve25519`).
    ///
    /// # Errors
    ///
    /// `InvalidPublicKey` if the key does not decode.
    pub fn to_x25519(&self) -> CryptoResult<X25519PublicKey> {
        let key = VerifyingKey::from_bytes(&self.0).map_err(|e| {
            CryptoError::InvalidPublicKey(alloc::format!("ed25519 public key: {e}"))
        })?;
        Ok(X25519PublicKey::from_bytes(key.to_montgomery().to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_verify() {
        let secret = Ed25519SecretKey::generate();
        let public = secret.public_key();
        let sig = secret.sign(b"uptime proof");
        assert!(public.verify(b"uptime proof", &sig));
        assert!(!public.verify(b"uptime proof!", &sig));
    }

    #[test]
    fn test_secret_layout_is_seed_then_public() {
        let secret = Ed25519SecretKey::from_seed(&[7u8; 32]);
        assert_eq!(secret.seed(), &[7u8; 32][..]);
        assert_eq!(&secret.as_bytes()[32..], secret.public_key().as_bytes());
    }

    #[test]
    fn test_rfc8032_test_vector_1() {
        let seed: [u8; 32] = hex::decode(
            "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        )
        .unwrap()
        .try_into()
        .unwrap();
        let secret = Ed25519SecretKey::from_seed(&seed);
        assert_eq!(
            secret.public_key().to_hex(),
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
        );
        assert_eq!(
            secret.sign(b"").to_hex(),
            "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
             5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
        );
    }

    #[test]
    fn test_wrong_key_rejected() {
        let a = Ed25519SecretKey::generate();
        let b = Ed25519SecretKey::generate();
        let sig = a.sign(b"msg");
        assert!(!b.public_key().verify(b"msg", &sig));
        assert!(!Ed25519PublicKey::NULL.verify(b"msg", &sig));
        assert!(!a.public_key().verify(b"msg", &Ed25519Signature::NULL));
    }

    #[test]
    fn test_x25519_conversion_agrees() {
        let alice = Ed25519SecretKey::generate();
        let bob = Ed25519SecretKey::generate();

        let alice_x = alice.to_x25519();
        let bob_x = bob.to_x25519();
        assert_eq!(alice.public_key().to_x25519().unwrap(), alice_x.public_key());

        let ab = alice_x.diffie_hellman(&bob.public_key().to_x25519().unwrap()).unwrap();
        let ba = bob_x.diffie_hellman(&alice.public_key().to_x25519().unwrap()).unwrap();
        assert_eq!(*ab, *ba);
    }
}
