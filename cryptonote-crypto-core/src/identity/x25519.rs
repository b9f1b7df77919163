//! X25519 key exchange keys.

use rand_core::{CryptoRng, RngCore};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

use crate::random::RandomDevice;
use crate::types::bytes::{public_bytes, secret_bytes};
use crate::types::errors::{CryptoError, CryptoResult};

public_bytes!(
    /// X25519 (Montgomery u-coordinate) public key.
    X25519PublicKey,
    32
);

secret_bytes!(
    /// X25519 secret scalar, clamped on use.
    X25519SecretKey,
    32
);

impl X25519SecretKey {
    /// Fresh key from the OS CSPRNG.
    ///
    /// # Panics
    ///
    /// Panics if secure randomness is unavailable.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut RandomDevice)
    }

    /// Fresh key drawn from `rng`.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut secret = Self::null();
        rng.fill_bytes(&mut secret.0[..]);
        secret
    }

    fn static_secret(&self) -> StaticSecret {
        StaticSecret::from(*self.0)
    }

    /// The matching public key.
    #[must_use]
    pub fn public_key(&self) -> X25519PublicKey {
        X25519PublicKey(PublicKey::from(&self.static_secret()).to_bytes())
    }

    /// Raw X25519 shared secret with `peer`.
    ///
    /// # Errors
    ///
    /// `InvalidPublicKey` if `peer` is a low-order point, which would make
    /// the shared secret independent of our key.
    pub fn diffie_hellman(&self, peer: &X25519PublicKey) -> CryptoResult<Zeroizing<[u8; 32]>> {
        let shared = self.static_secret().diffie_hellman(&PublicKey::from(peer.0));
        if !shared.was_contributory() {
            tracing::debug!("x25519 peer key is low order");
            return Err(CryptoError::InvalidPublicKey(
                "x25519 peer key is low order".into(),
            ));
        }
        Ok(Zeroizing::new(shared.to_bytes()))
    }
}
