//! # cryptonote-crypto-core
//!
//! Core cryptographic library for Cryptonote-family chains.
//!
//! This crate provides the primitives that transaction construction,
//! validation and wallet scanning are built on:
//!
//! - **Key Generation**: random and seed-recovered key pairs, strict point validation
//! - **Stealth Addresses**: sender/receiver key derivation and one-time output keys
//! - **Schnorr Signatures**: the Cryptonote single-key signature and transaction proofs
//! - **Ring Signatures**: linkable ring signatures and key-image signatures
//! - **Hashing**: Keccak-256, hash-to-scalar, hash-to-point and the transaction tree hash
//! - **Identity Keys**: Ed25519/X25519 keys for service node identities
//!
//! ## Architecture
//!
//! The crate is designed with the following principles:
//!
//! 1. **`no_std` Compatible**: Builds with `alloc` only when `std` is disabled
//! 2. **Constant-Time Arithmetic**: All curve math goes through `curve25519-dalek`
//! 3. **Zeroize on Drop**: Secret keys and nonces are cleared from memory
//! 4. **Type-Safe**: Points, scalars, images and derivations are distinct types
//!
//! ## Modules
//!
//! - [`types`]: Fixed-width value types and error types
//! - [`hash`]: Digests, hash-to-scalar, hash-to-point and `tree_hash`
//! - [`random`]: OS-backed secure randomness
//! - [`keys`]: Key generation, derivation and key images
//! - [`signature`]: Schnorr signatures and transaction proofs
//! - [`ring`]: Linkable ring signatures
//! - [`identity`]: Ed25519/X25519 identity keys
//!
//! ## Example
//!
//! ```rust
//! use cryptonote_crypto_core::prelude::*;
//!
//! let (public, secret) = generate_keys();
//! let prefix = cn_fast_hash(b"transaction prefix");
//!
//! let signature = generate_signature(&prefix, &public, &secret);
//! assert!(check_signature(&prefix, &public, &signature));
//!
//! let image = generate_key_image(&public, &secret);
//! let (decoy, _) = generate_keys();
//! let ring = [decoy, public];
//! let sigs = generate_ring_signature(&prefix, &image, &ring, &secret, 1)?;
//! assert!(check_ring_signature(&prefix, &image, &ring, &sigs));
//! # Ok::<(), CryptoError>(())
//! ```
//!
//! ## Security Considerations
//!
//! This crate handles cryptographic secrets. Users should:
//!
//! - Never log or serialize secret keys
//! - Treat `false` from any `check_*` function as a normal, expected outcome
//! - Keep signer indices within the ring; an out-of-range index panics

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

pub mod hash;
pub mod identity;
pub mod keys;
pub mod random;
pub mod ring;
pub mod signature;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::hash::{cn_fast_hash, hash_to_point, hash_to_scalar, tree_hash, Hash, Hash8};
    pub use crate::keys::{
        check_key, derivation_to_scalar, derive_public_key, derive_secret_key,
        derive_subaddress_public_key, generate_key_derivation, generate_key_image,
        generate_keys, secret_key_to_public_key,
    };
    pub use crate::ring::{
        check_key_image_signature, check_ring_signature, generate_key_image_signature,
        generate_ring_signature,
    };
    pub use crate::signature::{
        check_signature, check_tx_proof, generate_signature, generate_tx_proof, TxProofStatement,
    };
    pub use crate::types::errors::*;
    pub use crate::types::*;
}

/// Re-export commonly used types at crate root
pub use types::errors::{CryptoError, CryptoResult};

// Re-export value types
pub use types::{EcPoint, EcScalar, KeyDerivation, KeyImage, PublicKey, SecretKey, Signature};

// Re-export digest types and functions
#[cfg(feature = "std")]
pub use hash::{KeyImageSet, PreHashedMap, PreHashedSet};
pub use hash::{
    cn_fast_hash, hash_to_point, hash_to_scalar, tree_hash, Hash, Hash8, PreHashed,
    PreHashedBuildHasher, PreHashedHasher, PreHashedKey,
};

// Re-export randomness
pub use random::{
    fill_random, random_filled, random_in_range, random_scalar, try_fill_random, RandomDevice,
};

// Re-export key functions
pub use keys::{
    check_key, derivation_to_scalar, derive_public_key, derive_secret_key,
    derive_subaddress_public_key, encode_varint, generate_key_derivation, generate_key_image,
    generate_keys, generate_keys_from_seed, generate_keys_with_rng, secret_key_to_public_key,
};

// Re-export signature functions
pub use signature::{
    check_signature, check_tx_proof, generate_signature, generate_signature_with_rng,
    generate_tx_proof, generate_tx_proof_with_rng, TxProofStatement, TX_PROOF_DOMAIN,
};

// Re-export ring signature functions
pub use ring::{
    check_key_image_signature, check_ring_signature, generate_key_image_signature,
    generate_key_image_signature_with_rng, generate_ring_signature,
    generate_ring_signature_with_rng,
};

// Re-export identity key types
pub use identity::{
    Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature, X25519PublicKey, X25519SecretKey,
};
