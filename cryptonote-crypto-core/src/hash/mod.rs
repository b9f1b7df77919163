//! Hashing collaborators: Keccak-256 digests and the two curve hashes.
//!
//! - `cn_fast_hash`: Keccak-256 with the original (pre-SHA3) padding.
//! - `Hs`: `cn_fast_hash` reduced mod L ([`hash_to_scalar`]).
//! - `Hp`: Monero's hash-to-curve with cofactor clearing ([`hash_to_point`]).

pub mod prehashed;
pub mod tree;

use core::ops::{BitXor, BitXorAssign};

use curve25519_dalek::{edwards::EdwardsPoint, Scalar};
use sha3::{Digest, Keccak256};

use crate::types::bytes::public_bytes;
use crate::types::{EcPoint, EcScalar, PublicKey};

pub use prehashed::{PreHashed, PreHashedBuildHasher, PreHashedHasher, PreHashedKey};
#[cfg(feature = "std")]
pub use prehashed::{KeyImageSet, PreHashedMap, PreHashedSet};
pub use tree::tree_hash;

public_bytes!(
    /// A 32-byte Keccak digest, e.g. a transaction prefix hash.
    Hash,
    32
);

public_bytes!(
    /// An 8-byte short digest.
    Hash8,
    8
);

macro_rules! digest_xor {
    ($($name:ident),+) => {$(
        impl BitXorAssign for $name {
            fn bitxor_assign(&mut self, rhs: Self) {
                for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
                    *a ^= b;
                }
            }
        }

        impl BitXor for $name {
            type Output = Self;

            fn bitxor(mut self, rhs: Self) -> Self {
                self ^= rhs;
                self
            }
        }
    )+};
}

digest_xor!(Hash, Hash8);

/// Keccak-256 of `data`.
#[must_use]
pub fn cn_fast_hash(data: &[u8]) -> Hash {
    Hash::from_bytes(Keccak256::digest(data).into())
}

/// Keccak-256 of `data` reduced mod L.
#[must_use]
pub fn hash_to_scalar(data: &[u8]) -> EcScalar {
    EcScalar::from_scalar(&keccak256_to_scalar(data))
}

/// Hash-to-curve of a public key, as used for key images.
#[must_use]
pub fn hash_to_point(key: &PublicKey) -> EcPoint {
    EcPoint::from_point(&hp(key))
}

/// Compute hash-to-scalar (Monero's Hs function).
#[inline]
pub(crate) fn keccak256_to_scalar(data: &[u8]) -> Scalar {
    finalize_to_scalar(Keccak256::new_with_prefix(data))
}

/// Finishes an incremental Keccak hash as a scalar mod L.
#[inline]
pub(crate) fn finalize_to_scalar(hasher: Keccak256) -> Scalar {
    Scalar::from_bytes_mod_order(hasher.finalize().into())
}

#[inline]
pub(crate) fn hp(key: &PublicKey) -> EdwardsPoint {
    monero_generators::hash_to_point(*key.as_bytes())
}
