//! Hash-table adapter for values that are already uniformly distributed.
//!
//! Digests, curve points and signatures are indistinguishable from random,
//! so their first eight bytes are a perfectly good table hash. Running them
//! through SipHash again is wasted work on hot paths such as the key image
//! double-spend set.
//!
//! Only [`PreHashedKey`] feeds [`PreHashedHasher`], and it only wraps
//! [`PreHashed`] types, so a table built from the aliases here cannot be
//! keyed by a non-uniform value.

use core::hash::{BuildHasherDefault, Hasher};

use crate::hash::{Hash, Hash8};
use crate::types::{EcPoint, KeyImage, PublicKey, Signature};

/// Types whose byte encoding is uniformly distributed.
pub trait PreHashed: Eq {
    /// The leading eight bytes of the encoding, little-endian.
    fn table_hash(&self) -> u64;
}

fn leading_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(buf)
}

macro_rules! pre_hashed {
    ($($name:ident),+) => {$(
        impl PreHashed for $name {
            fn table_hash(&self) -> u64 {
                leading_u64(self.as_bytes())
            }
        }
    )+};
}

pre_hashed!(Hash, Hash8, EcPoint, PublicKey, KeyImage);

impl PreHashed for Signature {
    fn table_hash(&self) -> u64 {
        leading_u64(self.c.as_bytes())
    }
}

/// Table key for a [`PreHashed`] value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct PreHashedKey<T: PreHashed>(pub T);

impl<T: PreHashed> core::hash::Hash for PreHashedKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.table_hash());
    }
}

impl<T: PreHashed> From<T> for PreHashedKey<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

/// Passes a [`PreHashedKey`] table hash through unchanged.
///
/// # Panics
///
/// Hashing anything other than a [`PreHashedKey`] panics.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreHashedHasher(u64);

impl Hasher for PreHashedHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }

    fn write(&mut self, _bytes: &[u8]) {
        panic!("PreHashedHasher only hashes PreHashedKey values");
    }
}

/// `BuildHasher` for [`PreHashedSet`] and [`PreHashedMap`].
pub type PreHashedBuildHasher = BuildHasherDefault<PreHashedHasher>;

/// Hash set of pre-hashed values.
#[cfg(feature = "std")]
pub type PreHashedSet<T> = std::collections::HashSet<PreHashedKey<T>, PreHashedBuildHasher>;

/// Hash map keyed by pre-hashed values.
#[cfg(feature = "std")]
pub type PreHashedMap<K, V> = std::collections::HashMap<PreHashedKey<K>, V, PreHashedBuildHasher>;

/// Set of spent key images, as kept by the double-spend check.
#[cfg(feature = "std")]
pub type KeyImageSet = PreHashedSet<KeyImage>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EcScalar;
    use core::hash::{BuildHasher, Hash as _};

    fn table_hash_of<T: PreHashed>(value: T) -> u64 {
        let mut hasher = PreHashedBuildHasher::default().build_hasher();
        PreHashedKey(value).hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_uses_leading_bytes() {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&0x0123_4567_89ab_cdefu64.to_le_bytes());
        bytes[8..].fill(0xff);
        assert_eq!(table_hash_of(Hash::from_bytes(bytes)), 0x0123_4567_89ab_cdef);
        assert_eq!(table_hash_of(KeyImage::from_bytes(bytes)), 0x0123_4567_89ab_cdef);
        assert_eq!(
            table_hash_of(Hash8::from_bytes([1, 2, 3, 4, 5, 6, 7, 8])),
            u64::from_le_bytes([1, 2, 3, 4, 5, 6, 7, 8])
        );
    }

    #[test]
    fn test_signature_hashes_by_challenge() {
        let sig = Signature::new(
            EcScalar::from_bytes([3u8; 32]),
            EcScalar::from_bytes([9u8; 32]),
        );
        assert_eq!(table_hash_of(sig), u64::from_le_bytes([3u8; 8]));
    }

    #[test]
    #[should_panic(expected = "only hashes PreHashedKey")]
    fn test_other_keys_are_refused() {
        let mut hasher = PreHashedBuildHasher::default().build_hasher();
        "not uniform".hash(&mut hasher);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_key_image_set() {
        let mut spent = KeyImageSet::default();
        let image = KeyImage::from_bytes([5u8; 32]);
        assert!(spent.insert(PreHashedKey(image)));
        assert!(!spent.insert(PreHashedKey(image)));
        assert!(spent.contains(&PreHashedKey(KeyImage::from_bytes([5u8; 32]))));
        assert!(!spent.contains(&PreHashedKey(KeyImage::from_bytes([6u8; 32]))));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_pre_hashed_map() {
        let mut owners: PreHashedMap<PublicKey, usize> = PreHashedMap::default();
        owners.insert(PreHashedKey(PublicKey::from_bytes([1u8; 32])), 0);
        owners.insert(PreHashedKey(PublicKey::from_bytes([2u8; 32])), 1);
        assert_eq!(owners[&PreHashedKey(PublicKey::from_bytes([2u8; 32]))], 1);
    }
}
