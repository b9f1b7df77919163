//! Fixed-width byte containers.
//!
//! Two flavours are generated here:
//!
//! - [`public_bytes!`] for public data (points, digests, signatures): `Copy`,
//!   ordinary byte-wise equality and ordering, lowercase-hex `Display`.
//! - [`secret_bytes!`] for secret data: boxed and page-locked, zeroed on
//!   drop, constant-time equality, redacted `Debug`, no `Display`.
//!
//! Both get an all-zero null value, `is_null`/`is_nonnull`, and explicit
//! `from_bytes`/`as_bytes`/`from_slice` accessors. Each invocation is its own
//! nominal type, so a point can never be compared against a scalar.

use alloc::format;

use zeroize::Zeroizing;

use crate::types::errors::{CryptoError, CryptoResult};

/// Decodes a hex string into a fixed-width array.
///
/// The intermediate buffer is wiped, since this is also used for secrets.
pub(crate) fn decode_hex_array<const N: usize>(field: &str, s: &str) -> CryptoResult<[u8; N]> {
    let bytes = Zeroizing::new(
        hex::decode(s).map_err(|e| CryptoError::HexDecodeFailed(format!("{field}: {e}")))?,
    );
    copy_exact(field, &bytes)
}

/// Copies a slice into a fixed-width array, checking the length.
pub(crate) fn copy_exact<const N: usize>(field: &str, bytes: &[u8]) -> CryptoResult<[u8; N]> {
    if bytes.len() != N {
        return Err(CryptoError::InvalidLength {
            field: field.into(),
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; N];
    arr.copy_from_slice(bytes);
    Ok(arr)
}

macro_rules! public_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Width in bytes.
            pub const LEN: usize = $len;

            /// The all-zero value.
            pub const NULL: Self = Self([0u8; $len]);

            /// Wraps raw bytes without any validation.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Copies bytes out of a slice of exactly the right length.
            pub fn from_slice(bytes: &[u8]) -> $crate::types::CryptoResult<Self> {
                $crate::types::bytes::copy_exact(stringify!($name), bytes).map(Self)
            }

            /// Parses lowercase or uppercase hex without prefix.
            pub fn from_hex(s: &str) -> $crate::types::CryptoResult<Self> {
                $crate::types::bytes::decode_hex_array(stringify!($name), s).map(Self)
            }

            /// Borrows the raw bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Returns the raw bytes.
            #[must_use]
            pub const fn to_bytes(self) -> [u8; $len] {
                self.0
            }

            /// Lowercase hex, no prefix.
            #[must_use]
            pub fn to_hex(&self) -> alloc::string::String {
                hex::encode(self.0)
            }

            /// True if every byte is zero.
            ///
            /// This says nothing about cryptographic validity.
            #[must_use]
            pub fn is_null(&self) -> bool {
                self.0 == [0u8; $len]
            }

            /// True if any byte is non-zero.
            #[must_use]
            pub fn is_nonnull(&self) -> bool {
                !self.is_null()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::NULL
            }
        }

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                state.write(&self.0);
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "<{}>", hex::encode(self.0))
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(self.0))
            }
        }

        impl $crate::random::RandomFill for $name {
            fn random_fill(&mut self) {
                $crate::random::fill_random(&mut self.0);
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <alloc::string::String as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

macro_rules! secret_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        ///
        /// The bytes live in their own heap allocation. With `std` the pages
        /// holding them are locked in RAM until the value drops.
        pub struct $name(alloc::boxed::Box<[u8; $len]>);

        impl $name {
            /// Width in bytes.
            pub const LEN: usize = $len;

            /// The all-zero value. Reserved; never a usable key.
            #[must_use]
            pub fn null() -> Self {
                let bytes = alloc::boxed::Box::new([0u8; $len]);
                #[cfg(feature = "std")]
                $crate::types::mlock::lock(&bytes[..]);
                Self(bytes)
            }

            /// Takes ownership of raw secret bytes.
            ///
            /// The caller should wipe its own copy afterwards.
            #[must_use]
            pub fn from_bytes(bytes: [u8; $len]) -> Self {
                let mut secret = Self::null();
                secret.0.copy_from_slice(&bytes);
                secret
            }

            /// Copies secret bytes out of a slice of exactly the right length.
            pub fn from_slice(bytes: &[u8]) -> $crate::types::CryptoResult<Self> {
                if bytes.len() != $len {
                    return Err($crate::types::CryptoError::InvalidLength {
                        field: stringify!($name).into(),
                        expected: $len,
                        actual: bytes.len(),
                    });
                }
                let mut secret = Self::null();
                secret.0.copy_from_slice(bytes);
                Ok(secret)
            }

            /// Parses hex without prefix.
            pub fn from_hex(s: &str) -> $crate::types::CryptoResult<Self> {
                let bytes = zeroize::Zeroizing::new(hex::decode(s).map_err(|e| {
                    $crate::types::CryptoError::HexDecodeFailed(alloc::format!(
                        "{}: {e}",
                        stringify!($name)
                    ))
                })?);
                Self::from_slice(&bytes)
            }

            /// Borrows the raw secret bytes.
            #[must_use]
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Constant-time check for the all-zero value.
            #[must_use]
            pub fn is_null(&self) -> bool {
                use subtle::ConstantTimeEq;
                bool::from(self.0[..].ct_eq(&[0u8; $len][..]))
            }

            /// Constant-time check for any non-zero byte.
            #[must_use]
            pub fn is_nonnull(&self) -> bool {
                !self.is_null()
            }
        }

        impl Clone for $name {
            fn clone(&self) -> Self {
                let mut copy = Self::null();
                copy.0.copy_from_slice(&self.0[..]);
                copy
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::null()
            }
        }

        impl zeroize::Zeroize for $name {
            fn zeroize(&mut self) {
                zeroize::Zeroize::zeroize(&mut *self.0);
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                zeroize::Zeroize::zeroize(self);
                #[cfg(feature = "std")]
                $crate::types::mlock::unlock(&self.0[..]);
            }
        }

        impl zeroize::ZeroizeOnDrop for $name {}

        impl subtle::ConstantTimeEq for $name {
            fn ct_eq(&self, other: &Self) -> subtle::Choice {
                use subtle::ConstantTimeEq;
                self.0[..].ct_eq(&other.0[..])
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                use subtle::ConstantTimeEq;
                self.ct_eq(other).into()
            }
        }

        impl Eq for $name {}

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}(<redacted>)", stringify!($name))
            }
        }

        impl $crate::random::RandomFill for $name {
            fn random_fill(&mut self) {
                $crate::random::fill_random(&mut self.0[..]);
            }
        }
    };
}

pub(crate) use public_bytes;
pub(crate) use secret_bytes;

#[cfg(test)]
mod tests {
    use super::*;

    public_bytes!(
        /// Test-only public type.
        Tag,
        4
    );

    secret_bytes!(
        /// Test-only secret type.
        SecretTag,
        4
    );

    #[test]
    fn test_null_semantics() {
        assert!(Tag::NULL.is_null());
        assert!(!Tag::NULL.is_nonnull());
        assert!(Tag::from_bytes([0, 0, 0, 1]).is_nonnull());
        assert!(SecretTag::null().is_null());
        assert!(SecretTag::from_bytes([9, 0, 0, 0]).is_nonnull());
    }

    #[test]
    fn test_hex_display_and_parse() {
        let p = Tag::from_bytes([0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(p.to_hex(), "deadbeef");
        assert_eq!(alloc::format!("{p}"), "<deadbeef>");
        assert_eq!(Tag::from_hex("deadbeef").unwrap(), p);
    }

    #[test]
    fn test_hex_wrong_length() {
        let err = Tag::from_hex("deadbeefff").unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidLength {
                expected: 4,
                actual: 5,
                ..
            }
        ));
        assert!(matches!(
            Tag::from_hex("zz"),
            Err(CryptoError::HexDecodeFailed(_))
        ));
    }

    #[test]
    fn test_from_slice() {
        assert!(Tag::from_slice(&[1, 2, 3]).is_err());
        assert_eq!(
            Tag::from_slice(&[1, 2, 3, 4]).unwrap().to_bytes(),
            [1, 2, 3, 4]
        );
    }

    #[test]
    fn test_ordering_is_bytewise() {
        assert!(Tag::from_bytes([0, 0, 0, 1]) < Tag::from_bytes([0, 0, 1, 0]));
    }

    #[test]
    fn test_secret_equality_and_debug() {
        let a = SecretTag::from_bytes([1, 2, 3, 4]);
        let b = SecretTag::from_bytes([1, 2, 3, 4]);
        let c = SecretTag::from_bytes([1, 2, 3, 5]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        let shown = alloc::format!("{a:?}");
        assert!(shown.contains("redacted"));
        assert!(!shown.contains("01020304"));
    }

    #[test]
    fn test_secret_clone_is_independent() {
        let a = SecretTag::from_bytes([1, 2, 3, 4]);
        let mut b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a.as_bytes().as_ptr(), b.as_bytes().as_ptr());

        zeroize::Zeroize::zeroize(&mut b);
        assert!(b.is_null());
        assert_eq!(a.as_bytes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_secret_from_slice_and_hex() {
        assert!(matches!(
            SecretTag::from_slice(&[1, 2, 3]),
            Err(CryptoError::InvalidLength {
                expected: 4,
                actual: 3,
                ..
            })
        ));
        assert_eq!(
            SecretTag::from_hex("01020304").unwrap(),
            SecretTag::from_bytes([1, 2, 3, 4])
        );
        assert!(matches!(
            SecretTag::from_hex("zz"),
            Err(CryptoError::HexDecodeFailed(_))
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_secret_pages_are_tracked_while_alive() {
        let secret = SecretTag::from_bytes([7, 7, 7, 7]);
        assert!(crate::types::mlock::is_tracked(&secret.as_bytes()[..]));
    }
}
