//! The `(c, r)` signature pair shared by the Schnorr variant, transaction
//! proofs and each ring entry.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::bytes::{copy_exact, decode_hex_array};
use super::errors::CryptoResult;
use super::points::EcScalar;

/// Two scalars, serialized as `c (32 bytes) || r (32 bytes)`.
///
/// The null signature is all zeros and never verifies.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Signature {
    /// Challenge scalar.
    pub c: EcScalar,
    /// Response scalar.
    pub r: EcScalar,
}

impl Signature {
    /// Width in bytes.
    pub const LEN: usize = 64;

    /// The all-zero signature.
    pub const NULL: Self = Self {
        c: EcScalar::NULL,
        r: EcScalar::NULL,
    };

    /// Builds a signature from its two scalars.
    #[must_use]
    pub const fn new(c: EcScalar, r: EcScalar) -> Self {
        Self { c, r }
    }

    /// Splits 64 wire bytes into `(c, r)`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        let mut c = [0u8; 32];
        let mut r = [0u8; 32];
        c.copy_from_slice(&bytes[..32]);
        r.copy_from_slice(&bytes[32..]);
        Self {
            c: EcScalar::from_bytes(c),
            r: EcScalar::from_bytes(r),
        }
    }

    /// Copies a signature out of a 64-byte slice.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        copy_exact::<64>("Signature", bytes).map(|arr| Self::from_bytes(&arr))
    }

    /// Parses 128 hex characters.
    pub fn from_hex(s: &str) -> CryptoResult<Self> {
        decode_hex_array::<64>("Signature", s).map(|arr| Self::from_bytes(&arr))
    }

    /// The 64 wire bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(self.c.as_bytes());
        out[32..].copy_from_slice(self.r.as_bytes());
        out
    }

    /// Lowercase hex of the wire bytes.
    #[must_use]
    pub fn to_hex(&self) -> alloc::string::String {
        hex::encode(self.to_bytes())
    }

    /// True if both scalars are zero.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.c.is_null() && self.r.is_null()
    }

    /// True unless this is the null signature.
    #[must_use]
    pub fn is_nonnull(&self) -> bool {
        !self.is_null()
    }
}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.to_bytes());
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Signature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Signature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <alloc::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
