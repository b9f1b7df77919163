//! Curve point and scalar containers.
//!
//! These are raw 32-byte encodings. Construction never validates; use
//! [`check_key`](crate::keys::check_key) or the fallible operations in
//! [`keys`](crate::keys) when validity matters.

use curve25519_dalek::{
    edwards::{CompressedEdwardsY, EdwardsPoint},
    Scalar,
};
use zeroize::Zeroizing;

use super::bytes::{public_bytes, secret_bytes};

public_bytes!(
    /// A compressed Edwards point with no particular role.
    EcPoint,
    32
);

public_bytes!(
    /// A scalar mod L in little-endian form. May be unreduced.
    EcScalar,
    32
);

public_bytes!(
    /// A point used as a public identity. Null is never a valid identity.
    PublicKey,
    32
);

public_bytes!(
    /// The Diffie-Hellman shared point `8*r*A` (equivalently `8*a*R`).
    ///
    /// Only consumed by [`derivation_to_scalar`](crate::keys::derivation_to_scalar)
    /// and the derive functions built on it.
    KeyDerivation,
    32
);

public_bytes!(
    /// `x*Hp(P)` for one-time key pair `(P, x)`; the double-spend set key.
    KeyImage,
    32
);

secret_bytes!(
    /// A secret scalar. Zeroed on drop, compared in constant time.
    SecretKey,
    32
);

macro_rules! point_conversions {
    ($($name:ident),+) => {$(
        impl $name {
            /// Decompresses the encoding.
            ///
            /// `None` unless the bytes are the canonical encoding of a curve
            /// point: `y >= p` and a negative zero `x` are both rejected.
            pub(crate) fn decompress(&self) -> Option<EdwardsPoint> {
                let point = CompressedEdwardsY(self.0).decompress()?;
                (point.compress().to_bytes() == self.0).then_some(point)
            }

            pub(crate) fn from_point(point: &EdwardsPoint) -> Self {
                Self(point.compress().to_bytes())
            }
        }
    )+};
}

point_conversions!(EcPoint, PublicKey, KeyDerivation, KeyImage);

impl From<PublicKey> for EcPoint {
    fn from(key: PublicKey) -> Self {
        Self(key.0)
    }
}

impl From<KeyImage> for EcPoint {
    fn from(image: KeyImage) -> Self {
        Self(image.0)
    }
}

impl EcScalar {
    /// Reduces the value mod L.
    #[must_use]
    pub fn reduce(&self) -> Self {
        Self::from_scalar(&Scalar::from_bytes_mod_order(self.0))
    }

    /// True if the bytes already encode a value in `[0, L)`.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.to_canonical().is_some()
    }

    pub(crate) fn from_scalar(scalar: &Scalar) -> Self {
        Self(scalar.to_bytes())
    }

    /// `None` unless the encoding is canonical.
    pub(crate) fn to_canonical(self) -> Option<Scalar> {
        Option::from(Scalar::from_canonical_bytes(self.0))
    }
}

impl SecretKey {
    /// Reduces the secret mod L, returning a new key.
    #[must_use]
    pub fn reduce(&self) -> Self {
        Self::from_scalar(&self.to_scalar_mod_order())
    }

    pub(crate) fn from_scalar(scalar: &Scalar) -> Self {
        Self::from_bytes(scalar.to_bytes())
    }

    /// The secret as a scalar, wiped when the wrapper drops.
    pub(crate) fn to_scalar_mod_order(&self) -> Zeroizing<Scalar> {
        Zeroizing::new(Scalar::from_bytes_mod_order(*self.as_bytes()))
    }

    /// `None` unless the secret is canonical.
    pub(crate) fn to_canonical(&self) -> Option<Zeroizing<Scalar>> {
        Option::<Scalar>::from(Scalar::from_canonical_bytes(*self.as_bytes())).map(Zeroizing::new)
    }
}

/// `y = p + 1`, a non-canonical encoding of the identity.
#[cfg(test)]
pub(crate) const IDENTITY_Y_ABOVE_P: [u8; 32] = {
    let mut bytes = [0xff; 32];
    bytes[0] = 0xee;
    bytes[31] = 0x7f;
    bytes
};

/// `y = 1` with the sign bit set, the identity with `x = -0`.
#[cfg(test)]
pub(crate) const IDENTITY_NEGATIVE_ZERO: [u8; 32] = {
    let mut bytes = [0u8; 32];
    bytes[0] = 1;
    bytes[31] = 0x80;
    bytes
};

/// An encoding with no point on the curve, for rejection tests.
#[cfg(test)]
pub(crate) fn off_curve_bytes() -> [u8; 32] {
    (2u8..=255)
        .map(|y| {
            let mut bytes = [0u8; 32];
            bytes[0] = y;
            bytes
        })
        .find(|bytes| CompressedEdwardsY(*bytes).decompress().is_none())
        .unwrap()
}
