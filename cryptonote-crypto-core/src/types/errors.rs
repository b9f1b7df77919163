//! Error types for cryptographic operations
//!
//! Construction-side operations (key generation, derivation, signing) return
//! [`CryptoResult`]. Verification-side operations return `bool` and never
//! produce one of these errors.

use alloc::string::String;
use core::fmt;

/// Result type alias for cryptographic operations
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Error type for all fallible cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    // =========================================================================
    // Key Errors
    // =========================================================================
    /// A public key (or other encoded point) does not decode to a curve point
    InvalidPublicKey(String),

    /// A secret key is zero or not a canonical scalar
    InvalidSecretKey(String),

    /// A derivation produced the identity or otherwise unusable point
    InvalidDerivedKey(String),

    // =========================================================================
    // Ring Signature Errors
    // =========================================================================
    /// A ring must contain at least one member
    EmptyRing,

    // =========================================================================
    // Randomness Errors
    // =========================================================================
    /// The operating system could not provide secure randomness
    EntropyUnavailable(String),

    // =========================================================================
    // Encoding Errors
    // =========================================================================
    /// Hex decode failed
    HexDecodeFailed(String),

    /// Invalid input length
    InvalidLength {
        /// Name of the field
        field: String,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidPublicKey(msg) => {
                write!(f, "Invalid public key: {msg}")
            }
            CryptoError::InvalidSecretKey(msg) => {
                write!(f, "Invalid secret key: {msg}")
            }
            CryptoError::InvalidDerivedKey(msg) => {
                write!(f, "Invalid derived key: {msg}")
            }

            CryptoError::EmptyRing => {
                write!(f, "Ring must contain at least one public key")
            }

            CryptoError::EntropyUnavailable(msg) => {
                write!(f, "Secure randomness unavailable: {msg}")
            }

            CryptoError::HexDecodeFailed(msg) => {
                write!(f, "Hex decode failed: {msg}")
            }
            CryptoError::InvalidLength {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid {field} length: expected {expected}, got {actual}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CryptoError {}
