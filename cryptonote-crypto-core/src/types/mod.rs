//! Core type definitions for cryptonote-crypto-core
//!
//! This module contains:
//! - Error types for cryptographic operations
//! - Fixed-width point, scalar and key containers
//! - Page locking for secret containers (`std` only)
//! - The `(c, r)` signature pair

pub(crate) mod bytes;
pub mod errors;
#[cfg(feature = "std")]
pub(crate) mod mlock;
pub mod points;
pub mod signature;

// Re-export error types
pub use errors::{CryptoError, CryptoResult};

// Re-export value types
pub use points::{EcPoint, EcScalar, KeyDerivation, KeyImage, PublicKey, SecretKey};
pub use signature::Signature;
