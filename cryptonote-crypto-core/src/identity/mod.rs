//! Service node identity keys.
//!
//! Nodes sign with Ed25519 and derive encrypted channels with X25519. An
//! Ed25519 identity can be converted to its X25519 counterpart so a single
//! key serves both purposes.

pub mod ed25519;
pub mod x25519;

pub use ed25519::{Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature};
pub use x25519::{X25519PublicKey, X25519SecretKey};
