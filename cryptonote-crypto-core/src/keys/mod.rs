//! Key operations module
//!
//! This module provides:
//! - Key pair generation (random and from a recovery seed) and validation
//! - Stealth-address derivation of one-time keys
//! - Key image generation for linkable ring signatures

pub mod derive;
pub mod generate;
pub mod image;
pub mod varint;

// Re-export generation functions
pub use generate::{
    check_key, generate_keys, generate_keys_from_seed, generate_keys_with_rng,
    secret_key_to_public_key,
};

// Re-export derivation functions
pub use derive::{
    derivation_to_scalar, derive_public_key, derive_secret_key, derive_subaddress_public_key,
    generate_key_derivation,
};

// Re-export key image functions
pub use image::generate_key_image;

pub use varint::encode_varint;
