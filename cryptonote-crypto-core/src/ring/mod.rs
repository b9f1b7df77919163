//! Linkable ring signatures.
//!
//! A ring signature proves the signer owns one of the ring's public keys
//! without revealing which. The key image ties the signature to that key so
//! a second spend of the same output is detectable.
//!
//! ## Module Structure
//!
//! - `hash`: challenge hash over the prefix and per-member commitments
//! - `sign`: ring signature generation
//! - `verify`: ring signature verification
//! - `key_image_sig`: the single-member case signing a key image

mod hash;
pub mod key_image_sig;
pub mod sign;
pub mod verify;

pub use key_image_sig::{
    check_key_image_signature, generate_key_image_signature,
    generate_key_image_signature_with_rng,
};
pub use sign::{generate_ring_signature, generate_ring_signature_with_rng};
pub use verify::check_ring_signature;
