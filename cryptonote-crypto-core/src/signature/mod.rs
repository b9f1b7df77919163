//! Single-key signatures.
//!
//! Both schemes produce the 64-byte `(c, r)` [`Signature`](crate::types::Signature):
//! - [`schnorr`]: proof of knowledge of the secret behind one public key
//! - [`tx_proof`]: proof that a transaction key pays a given view key

pub mod schnorr;
pub mod tx_proof;

pub use schnorr::{check_signature, generate_signature, generate_signature_with_rng};
pub use tx_proof::{
    check_tx_proof, generate_tx_proof, generate_tx_proof_with_rng, TxProofStatement,
    TX_PROOF_DOMAIN,
};
