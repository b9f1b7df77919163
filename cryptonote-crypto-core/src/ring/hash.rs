//! Ring signature challenge hash.
//!
//! The challenge commits to the message and to every ring member's `(L, R)`
//! pair in caller-supplied ring order:
//! ```text
//! H = Hs(prefix_hash || L_0 || R_0 || L_1 || R_1 || ... || L_{n-1} || R_{n-1})
//! ```
//! The challenges `c_i` of a valid signature sum to `H`.

use curve25519_dalek::{edwards::EdwardsPoint, Scalar};
use sha3::{Digest, Keccak256};

use crate::hash::{finalize_to_scalar, Hash};

/// Incremental challenge hash, seeded with the prefix hash.
pub(crate) struct RingHasher {
    hasher: Keccak256,
}

impl RingHasher {
    pub(crate) fn new(prefix_hash: &Hash) -> Self {
        Self {
            hasher: Keccak256::new_with_prefix(prefix_hash.as_bytes()),
        }
    }

    /// Absorbs the next member's commitment pair.
    pub(crate) fn absorb(&mut self, l: &EdwardsPoint, r: &EdwardsPoint) {
        self.hasher.update(l.compress().as_bytes());
        self.hasher.update(r.compress().as_bytes());
    }

    pub(crate) fn finalize(self) -> Scalar {
        finalize_to_scalar(self.hasher)
    }
}
