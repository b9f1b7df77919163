//! Transaction proofs (v2).
//!
//! Proves knowledge of `r` with `R = r*G` (or `R = r*B` for a subaddress
//! recipient with spend key `B`) and `D = r*A` for view key `A`, without
//! revealing `r`. Used to show that a transaction paid a given address.
//!
//! ## Challenge layout
//! ```text
//! c = Hs(prefix_hash || D || X || Y || Keccak("TXPROOF_V2") || R || A || B)
//! ```
//! `B` is 32 zero bytes when the recipient is a standard address.

use curve25519_dalek::{constants::ED25519_BASEPOINT_TABLE, edwards::EdwardsPoint, Scalar};
use rand_core::{CryptoRng, RngCore};
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

use crate::hash::{cn_fast_hash, finalize_to_scalar, Hash};
use crate::random::{random_scalar_with_rng, RandomDevice};
use crate::types::errors::{CryptoError, CryptoResult};
use crate::types::{EcScalar, PublicKey, SecretKey, Signature};

// =============================================================================
// Constants
// =============================================================================

/// Domain separator, hashed before being absorbed into the challenge.
pub const TX_PROOF_DOMAIN: &[u8] = b"TXPROOF_V2";

/// Public statement of a transaction proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxProofStatement<'a> {
    /// Transaction public key `R`
    pub tx_public: &'a PublicKey,
    /// Recipient view key `A`
    pub view_public: &'a PublicKey,
    /// Recipient spend key `B`, only for subaddress recipients
    pub spend_public: Option<&'a PublicKey>,
    /// Shared point `D = r*A`
    pub shared: &'a PublicKey,
}

struct DecodedStatement {
    tx_public: EdwardsPoint,
    view_public: EdwardsPoint,
    spend_public: Option<EdwardsPoint>,
    shared: EdwardsPoint,
}

impl TxProofStatement<'_> {
    fn decode(&self) -> Option<DecodedStatement> {
        let spend_public = match self.spend_public {
            Some(key) => Some(key.decompress()?),
            None => None,
        };
        Some(DecodedStatement {
            tx_public: self.tx_public.decompress()?,
            view_public: self.view_public.decompress()?,
            spend_public,
            shared: self.shared.decompress()?,
        })
    }

    fn challenge(&self, prefix_hash: &Hash, x: &EdwardsPoint, y: &EdwardsPoint) -> Scalar {
        let mut hasher = Keccak256::new();
        hasher.update(prefix_hash.as_bytes());
        hasher.update(self.shared.as_bytes());
        hasher.update(x.compress().as_bytes());
        hasher.update(y.compress().as_bytes());
        hasher.update(cn_fast_hash(TX_PROOF_DOMAIN).as_bytes());
        hasher.update(self.tx_public.as_bytes());
        hasher.update(self.view_public.as_bytes());
        hasher.update(self.spend_public.copied().unwrap_or(PublicKey::NULL).as_bytes());
        finalize_to_scalar(hasher)
    }
}

/// Generates a transaction proof with the OS CSPRNG supplying the nonce.
///
/// # Errors
///
/// `InvalidPublicKey` if a statement point does not decode.
///
/// # Panics
///
/// Panics if secure randomness is unavailable.
pub fn generate_tx_proof(
    prefix_hash: &Hash,
    statement: &TxProofStatement<'_>,
    tx_secret: &SecretKey,
) -> CryptoResult<Signature> {
    generate_tx_proof_with_rng(prefix_hash, statement, tx_secret, &mut RandomDevice)
}

/// Generates a transaction proof drawing the nonce from `rng`.
///
/// # Errors
///
/// `InvalidPublicKey` if a statement point does not decode.
pub fn generate_tx_proof_with_rng<R: RngCore + CryptoRng>(
    prefix_hash: &Hash,
    statement: &TxProofStatement<'_>,
    tx_secret: &SecretKey,
    rng: &mut R,
) -> CryptoResult<Signature> {
    let points = statement.decode().ok_or_else(|| {
        tracing::debug!("tx proof statement contains an invalid point");
        CryptoError::InvalidPublicKey("tx proof statement point does not decode".into())
    })?;

    let secret = tx_secret.to_scalar_mod_order();
    debug_assert_eq!(
        PublicKey::from_point(&match points.spend_public {
            Some(b) => *secret * b,
            None => ED25519_BASEPOINT_TABLE * &*secret,
        }),
        *statement.tx_public,
        "transaction secret does not match R"
    );
    debug_assert_eq!(
        PublicKey::from_point(&(*secret * points.view_public)),
        *statement.shared,
        "transaction secret does not match D"
    );

    let nonce = Zeroizing::new(random_scalar_with_rng(rng));
    let x = match points.spend_public {
        Some(b) => *nonce * b,
        None => ED25519_BASEPOINT_TABLE * &*nonce,
    };
    let y = *nonce * points.view_public;

    let c = statement.challenge(prefix_hash, &x, &y);
    let r = *nonce - c * *secret;

    Ok(Signature::new(EcScalar::from_scalar(&c), EcScalar::from_scalar(&r)))
}

/// True iff `proof` is valid for `statement` over `prefix_hash`.
#[must_use]
pub fn check_tx_proof(
    prefix_hash: &Hash,
    statement: &TxProofStatement<'_>,
    proof: &Signature,
) -> bool {
    let (Some(c), Some(r)) = (proof.c.to_canonical(), proof.r.to_canonical()) else {
        tracing::trace!("tx proof scalar is not canonical");
        return false;
    };
    if c == Scalar::ZERO {
        tracing::trace!("tx proof challenge is zero");
        return false;
    }

    let Some(points) = statement.decode() else {
        tracing::trace!("tx proof statement contains an invalid point");
        return false;
    };

    // X = c*R + r*B (or r*G), Y = c*D + r*A
    let x = match points.spend_public {
        Some(b) => c * points.tx_public + r * b,
        None => EdwardsPoint::vartime_double_scalar_mul_basepoint(&c, &points.tx_public, &r),
    };
    let y = c * points.shared + r * points.view_public;

    statement.challenge(prefix_hash, &x, &y) == c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::generate_keys;
    use crate::types::points::{off_curve_bytes, IDENTITY_NEGATIVE_ZERO, IDENTITY_Y_ABOVE_P};

    struct Fixture {
        tx_public: PublicKey,
        tx_secret: SecretKey,
        view_public: PublicKey,
        spend_public: PublicKey,
        shared: PublicKey,
    }

    fn fixture(subaddress: bool) -> Fixture {
        let (view_public, _) = generate_keys();
        let (spend_public, _) = generate_keys();
        let (_, tx_secret) = generate_keys();
        let r = tx_secret.to_scalar_mod_order();

        let tx_public = if subaddress {
            PublicKey::from_point(&(*r * spend_public.decompress().unwrap()))
        } else {
            PublicKey::from_point(&(ED25519_BASEPOINT_TABLE * &*r))
        };
        let shared = PublicKey::from_point(&(*r * view_public.decompress().unwrap()));

        Fixture {
            tx_public,
            tx_secret,
            view_public,
            spend_public,
            shared,
        }
    }

    impl Fixture {
        fn statement(&self, subaddress: bool) -> TxProofStatement<'_> {
            TxProofStatement {
                tx_public: &self.tx_public,
                view_public: &self.view_public,
                spend_public: subaddress.then_some(&self.spend_public),
                shared: &self.shared,
            }
        }
    }

    #[test]
    fn test_standard_address_proof() {
        let f = fixture(false);
        let prefix = cn_fast_hash(b"tx");
        let statement = f.statement(false);
        let proof = generate_tx_proof(&prefix, &statement, &f.tx_secret).unwrap();
        assert!(check_tx_proof(&prefix, &statement, &proof));
    }

    #[test]
    fn test_subaddress_proof() {
        let f = fixture(true);
        let prefix = cn_fast_hash(b"tx");
        let statement = f.statement(true);
        let proof = generate_tx_proof(&prefix, &statement, &f.tx_secret).unwrap();
        assert!(check_tx_proof(&prefix, &statement, &proof));
    }

    #[test]
    fn test_proof_binds_message_and_points() {
        let f = fixture(false);
        let prefix = cn_fast_hash(b"tx");
        let statement = f.statement(false);
        let proof = generate_tx_proof(&prefix, &statement, &f.tx_secret).unwrap();

        assert!(!check_tx_proof(&cn_fast_hash(b"other"), &statement, &proof));

        let (other, _) = generate_keys();
        let wrong_view = TxProofStatement {
            view_public: &other,
            ..statement
        };
        assert!(!check_tx_proof(&prefix, &wrong_view, &proof));

        let wrong_shared = TxProofStatement {
            shared: &other,
            ..statement
        };
        assert!(!check_tx_proof(&prefix, &wrong_shared, &proof));

        // a standard-address proof does not verify as a subaddress proof
        let as_subaddress = TxProofStatement {
            spend_public: Some(&f.spend_public),
            ..statement
        };
        assert!(!check_tx_proof(&prefix, &as_subaddress, &proof));
    }

    #[test]
    fn test_null_proof_fails() {
        let f = fixture(false);
        assert!(!check_tx_proof(
            &Hash::NULL,
            &f.statement(false),
            &Signature::NULL
        ));
    }

    #[test]
    fn test_invalid_point_rejected() {
        let f = fixture(false);
        let bad = PublicKey::from_bytes(off_curve_bytes());
        let statement = TxProofStatement {
            shared: &bad,
            ..f.statement(false)
        };
        assert!(matches!(
            generate_tx_proof(&Hash::NULL, &statement, &f.tx_secret),
            Err(CryptoError::InvalidPublicKey(_))
        ));

        let proof = generate_tx_proof(&Hash::NULL, &f.statement(false), &f.tx_secret).unwrap();
        assert!(!check_tx_proof(&Hash::NULL, &statement, &proof));
    }

    #[test]
    fn test_non_canonical_points_rejected() {
        let f = fixture(true);
        let proof = generate_tx_proof(&Hash::NULL, &f.statement(true), &f.tx_secret).unwrap();

        for bytes in [IDENTITY_Y_ABOVE_P, IDENTITY_NEGATIVE_ZERO] {
            let bad = PublicKey::from_bytes(bytes);
            let statements = [
                TxProofStatement {
                    tx_public: &bad,
                    ..f.statement(true)
                },
                TxProofStatement {
                    view_public: &bad,
                    ..f.statement(true)
                },
                TxProofStatement {
                    spend_public: Some(&bad),
                    ..f.statement(true)
                },
                TxProofStatement {
                    shared: &bad,
                    ..f.statement(true)
                },
            ];
            for statement in &statements {
                assert!(!check_tx_proof(&Hash::NULL, statement, &proof));
                assert!(generate_tx_proof(&Hash::NULL, statement, &f.tx_secret).is_err());
            }
        }
    }
}
