//! Merkle root over a list of hashes (block transaction trees).

use alloc::vec::Vec;

use sha3::{Digest, Keccak256};

use super::Hash;

/// Computes the Cryptonote tree hash of `hashes`.
///
/// One leaf is its own root and two leaves hash their concatenation. For
/// more, the leaves past `2*cnt - count` are paired first, where `cnt` is
/// the largest power of two strictly below `count`, and the resulting `cnt`
/// nodes are then halved pairwise down to the root.
///
/// # Panics
///
/// Panics if `hashes` is empty.
#[must_use]
pub fn tree_hash(hashes: &[Hash]) -> Hash {
    assert!(!hashes.is_empty(), "tree_hash requires at least one leaf");

    match hashes.len() {
        1 => hashes[0],
        2 => hash_pair(&hashes[0], &hashes[1]),
        count => {
            let mut cnt = tree_hash_cnt(count);
            let direct = 2 * cnt - count;

            let mut nodes: Vec<Hash> = Vec::with_capacity(cnt);
            nodes.extend_from_slice(&hashes[..direct]);
            for pair in hashes[direct..].chunks_exact(2) {
                nodes.push(hash_pair(&pair[0], &pair[1]));
            }

            while cnt > 2 {
                cnt >>= 1;
                for j in 0..cnt {
                    nodes[j] = hash_pair(&nodes[2 * j], &nodes[2 * j + 1]);
                }
            }

            hash_pair(&nodes[0], &nodes[1])
        }
    }
}

/// Largest power of two strictly below `count` (`count >= 3`).
fn tree_hash_cnt(count: usize) -> usize {
    let mut pow = 2usize;
    while pow < count {
        pow <<= 1;
    }
    pow >> 1
}

fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Hash::from_bytes(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::cn_fast_hash;

    fn leaves(n: u8) -> Vec<Hash> {
        (0..n).map(|i| cn_fast_hash(&[i])).collect()
    }

    #[test]
    fn test_tree_hash_cnt() {
        assert_eq!(tree_hash_cnt(3), 2);
        assert_eq!(tree_hash_cnt(4), 2);
        assert_eq!(tree_hash_cnt(5), 4);
        assert_eq!(tree_hash_cnt(8), 4);
        assert_eq!(tree_hash_cnt(9), 8);
    }

    #[test]
    fn test_single_leaf_is_root() {
        let l = leaves(1);
        assert_eq!(tree_hash(&l), l[0]);
    }

    #[test]
    fn test_two_leaves() {
        let l = leaves(2);
        let mut cat = [0u8; 64];
        cat[..32].copy_from_slice(l[0].as_bytes());
        cat[32..].copy_from_slice(l[1].as_bytes());
        assert_eq!(tree_hash(&l), cn_fast_hash(&cat));
    }

    #[test]
    fn test_three_leaves_pairs_the_tail() {
        let l = leaves(3);
        let expected = hash_pair(&l[0], &hash_pair(&l[1], &l[2]));
        assert_eq!(tree_hash(&l), expected);
    }

    #[test]
    fn test_four_leaves_balanced() {
        let l = leaves(4);
        let expected = hash_pair(&hash_pair(&l[0], &l[1]), &hash_pair(&l[2], &l[3]));
        assert_eq!(tree_hash(&l), expected);
    }

    #[test]
    fn test_five_leaves() {
        let l = leaves(5);
        let n3 = hash_pair(&l[3], &l[4]);
        let expected = hash_pair(&hash_pair(&l[0], &l[1]), &hash_pair(&l[2], &n3));
        assert_eq!(tree_hash(&l), expected);
    }

    #[test]
    #[should_panic(expected = "at least one leaf")]
    fn test_empty_panics() {
        let _ = tree_hash(&[]);
    }
}
