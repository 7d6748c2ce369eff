//! Merkle proofs of the price accumulator.
//!
//! Hashes are Keccak-256 truncated to 20 bytes. Leaves and nodes are domain
//! separated with a one byte prefix, and the two children of a node are hashed
//! in ascending byte order so that a proof does not need to carry the side of
//! each sibling.

use arrayref::array_refs;
use sha3::{Digest, Keccak256};

use crate::utils::consts::{MERKLE_HASH_SIZE, MERKLE_ROOT_SIZE};

pub type MerkleHash = [u8; MERKLE_HASH_SIZE];

const LEAF_PREFIX: u8 = 0;
const NODE_PREFIX: u8 = 1;

fn keccak160(chunks: &[&[u8]]) -> MerkleHash {
    let mut hasher = Keccak256::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    let digest = hasher.finalize();
    let mut hash = [0_u8; MERKLE_HASH_SIZE];
    hash.copy_from_slice(&digest[..MERKLE_HASH_SIZE]);
    hash
}

pub fn hash_leaf(data: &[u8]) -> MerkleHash {
    keccak160(&[&[LEAF_PREFIX], data])
}

pub fn hash_node(a: &MerkleHash, b: &MerkleHash) -> MerkleHash {
    let (left, right) = if a > b { (b, a) } else { (a, b) };
    keccak160(&[&[NODE_PREFIX], left, right])
}

/// 32 bytes root word carrying `digest`: the digest is left-aligned, the rest is zero
pub fn root_from_digest(digest: &MerkleHash) -> [u8; MERKLE_ROOT_SIZE] {
    let mut root = [0_u8; MERKLE_ROOT_SIZE];
    root[..MERKLE_HASH_SIZE].copy_from_slice(digest);
    root
}

/// Fold `path` into the hash of `leaf` and compare with `root`
pub fn verify_proof(root: &[u8; MERKLE_ROOT_SIZE], leaf: &[u8], path: &[MerkleHash]) -> bool {
    let (expected, padding) = array_refs![root, MERKLE_HASH_SIZE, MERKLE_ROOT_SIZE - MERKLE_HASH_SIZE];
    if padding.iter().any(|b| *b != 0) {
        return false;
    }

    let digest = path
        .iter()
        .fold(hash_leaf(leaf), |current, sibling| hash_node(&current, sibling));

    digest == *expected
}
