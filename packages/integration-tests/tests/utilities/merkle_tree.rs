#![allow(dead_code)]

use pricecaster::pyth::{hash_leaf, hash_node, root_from_digest, MerkleHash};

/// Accumulator tree over serialized messages.
///
/// A node without sibling is carried to the next level unchanged.
pub struct MerkleTree {
    levels: Vec<Vec<MerkleHash>>,
}

impl MerkleTree {
    pub fn new<T: AsRef<[u8]>>(leaves: &[T]) -> Self {
        assert!(!leaves.is_empty(), "tree needs at least one leaf");
        let mut levels = vec![leaves.iter().map(|l| hash_leaf(l.as_ref())).collect::<Vec<_>>()];
        while levels.last().unwrap().len() > 1 {
            let next = levels
                .last()
                .unwrap()
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => hash_node(a, b),
                    [a] => *a,
                    _ => unreachable!(),
                })
                .collect();
            levels.push(next);
        }
        Self { levels }
    }

    pub fn root(&self) -> [u8; 32] {
        root_from_digest(&self.levels.last().unwrap()[0])
    }

    pub fn proof(&self, leaf_index: usize) -> Vec<MerkleHash> {
        let mut index = leaf_index;
        let mut path = Vec::new();
        for level in &self.levels[..self.levels.len() - 1] {
            if let Some(sibling) = level.get(index ^ 1) {
                path.push(*sibling);
            }
            index /= 2;
        }
        path
    }
}
