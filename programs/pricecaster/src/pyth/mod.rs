//! Pyth accumulator price updates: block parsing and Merkle proofs
pub mod merkle;
pub mod price_update;

pub use merkle::{hash_leaf, hash_node, root_from_digest, verify_proof, MerkleHash};
pub use price_update::{parse_price_updates, MessageType, PriceFeedMessage, PriceUpdateEntry};
