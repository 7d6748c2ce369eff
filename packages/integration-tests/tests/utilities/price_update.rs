#![allow(dead_code)]

use pricecaster::pyth::MerkleHash;

use super::merkle_tree::MerkleTree;

#[derive(Debug, Clone, Copy)]
pub struct TestPrice {
    pub feed_id: [u8; 32],
    pub price: i64,
    pub confidence: u64,
    pub exponent: i32,
    pub publish_time: u64,
    pub prev_publish_time: u64,
    pub ema_price: u64,
    pub ema_confidence: u64,
}

impl TestPrice {
    pub fn new(price: i64, exponent: i32, publish_time: u64) -> Self {
        Self {
            feed_id: [0x11; 32],
            price,
            confidence: price.unsigned_abs() / 1000,
            exponent,
            publish_time,
            prev_publish_time: publish_time.saturating_sub(1),
            ema_price: price.unsigned_abs(),
            ema_confidence: 1,
        }
    }

    pub fn message(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(85);
        data.push(0);
        data.extend_from_slice(&self.feed_id);
        data.extend_from_slice(&self.price.to_be_bytes());
        data.extend_from_slice(&self.confidence.to_be_bytes());
        data.extend_from_slice(&self.exponent.to_be_bytes());
        data.extend_from_slice(&self.publish_time.to_be_bytes());
        data.extend_from_slice(&self.prev_publish_time.to_be_bytes());
        data.extend_from_slice(&self.ema_price.to_be_bytes());
        data.extend_from_slice(&self.ema_confidence.to_be_bytes());
        data
    }
}

/// Block of price updates and the root they are proven against
pub struct SignedBlock {
    pub root: [u8; 32],
    pub block: Vec<u8>,
}

/// Build a block where every price is a leaf of one tree
pub fn build_block(prices: &[TestPrice]) -> SignedBlock {
    let messages: Vec<Vec<u8>> = prices.iter().map(TestPrice::message).collect();
    let tree = MerkleTree::new(&messages);
    let proofs: Vec<Vec<MerkleHash>> = (0..messages.len()).map(|i| tree.proof(i)).collect();
    SignedBlock {
        root: tree.root(),
        block: encode_block(&messages, &proofs),
    }
}

pub fn encode_block(messages: &[Vec<u8>], proofs: &[Vec<MerkleHash>]) -> Vec<u8> {
    let mut block = vec![u8::try_from(messages.len()).unwrap()];
    for (message, proof) in messages.iter().zip(proofs) {
        block.extend_from_slice(&u16::try_from(message.len()).unwrap().to_be_bytes());
        block.extend_from_slice(message);
        block.push(u8::try_from(proof.len()).unwrap());
        for sibling in proof {
            block.extend_from_slice(sibling);
        }
    }
    block
}

/// Position of one entry inside an encoded block
pub struct EntryLayout {
    pub message: std::ops::Range<usize>,
    pub path: std::ops::Range<usize>,
}

pub fn entry_layouts(block: &[u8]) -> Vec<EntryLayout> {
    let mut cursor = 1;
    (0..block[0])
        .map(|_| {
            let size = usize::from(u16::from_be_bytes([block[cursor], block[cursor + 1]]));
            let message = cursor + 2..cursor + 2 + size;
            let path_len = usize::from(block[message.end]);
            let path = message.end + 1..message.end + 1 + 20 * path_len;
            cursor = path.end;
            EntryLayout { message, path }
        })
        .collect()
}
