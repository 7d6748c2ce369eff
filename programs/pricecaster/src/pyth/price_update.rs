use arrayref::array_refs;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::merkle::MerkleHash;
use crate::utils::consts::{MERKLE_HASH_SIZE, PRICE_FEED_MESSAGE_SIZE};
use crate::{PricecasterError, PricecasterResult};

#[derive(TryFromPrimitive, IntoPrimitive, Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum MessageType {
    PriceFeed = 0,
}

/// Price attested by the accumulator for one feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceFeedMessage {
    pub feed_id: [u8; 32],
    pub price: i64,
    pub confidence: u64,
    pub exponent: i32,
    pub publish_time: u64,
    pub prev_publish_time: u64,
    pub ema_price: u64,
    pub ema_confidence: u64,
}

impl PriceFeedMessage {
    /// Decode a serialized message, type marker included
    pub fn decode(data: &[u8]) -> PricecasterResult<Self> {
        let data: &[u8; PRICE_FEED_MESSAGE_SIZE] = data
            .try_into()
            .map_err(|_| PricecasterError::MalformedPriceUpdate)?;
        let (
            message_type,
            feed_id,
            price,
            confidence,
            exponent,
            publish_time,
            prev_publish_time,
            ema_price,
            ema_confidence,
        ) = array_refs![data, 1, 32, 8, 8, 4, 8, 8, 8, 8];

        // only price feeds are published to the store
        let MessageType::PriceFeed = MessageType::try_from(message_type[0])?;

        Ok(Self {
            feed_id: *feed_id,
            price: i64::from_be_bytes(*price),
            confidence: u64::from_be_bytes(*confidence),
            exponent: i32::from_be_bytes(*exponent),
            publish_time: u64::from_be_bytes(*publish_time),
            prev_publish_time: u64::from_be_bytes(*prev_publish_time),
            ema_price: u64::from_be_bytes(*ema_price),
            ema_confidence: u64::from_be_bytes(*ema_confidence),
        })
    }
}

/// One price update of a block with its proof of inclusion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceUpdateEntry<'a> {
    pub message: PriceFeedMessage,
    /// Serialized message as hashed into the Merkle tree
    pub leaf: &'a [u8],
    pub merkle_path: Vec<MerkleHash>,
}

struct BlockReader<'a> {
    data: &'a [u8],
}

impl<'a> BlockReader<'a> {
    fn take(&mut self, len: usize) -> PricecasterResult<&'a [u8]> {
        if self.data.len() < len {
            return Err(PricecasterError::MalformedPriceUpdate);
        }
        let (head, tail) = self.data.split_at(len);
        self.data = tail;
        Ok(head)
    }

    fn read_u8(&mut self) -> PricecasterResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u16(&mut self) -> PricecasterResult<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_hash(&mut self) -> PricecasterResult<MerkleHash> {
        let mut hash = [0_u8; MERKLE_HASH_SIZE];
        hash.copy_from_slice(self.take(MERKLE_HASH_SIZE)?);
        Ok(hash)
    }
}

/// Parse a block of price updates:
///
/// ```text
/// u8 count
/// count times:
///     u16 message size (big-endian)
///     message
///     u8 path length
///     path length * 20 bytes sibling hashes
/// ```
///
/// The whole block must be consumed.
pub fn parse_price_updates(block: &[u8]) -> PricecasterResult<Vec<PriceUpdateEntry<'_>>> {
    let mut reader = BlockReader { data: block };
    let count = reader.read_u8()?;

    let mut entries = Vec::with_capacity(count.into());
    for _ in 0..count {
        let size = usize::from(reader.read_u16()?);
        if size != PRICE_FEED_MESSAGE_SIZE {
            return Err(PricecasterError::MalformedPriceUpdate);
        }
        let leaf = reader.take(size)?;
        let message = PriceFeedMessage::decode(leaf)?;

        let path_len = reader.read_u8()?;
        let merkle_path = (0..path_len)
            .map(|_| reader.read_hash())
            .collect::<PricecasterResult<Vec<_>>>()?;

        entries.push(PriceUpdateEntry {
            message,
            leaf,
            merkle_path,
        });
    }

    if !reader.data.is_empty() {
        return Err(PricecasterError::MalformedPriceUpdate);
    }

    Ok(entries)
}
