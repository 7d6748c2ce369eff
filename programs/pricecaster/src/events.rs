//! Records of committed state changes.
//!
//! Each record renders to the byte log line published by the deployed store:
//! a text tag followed by big-endian fields.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::states::PriceSlot;
use crate::utils::consts::SLOT_SIZE;

pub const ALLOC_TAG: &[u8] = b"ALLOC@";
pub const STORE_TAG: &[u8] = b"STORE@";
pub const NORM_PRICE_ZERO_TAG: &[u8] = b"NORM_PRICE_ZERO@";
pub const PRICE_IGNORED_OLD_TAG: &[u8] = b"PRICE_IGNORED_OLD@";

/// A slot was handed to an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocEvent {
    pub slot_index: u64,
}

impl AllocEvent {
    pub fn to_log_bytes(&self) -> Vec<u8> {
        [ALLOC_TAG, &self.slot_index.to_be_bytes()].concat()
    }
}

/// Result of one entry of a store call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StoreOutcome {
    /// Slot overwritten with a newer price
    Stored { slot_index: u64, slot: PriceSlot },
    /// Update not newer than the stored price, nothing written
    StaleIgnored { asset_id: u64 },
    /// Slot overwritten, but the price normalizes to zero
    NormalizedPriceZero { slot_index: u64, slot: PriceSlot },
}

impl StoreOutcome {
    pub fn is_written(&self) -> bool {
        !matches!(self, StoreOutcome::StaleIgnored { .. })
    }

    pub fn to_log_bytes(&self) -> Vec<u8> {
        match self {
            StoreOutcome::Stored { slot_index, slot } => slot_log(STORE_TAG, *slot_index, slot),
            StoreOutcome::NormalizedPriceZero { slot_index, slot } => {
                slot_log(NORM_PRICE_ZERO_TAG, *slot_index, slot)
            }
            StoreOutcome::StaleIgnored { asset_id } => {
                [PRICE_IGNORED_OLD_TAG, &asset_id.to_be_bytes()].concat()
            }
        }
    }
}

fn slot_log(tag: &[u8], slot_index: u64, slot: &PriceSlot) -> Vec<u8> {
    let mut log = Vec::with_capacity(tag.len() + 8 + SLOT_SIZE);
    log.extend_from_slice(tag);
    log.extend_from_slice(&slot_index.to_be_bytes());
    log.extend_from_slice(&slot.encode());
    log
}
