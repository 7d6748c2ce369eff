use arrayref::{array_refs, mut_array_refs};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::consts::SLOT_SIZE;

/// Latest price state of one asset.
///
/// Serialized as a 92 bytes big-endian record:
///
/// | bytes | field |
/// |---|---|
/// | 8 | asset id |
/// | 8 | normalized price |
/// | 8 | price |
/// | 8 | confidence |
/// | 4 | exponent |
/// | 8 | price EMA |
/// | 8 | confidence EMA |
/// | 8 | publish time |
/// | 8 | previous publish time |
/// | 24 | reserved, always zero |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceSlot {
    // 0 is the chain native asset
    pub asset_id: u64,

    // price in pico-dollars per base unit of the asset,
    // see `crate::utils::math::normalize_price`
    pub normalized_price: u64,

    // Pyth price, integer + exponent representation
    // as integer: 9897745, exponent: -8
    // as float:   0.09897745
    pub price: i64,
    pub confidence: u64,
    pub exponent: i32,

    pub ema_price: u64,
    pub ema_confidence: u64,

    pub publish_time: u64,
    pub prev_publish_time: u64,
}

impl PriceSlot {
    /// Content of a freshly allocated slot
    pub fn allocated(asset_id: u64) -> Self {
        Self {
            asset_id,
            ..Default::default()
        }
    }

    pub fn encode(&self) -> [u8; SLOT_SIZE] {
        let mut data = [0_u8; SLOT_SIZE];
        let (
            asset_id,
            normalized_price,
            price,
            confidence,
            exponent,
            ema_price,
            ema_confidence,
            publish_time,
            prev_publish_time,
            _reserved,
        ) = mut_array_refs![&mut data, 8, 8, 8, 8, 4, 8, 8, 8, 8, 24];

        *asset_id = self.asset_id.to_be_bytes();
        *normalized_price = self.normalized_price.to_be_bytes();
        *price = self.price.to_be_bytes();
        *confidence = self.confidence.to_be_bytes();
        *exponent = self.exponent.to_be_bytes();
        *ema_price = self.ema_price.to_be_bytes();
        *ema_confidence = self.ema_confidence.to_be_bytes();
        *publish_time = self.publish_time.to_be_bytes();
        *prev_publish_time = self.prev_publish_time.to_be_bytes();

        data
    }

    /// Reserved bytes are not part of the record and are ignored
    pub fn decode(data: &[u8; SLOT_SIZE]) -> Self {
        let (
            asset_id,
            normalized_price,
            price,
            confidence,
            exponent,
            ema_price,
            ema_confidence,
            publish_time,
            prev_publish_time,
            _reserved,
        ) = array_refs![data, 8, 8, 8, 8, 4, 8, 8, 8, 8, 24];

        Self {
            asset_id: u64::from_be_bytes(*asset_id),
            normalized_price: u64::from_be_bytes(*normalized_price),
            price: i64::from_be_bytes(*price),
            confidence: u64::from_be_bytes(*confidence),
            exponent: i32::from_be_bytes(*exponent),
            ema_price: u64::from_be_bytes(*ema_price),
            ema_confidence: u64::from_be_bytes(*ema_confidence),
            publish_time: u64::from_be_bytes(*publish_time),
            prev_publish_time: u64::from_be_bytes(*prev_publish_time),
        }
    }
}
