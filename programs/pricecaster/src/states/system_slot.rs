#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::consts::{
    FLAGS_RESERVED_MASK, FLAG_SKIP_MERKLE_VERIFICATION, FLAG_TEST_MODE, SLOT_SIZE,
};

/// Behavior flags kept in the system slot.
///
/// Only the storage boundary sees the byte form, see [`SystemFlags::from_bits`]
/// and [`SystemFlags::bits`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SystemFlags {
    /// Stores are accepted outside of a verification group
    pub test_mode: bool,
    /// Merkle proofs of price updates are not checked
    pub skip_merkle_verification: bool,
    // Bits without meaning yet, carried as-is
    reserved: u8,
}

impl SystemFlags {
    pub const fn new(test_mode: bool, skip_merkle_verification: bool) -> Self {
        Self {
            test_mode,
            skip_merkle_verification,
            reserved: 0,
        }
    }

    pub fn from_bits(bits: u8) -> Self {
        Self {
            test_mode: bits & FLAG_TEST_MODE != 0,
            skip_merkle_verification: bits & FLAG_SKIP_MERKLE_VERIFICATION != 0,
            reserved: bits & FLAGS_RESERVED_MASK,
        }
    }

    pub fn bits(&self) -> u8 {
        let mut bits = self.reserved & FLAGS_RESERVED_MASK;
        if self.test_mode {
            bits |= FLAG_TEST_MODE;
        }
        if self.skip_merkle_verification {
            bits |= FLAG_SKIP_MERKLE_VERIFICATION;
        }
        bits
    }
}

/// Reserved record at the end of the price store.
///
/// | byte | field |
/// |---|---|
/// | 0 | number of allocated slots |
/// | 1 | flags |
/// | 2..92 | reserved |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SystemSlot {
    entry_count: u8,
    pub flags: SystemFlags,
}

impl SystemSlot {
    pub fn new(entry_count: u8, flags: SystemFlags) -> Self {
        Self { entry_count, flags }
    }

    pub fn entry_count(&self) -> u64 {
        self.entry_count.into()
    }

    pub fn encode(&self) -> [u8; SLOT_SIZE] {
        let mut data = [0_u8; SLOT_SIZE];
        data[0] = self.entry_count;
        data[1] = self.flags.bits();
        data
    }

    pub fn decode(data: &[u8; SLOT_SIZE]) -> Self {
        Self {
            entry_count: data[0],
            flags: SystemFlags::from_bits(data[1]),
        }
    }
}
