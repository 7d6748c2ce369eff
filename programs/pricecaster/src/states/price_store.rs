use bytemuck::{Pod, Zeroable};

use super::{PriceSlot, SystemFlags, SystemSlot};
use crate::utils::consts::*;
use crate::{PricecasterError, PricecasterResult};

static_assertions::const_assert_eq!(GLOBAL_STATE_SIZE, std::mem::size_of::<PriceStore>());
static_assertions::const_assert_eq!(1, std::mem::align_of::<PriceStore>());
// Blob holding every price slot, the last one being the system slot
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct PriceStore {
    slots: [[u8; SLOT_SIZE]; TOTAL_SLOTS],
    _padding: [u8; PRICE_STORE_PADDING],
}

impl Default for PriceStore {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl PriceStore {
    /// Load a store from its persisted representation
    pub fn from_bytes(data: &[u8]) -> PricecasterResult<Self> {
        bytemuck::try_from_bytes::<PriceStore>(data)
            .copied()
            .map_err(|_| PricecasterError::InvalidStorageSize)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn get_slot(&self, index: usize) -> Option<PriceSlot> {
        if index >= MAX_PRICE_SLOTS {
            return None;
        }
        self.slots.get(index).map(PriceSlot::decode)
    }

    pub fn set_slot(&mut self, index: usize, slot: &PriceSlot) -> PricecasterResult<()> {
        if index >= MAX_PRICE_SLOTS {
            return Err(PricecasterError::BadSlotIndex);
        }
        self.slots[index] = slot.encode();
        Ok(())
    }

    pub fn system_slot(&self) -> SystemSlot {
        SystemSlot::decode(&self.slots[SYSTEM_SLOT_INDEX])
    }

    /// Write the entry count and flags, bytes 2..92 of the system slot are left as they are
    pub fn set_system_slot(&mut self, system_slot: &SystemSlot) {
        let [entry_count, flags, ..] = system_slot.encode();
        let record = &mut self.slots[SYSTEM_SLOT_INDEX];
        record[0] = entry_count;
        record[1] = flags;
    }

    pub fn set_entry_count(&mut self, entry_count: u8) {
        self.slots[SYSTEM_SLOT_INDEX][0] = entry_count;
    }

    pub fn set_flags(&mut self, flags: SystemFlags) {
        self.slots[SYSTEM_SLOT_INDEX][1] = flags.bits();
    }

    /// Zero every asset slot and the entry count, flags are kept
    pub fn reset_entries(&mut self) {
        let flags = self.system_slot().flags;
        *self = Self::zeroed();
        self.set_system_slot(&SystemSlot::new(0, flags));
    }
}

impl std::fmt::Debug for PriceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let system_slot = self.system_slot();
        let allocated = usize::try_from(system_slot.entry_count())
            .unwrap_or(MAX_PRICE_SLOTS)
            .min(MAX_PRICE_SLOTS);
        f.debug_struct("PriceStore")
            .field("system_slot", &system_slot)
            .field(
                "slots",
                &self.slots[..allocated]
                    .iter()
                    .map(PriceSlot::decode)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
