use tracing::{info, warn};

use crate::events::AllocEvent;
use crate::states::{Address, Configuration, PriceSlot, PriceStore, Role};
use crate::utils::consts::MAX_PRICE_SLOTS;
use crate::{PricecasterError, PricecasterResult};

pub struct AllocSlot<'a> {
    pub configuration: &'a Configuration,
    pub price_store: &'a mut PriceStore,
}

/// Hand the next free slot to `asset_id`.
///
/// Slots are allocated in order and never released, except by a full reset.
pub fn process(ctx: AllocSlot<'_>, caller: &Address, asset_id: u64) -> PricecasterResult<AllocEvent> {
    let AllocSlot {
        configuration,
        price_store,
    } = ctx;

    if let Err(e) = configuration.roles_of(caller).require(Role::Quant) {
        warn!(%caller, "Alloc rejected, caller is not the quant");
        return Err(e);
    }

    let slot_index = price_store.system_slot().entry_count();
    let index = usize::try_from(slot_index)?;
    if index >= MAX_PRICE_SLOTS {
        warn!(asset_id, entry_count = slot_index, "Alloc rejected, global state full");
        return Err(PricecasterError::CapacityExceeded);
    }

    price_store.set_slot(index, &PriceSlot::allocated(asset_id))?;
    price_store.set_entry_count(u8::try_from(index + 1)?);

    info!(asset_id, slot_index, "Slot allocated");

    Ok(AllocEvent { slot_index })
}
