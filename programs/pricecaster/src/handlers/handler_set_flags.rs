use tracing::{info, warn};

use crate::states::{Address, Configuration, PriceStore, Role, SystemFlags};
use crate::utils::consts::FLAGS_RESERVED_MASK;
use crate::utils::list_set_bit_positions;
use crate::PricecasterResult;

pub struct SetFlags<'a> {
    pub configuration: &'a Configuration,
    pub price_store: &'a mut PriceStore,
}

/// Overwrite the free flag bits.
///
/// Test mode and Merkle bypass are fixed when the store is initialized, their
/// stored value is kept whatever `flags` holds. The entry count is kept.
pub fn process(ctx: SetFlags<'_>, caller: &Address, flags: u8) -> PricecasterResult {
    let SetFlags {
        configuration,
        price_store,
    } = ctx;

    if let Err(e) = configuration.roles_of(caller).require(Role::Admin) {
        warn!(%caller, "Set flags rejected, caller is not the admin");
        return Err(e);
    }

    let previous = price_store.system_slot().flags.bits();
    if (flags ^ previous) & !FLAGS_RESERVED_MASK != 0 {
        warn!(
            requested = flags,
            "Test mode and Merkle bypass are read-only, requested values ignored"
        );
    }

    let bits = (flags & FLAGS_RESERVED_MASK) | (previous & !FLAGS_RESERVED_MASK);
    price_store.set_flags(SystemFlags::from_bits(bits));

    info!(
        "Flags {previous:#04x} -> {bits:#04x}, set bits: {:?}",
        list_set_bit_positions(bits)
    );

    Ok(())
}
