use tracing::info;

use crate::states::{Configuration, PriceStore, SystemFlags, SystemSlot};

/// Fresh store: every slot zero, `flags` written into the system slot
pub fn process(configuration: &Configuration, flags: SystemFlags) -> PriceStore {
    let mut price_store = PriceStore::default();
    price_store.set_system_slot(&SystemSlot::new(0, flags));

    info!(
        admin = %configuration.admin,
        operator = %configuration.operator,
        quant = %configuration.quant,
        verifier_app_id = configuration.verifier_app_id,
        flags = flags.bits(),
        "Price store initialized"
    );

    price_store
}
