use tracing::{info, warn};

use crate::states::{Address, Configuration, PriceStore, Role};
use crate::PricecasterResult;

pub struct Reset<'a> {
    pub configuration: &'a Configuration,
    pub price_store: &'a mut PriceStore,
}

pub fn process(ctx: Reset<'_>, caller: &Address) -> PricecasterResult {
    let Reset {
        configuration,
        price_store,
    } = ctx;

    if let Err(e) = configuration.roles_of(caller).require(Role::Admin) {
        warn!(%caller, "Reset rejected, caller is not the admin");
        return Err(e);
    }

    let entry_count = price_store.system_slot().entry_count();
    price_store.reset_entries();

    info!(entry_count, "Price store reset");

    Ok(())
}
