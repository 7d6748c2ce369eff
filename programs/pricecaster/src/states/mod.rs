pub mod configuration;
pub mod group;
pub mod price_slot;
pub mod price_store;
pub mod system_slot;

pub use configuration::{Address, Configuration, Role, RoleSet};
pub use group::{GroupContext, GroupTxn};
pub use price_slot::PriceSlot;
pub use price_store::PriceStore;
pub use system_slot::{SystemFlags, SystemSlot};
