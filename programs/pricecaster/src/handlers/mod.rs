pub mod handler_alloc_slot;
pub mod handler_initialize;
pub mod handler_reset;
pub mod handler_set_flags;
pub mod handler_store_prices;

pub use handler_alloc_slot::AllocSlot;
pub use handler_reset::Reset;
pub use handler_set_flags::SetFlags;
pub use handler_store_prices::{AssetDecimals, AssetSlot, StorePrices};
