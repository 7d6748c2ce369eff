//! Pricecaster price slot store.
//!
//! A fixed-capacity table of price slots fed with Pyth accumulator updates.
//! Each update is checked against the Merkle root of a verified attestation,
//! normalized to pico-dollars and kept only if newer than the stored one.
//! The whole table persists as a single 8001 bytes blob.
pub mod errors;
pub mod events;
pub mod pyth;
pub mod states;
pub mod utils;

mod handlers;

use std::sync::Arc;

use handlers::*;
use parking_lot::{Mutex, MutexGuard};

pub use crate::{
    errors::*,
    events::{AllocEvent, StoreOutcome},
    handlers::{AssetDecimals, AssetSlot},
    states::{
        Address, Configuration, GroupContext, GroupTxn, PriceSlot, PriceStore, Role, RoleSet,
        SystemFlags, SystemSlot,
    },
};

/// The store engine: configuration and price slots.
///
/// Every operation is all-or-nothing: on error the store is left untouched.
#[derive(Debug, Clone)]
pub struct Pricecaster {
    configuration: Configuration,
    price_store: PriceStore,
}

impl Pricecaster {
    pub fn initialize(configuration: Configuration, flags: SystemFlags) -> Self {
        let price_store = handler_initialize::process(&configuration, flags);
        Self {
            configuration,
            price_store,
        }
    }

    /// Reload a store persisted with [`Pricecaster::as_bytes`]
    pub fn from_bytes(configuration: Configuration, data: &[u8]) -> PricecasterResult<Self> {
        Ok(Self {
            configuration,
            price_store: PriceStore::from_bytes(data)?,
        })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn allocate(&mut self, caller: &Address, asset_id: u64) -> PricecasterResult<AllocEvent> {
        handler_alloc_slot::process(
            AllocSlot {
                configuration: &self.configuration,
                price_store: &mut self.price_store,
            },
            caller,
            asset_id,
        )
    }

    /// Publish the price updates of `price_update_block`, the i-th one to `entries[i]`.
    ///
    /// `merkle_root` is the 32 bytes root taken from the verified attestation, `group`
    /// describes the transactions executed with this call.
    pub fn store<A: AssetDecimals + ?Sized>(
        &mut self,
        caller: &Address,
        merkle_root: &[u8],
        entries: &[AssetSlot],
        price_update_block: &[u8],
        group: &GroupContext,
        assets: &A,
    ) -> PricecasterResult<Vec<StoreOutcome>> {
        handler_store_prices::process(
            StorePrices {
                configuration: &self.configuration,
                price_store: &mut self.price_store,
                group,
                assets,
            },
            caller,
            merkle_root,
            entries,
            price_update_block,
        )
    }

    pub fn set_flags(&mut self, caller: &Address, flags: u8) -> PricecasterResult {
        handler_set_flags::process(
            SetFlags {
                configuration: &self.configuration,
                price_store: &mut self.price_store,
            },
            caller,
            flags,
        )
    }

    pub fn reset(&mut self, caller: &Address) -> PricecasterResult {
        handler_reset::process(
            Reset {
                configuration: &self.configuration,
                price_store: &mut self.price_store,
            },
            caller,
        )
    }

    /// Price slot at `index`, the system slot is not readable here
    pub fn read_slot(&self, index: u64) -> PricecasterResult<PriceSlot> {
        let index = usize::try_from(index).map_err(|_| PricecasterError::BadSlotIndex)?;
        self.price_store
            .get_slot(index)
            .ok_or(PricecasterError::BadSlotIndex)
    }

    pub fn read_system_slot(&self) -> SystemSlot {
        self.price_store.system_slot()
    }

    pub fn price_store(&self) -> &PriceStore {
        &self.price_store
    }

    /// Persisted representation of the store
    pub fn as_bytes(&self) -> &[u8] {
        self.price_store.as_bytes()
    }
}

/// [`Pricecaster`] behind one exclusive lock, for hosts calling from several threads.
///
/// Each call holds the lock until it completes.
#[derive(Debug, Clone)]
pub struct SharedPricecaster(Arc<Mutex<Pricecaster>>);

impl SharedPricecaster {
    pub fn new(pricecaster: Pricecaster) -> Self {
        Self(Arc::new(Mutex::new(pricecaster)))
    }

    pub fn lock(&self) -> MutexGuard<'_, Pricecaster> {
        self.0.lock()
    }

    pub fn allocate(&self, caller: &Address, asset_id: u64) -> PricecasterResult<AllocEvent> {
        self.lock().allocate(caller, asset_id)
    }

    pub fn store<A: AssetDecimals + ?Sized>(
        &self,
        caller: &Address,
        merkle_root: &[u8],
        entries: &[AssetSlot],
        price_update_block: &[u8],
        group: &GroupContext,
        assets: &A,
    ) -> PricecasterResult<Vec<StoreOutcome>> {
        self.lock()
            .store(caller, merkle_root, entries, price_update_block, group, assets)
    }

    pub fn set_flags(&self, caller: &Address, flags: u8) -> PricecasterResult {
        self.lock().set_flags(caller, flags)
    }

    pub fn reset(&self, caller: &Address) -> PricecasterResult {
        self.lock().reset(caller)
    }

    pub fn read_slot(&self, index: u64) -> PricecasterResult<PriceSlot> {
        self.lock().read_slot(index)
    }

    pub fn read_system_slot(&self) -> SystemSlot {
        self.lock().read_system_slot()
    }

    /// Copy of the persisted representation
    pub fn to_bytes(&self) -> Vec<u8> {
        self.lock().as_bytes().to_vec()
    }
}
