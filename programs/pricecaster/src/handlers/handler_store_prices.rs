use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use tracing::{debug, info, warn};

use crate::events::StoreOutcome;
use crate::pyth::{parse_price_updates, verify_proof, PriceUpdateEntry};
use crate::states::{Address, Configuration, GroupContext, PriceSlot, PriceStore, Role};
use crate::utils::consts::{MERKLE_ROOT_SIZE, NATIVE_ASSET_DECIMALS, NATIVE_ASSET_ID};
use crate::utils::math::normalize_price;
use crate::{PricecasterError, PricecasterResult};

/// Source of the decimal count of each asset, used to normalize prices
pub trait AssetDecimals {
    fn decimals(&self, asset_id: u64) -> Option<u8>;
}

impl<S: BuildHasher> AssetDecimals for HashMap<u64, u8, S> {
    fn decimals(&self, asset_id: u64) -> Option<u8> {
        self.get(&asset_id).copied()
    }
}

impl AssetDecimals for BTreeMap<u64, u8> {
    fn decimals(&self, asset_id: u64) -> Option<u8> {
        self.get(&asset_id).copied()
    }
}

impl<T: AssetDecimals + ?Sized> AssetDecimals for &T {
    fn decimals(&self, asset_id: u64) -> Option<u8> {
        (**self).decimals(asset_id)
    }
}

/// Asset and slot a price update of the block is published to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSlot {
    pub asset_id: u64,
    pub slot_index: u64,
}

impl From<(u64, u64)> for AssetSlot {
    fn from((asset_id, slot_index): (u64, u64)) -> Self {
        Self {
            asset_id,
            slot_index,
        }
    }
}

pub struct StorePrices<'a, A: AssetDecimals + ?Sized> {
    pub configuration: &'a Configuration,
    pub price_store: &'a mut PriceStore,
    /// Transactions executed with the store call
    pub group: &'a GroupContext,
    pub assets: &'a A,
}

/// Publish a block of price updates.
///
/// The i-th update of the block goes to `entries[i]`. Every update is checked
/// before anything is written: any failure leaves the store untouched.
/// Updates not newer than the stored price are reported and skipped.
pub fn process<A: AssetDecimals + ?Sized>(
    ctx: StorePrices<'_, A>,
    caller: &Address,
    merkle_root: &[u8],
    entries: &[AssetSlot],
    price_update_block: &[u8],
) -> PricecasterResult<Vec<StoreOutcome>> {
    let StorePrices {
        configuration,
        price_store,
        group,
        assets,
    } = ctx;

    if let Err(e) = configuration.roles_of(caller).require(Role::Operator) {
        warn!(%caller, "Store rejected, caller is not the operator");
        return Err(e);
    }

    let system_slot = price_store.system_slot();
    let flags = system_slot.flags;

    if !flags.test_mode && !group.is_verified_by(configuration) {
        warn!(
            group_size = group.group_size(),
            "Store rejected, not part of an attestation verification group"
        );
        return Err(PricecasterError::GroupRequired);
    }

    let merkle_root: &[u8; MERKLE_ROOT_SIZE] = merkle_root.try_into().map_err(|_| {
        warn!(len = merkle_root.len(), "Store rejected, bad Merkle root length");
        PricecasterError::InvalidRootLength
    })?;

    let updates = parse_price_updates(price_update_block).map_err(|e| {
        warn!(len = price_update_block.len(), "Store rejected, malformed price update block");
        e
    })?;

    if updates.len() != entries.len() {
        warn!(
            updates = updates.len(),
            entries = entries.len(),
            "Store rejected, one asset/slot pair is expected per price update"
        );
        return Err(PricecasterError::CountMismatch);
    }

    let mut staged = *price_store;
    let mut outcomes = Vec::with_capacity(updates.len());

    for (update, entry) in updates.iter().zip(entries) {
        let outcome = apply_update(
            &mut staged,
            system_slot.entry_count(),
            merkle_root,
            !flags.skip_merkle_verification,
            assets,
            update,
            entry,
        )?;
        outcomes.push(outcome);
    }

    *price_store = staged;

    Ok(outcomes)
}

fn apply_update<A: AssetDecimals + ?Sized>(
    staged: &mut PriceStore,
    entry_count: u64,
    merkle_root: &[u8; MERKLE_ROOT_SIZE],
    verify_merkle: bool,
    assets: &A,
    update: &PriceUpdateEntry<'_>,
    entry: &AssetSlot,
) -> PricecasterResult<StoreOutcome> {
    let AssetSlot {
        asset_id,
        slot_index,
    } = *entry;

    let stored = allocated_slot(staged, entry_count, asset_id, slot_index)?;

    if verify_merkle && !verify_proof(merkle_root, update.leaf, &update.merkle_path) {
        warn!(asset_id, slot_index, "Store rejected, Merkle proof failed");
        return Err(PricecasterError::InvalidProof);
    }
    debug!(
        asset_id,
        slot_index,
        feed_id = %hex::encode(update.message.feed_id),
        path_len = update.merkle_path.len(),
        verified = verify_merkle,
        "Price update accepted"
    );

    let message = &update.message;
    let decimals = if asset_id == NATIVE_ASSET_ID {
        NATIVE_ASSET_DECIMALS
    } else {
        assets.decimals(asset_id).ok_or_else(|| {
            warn!(asset_id, "Store rejected, unknown asset decimals");
            PricecasterError::UnknownAsset
        })?
    };

    let normalized_price =
        normalize_price(asset_id, message.price, message.exponent, decimals).map_err(|e| {
            warn!(
                asset_id,
                price = message.price,
                exponent = message.exponent,
                decimals,
                "Store rejected, price cannot be normalized"
            );
            e
        })?;

    if message.publish_time <= stored.publish_time {
        info!(
            asset_id,
            slot_index,
            stored_publish_time = stored.publish_time,
            publish_time = message.publish_time,
            "Price ignored, not newer than the stored one"
        );
        return Ok(StoreOutcome::StaleIgnored { asset_id });
    }

    let slot = PriceSlot {
        asset_id,
        normalized_price,
        price: message.price,
        confidence: message.confidence,
        exponent: message.exponent,
        ema_price: message.ema_price,
        ema_confidence: message.ema_confidence,
        publish_time: message.publish_time,
        prev_publish_time: message.prev_publish_time,
    };
    staged.set_slot(usize::try_from(slot_index)?, &slot)?;

    info!(
        asset_id,
        slot_index,
        "{} -> {} normalized, publish time {} -> {}",
        stored.normalized_price,
        normalized_price,
        stored.publish_time,
        message.publish_time
    );

    if normalized_price == 0 {
        warn!(asset_id, slot_index, price = message.price, "Price normalized to zero");
        Ok(StoreOutcome::NormalizedPriceZero { slot_index, slot })
    } else {
        Ok(StoreOutcome::Stored { slot_index, slot })
    }
}

/// Slot at `slot_index` if it is allocated to `asset_id`
fn allocated_slot(
    store: &PriceStore,
    entry_count: u64,
    asset_id: u64,
    slot_index: u64,
) -> PricecasterResult<PriceSlot> {
    let slot = if slot_index < entry_count {
        usize::try_from(slot_index)
            .ok()
            .and_then(|index| store.get_slot(index))
    } else {
        None
    };

    match slot {
        Some(slot) if slot.asset_id == asset_id => Ok(slot),
        _ => {
            warn!(
                asset_id,
                slot_index,
                entry_count,
                "Store rejected, slot is not allocated for this asset"
            );
            Err(PricecasterError::SlotMismatch)
        }
    }
}
