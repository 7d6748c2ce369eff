#![allow(dead_code)]

use std::collections::HashMap;

use pricecaster::{
    Address, AssetSlot, Configuration, GroupContext, GroupTxn, Pricecaster, PricecasterResult,
    StoreOutcome, SystemFlags,
};
use tracing_subscriber::EnvFilter;

pub const VERIFIER_APP_ID: u64 = 86525623;
pub const PRICECASTER_APP_ID: u64 = 100_000_001;

pub struct PricecasterTestContext {
    pub configuration: Configuration,
    pub pricecaster: Pricecaster,
    /// Decimals of every asset known to the host ledger
    pub assets: HashMap<u64, u8>,
}

impl PricecasterTestContext {
    pub fn new(flags: SystemFlags) -> Self {
        init_logs();

        let configuration = Configuration {
            admin: Address::new([0xad; 32]),
            operator: Address::new([0x0b; 32]),
            quant: Address::new([0x9a; 32]),
            verifier_app_id: VERIFIER_APP_ID,
            app_id: PRICECASTER_APP_ID,
        };

        PricecasterTestContext {
            configuration,
            pricecaster: Pricecaster::initialize(configuration, flags),
            assets: HashMap::new(),
        }
    }

    pub fn admin(&self) -> Address {
        self.configuration.admin
    }

    pub fn operator(&self) -> Address {
        self.configuration.operator
    }

    pub fn quant(&self) -> Address {
        self.configuration.quant
    }

    /// Group of a store call submitted right after the attestation verification
    pub fn verification_group(&self) -> GroupContext {
        GroupContext::new(vec![
            GroupTxn::Payment {
                sender: self.operator(),
            },
            GroupTxn::AppCall {
                app_id: VERIFIER_APP_ID,
            },
            GroupTxn::AppCall {
                app_id: VERIFIER_APP_ID,
            },
        ])
    }

    pub fn create_asset(&mut self, asset_id: u64, decimals: u8) {
        self.assets.insert(asset_id, decimals);
    }

    /// Register and allocate a slot for every `(asset_id, decimals)`, returns the slots
    pub fn setup_assets(&mut self, assets: &[(u64, u8)]) -> Vec<AssetSlot> {
        assets
            .iter()
            .map(|&(asset_id, decimals)| {
                self.create_asset(asset_id, decimals);
                AssetSlot {
                    asset_id,
                    slot_index: self.alloc(asset_id),
                }
            })
            .collect()
    }

    pub fn alloc(&mut self, asset_id: u64) -> u64 {
        let quant = self.quant();
        self.pricecaster.allocate(&quant, asset_id).unwrap().slot_index
    }

    /// Store as the operator, in a verification group
    pub fn store(
        &mut self,
        merkle_root: &[u8],
        entries: &[AssetSlot],
        block: &[u8],
    ) -> PricecasterResult<Vec<StoreOutcome>> {
        let operator = self.operator();
        let group = self.verification_group();
        self.store_as(&operator, &group, merkle_root, entries, block)
    }

    pub fn store_as(
        &mut self,
        caller: &Address,
        group: &GroupContext,
        merkle_root: &[u8],
        entries: &[AssetSlot],
        block: &[u8],
    ) -> PricecasterResult<Vec<StoreOutcome>> {
        self.pricecaster
            .store(caller, merkle_root, entries, block, group, &self.assets)
    }

    pub fn snapshot(&self) -> Vec<u8> {
        self.pricecaster.as_bytes().to_vec()
    }
}

fn init_logs() {
    // Several tests share the process, only the first install succeeds
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
