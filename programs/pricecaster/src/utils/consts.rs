/// Size of one price slot record
pub const SLOT_SIZE: usize = 92;

/// Global state available on the host ledger: 63 key/value pairs of 127 bytes
pub const GLOBAL_STATE_SIZE: usize = 127 * 63;

pub const TOTAL_SLOTS: usize = GLOBAL_STATE_SIZE / SLOT_SIZE;
pub const SYSTEM_SLOT_INDEX: usize = TOTAL_SLOTS - 1;
/// Number of slots that can be allocated to assets
pub const MAX_PRICE_SLOTS: usize = SYSTEM_SLOT_INDEX;
pub const PRICE_STORE_PADDING: usize = GLOBAL_STATE_SIZE - TOTAL_SLOTS * SLOT_SIZE;

pub const MERKLE_ROOT_SIZE: usize = 32;
pub const MERKLE_HASH_SIZE: usize = 20;

/// Size of a serialized price feed message, type marker included
pub const PRICE_FEED_MESSAGE_SIZE: usize = 85;

/// Normalized prices are expressed in pico-dollars
pub const NORMALIZED_PRICE_DECIMALS: u32 = 12;

pub const NATIVE_ASSET_ID: u64 = 0;
pub const NATIVE_ASSET_DECIMALS: u8 = 6;

pub const FLAG_TEST_MODE: u8 = 0b1000_0000;
pub const FLAG_SKIP_MERKLE_VERIFICATION: u8 = 0b0100_0000;
pub const FLAGS_RESERVED_MASK: u8 = !(FLAG_TEST_MODE | FLAG_SKIP_MERKLE_VERIFICATION);

static_assertions::const_assert_eq!(TOTAL_SLOTS, 86);
static_assertions::const_assert_eq!(MAX_PRICE_SLOTS, 85);
static_assertions::const_assert_eq!(PRICE_STORE_PADDING, 89);
static_assertions::const_assert!(MAX_PRICE_SLOTS <= u8::MAX as usize);
