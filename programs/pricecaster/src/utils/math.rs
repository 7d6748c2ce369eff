use crate::utils::consts::{NATIVE_ASSET_DECIMALS, NATIVE_ASSET_ID, NORMALIZED_PRICE_DECIMALS};
use crate::{PricecasterError, PricecasterResult};

/// `10^exponent`, or `None` when it does not fit in a `u128`
pub fn ten_pow(exponent: u64) -> Option<u128> {
    u32::try_from(exponent)
        .ok()
        .and_then(|exponent| 10_u128.checked_pow(exponent))
}

/// Decimal count used to normalize prices of `asset_id`.
///
/// The native asset has no metadata to look up, its decimals are known.
pub fn effective_decimals(asset_id: u64, decimals: u8) -> u8 {
    if asset_id == NATIVE_ASSET_ID {
        NATIVE_ASSET_DECIMALS
    } else {
        decimals
    }
}

/// Convert a raw attested price to pico-dollars per base unit of the asset:
///
/// `normalized = floor(price * 10^(12 + exponent - decimals))`
///
/// The product is computed in `u128`; anything that does not fit back in a `u64`
/// (negative prices included) is an [`PricecasterError::ArithmeticOverflow`].
/// A result of zero is valid.
pub fn normalize_price(
    asset_id: u64,
    price: i64,
    exponent: i32,
    decimals: u8,
) -> PricecasterResult<u64> {
    let decimals = effective_decimals(asset_id, decimals);
    let price = u64::try_from(price).map_err(|_| PricecasterError::ArithmeticOverflow)?;
    let value = u128::from(price);

    let scale =
        i64::from(NORMALIZED_PRICE_DECIMALS) + i64::from(exponent) - i64::from(decimals);

    let normalized = if value == 0 {
        0
    } else if scale >= 0 {
        ten_pow(scale.unsigned_abs())
            .and_then(|factor| value.checked_mul(factor))
            .ok_or(PricecasterError::ArithmeticOverflow)?
    } else {
        // A divisor beyond u128 floors every u64 price to zero
        match ten_pow(scale.unsigned_abs()) {
            Some(divisor) => value / divisor,
            None => 0,
        }
    };

    u64::try_from(normalized).map_err(|_| PricecasterError::ArithmeticOverflow)
}
