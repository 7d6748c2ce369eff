use std::num::TryFromIntError;

use num_enum::{IntoPrimitive, TryFromPrimitive, TryFromPrimitiveError};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum PricecasterError {
    #[error("Caller does not hold the role required by this operation")]
    Unauthorized = 6000,

    #[error("Store must be part of a group with an attestation verification call")]
    GroupRequired,

    #[error("Merkle root must be 32 bytes")]
    InvalidRootLength,

    #[error("Number of price updates is different from the number of asset/slot pairs")]
    CountMismatch,

    #[error("Slot is not allocated for this asset")]
    SlotMismatch,

    #[error("Merkle proof failed")]
    InvalidProof,

    #[error("Asset decimals could not be resolved")]
    UnknownAsset,

    #[error("Mathematical operation with overflow")]
    ArithmeticOverflow,

    #[error("Global state full, no slot left to allocate")]
    CapacityExceeded,

    #[error("Price update block is malformed")]
    MalformedPriceUpdate,

    #[error("The slot index received is out of range")]
    BadSlotIndex,

    #[error("Storage blob has an unexpected size")]
    InvalidStorageSize,

    #[error("Out of range integral conversion attempted")]
    OutOfRangeIntegralConversion,
}

impl<T> From<TryFromPrimitiveError<T>> for PricecasterError
where
    T: TryFromPrimitive,
{
    fn from(_: TryFromPrimitiveError<T>) -> Self {
        PricecasterError::MalformedPriceUpdate
    }
}

impl From<TryFromIntError> for PricecasterError {
    fn from(_: TryFromIntError) -> Self {
        PricecasterError::OutOfRangeIntegralConversion
    }
}

pub type PricecasterResult<T = ()> = std::result::Result<T, PricecasterError>;
