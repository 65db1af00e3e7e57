use crate::errors::StakingError;
use crate::near::NANOS_PER_SECOND;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// block timestamp in nanoseconds, as reported by `env::block_timestamp()`
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Default,
)]
#[serde(crate = "near_sdk::serde")]
pub struct BlockTimestamp(pub u64);

impl From<u64> for BlockTimestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl BlockTimestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn from_seconds(seconds: u64) -> Result<Self, StakingError> {
        seconds
            .checked_mul(NANOS_PER_SECOND)
            .map(BlockTimestamp)
            .ok_or(StakingError::ArithmeticOverflow)
    }

    /// ## Errors
    /// [StakingError::ArithmeticOverflow]
    pub fn checked_add_seconds(self, seconds: u64) -> Result<Self, StakingError> {
        let nanos = Self::from_seconds(seconds)?.0;
        self.0
            .checked_add(nanos)
            .map(BlockTimestamp)
            .ok_or(StakingError::ArithmeticOverflow)
    }
}

impl From<BlockTimestamp> for u64 {
    fn from(value: BlockTimestamp) -> Self {
        value.0
    }
}
