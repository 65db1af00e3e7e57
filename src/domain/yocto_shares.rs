use crate::errors::StakingError;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// pool share amount
///
/// Shares are only meaningful within the pool that issued them.
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct YoctoShares(pub u128);

impl From<u128> for YoctoShares {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl YoctoShares {
    pub const ZERO: YoctoShares = YoctoShares(0);

    pub fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// ## Errors
    /// [StakingError::ArithmeticOverflow]
    pub fn checked_add(self, other: YoctoShares) -> Result<YoctoShares, StakingError> {
        self.0
            .checked_add(other.0)
            .map(YoctoShares)
            .ok_or(StakingError::ArithmeticOverflow)
    }

    /// ## Errors
    /// [StakingError::InsufficientShares] if `other` is greater
    pub fn checked_sub(self, other: YoctoShares) -> Result<YoctoShares, StakingError> {
        self.0
            .checked_sub(other.0)
            .map(YoctoShares)
            .ok_or(StakingError::InsufficientShares)
    }
}

impl From<YoctoShares> for u128 {
    fn from(value: YoctoShares) -> Self {
        value.0
    }
}
