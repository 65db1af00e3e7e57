use crate::errors::StakingError;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// base asset amount
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct YoctoNear(pub u128);

impl From<u128> for YoctoNear {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl YoctoNear {
    pub const ZERO: YoctoNear = YoctoNear(0);

    pub fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// ## Errors
    /// [StakingError::ArithmeticOverflow]
    pub fn checked_add(self, other: YoctoNear) -> Result<YoctoNear, StakingError> {
        self.0
            .checked_add(other.0)
            .map(YoctoNear)
            .ok_or(StakingError::ArithmeticOverflow)
    }

    /// returns zero if `other` is greater
    pub fn saturating_sub(self, other: YoctoNear) -> YoctoNear {
        YoctoNear(self.0.saturating_sub(other.0))
    }
}

impl From<YoctoNear> for u128 {
    fn from(value: YoctoNear) -> Self {
        value.0
    }
}
