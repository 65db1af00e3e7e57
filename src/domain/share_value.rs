use crate::core::mul_div;
use crate::domain::{YoctoNear, YoctoShares};
use crate::errors::StakingError;
use crate::near::YOCTO;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// Pool share value at a point in time.
///
/// share value = [total_balance] / [total_shares]
///
/// While no shares are outstanding, shares and NEAR convert 1:1.
#[derive(BorshSerialize, BorshDeserialize, Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ShareValue {
    total_balance: YoctoNear,
    total_shares: YoctoShares,
}

impl ShareValue {
    pub fn new(total_balance: YoctoNear, total_shares: YoctoShares) -> Self {
        Self {
            total_balance,
            total_shares,
        }
    }

    pub fn total_balance(&self) -> YoctoNear {
        self.total_balance
    }

    pub fn total_shares(&self) -> YoctoShares {
        self.total_shares
    }

    /// converts NEAR to shares rounded down
    ///
    /// ## Errors
    /// - [StakingError::DivideByZero] if shares are outstanding against a zero balance
    /// - [StakingError::ArithmeticOverflow]
    pub fn near_to_shares(&self, near: YoctoNear) -> Result<YoctoShares, StakingError> {
        if self.total_shares.is_zero() {
            return Ok(near.value().into());
        }
        mul_div(
            near.value(),
            self.total_shares.value(),
            self.total_balance.value(),
        )
        .map(YoctoShares)
    }

    /// converts shares to NEAR rounded down
    ///
    /// ## Errors
    /// [StakingError::ArithmeticOverflow]
    pub fn shares_to_near(&self, shares: YoctoShares) -> Result<YoctoNear, StakingError> {
        if self.total_shares.is_zero() {
            return Ok(shares.value().into());
        }
        mul_div(
            shares.value(),
            self.total_balance.value(),
            self.total_shares.value(),
        )
        .map(YoctoNear)
    }

    /// returns the value of 1 share, i.e., 10^24 share units
    pub fn value(&self) -> Result<YoctoNear, StakingError> {
        self.shares_to_near(YoctoShares(YOCTO))
    }
}
