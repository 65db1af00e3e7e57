use crate::core::mul_div;
use crate::domain::{YoctoNear, YoctoShares};
use crate::errors::StakingError;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// Tracks how much NEAR a holder contributed for the shares currently held.
///
/// The pair is cumulative over all deposits and is reduced pro rata on withdrawal. Redeeming the
/// entire position releases the entire principal, which means no drift accumulates across partial
/// withdrawals.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct CostBasis {
    shares: YoctoShares,
    principal: YoctoNear,
}

impl CostBasis {
    pub fn shares(&self) -> YoctoShares {
        self.shares
    }

    pub fn principal(&self) -> YoctoNear {
        self.principal
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_zero()
    }

    /// ## Errors
    /// [StakingError::ArithmeticOverflow]
    pub fn credit(
        &self,
        shares: YoctoShares,
        principal: YoctoNear,
    ) -> Result<CostBasis, StakingError> {
        Ok(Self {
            shares: self.shares.checked_add(shares)?,
            principal: self.principal.checked_add(principal)?,
        })
    }

    /// principal attributed to the specified shares rounded down
    ///
    /// ## Errors
    /// - [StakingError::InsufficientShares] if more shares are specified than are tracked
    /// - [StakingError::DivideByZero] if no shares are tracked
    pub fn principal_for(&self, shares: YoctoShares) -> Result<YoctoNear, StakingError> {
        if shares > self.shares {
            return Err(StakingError::InsufficientShares);
        }
        if shares == self.shares {
            return Ok(self.principal);
        }
        mul_div(
            shares.value(),
            self.principal.value(),
            self.shares.value(),
        )
        .map(YoctoNear)
    }

    /// ## Errors
    /// [StakingError::InsufficientShares]
    pub fn debit(
        &self,
        shares: YoctoShares,
        principal: YoctoNear,
    ) -> Result<CostBasis, StakingError> {
        if principal > self.principal {
            return Err(StakingError::InsufficientShares);
        }
        Ok(Self {
            shares: self.shares.checked_sub(shares)?,
            principal: self.principal.saturating_sub(principal),
        })
    }
}
