use crate::domain::{BlockTimestamp, YoctoShares};
use crate::errors::StakingError;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// locked pool position for a single holder
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct LockRecord {
    locked_shares: YoctoShares,
    /// when the most recent deposit was made
    deposit_timestamp: BlockTimestamp,
    unlock_timestamp: BlockTimestamp,
}

impl LockRecord {
    /// ## Errors
    /// [StakingError::ArithmeticOverflow] if the unlock timestamp overflows
    pub fn new(
        locked_shares: YoctoShares,
        now: BlockTimestamp,
        lock_duration_seconds: u64,
    ) -> Result<Self, StakingError> {
        Ok(Self {
            locked_shares,
            deposit_timestamp: now,
            unlock_timestamp: now.checked_add_seconds(lock_duration_seconds)?,
        })
    }

    pub fn locked_shares(&self) -> YoctoShares {
        self.locked_shares
    }

    pub fn deposit_timestamp(&self) -> BlockTimestamp {
        self.deposit_timestamp
    }

    pub fn unlock_timestamp(&self) -> BlockTimestamp {
        self.unlock_timestamp
    }

    pub fn is_unlocked(&self, now: BlockTimestamp) -> bool {
        now >= self.unlock_timestamp
    }

    /// Adds newly minted shares to the position and re-locks the combined amount.
    ///
    /// ## Errors
    /// [StakingError::ArithmeticOverflow]
    pub fn relock(
        &self,
        shares: YoctoShares,
        now: BlockTimestamp,
        lock_duration_seconds: u64,
    ) -> Result<Self, StakingError> {
        LockRecord::new(
            self.locked_shares.checked_add(shares)?,
            now,
            lock_duration_seconds,
        )
    }

    /// ## Errors
    /// [StakingError::InsufficientShares]
    pub fn release(&self, shares: YoctoShares) -> Result<Self, StakingError> {
        Ok(Self {
            locked_shares: self.locked_shares.checked_sub(shares)?,
            ..*self
        })
    }
}
