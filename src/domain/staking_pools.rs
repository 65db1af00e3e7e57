use crate::domain::{
    BlockTimestamp, CostBasis, FeeConfig, LockRecord, LockSchedule, PoolVariant, ShareValue,
    StakingPool, Withdrawal, YoctoNear, YoctoShares,
};
use crate::errors::StakingError;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// locked pool shares can only be withdrawn once the holder's lock has expired
#[derive(BorshSerialize, BorshDeserialize)]
pub struct LockedStakingPool {
    pool: StakingPool,
    locks: LockSchedule,
}

impl LockedStakingPool {
    fn new() -> Self {
        Self {
            pool: StakingPool::new(PoolVariant::Locked),
            locks: LockSchedule::default(),
        }
    }

    pub fn pool(&self) -> &StakingPool {
        &self.pool
    }

    pub fn locks(&self) -> &LockSchedule {
        &self.locks
    }
}

/// Owns the flexible and locked pools along with the fee config that applies to both.
///
/// Shares issued by one pool are never valid in the other.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct StakingPools {
    fee_config: FeeConfig,
    flexible: StakingPool,
    locked: LockedStakingPool,
}

impl StakingPools {
    pub fn new(fee_config: FeeConfig) -> Self {
        Self {
            fee_config,
            flexible: StakingPool::new(PoolVariant::Flexible),
            locked: LockedStakingPool::new(),
        }
    }

    pub fn fee_config(&self) -> FeeConfig {
        self.fee_config
    }

    pub fn pool(&self, variant: PoolVariant) -> &StakingPool {
        match variant {
            PoolVariant::Flexible => &self.flexible,
            PoolVariant::Locked => &self.locked.pool,
        }
    }

    fn pool_mut(&mut self, variant: PoolVariant) -> &mut StakingPool {
        match variant {
            PoolVariant::Flexible => &mut self.flexible,
            PoolVariant::Locked => &mut self.locked.pool,
        }
    }

    pub fn share_balance(&self, variant: PoolVariant, holder: &str) -> YoctoShares {
        self.pool(variant).share_balance(holder)
    }

    pub fn total_shares(&self, variant: PoolVariant) -> YoctoShares {
        self.pool(variant).total_shares()
    }

    pub fn total_balance(&self, variant: PoolVariant) -> YoctoNear {
        self.pool(variant).total_balance()
    }

    pub fn retained_fees(&self, variant: PoolVariant) -> YoctoNear {
        self.pool(variant).retained_fees()
    }

    pub fn cost_basis(&self, variant: PoolVariant, holder: &str) -> CostBasis {
        self.pool(variant).cost_basis(holder)
    }

    pub fn share_value(&self, variant: PoolVariant) -> ShareValue {
        self.pool(variant).share_value()
    }

    pub fn lock_info(&self, holder: &str) -> Option<LockRecord> {
        self.locked.locks.lock_record(holder)
    }

    /// Deposits `amount` into the specified pool and returns the shares minted.
    ///
    /// Depositing into the locked pool re-locks the holder's entire locked position until
    /// `now + lock_duration_seconds`.
    ///
    /// ## Errors
    /// - [StakingError::InvalidAmount] if amount is zero or too small to mint a share
    /// - [StakingError::ArithmeticOverflow]
    pub fn deposit(
        &mut self,
        variant: PoolVariant,
        holder: &str,
        amount: YoctoNear,
        now: BlockTimestamp,
    ) -> Result<YoctoShares, StakingError> {
        match variant {
            PoolVariant::Flexible => self.flexible.deposit(holder, amount),
            PoolVariant::Locked => {
                let locked = &mut self.locked;
                let shares = locked.pool.preview_deposit(amount)?;
                let lock_record = locked.locks.prepare_lock(
                    holder,
                    shares,
                    now,
                    self.fee_config.lock_duration_seconds(),
                )?;
                let shares = locked.pool.deposit(holder, amount)?;
                locked.locks.insert(holder, lock_record);
                Ok(shares)
            }
        }
    }

    pub fn deposit_flexible(
        &mut self,
        holder: &str,
        amount: YoctoNear,
    ) -> Result<YoctoShares, StakingError> {
        self.flexible.deposit(holder, amount)
    }

    pub fn deposit_locked(
        &mut self,
        holder: &str,
        amount: YoctoNear,
        now: BlockTimestamp,
    ) -> Result<YoctoShares, StakingError> {
        self.deposit(PoolVariant::Locked, holder, amount, now)
    }

    /// Computes the withdrawal without applying it. The lock is not checked.
    ///
    /// ## Errors
    /// see [StakingPool::preview_withdrawal]
    pub fn preview_withdrawal(
        &self,
        variant: PoolVariant,
        holder: &str,
        shares: YoctoShares,
    ) -> Result<Withdrawal, StakingError> {
        self.pool(variant)
            .preview_withdrawal(holder, shares, self.fee_config.fee_percent())
    }

    /// Redeems `shares` from the specified pool.
    ///
    /// The caller is responsible for transferring [Withdrawal::net_payout] to the holder.
    ///
    /// ## Errors
    /// - [StakingError::InvalidAmount] if shares is zero
    /// - [StakingError::InsufficientShares] if the holder owns fewer shares in the pool
    /// - [StakingError::PoolLocked] if withdrawing from the locked pool before the unlock time
    /// - [StakingError::ArithmeticOverflow]
    pub fn withdraw(
        &mut self,
        variant: PoolVariant,
        holder: &str,
        shares: YoctoShares,
        now: BlockTimestamp,
    ) -> Result<Withdrawal, StakingError> {
        let fee_percent = self.fee_config.fee_percent();
        match variant {
            PoolVariant::Flexible => self.flexible.withdraw(holder, shares, fee_percent),
            PoolVariant::Locked => {
                let locked = &mut self.locked;
                locked.pool.preview_withdrawal(holder, shares, fee_percent)?;
                locked.locks.check_unlocked(holder, shares, now)?;
                let withdrawal = locked.pool.withdraw(holder, shares, fee_percent)?;
                locked.locks.release(holder, shares, now)?;
                Ok(withdrawal)
            }
        }
    }

    pub fn withdraw_flexible(
        &mut self,
        holder: &str,
        shares: YoctoShares,
    ) -> Result<Withdrawal, StakingError> {
        let fee_percent = self.fee_config.fee_percent();
        self.flexible.withdraw(holder, shares, fee_percent)
    }

    pub fn withdraw_locked(
        &mut self,
        holder: &str,
        shares: YoctoShares,
        now: BlockTimestamp,
    ) -> Result<Withdrawal, StakingError> {
        self.withdraw(PoolVariant::Locked, holder, shares, now)
    }

    /// ## Errors
    /// - [StakingError::InvalidAmount] if amount is zero
    /// - [StakingError::ArithmeticOverflow]
    pub fn credit_yield(
        &mut self,
        variant: PoolVariant,
        amount: YoctoNear,
    ) -> Result<(), StakingError> {
        self.pool_mut(variant).credit_yield(amount)
    }

    /// ## Errors
    /// [StakingError::ArithmeticOverflow]
    pub fn reinvest_fees(&mut self, variant: PoolVariant) -> Result<YoctoNear, StakingError> {
        self.pool_mut(variant).reinvest_fees()
    }
}
