use crate::domain::PoolVariant;
use crate::interface::{
    LockInfo, PoolBalances, ShareValue, StakeInfo, WithdrawalReceipt, YoctoNear, YoctoShares,
};
use near_sdk::AccountId;

pub trait StakingService {
    ///////////////////////////
    //     VIEW METHODS    ///
    // //////////////////////

    fn share_balance_of(&self, pool: PoolVariant, account_id: AccountId) -> YoctoShares;

    fn total_shares(&self, pool: PoolVariant) -> YoctoShares;

    /// returns the amount of NEAR attributed to the pool's share holders
    fn total_balance(&self, pool: PoolVariant) -> YoctoNear;

    fn pool_balances(&self, pool: PoolVariant) -> PoolBalances;

    fn share_value(&self, pool: PoolVariant) -> ShareValue;

    /// returns the account's locked pool position, or None if the account has no locked shares
    fn lock_info(&self, account_id: AccountId) -> Option<LockInfo>;

    /// returns the account's shares along with the NEAR principal deposited for them
    fn stake_info(&self, pool: PoolVariant, account_id: AccountId) -> StakeInfo;

    /// Computes what redeeming the specified shares would pay out at the current share value.
    ///
    /// NOTE: the lock is not checked
    ///
    /// ## Panics
    /// - if shares is zero
    /// - if the account does not own enough shares
    fn preview_withdrawal(
        &self,
        pool: PoolVariant,
        account_id: AccountId,
        shares: YoctoShares,
    ) -> WithdrawalReceipt;

    /////////////////////////////
    //     CHANGE METHODS    ///
    // ////////////////////////

    /// Deposits the attached NEAR into the flexible pool and returns the shares minted.
    ///
    /// The first deposit into an empty pool mints shares 1:1.
    ///
    /// ## Panics
    /// - if no deposit is attached
    /// - if the deposit is too small to mint a share at the current share value
    ///
    /// #[payable]
    fn deposit_flexible(&mut self) -> YoctoShares;

    /// Deposits the attached NEAR into the locked pool and returns the shares minted.
    ///
    /// Every deposit re-locks the account's entire locked position for the configured lock
    /// duration, starting from the current block timestamp.
    ///
    /// ## Panics
    /// - if no deposit is attached
    /// - if the deposit is too small to mint a share at the current share value
    ///
    /// #[payable]
    fn deposit_locked(&mut self) -> YoctoShares;

    /// Redeems flexible pool shares. The net payout is transferred to the predecessor account and
    /// the fee is retained by the pool.
    ///
    /// ## Panics
    /// - if shares is zero
    /// - if the account does not own enough shares
    fn withdraw_flexible(&mut self, shares: YoctoShares) -> WithdrawalReceipt;

    /// Redeems locked pool shares - see [withdraw_flexible](StakingService::withdraw_flexible)
    ///
    /// ## Panics
    /// - if shares is zero
    /// - if the account does not own enough shares
    /// - if the account's lock has not yet expired
    fn withdraw_locked(&mut self, shares: YoctoShares) -> WithdrawalReceipt;
}

pub mod events {
    use crate::domain::PoolVariant;

    #[derive(Debug)]
    pub struct Deposit<'a> {
        pub account_id: &'a str,
        pub pool: PoolVariant,
        pub amount: u128,
        pub shares: u128,
    }

    #[derive(Debug)]
    pub struct Withdrawal<'a> {
        pub account_id: &'a str,
        pub pool: PoolVariant,
        pub shares: u128,
        pub gross: u128,
        pub reward: u128,
        pub fee: u128,
        pub net_payout: u128,
    }

    /// redeemed shares were worth less than the principal paid for them - the reward is zero
    #[derive(Debug)]
    pub struct RewardShortfall<'a> {
        pub account_id: &'a str,
        pub pool: PoolVariant,
        pub gross: u128,
        pub principal: u128,
    }
}
