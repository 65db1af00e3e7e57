use crate::domain::PoolVariant;
use crate::interface::{FeeConfig, YoctoNear};
use near_sdk::AccountId;

pub trait ContractOwner {
    fn owner_id(&self) -> AccountId;

    /// fee config is set when the contract is deployed and cannot be changed
    fn fee_config(&self) -> FeeConfig;

    /// Credits the attached deposit to the pool balance as yield, which raises the value of every
    /// outstanding share in the pool. No shares are minted.
    ///
    /// ## Panics
    /// - if the predecessor account is not the owner account
    /// - if no deposit is attached
    ///
    /// #[payable]
    fn credit_yield(&mut self, pool: PoolVariant);

    /// Credits the fees the pool retained from withdrawals back to the pool balance, i.e., the
    /// fees are distributed to the remaining share holders.
    ///
    /// Returns the amount that was reinvested.
    ///
    /// ## Panics
    /// - if the predecessor account is not the owner account
    fn reinvest_fees(&mut self, pool: PoolVariant) -> YoctoNear;
}

pub mod events {
    use crate::domain::PoolVariant;

    #[derive(Debug)]
    pub struct YieldCredited {
        pub pool: PoolVariant,
        pub amount: u128,
        pub total_balance: u128,
    }

    #[derive(Debug)]
    pub struct FeesReinvested {
        pub pool: PoolVariant,
        pub amount: u128,
        pub total_balance: u128,
    }
}
