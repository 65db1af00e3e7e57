use crate::domain::YoctoShares;
use crate::errors::StakingError;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::UnorderedMap,
    AccountId,
};

/// Tracks the share supply of a single pool and each holder's share balance.
///
/// Holders with a zero balance are not stored.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct ShareLedger {
    total_supply: YoctoShares,
    balances: UnorderedMap<AccountId, YoctoShares>,
}

impl ShareLedger {
    /// `key_prefix` must be unique - see [storage_keys](crate::near::storage_keys)
    pub fn new(key_prefix: Vec<u8>) -> Self {
        Self {
            total_supply: YoctoShares::ZERO,
            balances: UnorderedMap::new(key_prefix),
        }
    }

    pub fn total_supply(&self) -> YoctoShares {
        self.total_supply
    }

    pub fn balance_of(&self, holder: &str) -> YoctoShares {
        self.balances.get(&holder.to_string()).unwrap_or_default()
    }

    pub fn holder_count(&self) -> u64 {
        self.balances.len()
    }

    pub fn holders(&self) -> impl Iterator<Item = (AccountId, YoctoShares)> + '_ {
        self.balances.iter()
    }

    /// ## Errors
    /// [StakingError::ArithmeticOverflow] if the share supply would overflow
    pub fn mint(&mut self, holder: &str, amount: YoctoShares) -> Result<(), StakingError> {
        let total_supply = self.total_supply.checked_add(amount)?;
        // holder balance <= total supply, thus cannot overflow
        let balance = self.balance_of(holder).checked_add(amount)?;
        if amount.is_zero() {
            return Ok(());
        }
        self.total_supply = total_supply;
        self.balances.insert(&holder.to_string(), &balance);
        Ok(())
    }

    /// ## Errors
    /// [StakingError::InsufficientShares] if the holder balance is less than `amount`
    pub fn burn(&mut self, holder: &str, amount: YoctoShares) -> Result<(), StakingError> {
        let balance = self.balance_of(holder).checked_sub(amount)?;
        let total_supply = self.total_supply.checked_sub(amount)?;
        self.total_supply = total_supply;
        if balance.is_zero() {
            self.balances.remove(&holder.to_string());
        } else {
            self.balances.insert(&holder.to_string(), &balance);
        }
        Ok(())
    }
}
