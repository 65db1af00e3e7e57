//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    contract::unwrap_or_panic,
    domain::{self, PoolVariant},
    errors::asserts::ATTACHED_DEPOSIT_IS_REQUIRED,
    interface::{
        staking_service::events, LockInfo, PoolBalances, ShareValue, StakeInfo, StakingService,
        WithdrawalReceipt, YoctoNear, YoctoShares,
    },
    near::log,
};
use near_sdk::{near_bindgen, Promise};

#[near_bindgen]
impl StakingService for StakePoolsContract {
    fn share_balance_of(&self, pool: PoolVariant, account_id: AccountId) -> YoctoShares {
        self.pools.share_balance(pool, &account_id).into()
    }

    fn total_shares(&self, pool: PoolVariant) -> YoctoShares {
        self.pools.total_shares(pool).into()
    }

    fn total_balance(&self, pool: PoolVariant) -> YoctoNear {
        self.pools.total_balance(pool).into()
    }

    fn pool_balances(&self, pool: PoolVariant) -> PoolBalances {
        self.pools.pool(pool).into()
    }

    fn share_value(&self, pool: PoolVariant) -> ShareValue {
        self.pools.share_value(pool).into()
    }

    fn lock_info(&self, account_id: AccountId) -> Option<LockInfo> {
        self.pools.lock_info(&account_id).map(Into::into)
    }

    fn stake_info(&self, pool: PoolVariant, account_id: AccountId) -> StakeInfo {
        self.pools.cost_basis(pool, &account_id).into()
    }

    fn preview_withdrawal(
        &self,
        pool: PoolVariant,
        account_id: AccountId,
        shares: YoctoShares,
    ) -> WithdrawalReceipt {
        let withdrawal =
            unwrap_or_panic(self.pools.preview_withdrawal(pool, &account_id, shares.into()));
        WithdrawalReceipt::new(pool, withdrawal)
    }

    #[payable]
    fn deposit_flexible(&mut self) -> YoctoShares {
        self.deposit_attached(PoolVariant::Flexible)
    }

    #[payable]
    fn deposit_locked(&mut self) -> YoctoShares {
        self.deposit_attached(PoolVariant::Locked)
    }

    fn withdraw_flexible(&mut self, shares: YoctoShares) -> WithdrawalReceipt {
        self.withdraw_shares(PoolVariant::Flexible, shares.into())
    }

    fn withdraw_locked(&mut self, shares: YoctoShares) -> WithdrawalReceipt {
        self.withdraw_shares(PoolVariant::Locked, shares.into())
    }
}

impl StakePoolsContract {
    /// deposits the attached NEAR into the pool on behalf of the predecessor account
    fn deposit_attached(&mut self, pool: PoolVariant) -> YoctoShares {
        let amount = env::attached_deposit();
        assert!(amount > 0, "{}", ATTACHED_DEPOSIT_IS_REQUIRED);

        let account_id = env::predecessor_account_id();
        let shares = unwrap_or_panic(self.pools.deposit(
            pool,
            &account_id,
            amount.into(),
            env::block_timestamp().into(),
        ));

        log(events::Deposit {
            account_id: &account_id,
            pool,
            amount,
            shares: shares.value(),
        });
        shares.into()
    }

    /// redeems the predecessor account's shares and transfers the net payout to the account
    fn withdraw_shares(
        &mut self,
        pool: PoolVariant,
        shares: domain::YoctoShares,
    ) -> WithdrawalReceipt {
        let account_id = env::predecessor_account_id();
        let withdrawal = unwrap_or_panic(self.pools.withdraw(
            pool,
            &account_id,
            shares,
            env::block_timestamp().into(),
        ));

        if withdrawal.has_principal_shortfall() {
            log(events::RewardShortfall {
                account_id: &account_id,
                pool,
                gross: withdrawal.gross.value(),
                principal: withdrawal.principal.value(),
            });
        }
        log(events::Withdrawal {
            account_id: &account_id,
            pool,
            shares: withdrawal.shares.value(),
            gross: withdrawal.gross.value(),
            reward: withdrawal.reward.value(),
            fee: withdrawal.fee.value(),
            net_payout: withdrawal.net_payout.value(),
        });

        if !withdrawal.net_payout.is_zero() {
            Promise::new(account_id).transfer(withdrawal.net_payout.value());
        }
        WithdrawalReceipt::new(pool, withdrawal)
    }
}
