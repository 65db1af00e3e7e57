//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    contract::unwrap_or_panic,
    domain::PoolVariant,
    errors::asserts::ATTACHED_DEPOSIT_IS_REQUIRED,
    interface::{
        contract_owner::events::{FeesReinvested, YieldCredited},
        ContractOwner, FeeConfig, YoctoNear,
    },
    near::log,
};
use near_sdk::near_bindgen;

#[near_bindgen]
impl ContractOwner for StakePoolsContract {
    fn owner_id(&self) -> AccountId {
        self.owner_id.clone()
    }

    fn fee_config(&self) -> FeeConfig {
        self.pools.fee_config().into()
    }

    #[payable]
    fn credit_yield(&mut self, pool: PoolVariant) {
        self.assert_predecessor_is_owner();
        let amount = env::attached_deposit();
        assert!(amount > 0, "{}", ATTACHED_DEPOSIT_IS_REQUIRED);

        unwrap_or_panic(self.pools.credit_yield(pool, amount.into()));

        log(YieldCredited {
            pool,
            amount,
            total_balance: self.pools.total_balance(pool).value(),
        });
    }

    fn reinvest_fees(&mut self, pool: PoolVariant) -> YoctoNear {
        self.assert_predecessor_is_owner();
        let amount = unwrap_or_panic(self.pools.reinvest_fees(pool));
        if !amount.is_zero() {
            log(FeesReinvested {
                pool,
                amount: amount.value(),
                total_balance: self.pools.total_balance(pool).value(),
            });
        }
        amount.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interface::StakingService;
    use crate::near::YOCTO;
    use crate::test_utils::{near::new_context, *};
    use near_sdk::{testing_env, MockedBlockchain};

    #[test]
    fn owner_id_and_fee_config() {
        let contract = new_contract();
        assert_eq!(contract.owner_id(), OWNER);

        let fee_config = contract.fee_config();
        assert_eq!(fee_config.lock_duration_seconds.0, LOCK_DURATION_SECONDS);
        assert_eq!(fee_config.fee_percent, FEE_PERCENT);
    }

    #[test]
    #[should_panic(expected = "contract call is only allowed by the contract owner")]
    fn credit_yield_from_non_owner() {
        let mut contract = new_contract();
        let mut context = new_context("alice.near");
        context.attached_deposit = YOCTO;
        testing_env!(context);
        contract.credit_yield(PoolVariant::Flexible);
    }

    #[test]
    #[should_panic(expected = "attached deposit is required")]
    fn credit_yield_without_attached_deposit() {
        let mut contract = new_contract();
        contract.credit_yield(PoolVariant::Locked);
    }

    #[test]
    fn credit_yield_only_affects_target_pool() {
        let mut contract = new_contract();
        let mut context = new_context(OWNER);
        context.attached_deposit = 10 * YOCTO;
        testing_env!(context);
        contract.credit_yield(PoolVariant::Locked);

        assert_eq!(
            contract.total_balance(PoolVariant::Locked).value(),
            10 * YOCTO
        );
        assert_eq!(contract.total_shares(PoolVariant::Locked).value(), 0);
        assert_eq!(contract.total_balance(PoolVariant::Flexible).value(), 0);
    }

    #[test]
    fn reinvest_fees_after_full_exit() {
        let mut contract = new_contract();

        let mut alice = new_context("alice.near");
        alice.attached_deposit = 100 * YOCTO;
        testing_env!(alice.clone());
        contract.deposit_flexible();

        let mut owner = new_context(OWNER);
        owner.attached_deposit = 20 * YOCTO;
        testing_env!(owner.clone());
        contract.credit_yield(PoolVariant::Flexible);

        // alice redeems 120 NEAR for 100 NEAR principal - 1 NEAR fee is retained
        alice.attached_deposit = 0;
        testing_env!(alice);
        let receipt = contract.withdraw_flexible((100 * YOCTO).into());
        assert_eq!(receipt.fee.value(), YOCTO);
        let balances = contract.pool_balances(PoolVariant::Flexible);
        assert_eq!(balances.total_balance.value(), 0);
        assert_eq!(balances.retained_fees.value(), YOCTO);

        owner.attached_deposit = 0;
        testing_env!(owner);
        let reinvested = contract.reinvest_fees(PoolVariant::Flexible);
        assert_eq!(reinvested.value(), YOCTO);
        let balances = contract.pool_balances(PoolVariant::Flexible);
        assert_eq!(balances.total_balance.value(), YOCTO);
        assert_eq!(balances.retained_fees.value(), 0);

        // nothing left to reinvest
        assert_eq!(contract.reinvest_fees(PoolVariant::Flexible).value(), 0);
    }

    #[test]
    fn partial_withdrawal_fee_stays_with_remaining_holders() {
        let mut contract = new_contract();

        let mut alice = new_context("alice.near");
        alice.attached_deposit = 100 * YOCTO;
        testing_env!(alice.clone());
        contract.deposit_flexible();

        let mut bob = new_context("bob.near");
        bob.attached_deposit = 100 * YOCTO;
        testing_env!(bob);
        contract.deposit_flexible();

        let mut owner = new_context(OWNER);
        owner.attached_deposit = 20 * YOCTO;
        testing_env!(owner);
        contract.credit_yield(PoolVariant::Flexible);

        // alice redeems 110 NEAR for 100 NEAR principal - the 0.5 NEAR fee stays in the pool
        alice.attached_deposit = 0;
        testing_env!(alice);
        let receipt = contract.withdraw_flexible((100 * YOCTO).into());
        assert_eq!(receipt.fee.value(), YOCTO / 2);

        let balances = contract.pool_balances(PoolVariant::Flexible);
        assert_eq!(balances.total_balance.value(), 110 * YOCTO + YOCTO / 2);
        assert_eq!(balances.retained_fees.value(), 0);
        assert_eq!(
            contract
                .stake_info(PoolVariant::Flexible, "bob.near".to_string())
                .principal
                .value(),
            100 * YOCTO
        );
    }

    #[test]
    #[should_panic(expected = "contract call is only allowed by the contract owner")]
    fn reinvest_fees_from_non_owner() {
        let mut contract = new_contract();
        testing_env!(new_context("bob.near"));
        contract.reinvest_fees(PoolVariant::Flexible);
    }
}
