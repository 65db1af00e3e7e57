use crate::core::mul_div;
use crate::domain::{
    CostBasis, PoolVariant, ShareLedger, ShareValue, Withdrawal, YoctoNear, YoctoShares,
};
use crate::errors::StakingError;
use crate::near::storage_keys::{cost_basis_key_prefix, share_balances_key_prefix};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::LookupMap,
    AccountId,
};

/// Share accounting for a single pool.
///
/// Every operation validates and computes all of its values before the first mutation, which
/// means an error leaves the pool unchanged.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct StakingPool {
    variant: PoolVariant,
    /// NEAR attributed to share holders
    total_balance: YoctoNear,
    ledger: ShareLedger,
    cost_basis: LookupMap<AccountId, CostBasis>,
    /// fees withheld from full exits that have not been reinvested
    retained_fees: YoctoNear,
}

impl StakingPool {
    pub fn new(variant: PoolVariant) -> Self {
        Self {
            variant,
            total_balance: YoctoNear::ZERO,
            ledger: ShareLedger::new(share_balances_key_prefix(variant)),
            cost_basis: LookupMap::new(cost_basis_key_prefix(variant)),
            retained_fees: YoctoNear::ZERO,
        }
    }

    pub fn variant(&self) -> PoolVariant {
        self.variant
    }

    pub fn total_balance(&self) -> YoctoNear {
        self.total_balance
    }

    pub fn total_shares(&self) -> YoctoShares {
        self.ledger.total_supply()
    }

    pub fn retained_fees(&self) -> YoctoNear {
        self.retained_fees
    }

    pub fn share_balance(&self, holder: &str) -> YoctoShares {
        self.ledger.balance_of(holder)
    }

    pub fn cost_basis(&self, holder: &str) -> CostBasis {
        self.cost_basis.get(&holder.to_string()).unwrap_or_default()
    }

    pub fn share_value(&self) -> ShareValue {
        ShareValue::new(self.total_balance, self.total_shares())
    }

    pub fn ledger(&self) -> &ShareLedger {
        &self.ledger
    }

    /// Returns the number of shares that depositing `amount` would mint.
    ///
    /// The first deposit into a pool with no shares outstanding is converted 1:1. Otherwise,
    /// `shares = amount * total_shares / total_balance` rounded down.
    ///
    /// ## Errors
    /// - [StakingError::InvalidAmount] if amount is zero or would mint zero shares
    /// - [StakingError::DivideByZero] if shares are outstanding against a zero balance
    /// - [StakingError::ArithmeticOverflow]
    pub fn preview_deposit(&self, amount: YoctoNear) -> Result<YoctoShares, StakingError> {
        if amount.is_zero() {
            return Err(StakingError::InvalidAmount);
        }
        let shares = self.share_value().near_to_shares(amount)?;
        if shares.is_zero() {
            return Err(StakingError::InvalidAmount);
        }
        Ok(shares)
    }

    /// Mints shares for the deposited amount and returns the number of shares minted.
    ///
    /// ## Errors
    /// see [preview_deposit](StakingPool::preview_deposit)
    pub fn deposit(
        &mut self,
        holder: &str,
        amount: YoctoNear,
    ) -> Result<YoctoShares, StakingError> {
        let shares = self.preview_deposit(amount)?;
        let total_balance = self.total_balance.checked_add(amount)?;
        let cost_basis = self.cost_basis(holder).credit(shares, amount)?;
        self.ledger.mint(holder, shares)?;

        self.total_balance = total_balance;
        self.cost_basis.insert(&holder.to_string(), &cost_basis);
        Ok(shares)
    }

    /// Increases the pool balance without minting shares, i.e., raises the value of every
    /// outstanding share.
    ///
    /// ## Errors
    /// - [StakingError::InvalidAmount] if amount is zero
    /// - [StakingError::ArithmeticOverflow]
    pub fn credit_yield(&mut self, amount: YoctoNear) -> Result<(), StakingError> {
        if amount.is_zero() {
            return Err(StakingError::InvalidAmount);
        }
        self.total_balance = self.total_balance.checked_add(amount)?;
        Ok(())
    }

    /// Moves the retained fees into the pool balance, returning the amount moved.
    ///
    /// ## Errors
    /// [StakingError::ArithmeticOverflow]
    pub fn reinvest_fees(&mut self) -> Result<YoctoNear, StakingError> {
        let fees = self.retained_fees;
        if fees.is_zero() {
            return Ok(fees);
        }
        self.total_balance = self.total_balance.checked_add(fees)?;
        self.retained_fees = YoctoNear::ZERO;
        Ok(fees)
    }

    /// Computes what redeeming `shares` would pay out.
    ///
    /// <pre>
    /// gross      = shares * total_balance / total_shares
    /// principal  = shares * cost_basis.principal / cost_basis.shares
    /// reward     = max(gross - principal, 0)
    /// fee        = reward * fee_percent / 100
    /// net_payout = gross - fee
    /// </pre>
    ///
    /// ## Errors
    /// - [StakingError::InvalidAmount] if shares is zero
    /// - [StakingError::InsufficientShares] if the holder owns fewer shares
    /// - [StakingError::ArithmeticOverflow]
    pub fn preview_withdrawal(
        &self,
        holder: &str,
        shares: YoctoShares,
        fee_percent: u8,
    ) -> Result<Withdrawal, StakingError> {
        if shares.is_zero() {
            return Err(StakingError::InvalidAmount);
        }
        if self.share_balance(holder) < shares {
            return Err(StakingError::InsufficientShares);
        }

        let gross = mul_div(
            shares.value(),
            self.total_balance.value(),
            self.total_shares().value(),
        )
        .map(YoctoNear)?;
        let principal = self.cost_basis(holder).principal_for(shares)?;
        let reward = gross.saturating_sub(principal);
        let fee = mul_div(reward.value(), fee_percent.into(), 100).map(YoctoNear)?;

        Ok(Withdrawal {
            shares,
            gross,
            principal,
            reward,
            fee,
            net_payout: gross.saturating_sub(fee),
        })
    }

    /// Burns the holder's shares and removes the net payout from the pool balance, i.e., the fee
    /// stays in the pool for the remaining holders.
    ///
    /// When the last shares are redeemed, the whole balance is paid out and the fee is moved to
    /// the retained fees, which leaves the pool empty.
    ///
    /// ## Errors
    /// see [preview_withdrawal](StakingPool::preview_withdrawal)
    pub fn withdraw(
        &mut self,
        holder: &str,
        shares: YoctoShares,
        fee_percent: u8,
    ) -> Result<Withdrawal, StakingError> {
        let withdrawal = self.preview_withdrawal(holder, shares, fee_percent)?;
        let cost_basis = self
            .cost_basis(holder)
            .debit(shares, withdrawal.principal)?;
        // gross <= total_balance because shares <= total_shares
        let (total_balance, retained_fees) = if shares == self.total_shares() {
            (
                self.total_balance.saturating_sub(withdrawal.gross),
                self.retained_fees.checked_add(withdrawal.fee)?,
            )
        } else {
            (
                self.total_balance.saturating_sub(withdrawal.net_payout),
                self.retained_fees,
            )
        };
        self.ledger.burn(holder, shares)?;

        self.total_balance = total_balance;
        self.retained_fees = retained_fees;
        if cost_basis.is_empty() {
            self.cost_basis.remove(&holder.to_string());
        } else {
            self.cost_basis.insert(&holder.to_string(), &cost_basis);
        }
        Ok(withdrawal)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::near::YOCTO;
    use crate::test_utils::new_blockchain;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    const FEE_PERCENT: u8 = 5;

    fn pool() -> StakingPool {
        new_blockchain();
        StakingPool::new(PoolVariant::Flexible)
    }

    fn near(value: u128) -> YoctoNear {
        YoctoNear(value * YOCTO)
    }

    #[test]
    fn first_deposit_is_converted_one_to_one() {
        let mut pool = pool();
        let shares = pool.deposit("alice.near", near(100)).unwrap();
        assert_eq!(shares, YoctoShares(100 * YOCTO));
        assert_eq!(pool.total_balance(), near(100));
        assert_eq!(pool.total_shares(), YoctoShares(100 * YOCTO));
        assert_eq!(pool.share_value().value(), Ok(YoctoNear(YOCTO)));

        let basis = pool.cost_basis("alice.near");
        assert_eq!(basis.shares(), shares);
        assert_eq!(basis.principal(), near(100));
    }

    #[test]
    fn deposit_at_parity() {
        let mut pool = pool();
        pool.deposit("alice.near", YoctoNear(1000)).unwrap();
        // floor(350 * 1000 / 1000)
        assert_eq!(
            pool.deposit("bob.near", YoctoNear(350)),
            Ok(YoctoShares(350))
        );
        assert_eq!(pool.total_balance(), YoctoNear(1350));
        assert_eq!(pool.total_shares(), YoctoShares(1350));
    }

    #[test]
    fn deposit_after_yield_is_proportional() {
        let mut pool = pool();
        pool.deposit("alice.near", YoctoNear(1000)).unwrap();
        pool.credit_yield(YoctoNear(300)).unwrap();
        assert_eq!(pool.total_shares(), YoctoShares(1000));

        // floor(350 * 1000 / 1300) = 269
        assert_eq!(
            pool.deposit("bob.near", YoctoNear(350)),
            Ok(YoctoShares(269))
        );
        // floor(777 * 1269 / 1650) = 597
        assert_eq!(
            pool.deposit("carol.near", YoctoNear(777)),
            Ok(YoctoShares(597))
        );
        assert_eq!(pool.total_balance(), YoctoNear(2427));
        assert_eq!(pool.total_shares(), YoctoShares(1866));
    }

    #[test]
    fn zero_amounts_are_rejected() {
        let mut pool = pool();
        assert_eq!(
            pool.deposit("alice.near", YoctoNear(0)),
            Err(StakingError::InvalidAmount)
        );
        assert_eq!(
            pool.credit_yield(YoctoNear(0)),
            Err(StakingError::InvalidAmount)
        );
        pool.deposit("alice.near", YoctoNear(10)).unwrap();
        assert_eq!(
            pool.withdraw("alice.near", YoctoShares(0), FEE_PERCENT),
            Err(StakingError::InvalidAmount)
        );
    }

    #[test]
    fn deposit_that_would_mint_no_shares_is_rejected() {
        let mut pool = pool();
        pool.deposit("alice.near", YoctoNear(10)).unwrap();
        pool.credit_yield(YoctoNear(10)).unwrap();
        assert_eq!(
            pool.deposit("bob.near", YoctoNear(1)),
            Err(StakingError::InvalidAmount)
        );
        assert_eq!(pool.total_balance(), YoctoNear(20));
        assert_eq!(pool.share_balance("bob.near"), YoctoShares(0));
    }

    #[test]
    fn yield_then_withdraw() {
        let mut pool = pool();
        pool.deposit("alice.near", near(1000)).unwrap();
        // 3 days of yield
        pool.credit_yield(near(30)).unwrap();

        let withdrawal = pool
            .withdraw("alice.near", YoctoShares(1000 * YOCTO), FEE_PERCENT)
            .unwrap();
        assert_eq!(withdrawal.gross, near(1030));
        assert_eq!(withdrawal.principal, near(1000));
        assert_eq!(withdrawal.reward, near(30));
        // 30 * 5 / 100
        assert_eq!(withdrawal.fee, YoctoNear(15 * YOCTO / 10));
        assert_eq!(withdrawal.net_payout, YoctoNear(10285 * YOCTO / 10));
        assert!(!withdrawal.has_principal_shortfall());

        assert_eq!(pool.total_balance(), YoctoNear(0));
        assert_eq!(pool.total_shares(), YoctoShares(0));
        assert_eq!(pool.retained_fees(), withdrawal.fee);
        assert!(pool.cost_basis("alice.near").is_empty());
    }

    #[test]
    fn partial_withdrawal_after_yield() {
        let mut pool = pool();
        pool.deposit("alice.near", YoctoNear(1000)).unwrap();
        pool.deposit("bob.near", YoctoNear(1000)).unwrap();
        pool.credit_yield(YoctoNear(200)).unwrap();

        let withdrawal = pool
            .withdraw("alice.near", YoctoShares(400), 10)
            .unwrap();
        // 400 * 2200 / 2000
        assert_eq!(withdrawal.gross, YoctoNear(440));
        assert_eq!(withdrawal.principal, YoctoNear(400));
        assert_eq!(withdrawal.reward, YoctoNear(40));
        assert_eq!(withdrawal.fee, YoctoNear(4));
        assert_eq!(withdrawal.net_payout, YoctoNear(436));

        // the fee stays in the pool
        assert_eq!(pool.total_balance(), YoctoNear(1764));
        assert_eq!(pool.total_shares(), YoctoShares(1600));
        assert_eq!(pool.retained_fees(), YoctoNear(0));
        let basis = pool.cost_basis("alice.near");
        assert_eq!(basis.shares(), YoctoShares(600));
        assert_eq!(basis.principal(), YoctoNear(600));
    }

    #[test]
    fn reward_floors_at_zero() {
        let mut pool = pool();
        pool.deposit("alice.near", YoctoNear(2)).unwrap();
        pool.credit_yield(YoctoNear(1)).unwrap();
        // floor(5 * 2 / 3) = 3 shares, worth floor(3 * 8 / 5) = 4
        assert_eq!(pool.deposit("bob.near", YoctoNear(5)), Ok(YoctoShares(3)));

        let withdrawal = pool.withdraw("bob.near", YoctoShares(3), 100).unwrap();
        assert_eq!(withdrawal.gross, YoctoNear(4));
        assert_eq!(withdrawal.principal, YoctoNear(5));
        assert_eq!(withdrawal.reward, YoctoNear(0));
        assert_eq!(withdrawal.fee, YoctoNear(0));
        assert_eq!(withdrawal.net_payout, YoctoNear(4));
        assert!(withdrawal.has_principal_shortfall());
    }

    #[test]
    fn withdraw_more_than_balance_changes_nothing() {
        let mut pool = pool();
        pool.deposit("alice.near", YoctoNear(100)).unwrap();
        pool.deposit("bob.near", YoctoNear(100)).unwrap();
        assert_eq!(
            pool.withdraw("alice.near", YoctoShares(101), FEE_PERCENT),
            Err(StakingError::InsufficientShares)
        );
        assert_eq!(pool.total_balance(), YoctoNear(200));
        assert_eq!(pool.share_balance("alice.near"), YoctoShares(100));
        assert_eq!(pool.cost_basis("alice.near").principal(), YoctoNear(100));
    }

    #[test]
    fn fee_goes_to_remaining_holders() {
        let mut pool = pool();
        pool.deposit("alice.near", YoctoNear(1000)).unwrap();
        pool.deposit("bob.near", YoctoNear(1000)).unwrap();
        pool.credit_yield(YoctoNear(200)).unwrap();
        let withdrawal = pool.withdraw("alice.near", YoctoShares(1000), 50).unwrap();
        assert_eq!(withdrawal.gross, YoctoNear(1100));
        assert_eq!(withdrawal.fee, YoctoNear(50));
        assert_eq!(withdrawal.net_payout, YoctoNear(1050));

        assert_eq!(pool.total_balance(), YoctoNear(1150));
        assert_eq!(pool.retained_fees(), YoctoNear(0));
        assert_eq!(
            pool.share_value().shares_to_near(pool.share_balance("bob.near")),
            Ok(YoctoNear(1150))
        );
        assert_eq!(pool.reinvest_fees(), Ok(YoctoNear(0)));
    }

    #[test]
    fn fee_from_full_exit_is_retained_until_reinvested() {
        let mut pool = pool();
        pool.deposit("alice.near", YoctoNear(1000)).unwrap();
        pool.credit_yield(YoctoNear(200)).unwrap();
        let withdrawal = pool.withdraw("alice.near", YoctoShares(1000), 50).unwrap();
        assert_eq!(withdrawal.fee, YoctoNear(100));
        assert_eq!(pool.total_balance(), YoctoNear(0));
        assert_eq!(pool.retained_fees(), YoctoNear(100));

        assert_eq!(pool.reinvest_fees(), Ok(YoctoNear(100)));
        assert_eq!(pool.retained_fees(), YoctoNear(0));
        assert_eq!(pool.total_balance(), YoctoNear(100));
        assert_eq!(pool.reinvest_fees(), Ok(YoctoNear(0)));

        // the next depositor mints at parity and owns the reinvested fee
        assert_eq!(pool.deposit("bob.near", YoctoNear(50)), Ok(YoctoShares(50)));
        assert_eq!(pool.share_value().shares_to_near(YoctoShares(50)), Ok(YoctoNear(150)));
    }

    #[quickcheck]
    fn entitlements_never_exceed_pool_balance(
        deposits: Vec<(u8, u32)>,
        yields: Vec<u32>,
    ) -> TestResult {
        if deposits.is_empty() {
            return TestResult::discard();
        }
        let mut pool = pool();
        for (i, (holder, amount)) in deposits.iter().enumerate() {
            let holder = format!("{}.near", holder % 8);
            // rejected deposits leave the pool untouched
            let _ = pool.deposit(&holder, YoctoNear(*amount as u128 * YOCTO));
            if let Some(amount) = yields.get(i) {
                let _ = pool.credit_yield(YoctoNear(*amount as u128));
            }
        }
        let total_shares = pool.total_shares().value();
        if total_shares == 0 {
            return TestResult::discard();
        }
        let entitlements: u128 = pool
            .ledger()
            .holders()
            .map(|(_, shares)| {
                mul_div(shares.value(), pool.total_balance().value(), total_shares).unwrap()
            })
            .sum();
        TestResult::from_bool(entitlements <= pool.total_balance().value())
    }

    #[quickcheck]
    fn last_holder_exit_empties_the_pool(deposits: Vec<u32>, yields: Vec<u32>) -> TestResult {
        let mut pool = pool();
        for (i, amount) in deposits.iter().enumerate() {
            let _ = pool.deposit("alice.near", YoctoNear(*amount as u128));
            if let Some(amount) = yields.get(i) {
                let _ = pool.credit_yield(YoctoNear(*amount as u128));
            }
        }
        let shares = pool.share_balance("alice.near");
        if shares.is_zero() {
            return TestResult::discard();
        }
        let withdrawal = pool.withdraw("alice.near", shares, FEE_PERCENT).unwrap();
        TestResult::from_bool(
            pool.total_shares().is_zero()
                && pool.total_balance().is_zero()
                && withdrawal.net_payout.value() + withdrawal.fee.value()
                    == withdrawal.gross.value()
                && pool.cost_basis("alice.near").is_empty(),
        )
    }
}
