use crate::{
    domain::{PoolVariant, Withdrawal},
    interface::{YoctoNear, YoctoShares},
};
use near_sdk::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct WithdrawalReceipt {
    pub pool: PoolVariant,
    pub shares: YoctoShares,
    /// NEAR value of the redeemed shares
    pub gross: YoctoNear,
    pub principal: YoctoNear,
    pub reward: YoctoNear,
    /// portion of the reward retained by the pool
    pub fee: YoctoNear,
    /// NEAR transferred to the account, i.e., `gross - fee`
    pub net_payout: YoctoNear,
}

impl WithdrawalReceipt {
    pub fn new(pool: PoolVariant, withdrawal: Withdrawal) -> Self {
        Self {
            pool,
            shares: withdrawal.shares.into(),
            gross: withdrawal.gross.into(),
            principal: withdrawal.principal.into(),
            reward: withdrawal.reward.into(),
            fee: withdrawal.fee.into(),
            net_payout: withdrawal.net_payout.into(),
        }
    }
}
