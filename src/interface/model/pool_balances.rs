use crate::{
    domain::{self, PoolVariant},
    interface::{YoctoNear, YoctoShares},
};
use near_sdk::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PoolBalances {
    pub pool: PoolVariant,
    /// NEAR attributed to the pool's share holders
    pub total_balance: YoctoNear,
    pub total_shares: YoctoShares,
    /// fees withheld from withdrawals that have not yet been reinvested into the pool
    pub retained_fees: YoctoNear,
}

impl From<&domain::StakingPool> for PoolBalances {
    fn from(pool: &domain::StakingPool) -> Self {
        Self {
            pool: pool.variant(),
            total_balance: pool.total_balance().into(),
            total_shares: pool.total_shares().into(),
            retained_fees: pool.retained_fees().into(),
        }
    }
}
