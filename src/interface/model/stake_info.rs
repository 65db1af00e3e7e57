use crate::domain::CostBasis;
use crate::interface::{YoctoNear, YoctoShares};
use near_sdk::serde::{Deserialize, Serialize};

/// View model for an account's position in a pool
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct StakeInfo {
    pub shares: YoctoShares,
    /// NEAR that was deposited for the shares - anything redeemed above the principal is reward
    pub principal: YoctoNear,
}

impl From<CostBasis> for StakeInfo {
    fn from(basis: CostBasis) -> Self {
        Self {
            shares: basis.shares().into(),
            principal: basis.principal().into(),
        }
    }
}
