mod fee_config;
mod lock_info;
mod pool_balances;
mod share_value;
mod stake_info;
mod withdrawal_receipt;

pub use fee_config::FeeConfig;
pub use lock_info::LockInfo;
pub use pool_balances::PoolBalances;
pub use share_value::ShareValue;
pub use stake_info::StakeInfo;
pub use withdrawal_receipt::WithdrawalReceipt;

use crate::domain;
use near_sdk::{
    json_types::{U128, U64},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct YoctoNear(pub U128);

impl From<domain::YoctoNear> for YoctoNear {
    fn from(value: domain::YoctoNear) -> Self {
        Self(value.0.into())
    }
}

impl From<u128> for YoctoNear {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl YoctoNear {
    pub fn value(&self) -> u128 {
        self.0 .0
    }
}

impl Default for YoctoNear {
    fn default() -> Self {
        Self(U128(0))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct YoctoShares(pub U128);

impl From<domain::YoctoShares> for YoctoShares {
    fn from(value: domain::YoctoShares) -> Self {
        Self(value.0.into())
    }
}

impl From<u128> for YoctoShares {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl From<YoctoShares> for domain::YoctoShares {
    fn from(value: YoctoShares) -> Self {
        domain::YoctoShares(value.value())
    }
}

impl YoctoShares {
    pub fn value(&self) -> u128 {
        self.0 .0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct BlockTimestamp(pub U64);

impl From<domain::BlockTimestamp> for BlockTimestamp {
    fn from(value: domain::BlockTimestamp) -> Self {
        Self(value.0.into())
    }
}

impl BlockTimestamp {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}
