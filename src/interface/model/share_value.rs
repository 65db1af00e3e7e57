use crate::domain;
use crate::interface::{YoctoNear, YoctoShares};
use near_sdk::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct ShareValue {
    pub total_balance: YoctoNear,
    pub total_shares: YoctoShares,
    /// value of 1 share, i.e., 10^24 share units
    /// - None if the value overflows
    pub value: Option<YoctoNear>,
}

impl From<domain::ShareValue> for ShareValue {
    fn from(value: domain::ShareValue) -> Self {
        Self {
            total_balance: value.total_balance().into(),
            total_shares: value.total_shares().into(),
            value: value.value().ok().map(Into::into),
        }
    }
}
