use crate::domain;
use near_sdk::{
    json_types::U64,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct FeeConfig {
    pub lock_duration_seconds: U64,
    /// percentage of the withdrawal reward that is retained by the pool
    pub fee_percent: u8,
}

impl From<domain::FeeConfig> for FeeConfig {
    fn from(config: domain::FeeConfig) -> Self {
        Self {
            lock_duration_seconds: config.lock_duration_seconds().into(),
            fee_percent: config.fee_percent(),
        }
    }
}
