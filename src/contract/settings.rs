use crate::domain::{FeeConfig, DEFAULT_FEE_PERCENT, DEFAULT_LOCK_DURATION_SECONDS};
use crate::errors::contract_settings::{FEE_PERCENT_OUT_OF_RANGE, OWNER_MUST_NOT_BE_CONTRACT};
use near_sdk::{
    env,
    json_types::U64,
    serde::{Deserialize, Serialize},
    AccountId,
};
use std::fmt::{self, Display, Formatter};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(crate = "near_sdk::serde")]
pub struct ContractSettings {
    pub owner_id: AccountId,
    /// defaults to 7 days
    pub lock_duration_seconds: Option<U64>,
    /// percentage of withdrawal rewards that is retained by the pool - defaults to 5%
    pub fee_percent: Option<u8>,
}

impl ContractSettings {
    pub fn new(
        owner_id: AccountId,
        lock_duration_seconds: Option<u64>,
        fee_percent: Option<u8>,
    ) -> Self {
        Self {
            owner_id,
            lock_duration_seconds: lock_duration_seconds.map(Into::into),
            fee_percent,
        }
    }

    pub fn fee_config(&self) -> Result<FeeConfig, InvalidContractSettings> {
        FeeConfig::new(
            self.lock_duration_seconds
                .as_ref()
                .map_or(DEFAULT_LOCK_DURATION_SECONDS, |seconds| seconds.0),
            self.fee_percent.unwrap_or(DEFAULT_FEE_PERCENT),
        )
        .ok_or(InvalidContractSettings::FeePercentOutOfRange)
    }

    /// depends on NEAR runtime env
    pub fn validate(&self) -> Option<InvalidContractSettings> {
        if env::current_account_id() == self.owner_id {
            return Some(InvalidContractSettings::OwnerMustNotBeContract);
        }
        self.fee_config().err()
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InvalidContractSettings {
    FeePercentOutOfRange,
    OwnerMustNotBeContract,
}

impl Display for InvalidContractSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidContractSettings::FeePercentOutOfRange => {
                write!(f, "{}", FEE_PERCENT_OUT_OF_RANGE)
            }
            InvalidContractSettings::OwnerMustNotBeContract => {
                write!(f, "{}", OWNER_MUST_NOT_BE_CONTRACT)
            }
        }
    }
}
