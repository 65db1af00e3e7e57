pub mod contract;
pub mod core;
pub mod domain;
pub mod errors;
pub mod interface;
pub mod near;

#[cfg(test)]
pub mod test_utils;

pub use contract::settings::*;

use crate::domain::StakingPools;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env, near_bindgen, AccountId,
};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: near_sdk::wee_alloc::WeeAlloc = near_sdk::wee_alloc::WeeAlloc::INIT;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize)]
pub struct StakePoolsContract {
    /// owner credits yield to the pools
    owner_id: AccountId,

    /// flexible and locked pools along with the fee config, which is fixed at deployment
    pools: StakingPools,
}

impl Default for StakePoolsContract {
    fn default() -> Self {
        panic!("contract should be initialized before usage")
    }
}

#[near_bindgen]
impl StakePoolsContract {
    /// ## Panics
    /// - if the contract is already initialized
    /// - if the settings are invalid
    #[init]
    pub fn new(settings: ContractSettings) -> Self {
        assert!(!env::state_exists(), "contract is already initialized");
        if let Some(err) = settings.validate() {
            panic!("{}", err);
        }
        let fee_config = settings
            .fee_config()
            .unwrap_or_else(|err| panic!("{}", err));

        Self {
            owner_id: settings.owner_id,
            pools: StakingPools::new(fee_config),
        }
    }
}
