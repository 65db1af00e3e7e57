use crate::{ContractSettings, StakePoolsContract};
use near_sdk::{env, testing_env, MockedBlockchain};

pub const OWNER: &str = "owner.near";

pub const LOCK_DURATION_SECONDS: u64 = 7 * 24 * 60 * 60;

pub const FEE_PERCENT: u8 = 5;

/// Installs a mocked blockchain with empty storage in the owner's context.
///
/// `testing_env!` carries the storage over from the mocked blockchain that is currently installed,
/// thus the current one is dropped first.
pub fn new_blockchain() {
    env::take_blockchain_interface();
    testing_env!(near::new_context(OWNER));
}

/// deploys the contract with the test lock duration and fee
/// - the testing env is set to the owner's context
pub fn new_contract() -> StakePoolsContract {
    new_blockchain();
    StakePoolsContract::new(ContractSettings::new(
        near::to_account_id(OWNER),
        Some(LOCK_DURATION_SECONDS),
        Some(FEE_PERCENT),
    ))
}

pub mod near {
    use near_sdk::{AccountId, VMContext};

    pub fn to_account_id(id: &str) -> AccountId {
        id.to_string()
    }

    pub fn contract_account_id() -> AccountId {
        to_account_id("pools.oysterpack.near")
    }

    pub fn new_context(predecessor_account_id: &str) -> VMContext {
        VMContext {
            current_account_id: contract_account_id(),
            signer_account_id: to_account_id(predecessor_account_id),
            signer_account_pk: vec![0, 1, 2],
            predecessor_account_id: to_account_id(predecessor_account_id),
            input: vec![],
            epoch_height: 0,
            block_index: 0,
            block_timestamp: 0,
            account_balance: 0,
            account_locked_balance: 0,
            storage_usage: 10u64.pow(6),
            attached_deposit: 0,
            prepaid_gas: 10u64.pow(18),
            random_seed: vec![0, 1, 2],
            is_view: false,
            output_data_receivers: vec![],
        }
    }
}
