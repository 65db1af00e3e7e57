pub mod contract_owner;
pub mod settings;
pub mod staking_service;

use crate::errors::{asserts::PREDECESSOR_MUST_BE_OWNER, StakingError};
use crate::StakePoolsContract;
use near_sdk::env;

impl StakePoolsContract {
    /// asserts that the predecessor account ID must be the owner
    fn assert_predecessor_is_owner(&self) {
        assert_eq!(
            env::predecessor_account_id(),
            self.owner_id,
            "{}",
            PREDECESSOR_MUST_BE_OWNER
        );
    }
}

/// contract calls fail by panicking, which reverts any state changes and refunds attached deposits
fn unwrap_or_panic<T>(result: Result<T, StakingError>) -> T {
    result.unwrap_or_else(|err| panic!("{}", err))
}
