//! centralizes all error messages

use std::fmt::{self, Display, Formatter};

/// Errors returned by the staking pool accounting core.
///
/// Every operation that returns an error leaves the pool state untouched.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StakingError {
    /// amount is zero, or too small to be converted into at least one share
    InvalidAmount,
    /// burn or withdrawal exceeds the holder's share balance
    InsufficientShares,
    /// intermediate product or result does not fit the integer range
    ArithmeticOverflow,
    /// conversion attempted against a zero supply or zero balance outside the bootstrap path
    DivideByZero,
    /// withdrawal attempted from the locked pool before the unlock timestamp
    PoolLocked,
}

impl Display for StakingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StakingError::InvalidAmount => write!(f, "{}", staking_errors::INVALID_AMOUNT),
            StakingError::InsufficientShares => {
                write!(f, "{}", staking_errors::INSUFFICIENT_SHARES)
            }
            StakingError::ArithmeticOverflow => {
                write!(f, "{}", staking_errors::ARITHMETIC_OVERFLOW)
            }
            StakingError::DivideByZero => write!(f, "{}", staking_errors::DIVIDE_BY_ZERO),
            StakingError::PoolLocked => write!(f, "{}", staking_errors::POOL_LOCKED),
        }
    }
}

impl std::error::Error for StakingError {}

pub mod staking_errors {
    pub const INVALID_AMOUNT: &str = "amount must be greater than zero and mint at least 1 share";

    pub const INSUFFICIENT_SHARES: &str =
        "account share balance is insufficient to fulfill request";

    pub const ARITHMETIC_OVERFLOW: &str = "arithmetic overflow";

    pub const DIVIDE_BY_ZERO: &str = "division by zero";

    pub const POOL_LOCKED: &str = "locked pool shares cannot be withdrawn before the unlock time";
}

pub mod asserts {
    pub const PREDECESSOR_MUST_BE_OWNER: &str =
        "contract call is only allowed by the contract owner";

    pub const ATTACHED_DEPOSIT_IS_REQUIRED: &str = "attached deposit is required";
}

pub mod contract_settings {
    pub const FEE_PERCENT_OUT_OF_RANGE: &str = "fee percent must be within [0, 100]";

    pub const OWNER_MUST_NOT_BE_CONTRACT: &str =
        "owner account ID must not be the contract account ID";
}
