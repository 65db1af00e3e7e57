use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// 7 days
pub const DEFAULT_LOCK_DURATION_SECONDS: u64 = 7 * 24 * 60 * 60;

pub const DEFAULT_FEE_PERCENT: u8 = 5;

pub const MAX_FEE_PERCENT: u8 = 100;

/// Set once when the pools are created - there is no update path.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct FeeConfig {
    lock_duration_seconds: u64,
    fee_percent: u8,
}

impl FeeConfig {
    /// returns None if `fee_percent` is greater than 100
    pub fn new(lock_duration_seconds: u64, fee_percent: u8) -> Option<Self> {
        if fee_percent > MAX_FEE_PERCENT {
            return None;
        }
        Some(Self {
            lock_duration_seconds,
            fee_percent,
        })
    }

    pub fn lock_duration_seconds(&self) -> u64 {
        self.lock_duration_seconds
    }

    /// percentage of the withdrawal reward that is retained by the pool
    pub fn fee_percent(&self) -> u8 {
        self.fee_percent
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            lock_duration_seconds: DEFAULT_LOCK_DURATION_SECONDS,
            fee_percent: DEFAULT_FEE_PERCENT,
        }
    }
}
