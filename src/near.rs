pub mod storage_keys;

use near_sdk::env;
use std::fmt::Debug;

/// YOCTO = 10^24
pub const YOCTO: u128 = 1_000_000_000_000_000_000_000_000;

/// NEAR block timestamps are expressed in nanoseconds
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// wrapper around `near_sdk::env::log()` which supports structured logging
pub fn log<T: Debug>(event: T) {
    env::log(format!("{:#?}", event).as_bytes());
}
