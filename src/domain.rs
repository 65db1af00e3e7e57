//! defines the internal domain model used to implement the staking pool accounting
//!
//! NOTE: the domain model is separate from the interface model. The domain model never reads the
//! NEAR runtime context - timestamps are passed in explicitly. Per holder state is kept in NEAR SDK
//! persistent collections, which are keyed via [storage_keys](crate::near::storage_keys).

mod block_timestamp;
mod cost_basis;
mod fee_config;
mod lock_record;
mod lock_schedule;
mod pool_variant;
mod share_ledger;
mod share_value;
mod staking_pool;
mod staking_pools;
mod withdrawal;
mod yocto_near;
mod yocto_shares;

pub use block_timestamp::BlockTimestamp;
pub use cost_basis::CostBasis;
pub use fee_config::{
    FeeConfig, DEFAULT_FEE_PERCENT, DEFAULT_LOCK_DURATION_SECONDS, MAX_FEE_PERCENT,
};
pub use lock_record::LockRecord;
pub use lock_schedule::LockSchedule;
pub use pool_variant::PoolVariant;
pub use share_ledger::ShareLedger;
pub use share_value::ShareValue;
pub use staking_pool::StakingPool;
pub use staking_pools::{LockedStakingPool, StakingPools};
pub use withdrawal::Withdrawal;
pub use yocto_near::YoctoNear;
pub use yocto_shares::YoctoShares;
