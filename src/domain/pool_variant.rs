use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// The two staking pools. The set is closed.
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
)]
#[serde(crate = "near_sdk::serde")]
pub enum PoolVariant {
    /// shares can be redeemed at any time
    Flexible,
    /// shares can only be redeemed once the lock duration has elapsed since the latest deposit
    Locked,
}
