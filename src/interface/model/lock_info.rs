use crate::{
    domain,
    interface::{BlockTimestamp, YoctoShares},
};
use near_sdk::serde::{Deserialize, Serialize};

/// locked pool position
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct LockInfo {
    pub locked_shares: YoctoShares,
    /// most recent deposit - each deposit re-locks the entire position
    pub deposit_timestamp: BlockTimestamp,
    /// shares can be withdrawn once the block timestamp reaches the unlock timestamp
    pub unlock_timestamp: BlockTimestamp,
}

impl From<domain::LockRecord> for LockInfo {
    fn from(record: domain::LockRecord) -> Self {
        Self {
            locked_shares: record.locked_shares().into(),
            deposit_timestamp: record.deposit_timestamp().into(),
            unlock_timestamp: record.unlock_timestamp().into(),
        }
    }
}
