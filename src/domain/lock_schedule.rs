use crate::domain::{BlockTimestamp, LockRecord, YoctoShares};
use crate::errors::StakingError;
use crate::near::storage_keys::LOCK_RECORDS_KEY_PREFIX;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::LookupMap,
    AccountId,
};

/// Per-holder lock bookkeeping for the locked pool.
///
/// Every locked pool deposit re-locks the holder's entire position: the unlock timestamp is reset
/// to `now + lock duration` for the combined amount.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct LockSchedule {
    records: LookupMap<AccountId, LockRecord>,
}

impl Default for LockSchedule {
    fn default() -> Self {
        Self {
            records: LookupMap::new(LOCK_RECORDS_KEY_PREFIX.to_vec()),
        }
    }
}

impl LockSchedule {
    pub fn lock_record(&self, holder: &str) -> Option<LockRecord> {
        self.records.get(&holder.to_string())
    }

    /// Computes the holder's lock record after depositing `shares` without applying it.
    ///
    /// ## Errors
    /// [StakingError::ArithmeticOverflow]
    pub fn prepare_lock(
        &self,
        holder: &str,
        shares: YoctoShares,
        now: BlockTimestamp,
        lock_duration_seconds: u64,
    ) -> Result<LockRecord, StakingError> {
        match self.lock_record(holder) {
            None => LockRecord::new(shares, now, lock_duration_seconds),
            Some(record) => record.relock(shares, now, lock_duration_seconds),
        }
    }

    /// stores a record computed by [prepare_lock](LockSchedule::prepare_lock)
    pub fn insert(&mut self, holder: &str, record: LockRecord) {
        self.records.insert(&holder.to_string(), &record);
    }

    /// ## Errors
    /// - [StakingError::InsufficientShares] if the holder has no lock record or fewer locked shares
    /// - [StakingError::PoolLocked] if `now` is before the unlock timestamp
    pub fn check_unlocked(
        &self,
        holder: &str,
        shares: YoctoShares,
        now: BlockTimestamp,
    ) -> Result<LockRecord, StakingError> {
        let record = self
            .lock_record(holder)
            .ok_or(StakingError::InsufficientShares)?;
        if record.locked_shares() < shares {
            return Err(StakingError::InsufficientShares);
        }
        if !record.is_unlocked(now) {
            return Err(StakingError::PoolLocked);
        }
        Ok(record)
    }

    /// Releases withdrawn shares from the holder's lock record. The record is deleted once no
    /// locked shares remain.
    ///
    /// ## Errors
    /// see [check_unlocked](LockSchedule::check_unlocked)
    pub fn release(
        &mut self,
        holder: &str,
        shares: YoctoShares,
        now: BlockTimestamp,
    ) -> Result<Option<LockRecord>, StakingError> {
        let record = self.check_unlocked(holder, shares, now)?.release(shares)?;
        if record.locked_shares().is_zero() {
            self.records.remove(&holder.to_string());
            Ok(None)
        } else {
            self.insert(holder, record);
            Ok(Some(record))
        }
    }
}
