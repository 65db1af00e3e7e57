//! This module is used to centralize NEAR SDK Collection IDs to ensure duplicates are not defined
//!
//! Each NEAR SDK persistent collection must be defined with a unique ID, which is used to store the
//! collection in the TRIE. Pool collections are namespaced by [PoolVariant] so that the flexible
//! and locked pools never share storage. No ID may be a prefix of another ID.

use crate::domain::PoolVariant;

const FLEXIBLE_POOL_KEY_PREFIX: u8 = 0;
const LOCKED_POOL_KEY_PREFIX: u8 = 1;

const SHARE_BALANCES_KEY_PREFIX: u8 = 0;
const COST_BASIS_KEY_PREFIX: u8 = 1;

pub const LOCK_RECORDS_KEY_PREFIX: [u8; 1] = [2];

fn pool_key_prefix(pool: PoolVariant) -> u8 {
    match pool {
        PoolVariant::Flexible => FLEXIBLE_POOL_KEY_PREFIX,
        PoolVariant::Locked => LOCKED_POOL_KEY_PREFIX,
    }
}

pub fn share_balances_key_prefix(pool: PoolVariant) -> Vec<u8> {
    vec![pool_key_prefix(pool), SHARE_BALANCES_KEY_PREFIX]
}

pub fn cost_basis_key_prefix(pool: PoolVariant) -> Vec<u8> {
    vec![pool_key_prefix(pool), COST_BASIS_KEY_PREFIX]
}
