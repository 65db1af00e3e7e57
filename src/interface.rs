//! defines the interfaces that the contract exposes externally

pub mod contract_owner;
mod model;
pub mod staking_service;

pub use crate::domain::PoolVariant;
pub use contract_owner::ContractOwner;
pub use model::*;
pub use staking_service::StakingService;
