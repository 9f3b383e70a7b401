//! defines the interfaces that the contract exposes externally

mod account_storage;
mod contract_owner;
mod emission_pools;
mod fungible_token;
mod model;
mod operator;
mod staking_pools;
mod staking_service;
mod yield_harvester;
mod yield_source;

pub use account_storage::*;
pub use contract_owner::*;
pub use emission_pools::*;
pub use fungible_token::*;
pub use model::*;
pub use operator::*;
pub use staking_pools::*;
pub use staking_service::*;
pub use yield_harvester::*;
pub use yield_source::*;
