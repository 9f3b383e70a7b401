pub mod contract_state;
mod asset_group;
mod emission_pool;
mod pool;
mod position;

pub use asset_group::AssetGroup;
pub use emission_pool::{EmissionPool, EmissionPosition};
pub use pool::Pool;
pub use position::Position;

use crate::domain;
use near_sdk::{
    json_types::{U128, U64},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct TokenAmount(pub U128);

impl From<domain::TokenAmount> for TokenAmount {
    fn from(value: domain::TokenAmount) -> Self {
        Self(value.0.into())
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl From<TokenAmount> for domain::TokenAmount {
    fn from(value: TokenAmount) -> Self {
        value.value().into()
    }
}

impl TokenAmount {
    pub fn value(&self) -> u128 {
        self.0 .0
    }
}

impl Default for TokenAmount {
    fn default() -> Self {
        Self(U128(0))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PoolId(pub U64);

impl From<domain::PoolId> for PoolId {
    fn from(value: domain::PoolId) -> Self {
        Self(value.0.into())
    }
}

impl From<u64> for PoolId {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<PoolId> for domain::PoolId {
    fn from(value: PoolId) -> Self {
        value.value().into()
    }
}

impl PoolId {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PositionIndex(pub U64);

impl From<domain::PositionIndex> for PositionIndex {
    fn from(value: domain::PositionIndex) -> Self {
        Self(value.0.into())
    }
}

impl From<u64> for PositionIndex {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<PositionIndex> for domain::PositionIndex {
    fn from(value: PositionIndex) -> Self {
        value.value().into()
    }
}

impl PositionIndex {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}

/// unix time in seconds
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Timestamp(pub U64);

impl From<domain::Timestamp> for Timestamp {
    fn from(value: domain::Timestamp) -> Self {
        Self(value.0.into())
    }
}

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}

/// seconds
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Duration(pub U64);

impl From<domain::Duration> for Duration {
    fn from(value: domain::Duration) -> Self {
        Self(value.0.into())
    }
}

impl From<u64> for Duration {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<Duration> for domain::Duration {
    fn from(value: Duration) -> Self {
        value.value().into()
    }
}

impl Duration {
    pub fn value(&self) -> u64 {
        self.0 .0
    }
}
