use crate::{
    domain::{self, AssetId},
    interface::{PoolId, Timestamp, TokenAmount},
};
use near_sdk::{
    json_types::U64,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct EmissionPool {
    pub id: PoolId,
    pub asset: AssetId,
    pub points_weight: U64,
    pub created_at: Timestamp,
    pub active_stakers: U64,
    pub total_staked: TokenAmount,
    /// claim tokens minted to stakers
    pub total_emitted: TokenAmount,
}

impl From<domain::EmissionPool> for EmissionPool {
    fn from(pool: domain::EmissionPool) -> Self {
        Self {
            id: pool.id().into(),
            asset: pool.asset().clone(),
            points_weight: pool.points_weight().into(),
            created_at: pool.created_at().into(),
            active_stakers: pool.active_stakers().into(),
            total_staked: pool.total_staked().into(),
            total_emitted: pool.total_emitted().into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct EmissionPosition {
    pub amount: TokenAmount,
    /// claim tokens that can be claimed right now
    pub pending_reward: TokenAmount,
    pub total_claimed: TokenAmount,
}

impl EmissionPosition {
    pub fn from(position: domain::EmissionPosition, now: domain::Timestamp) -> Self {
        Self {
            amount: position.amount().into(),
            pending_reward: position.pending(now).into(),
            total_claimed: position.total_claimed().into(),
        }
    }
}
