use crate::{
    domain::{self, AssetId},
    interface::{Duration, PoolId, Timestamp, TokenAmount},
};
use near_sdk::{
    json_types::U64,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Pool {
    pub id: PoolId,
    pub asset: AssetId,
    pub lock_duration: Duration,
    pub points_weight: U64,
    pub created_at: Timestamp,
    pub position_count: U64,
    pub active_stakers: U64,
    pub total_principal: TokenAmount,
    pub total_deposits: TokenAmount,
}

impl From<domain::Pool> for Pool {
    fn from(pool: domain::Pool) -> Self {
        Self {
            id: pool.id().into(),
            asset: pool.asset().clone(),
            lock_duration: pool.lock_duration().into(),
            points_weight: pool.points_weight().into(),
            created_at: pool.created_at().into(),
            position_count: pool.position_count().into(),
            active_stakers: pool.active_stakers().into(),
            total_principal: pool.total_principal().into(),
            total_deposits: pool.total_deposits().into(),
        }
    }
}
