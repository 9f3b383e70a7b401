use crate::{
    domain::{self, PositionStatus},
    interface::{PoolId, PositionIndex, Timestamp, TokenAmount},
};
use near_sdk::{
    serde::{Deserialize, Serialize},
    AccountId,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Position {
    pub pool_id: PoolId,
    pub index: PositionIndex,
    pub owner: AccountId,
    /// underlying asset that is released when the position is closed
    pub deposit: TokenAmount,
    pub principal: TokenAmount,
    pub staked_at: Timestamp,
    pub unlock_time: Timestamp,
    /// decimal encoded 256-bit fixed point value scaled by 10^24
    pub settlement_baseline: String,
    pub credited: TokenAmount,
    /// yield accrued since the last settlement
    pub pending_yield: TokenAmount,
    /// amount that must be repaid to close the position early, i.e., taking into account the
    /// pending yield - zero once the position is closed
    pub debt: TokenAmount,
    pub status: PositionStatus,
}

impl Position {
    pub fn from(
        pool_id: domain::PoolId,
        index: domain::PositionIndex,
        position: domain::Position,
        pending_yield: domain::TokenAmount,
    ) -> Self {
        let debt = if position.is_active() {
            position
                .principal()
                .saturating_sub(position.credited() + pending_yield)
        } else {
            domain::TokenAmount(0)
        };
        Self {
            pool_id: pool_id.into(),
            index: index.into(),
            owner: position.owner().clone(),
            deposit: position.deposit().into(),
            principal: position.principal().into(),
            staked_at: position.staked_at().into(),
            unlock_time: position.unlock_time().into(),
            settlement_baseline: position.settlement_baseline().to_string(),
            credited: position.credited().into(),
            pending_yield: pending_yield.into(),
            debt: debt.into(),
            status: position.status(),
        }
    }
}
