use crate::domain::AssetId;
use crate::interface::{AssetGroup, Pool, PoolId, Position, PositionIndex, TokenAmount};
use near_sdk::json_types::{ValidAccountId, U64};

/// read views onto the pool registry and the position ledger
pub trait StakingPools {
    fn pools_count(&self) -> U64;

    fn get_pool(&self, pool_id: PoolId) -> Option<Pool>;

    fn get_asset_group(&self, asset: AssetId) -> Option<AssetGroup>;

    fn get_position(&self, pool_id: PoolId, position_index: PositionIndex) -> Option<Position>;

    /// returns the indices of all positions, active and closed, that the account opened in the pool
    fn get_staker_positions(&self, pool_id: PoolId, account_id: ValidAccountId)
        -> Vec<PositionIndex>;

    /// number of distinct accounts with at least 1 active position in the pool
    fn active_stakers(&self, pool_id: PoolId) -> U64;

    /// number of active positions that the account has in the pool
    fn active_positions(&self, pool_id: PoolId, account_id: ValidAccountId) -> u32;

    /// the amount that would need to be paid to close the position right now
    ///
    /// ## Panics
    /// - if the position does not exist
    fn position_debt(&self, pool_id: PoolId, position_index: PositionIndex) -> TokenAmount;

    /// token transfers to the account that failed and can be retried via
    /// [crate::interface::StakingService::withdraw_pending_release]
    fn pending_release(&self, account_id: ValidAccountId, asset: AssetId) -> TokenAmount;
}
