//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    contract::PendingReleaseKey,
    domain::{self, AssetId, PositionKey, StakerKey},
    errors::staking_errors::INVALID_POSITION,
    interface::{self, PoolId, PositionIndex, StakingPools},
};
use near_sdk::{
    json_types::{ValidAccountId, U64},
    near_bindgen,
};

#[near_bindgen]
impl StakingPools for StakingPoolsContract {
    fn pools_count(&self) -> U64 {
        self.pools.len().into()
    }

    fn get_pool(&self, pool_id: PoolId) -> Option<interface::Pool> {
        self.pools.get(pool_id.value()).map(interface::Pool::from)
    }

    fn get_asset_group(&self, asset: AssetId) -> Option<interface::AssetGroup> {
        self.asset_groups
            .get(&asset)
            .map(|group| interface::AssetGroup::from(asset, group))
    }

    fn get_position(
        &self,
        pool_id: PoolId,
        position_index: PositionIndex,
    ) -> Option<interface::Position> {
        let pool = self.pools.get(pool_id.value())?;
        let position = self
            .positions
            .get(&PositionKey::new(pool_id.into(), position_index.into()))?;
        let pending_yield = self.pool_asset_group(&pool).pending_yield(&position);
        Some(interface::Position::from(
            pool_id.into(),
            position_index.into(),
            position,
            pending_yield,
        ))
    }

    fn get_staker_positions(
        &self,
        pool_id: PoolId,
        account_id: ValidAccountId,
    ) -> Vec<PositionIndex> {
        self.stakers
            .get(&StakerKey::new(pool_id.into(), account_id.as_ref()))
            .map_or_else(Vec::new, |staker_positions| {
                staker_positions
                    .position_indices()
                    .iter()
                    .map(|index| PositionIndex::from(*index))
                    .collect()
            })
    }

    fn active_stakers(&self, pool_id: PoolId) -> U64 {
        self.pools
            .get(pool_id.value())
            .map_or(0, |pool| pool.active_stakers())
            .into()
    }

    fn active_positions(&self, pool_id: PoolId, account_id: ValidAccountId) -> u32 {
        self.stakers
            .get(&StakerKey::new(pool_id.into(), account_id.as_ref()))
            .map_or(0, |staker_positions| staker_positions.active_positions())
    }

    fn position_debt(
        &self,
        pool_id: PoolId,
        position_index: PositionIndex,
    ) -> interface::TokenAmount {
        self.get_position(pool_id, position_index)
            .map(|position| position.debt)
            .expect(INVALID_POSITION)
    }

    fn pending_release(&self, account_id: ValidAccountId, asset: AssetId) -> interface::TokenAmount {
        self.pending_releases
            .get(&PendingReleaseKey::new(account_id.as_ref(), asset))
            .unwrap_or_default()
            .into()
    }
}

impl StakingPoolsContract {
    /// all registered asset groups in registration order
    pub(crate) fn asset_group_views(&self) -> Vec<interface::AssetGroup> {
        self.assets
            .iter()
            .map(|asset| {
                let group: domain::AssetGroup = self.load_asset_group(asset);
                interface::AssetGroup::from(asset.clone(), group)
            })
            .collect()
    }
}
