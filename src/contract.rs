pub mod account_storage;
pub mod callbacks;
pub mod contract_owner;
pub mod emission_pools;
pub mod ledger;
pub mod operator;
pub mod settings;
pub mod staking_pools;
pub mod staking_service;
pub mod token_receiver;
pub mod yield_harvester;

#[cfg(test)]
pub(crate) mod test_context;

pub use callbacks::*;

use crate::{
    core::Hash,
    domain::{AssetGroup, AssetId, Pool, PoolId, Position, PositionKey, TokenAmount},
    errors::{
        asserts::{PREDECESSOR_MUST_BE_OPERATOR, PREDECESSOR_MUST_BE_OWNER},
        illegal_state::ASSET_GROUP_SHOULD_EXIST,
        pool_errors::{ASSET_NOT_REGISTERED, POOL_NOT_FOUND},
        staking_errors::INVALID_POSITION,
    },
    interface::ext_fungible_token,
    near::{NO_DEPOSIT, ONE_YOCTO},
    StakingPoolsContract,
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env, AccountId, Promise,
};

/// storage key for a failed token transfer to an account
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct PendingReleaseKey {
    pub account_hash: Hash,
    pub asset: AssetId,
}

impl PendingReleaseKey {
    /// depends on NEAR runtime env
    pub fn new(account_id: &str, asset: AssetId) -> Self {
        Self {
            account_hash: Hash::from(account_id),
            asset,
        }
    }
}

impl StakingPoolsContract {
    pub(crate) fn assert_predecessor_is_operator(&self) {
        assert_eq!(
            env::predecessor_account_id(),
            self.operator_id,
            "{}",
            PREDECESSOR_MUST_BE_OPERATOR
        );
    }

    pub(crate) fn assert_predecessor_is_owner(&self) {
        assert_eq!(
            env::predecessor_account_id(),
            self.owner_id,
            "{}",
            PREDECESSOR_MUST_BE_OWNER
        );
    }

    /// ## Panics
    /// if the pool does not exist
    pub(crate) fn load_pool(&self, pool_id: PoolId) -> Pool {
        self.pools.get(pool_id.value()).expect(POOL_NOT_FOUND)
    }

    pub(crate) fn save_pool(&mut self, pool: &Pool) {
        self.pools.replace(pool.id().value(), pool);
    }

    /// ## Panics
    /// if the asset group is not registered
    pub(crate) fn load_asset_group(&self, asset: &AssetId) -> AssetGroup {
        self.asset_groups.get(asset).expect(ASSET_NOT_REGISTERED)
    }

    /// loads the asset group for a pool that is known to exist
    pub(crate) fn pool_asset_group(&self, pool: &Pool) -> AssetGroup {
        self.asset_groups
            .get(pool.asset())
            .expect(ASSET_GROUP_SHOULD_EXIST)
    }

    pub(crate) fn save_asset_group(&mut self, asset: &AssetId, group: &AssetGroup) {
        self.asset_groups.insert(asset, group);
    }

    /// ## Panics
    /// if the position does not exist
    pub(crate) fn load_position(&self, key: &PositionKey) -> Position {
        self.positions.get(key).expect(INVALID_POSITION)
    }

    pub(crate) fn save_position(&mut self, key: &PositionKey, position: &Position) {
        self.positions.insert(key, position);
    }

    /// Transfers the asset from the contract to the account.
    ///
    /// Token transfers are followed by the [ExtStakingPoolsCallbacks::on_asset_transferred]
    /// callback, which records the amount as a pending release if the transfer failed.
    pub(crate) fn transfer_asset(
        &self,
        account_id: &AccountId,
        asset: &AssetId,
        amount: TokenAmount,
    ) -> Promise {
        match asset {
            AssetId::Native => Promise::new(account_id.clone()).transfer(amount.value()),
            AssetId::Token(token_id) => ext_fungible_token::ft_transfer(
                account_id.clone(),
                amount.value().into(),
                None,
                token_id,
                ONE_YOCTO.into(),
                self.config
                    .gas_config()
                    .fungible_token()
                    .ft_transfer()
                    .value(),
            )
            .then(ext_staking_pools_callbacks::on_asset_transferred(
                account_id.clone(),
                asset.clone(),
                amount.value().into(),
                &env::current_account_id(),
                NO_DEPOSIT.into(),
                self.config
                    .gas_config()
                    .callbacks()
                    .on_asset_transferred()
                    .value(),
            )),
        }
    }
}
