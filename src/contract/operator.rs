//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    config,
    domain::{self, AssetId, Timestamp, MAX_LOCK_DURATION},
    errors::{
        pool_errors::ASSET_ALREADY_REGISTERED, staking_errors::DURATION_EXCEEDED,
        treasury_errors::TREASURY_NOT_SET,
    },
    events,
    interface::{contract_state::ContractState, Duration, Operator, PoolId},
    near::log,
};
use near_sdk::{
    env,
    json_types::{ValidAccountId, U64},
    near_bindgen,
};

#[near_bindgen]
impl Operator for StakingPoolsContract {
    fn operator_id(&self) -> AccountId {
        self.operator_id.clone()
    }

    fn contract_state(&self) -> ContractState {
        ContractState {
            block_height: env::block_index().into(),
            block_timestamp: env::block_timestamp().into(),
            config_change_block_height: self.config_change_block_height.into(),
            owner_id: self.owner_id.clone(),
            operator_id: self.operator_id.clone(),
            treasury_id: self.treasury_id.clone(),
            yield_source_id: self.yield_source_id.clone(),
            pools_count: self.pools.len().into(),
            asset_groups: self.asset_group_views(),
            storage_usage: env::storage_usage().into(),
        }
    }

    fn config(&self) -> Config {
        self.config.clone()
    }

    fn update_config(&mut self, config: config::updates::Config) -> Config {
        self.assert_predecessor_is_operator();
        self.config.apply_updates(&config);
        self.config_change_block_height = env::block_index();
        self.config.clone()
    }

    fn register_asset_group(&mut self, asset: AssetId, claim_token_id: ValidAccountId) {
        self.assert_predecessor_is_operator();
        assert!(
            self.asset_groups.get(&asset).is_none(),
            ASSET_ALREADY_REGISTERED
        );
        let group = AssetGroup::new(claim_token_id.into());
        self.save_asset_group(&asset, &group);
        log(events::AssetGroupRegistered {
            asset: &asset,
            claim_token_id: group.claim_token_id(),
        });
        self.assets.push(asset);
    }

    fn create_pool(&mut self, lock_duration: Duration, points_weight: U64, asset: AssetId) -> PoolId {
        self.assert_predecessor_is_operator();
        let lock_duration: domain::Duration = lock_duration.into();
        assert!(lock_duration <= MAX_LOCK_DURATION, DURATION_EXCEEDED);
        // the asset group must be registered
        self.load_asset_group(&asset);

        let pool_id = domain::PoolId(self.pools.len());
        let pool = Pool::new(
            pool_id,
            asset,
            lock_duration,
            points_weight.0,
            Timestamp::now(),
        );
        self.pools.push(&pool);
        log(events::PoolCreated {
            pool_id,
            asset: pool.asset(),
            lock_duration: lock_duration.value(),
            points_weight: pool.points_weight(),
        });
        pool_id.into()
    }

    fn create_emission_pool(&mut self, points_weight: U64, asset: AssetId) -> PoolId {
        self.assert_predecessor_is_operator();
        self.load_asset_group(&asset);

        let pool_id = domain::PoolId(self.emission_pools.len());
        let pool = EmissionPool::new(pool_id, asset, points_weight.0, Timestamp::now());
        self.emission_pools.push(&pool);
        log(events::EmissionPoolCreated {
            pool_id,
            asset: pool.asset(),
            points_weight: pool.points_weight(),
        });
        pool_id.into()
    }

    fn set_treasury(&mut self, treasury_id: ValidAccountId) {
        self.assert_predecessor_is_operator();
        self.treasury_id = Some(treasury_id.into());
    }

    fn set_yield_source(&mut self, yield_source_id: ValidAccountId) {
        self.assert_predecessor_is_operator();
        self.yield_source_id = Some(yield_source_id.into());
    }

    fn sweep_reserve(&mut self, asset: AssetId) -> interface::TokenAmount {
        self.assert_predecessor_is_operator();
        let treasury_id = self.treasury_id.clone().expect(TREASURY_NOT_SET);
        let mut group = self.load_asset_group(&asset);
        let amount = group.withdraw_reserve();
        if !amount.is_zero() {
            self.save_asset_group(&asset, &group);
            self.transfer_asset(&treasury_id, &asset, amount);
            log(events::ReserveSwept {
                asset: &asset,
                treasury_id: &treasury_id,
                amount,
            });
        }
        amount.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::contract::test_context::*;
    use crate::domain::{Gas, SECS_PER_YEAR};
    use crate::interface::{EmissionPools, StakingPools};
    use crate::near::YOCTO;
    use near_sdk::serde_json;

    #[test]
    fn contract_state() {
        let ctx = TestContext::new();
        let state = ctx.contract.contract_state();
        assert_eq!(state.owner_id, OWNER);
        assert_eq!(state.operator_id, OPERATOR);
        assert_eq!(state.treasury_id, Some(TREASURY.to_string()));
        assert_eq!(state.yield_source_id, Some(YIELD_SOURCE.to_string()));
        assert_eq!(state.pools_count.0, 3);
        assert_eq!(state.asset_groups.len(), 2);
        println!("{}", serde_json::to_string_pretty(&state).unwrap());
    }

    #[test]
    fn update_config() {
        let mut ctx = TestContext::new();
        ctx.set_block_time(10);
        ctx.call(OPERATOR, 0);
        let updates: config::updates::Config = serde_json::from_str(
            r#"{"gas_config":{"yield_source":{"claim_yield":1000}}}"#,
        )
        .unwrap();
        let config = ctx.contract.update_config(updates);
        assert_eq!(config.gas_config().yield_source().claim_yield(), Gas(1000));
        assert_eq!(ctx.contract.config(), config);
        assert_eq!(
            ctx.contract.contract_state().config_change_block_height.0,
            ctx.context.block_index
        );
    }

    #[test]
    #[should_panic(expected = "contract call is only allowed by an operator account")]
    fn update_config_by_non_operator() {
        let mut ctx = TestContext::new();
        ctx.call(ALICE, 0);
        ctx.contract.update_config(Default::default());
    }

    #[test]
    #[should_panic(expected = "asset group is already registered")]
    fn register_asset_group_twice() {
        let mut ctx = TestContext::new();
        ctx.call(OPERATOR, 0);
        ctx.contract
            .register_asset_group(AssetId::Native, valid_account_id("other.near"));
    }

    #[test]
    fn create_pool() {
        let mut ctx = TestContext::new();
        ctx.set_block_time(100);
        ctx.call(OPERATOR, 0);
        let pool_id = ctx
            .contract
            .create_pool((10 * SECS_PER_YEAR).into(), 5.into(), usdb());
        assert_eq!(pool_id.value(), 3);

        let pool = ctx.contract.get_pool(pool_id).unwrap();
        assert_eq!(pool.lock_duration.value(), 10 * SECS_PER_YEAR);
        assert_eq!(pool.points_weight.0, 5);
        assert_eq!(pool.created_at.value(), 100);
        assert_eq!(pool.active_stakers.0, 0);
    }

    #[test]
    #[should_panic(expected = "DurationExceeded")]
    fn create_pool_with_lock_beyond_max() {
        let mut ctx = TestContext::new();
        ctx.call(OPERATOR, 0);
        ctx.contract
            .create_pool((10 * SECS_PER_YEAR + 1).into(), 1.into(), usdb());
    }

    #[test]
    #[should_panic(expected = "asset group is not registered")]
    fn create_pool_for_unregistered_asset() {
        let mut ctx = TestContext::new();
        ctx.call(OPERATOR, 0);
        ctx.contract.create_pool(
            0.into(),
            1.into(),
            AssetId::Token("unknown.near".to_string()),
        );
    }

    #[test]
    #[should_panic(expected = "contract call is only allowed by an operator account")]
    fn create_pool_by_non_operator() {
        let mut ctx = TestContext::new();
        ctx.call(OWNER, 0);
        ctx.contract.create_pool(0.into(), 1.into(), AssetId::Native);
    }

    #[test]
    fn create_emission_pool() {
        let mut ctx = TestContext::new();
        ctx.set_block_time(100);
        ctx.call(OPERATOR, 0);
        let pool_id = ctx.contract.create_emission_pool(7.into(), usdb());
        assert_eq!(pool_id.value(), 2);

        let pool = ctx.contract.get_emission_pool(pool_id).unwrap();
        assert_eq!(pool.asset, usdb());
        assert_eq!(pool.points_weight.0, 7);
        assert_eq!(pool.created_at.value(), 100);
        assert_eq!(pool.total_staked.value(), 0);
        // emission pools are numbered independently
        assert_eq!(ctx.contract.contract_state().pools_count.0, 3);
    }

    #[test]
    #[should_panic(expected = "asset group is not registered")]
    fn create_emission_pool_for_unregistered_asset() {
        let mut ctx = TestContext::new();
        ctx.call(OPERATOR, 0);
        ctx.contract
            .create_emission_pool(1.into(), AssetId::Token("unknown.near".to_string()));
    }

    #[test]
    #[should_panic(expected = "contract call is only allowed by an operator account")]
    fn create_emission_pool_by_non_operator() {
        let mut ctx = TestContext::new();
        ctx.call(ALICE, 0);
        ctx.contract.create_emission_pool(1.into(), AssetId::Native);
    }

    #[test]
    fn sweep_reserve() {
        let mut ctx = TestContext::new();
        ctx.stake_native(ctx.flexible_pool, ALICE, YOCTO);
        ctx.harvest(&AssetId::Native, YOCTO);
        ctx.harvest(&AssetId::Native, YOCTO);

        ctx.call(OPERATOR, 0);
        let amount = ctx.contract.sweep_reserve(AssetId::Native);
        assert_eq!(amount.value(), 2 * YOCTO);
        let group = ctx.contract.get_asset_group(AssetId::Native).unwrap();
        assert_eq!(group.reserve.value(), 0);
        // accounting totals are unaffected
        assert_eq!(group.total_harvested.value(), 2 * YOCTO);

        assert_eq!(ctx.contract.sweep_reserve(AssetId::Native).value(), 0);
    }

    #[test]
    #[should_panic(expected = "contract call is only allowed by an operator account")]
    fn sweep_reserve_by_non_operator() {
        let mut ctx = TestContext::new();
        ctx.call(TREASURY, 0);
        ctx.contract.sweep_reserve(AssetId::Native);
    }

    #[test]
    #[should_panic(expected = "treasury account is not set")]
    fn sweep_reserve_without_treasury() {
        let mut ctx = TestContext::new();
        ctx.contract.treasury_id = None;
        ctx.call(OPERATOR, 0);
        ctx.contract.sweep_reserve(AssetId::Native);
    }
}
