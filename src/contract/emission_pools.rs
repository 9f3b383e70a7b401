//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    domain::{self, StakerKey, Timestamp, TokenAmount},
    errors::{
        emission_errors::{EMISSION_POOL_NOT_FOUND, NO_STAKING},
        pool_errors::NATIVE_PAYMENT_NOT_ACCEPTED,
        staking_errors::INVALID_AMOUNT,
    },
    events::{EmissionClaimed, EmissionStaked, EmissionUnstaked},
    interface::{self, EmissionPools, PoolId},
    near::log,
};
use near_sdk::{
    env,
    json_types::{ValidAccountId, U64},
    near_bindgen, Promise,
};

#[near_bindgen]
impl EmissionPools for StakingPoolsContract {
    fn emission_pools_count(&self) -> U64 {
        self.emission_pools.len().into()
    }

    fn get_emission_pool(&self, pool_id: PoolId) -> Option<interface::EmissionPool> {
        self.emission_pools
            .get(pool_id.value())
            .map(interface::EmissionPool::from)
    }

    fn get_emission_position(
        &self,
        pool_id: PoolId,
        account_id: ValidAccountId,
    ) -> Option<interface::EmissionPosition> {
        self.emission_positions
            .get(&StakerKey::new(pool_id.into(), account_id.as_ref()))
            .map(|position| interface::EmissionPosition::from(position, Timestamp::now()))
    }

    #[payable]
    fn stake_emission(&mut self, pool_id: PoolId) -> interface::TokenAmount {
        let pool_id: domain::PoolId = pool_id.into();
        assert!(
            self.load_emission_pool(pool_id).asset().is_native(),
            NATIVE_PAYMENT_NOT_ACCEPTED
        );
        self.stake_into_emission_pool(
            pool_id,
            &env::predecessor_account_id(),
            env::attached_deposit().into(),
        )
        .into()
    }

    fn claim_pending_reward(&mut self, pool_id: PoolId) -> interface::TokenAmount {
        let account_id = env::predecessor_account_id();
        let pool_id: domain::PoolId = pool_id.into();
        let mut pool = self.load_emission_pool(pool_id);
        let key = StakerKey::new(pool_id, &account_id);
        let mut position = self.load_staked_emission_position(&key);

        position.accrue(Timestamp::now());
        let claimed = pool.claim(&mut position);
        self.emission_positions.insert(&key, &position);
        self.emission_pools.replace(pool_id.value(), &pool);

        self.mint_emission(&pool, &account_id, claimed);
        log(EmissionClaimed {
            pool_id,
            account_id: &account_id,
            amount: claimed,
        });
        claimed.into()
    }

    fn unstake_emission(&mut self, pool_id: PoolId) -> Promise {
        let account_id = env::predecessor_account_id();
        let pool_id: domain::PoolId = pool_id.into();
        let mut pool = self.load_emission_pool(pool_id);
        let key = StakerKey::new(pool_id, &account_id);
        let mut position = self.load_staked_emission_position(&key);

        position.accrue(Timestamp::now());
        let claimed = pool.claim(&mut position);
        let released = pool.unstake(&mut position);
        self.emission_positions.insert(&key, &position);
        self.emission_pools.replace(pool_id.value(), &pool);

        self.mint_emission(&pool, &account_id, claimed);
        log(EmissionUnstaked {
            pool_id,
            account_id: &account_id,
            released,
            claimed,
        });
        self.transfer_asset(&account_id, pool.asset(), released)
    }
}

impl StakingPoolsContract {
    /// The asset must already have been received by the contract.
    ///
    /// Returns the account's total stake in the pool.
    ///
    /// ## Panics
    /// - if `amount` is zero
    /// - if the pool does not exist
    /// - if the account's storage balance does not cover the storage fee
    pub(crate) fn stake_into_emission_pool(
        &mut self,
        pool_id: domain::PoolId,
        account_id: &AccountId,
        amount: TokenAmount,
    ) -> TokenAmount {
        assert!(!amount.is_zero(), INVALID_AMOUNT);
        let initial_storage_usage = env::storage_usage();
        let mut pool = self.load_emission_pool(pool_id);
        let key = StakerKey::new(pool_id, account_id);
        let now = Timestamp::now();
        let mut position = self
            .emission_positions
            .get(&key)
            .unwrap_or_else(|| EmissionPosition::new(now));

        position.accrue(now);
        pool.stake(&mut position, amount);
        self.emission_positions.insert(&key, &position);
        self.emission_pools.replace(pool_id.value(), &pool);
        self.charge_storage_fee(account_id, initial_storage_usage);

        log(EmissionStaked {
            pool_id,
            account_id,
            amount,
            total: position.amount(),
        });
        position.amount()
    }

    /// ## Panics
    /// if the pool does not exist
    pub(crate) fn load_emission_pool(&self, pool_id: domain::PoolId) -> EmissionPool {
        self.emission_pools
            .get(pool_id.value())
            .expect(EMISSION_POOL_NOT_FOUND)
    }

    fn load_staked_emission_position(&self, key: &StakerKey) -> EmissionPosition {
        let position = self.emission_positions.get(key).expect(NO_STAKING);
        assert!(!position.amount().is_zero(), NO_STAKING);
        position
    }

    fn mint_emission(
        &self,
        pool: &EmissionPool,
        account_id: &AccountId,
        amount: TokenAmount,
    ) -> Option<Promise> {
        if amount.is_zero() {
            return None;
        }
        let group = self.load_asset_group(pool.asset());
        Some(self.mint_claim_tokens(&group, account_id, amount))
    }
}
