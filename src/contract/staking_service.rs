//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    contract::PendingReleaseKey,
    domain::{self, AssetId, TokenAmount},
    errors::{
        pool_errors::NATIVE_PAYMENT_NOT_ACCEPTED, staking_errors::INVALID_AMOUNT,
        treasury_errors::NO_PENDING_RELEASE,
    },
    events::RepaidWith,
    interface::{Duration, PoolId, PositionIndex, StakingService},
};
use near_sdk::{env, near_bindgen, Promise};

#[near_bindgen]
impl StakingService for StakingPoolsContract {
    #[payable]
    fn stake(&mut self, pool_id: PoolId) -> PositionIndex {
        let amount: TokenAmount = env::attached_deposit().into();
        assert!(!amount.is_zero(), INVALID_AMOUNT);
        self.assert_native_pool(pool_id.into());
        self.open_position(pool_id.into(), &env::predecessor_account_id(), amount)
            .into()
    }

    fn extend(&mut self, pool_id: PoolId, position_index: PositionIndex, extra_duration: Duration) {
        self.extend_position(
            pool_id.into(),
            position_index.into(),
            &env::predecessor_account_id(),
            extra_duration.into(),
        );
    }

    fn unstake(&mut self, pool_id: PoolId, position_index: PositionIndex) -> Promise {
        let account_id = env::predecessor_account_id();
        let exit = self.unstake_position(pool_id.into(), position_index.into(), &account_id);
        self.transfer_asset(&account_id, &exit.asset, exit.released)
    }

    #[payable]
    fn repay_with_principal_token(
        &mut self,
        pool_id: PoolId,
        position_index: PositionIndex,
    ) -> Promise {
        self.assert_native_pool(pool_id.into());
        let account_id = env::predecessor_account_id();
        let exit = self.repay_position(
            pool_id.into(),
            position_index.into(),
            &account_id,
            env::attached_deposit().into(),
            RepaidWith::PrincipalToken,
        );
        Promise::new(account_id).transfer((exit.refund + exit.released).value())
    }

    fn withdraw_pending_release(&mut self, asset: AssetId) -> Promise {
        let account_id = env::predecessor_account_id();
        let key = PendingReleaseKey::new(&account_id, asset.clone());
        let amount = self.pending_releases.remove(&key).expect(NO_PENDING_RELEASE);
        self.transfer_asset(&account_id, &asset, amount)
    }
}

impl StakingPoolsContract {
    /// NEAR can only be attached to calls for pools whose asset is NEAR
    fn assert_native_pool(&self, pool_id: domain::PoolId) {
        assert!(
            self.load_pool(pool_id).asset().is_native(),
            NATIVE_PAYMENT_NOT_ACCEPTED
        );
    }
}
