use crate::{
    domain::{AssetId, TokenAmount},
    events::AssetTransferFailed,
    near::{assert_predecessor_is_self, is_promise_result_success, log},
    StakingPoolsContract,
};
use near_sdk::{env, ext_contract, json_types::U128, near_bindgen, AccountId};

#[ext_contract(ext_staking_pools_callbacks)]
pub trait ExtStakingPoolsCallbacks {
    /// receives the amount returned by the yield source's `claim_yield`
    fn on_harvest(&mut self, asset: AssetId) -> U128;

    /// records the amount as a pending release if the token transfer failed
    fn on_asset_transferred(&mut self, account_id: AccountId, asset: AssetId, amount: U128);
}

#[near_bindgen]
impl StakingPoolsContract {
    pub fn on_asset_transferred(&mut self, account_id: AccountId, asset: AssetId, amount: U128) {
        assert_predecessor_is_self();
        if !is_promise_result_success(env::promise_result(0)) {
            self.credit_pending_release(&account_id, &asset, amount.0.into());
        }
    }
}

impl StakingPoolsContract {
    pub(crate) fn credit_pending_release(
        &mut self,
        account_id: &str,
        asset: &AssetId,
        amount: TokenAmount,
    ) {
        let key = super::PendingReleaseKey::new(account_id, asset.clone());
        let mut balance = self.pending_releases.get(&key).unwrap_or_default();
        balance += amount;
        self.pending_releases.insert(&key, &balance);
        log(AssetTransferFailed {
            account_id,
            asset,
            amount,
        });
    }
}
