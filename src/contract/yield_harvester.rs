//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    contract::ext_staking_pools_callbacks,
    domain::{AssetId, HarvestOutcome, TokenAmount},
    errors::{
        asserts::PREDECESSOR_MUST_BE_YIELD_SOURCE,
        treasury_errors::YIELD_SOURCE_NOT_SET,
        yield_source_failures::{CLAIM_YIELD_FAILURE, INVALID_CLAIMED_AMOUNT},
    },
    events::{YieldClaimed, YieldHarvested},
    interface::{self, ext_yield_source, YieldHarvester},
    near::{assert_predecessor_is_self, log, NO_DEPOSIT},
};
use near_sdk::{env, json_types::U128, near_bindgen, serde_json, Promise, PromiseResult};

#[near_bindgen]
impl YieldHarvester for StakingPoolsContract {
    fn harvest(&mut self, asset: AssetId) -> Promise {
        self.load_asset_group(&asset);
        let yield_source_id = self.yield_source_id.as_ref().expect(YIELD_SOURCE_NOT_SET);
        let gas_config = self.config.gas_config();
        ext_yield_source::claim_yield(
            asset.clone(),
            yield_source_id,
            NO_DEPOSIT.into(),
            gas_config.yield_source().claim_yield().value(),
        )
        .then(ext_staking_pools_callbacks::on_harvest(
            asset,
            &env::current_account_id(),
            NO_DEPOSIT.into(),
            gas_config.callbacks().on_harvest().value(),
        ))
    }

    fn claimable_yield(&self, asset: AssetId) -> Promise {
        let yield_source_id = self.yield_source_id.as_ref().expect(YIELD_SOURCE_NOT_SET);
        ext_yield_source::claimable_yield(
            asset,
            yield_source_id,
            NO_DEPOSIT.into(),
            self.config
                .gas_config()
                .yield_source()
                .claimable_yield()
                .value(),
        )
    }

    #[payable]
    fn deposit_yield(&mut self) -> interface::TokenAmount {
        self.assert_predecessor_is_yield_source();
        let amount: TokenAmount = env::attached_deposit().into();
        self.apply_harvest(&AssetId::Native, amount);
        amount.into()
    }
}

#[near_bindgen]
impl StakingPoolsContract {
    /// By the time the callback runs, the yield has already been applied when it was received via
    /// `deposit_yield` or `ft_on_transfer`. The claimed amount is only reported.
    ///
    /// ## Panics
    /// - if the `claim_yield` call failed
    pub fn on_harvest(&mut self, asset: AssetId) -> U128 {
        assert_predecessor_is_self();
        let amount: U128 = match env::promise_result(0) {
            PromiseResult::Successful(result) => {
                serde_json::from_slice(&result).expect(INVALID_CLAIMED_AMOUNT)
            }
            _ => panic!(CLAIM_YIELD_FAILURE),
        };
        log(YieldClaimed {
            asset: &asset,
            delivered: amount.0.into(),
        });
        amount
    }
}

impl StakingPoolsContract {
    pub(crate) fn assert_predecessor_is_yield_source(&self) {
        let yield_source_id = self.yield_source_id.as_ref().expect(YIELD_SOURCE_NOT_SET);
        assert_eq!(
            &env::predecessor_account_id(),
            yield_source_id,
            "{}",
            PREDECESSOR_MUST_BE_YIELD_SOURCE
        );
    }

    pub(crate) fn apply_harvest(&mut self, asset: &AssetId, amount: TokenAmount) -> HarvestOutcome {
        let mut group = self.load_asset_group(asset);
        let outcome = group.harvest(amount);
        if outcome != HarvestOutcome::Ignored {
            self.save_asset_group(asset, &group);
            log(YieldHarvested {
                asset,
                amount,
                escrowed: outcome == HarvestOutcome::Escrowed,
            });
        }
        outcome
    }
}
