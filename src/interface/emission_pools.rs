use crate::interface::{EmissionPool, EmissionPosition, PoolId, TokenAmount};
use near_sdk::json_types::{ValidAccountId, U64};
use near_sdk::Promise;

/// Non-lock pools that emit claim tokens over time.
///
/// An account holds a single stake per pool, which emits 1 claim token per staked unit per year.
/// Stakes can be increased and withdrawn at any time. Token pools receive stakes via NEP-141
/// `ft_transfer_call` - see [crate::interface::TransferMessage::StakeEmission].
///
/// Emission pools are independent of the reward accumulator, i.e., their stakes do not share
/// harvested yield.
pub trait EmissionPools {
    fn emission_pools_count(&self) -> U64;

    fn get_emission_pool(&self, pool_id: PoolId) -> Option<EmissionPool>;

    fn get_emission_position(
        &self,
        pool_id: PoolId,
        account_id: ValidAccountId,
    ) -> Option<EmissionPosition>;

    /// Adds the attached deposit to the predecessor's stake in the pool.
    ///
    /// ## Panics
    /// - if no deposit is attached
    /// - if the pool does not exist
    /// - if the pool's asset is not NEAR
    /// - if the account's storage balance does not cover the storage fee
    ///
    /// #[payable]
    fn stake_emission(&mut self, pool_id: PoolId) -> TokenAmount;

    /// Mints the pending reward to the predecessor account.
    ///
    /// Returns the amount of claim tokens that were minted.
    ///
    /// ## Panics
    /// - if the pool does not exist
    /// - if the predecessor has no stake in the pool
    fn claim_pending_reward(&mut self, pool_id: PoolId) -> TokenAmount;

    /// Withdraws the predecessor's full stake and mints the pending reward.
    ///
    /// ## Panics
    /// - if the pool does not exist
    /// - if the predecessor has no stake in the pool
    fn unstake_emission(&mut self, pool_id: PoolId) -> Promise;
}
