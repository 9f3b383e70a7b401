use crate::config::{self, Config};
use crate::domain::AssetId;
use crate::interface::{contract_state::ContractState, Duration, PoolId, TokenAmount};
use near_sdk::json_types::{ValidAccountId, U64};
use near_sdk::AccountId;

pub trait Operator {
    ////////////////////////////
    ///     VIEW METHODS    ///
    /// //////////////////////

    fn operator_id(&self) -> AccountId;

    /// returns the contract's state
    /// - useful for monitoring and debugging
    fn contract_state(&self) -> ContractState;

    fn config(&self) -> Config;

    //////////////////////////////
    ///     CHANGE METHODS    ///
    /// ////////////////////////

    /// ## Panics
    /// - if the predecessor account is not the operator
    fn update_config(&mut self, config: config::updates::Config) -> Config;

    /// Registers the claim token contract for the asset. All pools that stake the asset share the
    /// asset group's reward accumulator.
    ///
    /// ## Panics
    /// - if the predecessor account is not the operator
    /// - if the asset is already registered
    fn register_asset_group(&mut self, asset: AssetId, claim_token_id: ValidAccountId);

    /// Pools are append only. A zero `lock_duration` creates a flexible pool.
    ///
    /// `points_weight` has no effect on the ledger - it is stored for off-chain points tracking.
    ///
    /// ## Panics
    /// - if the predecessor account is not the operator
    /// - if the asset group is not registered
    /// - if the lock duration exceeds 10 years
    fn create_pool(&mut self, lock_duration: Duration, points_weight: U64, asset: AssetId)
        -> PoolId;

    /// Emission pools are append only and are numbered independently from the locked and flexible
    /// pools.
    ///
    /// ## Panics
    /// - if the predecessor account is not the operator
    /// - if the asset group is not registered
    fn create_emission_pool(&mut self, points_weight: U64, asset: AssetId) -> PoolId;

    /// ## Panics
    /// - if the predecessor account is not the operator
    fn set_treasury(&mut self, treasury_id: ValidAccountId);

    /// ## Panics
    /// - if the predecessor account is not the operator
    fn set_yield_source(&mut self, yield_source_id: ValidAccountId);

    /// Transfers the asset group's reserve, i.e., harvested yield and repaid debt, to the treasury.
    ///
    /// Returns the amount that was transferred.
    ///
    /// ## Panics
    /// - if the predecessor account is not the operator
    /// - if the treasury is not set
    fn sweep_reserve(&mut self, asset: AssetId) -> TokenAmount;
}
