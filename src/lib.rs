pub mod config;
pub mod contract;
pub mod core;
pub mod domain;
pub mod errors;
pub mod events;
pub mod interface;
pub mod near;

#[cfg(test)]
pub(crate) mod test_utils;

use crate::{
    config::Config,
    contract::settings::ContractSettings,
    core::Hash,
    domain::{
        AssetGroup, AssetId, EmissionPool, EmissionPosition, Pool, Position, PositionKey,
        StakerKey, StakerPositions,
    },
    errors::asserts::OPERATOR_ID_MUST_NOT_BE_CONTRACT_ID,
    near::storage_keys::{
        ASSET_GROUPS_KEY_PREFIX, EMISSION_POOLS_KEY_PREFIX, EMISSION_POSITIONS_KEY_PREFIX,
        PENDING_RELEASES_KEY_PREFIX, POOLS_KEY_PREFIX, POSITIONS_KEY_PREFIX, STAKERS_KEY_PREFIX,
        STORAGE_BALANCES_KEY_PREFIX,
    },
};
use contract::PendingReleaseKey;
use domain::TokenAmount;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::{LookupMap, Vector},
    env,
    json_types::ValidAccountId,
    near_bindgen, AccountId, BlockHeight, PanicOnDefault,
};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: near_sdk::wee_alloc::WeeAlloc = near_sdk::wee_alloc::WeeAlloc::INIT;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct StakingPoolsContract {
    /// owner is allowed to change the operator
    owner_id: AccountId,
    /// Operator is allowed to perform operator actions on the contract
    operator_id: AccountId,
    /// receives swept reserves and repaid claim tokens
    treasury_id: Option<AccountId>,
    yield_source_id: Option<AccountId>,

    config: Config,
    /// when the config was last changed
    /// the block info can be looked up via its block index: https://docs.near.org/docs/api/rpc#block
    config_change_block_height: BlockHeight,

    /// registered assets in registration order - used to enumerate asset groups
    assets: Vec<AssetId>,
    asset_groups: LookupMap<AssetId, AssetGroup>,
    pools: Vector<Pool>,
    positions: LookupMap<PositionKey, Position>,
    stakers: LookupMap<StakerKey, StakerPositions>,
    /// token transfers that failed and can be retried by the receiver
    pending_releases: LookupMap<PendingReleaseKey, TokenAmount>,
    /// NEAR prepaid by accounts for the storage their positions use
    storage_balances: LookupMap<Hash, TokenAmount>,

    emission_pools: Vector<EmissionPool>,
    emission_positions: LookupMap<StakerKey, EmissionPosition>,
}

#[near_bindgen]
impl StakingPoolsContract {
    /// The predecessor account becomes the contract owner.
    ///
    /// ## Panics
    /// - if the operator account ID is the contract account ID
    #[init]
    pub fn new(operator_id: ValidAccountId, settings: Option<ContractSettings>) -> Self {
        assert!(!env::state_exists(), "contract is already initialized");
        let operator_id: AccountId = operator_id.into();
        assert_ne!(
            operator_id,
            env::current_account_id(),
            "{}",
            OPERATOR_ID_MUST_NOT_BE_CONTRACT_ID
        );
        let settings = settings.unwrap_or_default();
        if let Err(err) = settings.validate() {
            panic!("{}", err);
        }

        let mut config = Config::default();
        if let Some(updates) = settings.config.as_ref() {
            config.apply_updates(updates);
        }

        Self {
            owner_id: env::predecessor_account_id(),
            operator_id,
            treasury_id: settings.treasury_id.map(Into::into),
            yield_source_id: settings.yield_source_id.map(Into::into),
            config,
            config_change_block_height: env::block_index(),
            assets: vec![],
            asset_groups: LookupMap::new(ASSET_GROUPS_KEY_PREFIX.to_vec()),
            pools: Vector::new(POOLS_KEY_PREFIX.to_vec()),
            positions: LookupMap::new(POSITIONS_KEY_PREFIX.to_vec()),
            stakers: LookupMap::new(STAKERS_KEY_PREFIX.to_vec()),
            pending_releases: LookupMap::new(PENDING_RELEASES_KEY_PREFIX.to_vec()),
            storage_balances: LookupMap::new(STORAGE_BALANCES_KEY_PREFIX.to_vec()),
            emission_pools: Vector::new(EMISSION_POOLS_KEY_PREFIX.to_vec()),
            emission_positions: LookupMap::new(EMISSION_POSITIONS_KEY_PREFIX.to_vec()),
        }
    }
}
