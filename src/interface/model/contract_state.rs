use crate::interface::AssetGroup;
use near_sdk::{
    json_types::U64,
    serde::{Deserialize, Serialize},
    AccountId,
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(crate = "near_sdk::serde")]
pub struct ContractState {
    pub block_height: U64,
    pub block_timestamp: U64,
    pub config_change_block_height: U64,

    pub owner_id: AccountId,
    pub operator_id: AccountId,
    pub treasury_id: Option<AccountId>,
    pub yield_source_id: Option<AccountId>,

    pub pools_count: U64,
    pub asset_groups: Vec<AssetGroup>,

    pub storage_usage: U64,
}
