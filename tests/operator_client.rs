#![allow(dead_code)]

use near_sdk::{
    serde_json::{json, Value},
    AccountId, PendingContractTx,
};
use near_sdk_sim::*;
use oysterpack_near_staking_pools::interface::{contract_state::ContractState, PoolId};

pub struct OperatorClient {
    contract_account_id: AccountId,
}

impl OperatorClient {
    pub fn new(contract_account_id: &str) -> Self {
        Self {
            contract_account_id: contract_account_id.to_string(),
        }
    }

    pub fn contract_state(&self, user: &UserAccount) -> ContractState {
        let result = user.view(PendingContractTx::new(
            &self.contract_account_id,
            "contract_state",
            json!({}),
            true,
        ));
        result.unwrap_json()
    }

    /// `asset` is the JSON encoded asset ID, e.g., `"Native"` or `{"Token":"usdb"}`
    pub fn register_asset_group(
        &self,
        user: &UserAccount,
        asset: Value,
        claim_token_id: &str,
    ) -> ExecutionResult {
        let result = user.call(
            PendingContractTx::new(
                &self.contract_account_id,
                "register_asset_group",
                json!({ "asset": asset, "claim_token_id": claim_token_id }),
                false,
            ),
            0,
            DEFAULT_GAS,
        );
        println!("register_asset_group: {:#?}", result);
        result
    }

    pub fn create_pool(
        &self,
        user: &UserAccount,
        lock_duration: u64,
        points_weight: u64,
        asset: Value,
    ) -> PoolId {
        let result = user.call(
            PendingContractTx::new(
                &self.contract_account_id,
                "create_pool",
                json!({
                    "lock_duration": lock_duration.to_string(),
                    "points_weight": points_weight.to_string(),
                    "asset": asset,
                }),
                false,
            ),
            0,
            DEFAULT_GAS,
        );
        println!("create_pool: {:#?}", result);
        result.unwrap_json()
    }

    pub fn create_emission_pool(
        &self,
        user: &UserAccount,
        points_weight: u64,
        asset: Value,
    ) -> PoolId {
        let result = user.call(
            PendingContractTx::new(
                &self.contract_account_id,
                "create_emission_pool",
                json!({
                    "points_weight": points_weight.to_string(),
                    "asset": asset,
                }),
                false,
            ),
            0,
            DEFAULT_GAS,
        );
        println!("create_emission_pool: {:#?}", result);
        result.unwrap_json()
    }
}
