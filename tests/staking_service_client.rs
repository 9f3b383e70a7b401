#![allow(dead_code)]

use near_sdk::{
    serde_json::{json, Value},
    AccountId, PendingContractTx,
};
use near_sdk_sim::*;
use oysterpack_near_staking_pools::interface::{
    AssetGroup, PoolId, Position, PositionIndex, TokenAmount,
};

pub struct StakingServiceClient {
    pub contract_account_id: AccountId,
}

impl StakingServiceClient {
    pub fn new(contract_account_id: &str) -> Self {
        Self {
            contract_account_id: contract_account_id.to_string(),
        }
    }

    pub fn stake(&self, user: &UserAccount, pool_id: PoolId, amount: u128) -> ExecutionResult {
        let result = user.call(
            PendingContractTx::new(
                &self.contract_account_id,
                "stake",
                json!({ "pool_id": pool_id }),
                false,
            ),
            amount,
            DEFAULT_GAS,
        );
        println!("stake: {:#?}", result);
        result
    }

    pub fn unstake(
        &self,
        user: &UserAccount,
        pool_id: PoolId,
        position_index: PositionIndex,
    ) -> ExecutionResult {
        let result = user.call(
            PendingContractTx::new(
                &self.contract_account_id,
                "unstake",
                json!({ "pool_id": pool_id, "position_index": position_index }),
                false,
            ),
            0,
            DEFAULT_GAS,
        );
        println!("unstake: {:#?}", result);
        result
    }

    pub fn withdraw_pending_release(&self, user: &UserAccount, asset: Value) -> ExecutionResult {
        let result = user.call(
            PendingContractTx::new(
                &self.contract_account_id,
                "withdraw_pending_release",
                json!({ "asset": asset }),
                false,
            ),
            0,
            DEFAULT_GAS,
        );
        println!("withdraw_pending_release: {:#?}", result);
        result
    }

    pub fn harvest(&self, user: &UserAccount, asset: Value) -> ExecutionResult {
        let result = user.call(
            PendingContractTx::new(
                &self.contract_account_id,
                "harvest",
                json!({ "asset": asset }),
                false,
            ),
            0,
            DEFAULT_GAS,
        );
        println!("harvest: {:#?}", result);
        result
    }

    pub fn get_position(
        &self,
        user: &UserAccount,
        pool_id: PoolId,
        position_index: PositionIndex,
    ) -> Option<Position> {
        let result = user.view(PendingContractTx::new(
            &self.contract_account_id,
            "get_position",
            json!({ "pool_id": pool_id, "position_index": position_index }),
            true,
        ));
        result.unwrap_json()
    }

    pub fn get_asset_group(&self, user: &UserAccount, asset: Value) -> Option<AssetGroup> {
        let result = user.view(PendingContractTx::new(
            &self.contract_account_id,
            "get_asset_group",
            json!({ "asset": asset }),
            true,
        ));
        result.unwrap_json()
    }

    pub fn pending_release(&self, user: &UserAccount, account_id: &str, asset: Value) -> TokenAmount {
        let result = user.view(PendingContractTx::new(
            &self.contract_account_id,
            "pending_release",
            json!({ "account_id": account_id, "asset": asset }),
            true,
        ));
        result.unwrap_json()
    }
}
