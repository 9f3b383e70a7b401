#![allow(dead_code)]

use near_sdk::{json_types::U128, serde_json::json, AccountId, PendingContractTx};
use near_sdk_sim::*;

/// client for the fungible token mock
pub struct FungibleTokenClient {
    contract_account_id: AccountId,
}

impl FungibleTokenClient {
    pub fn new(contract_account_id: &str) -> Self {
        Self {
            contract_account_id: contract_account_id.to_string(),
        }
    }

    pub fn mint(&self, user: &UserAccount, account_id: &str, amount: u128) -> ExecutionResult {
        let result = user.call(
            PendingContractTx::new(
                &self.contract_account_id,
                "mint",
                json!({ "account_id": account_id, "amount": U128(amount) }),
                false,
            ),
            0,
            DEFAULT_GAS,
        );
        println!("mint: {:#?}", result);
        result
    }

    pub fn ft_transfer_call(
        &self,
        user: &UserAccount,
        receiver_id: &str,
        amount: u128,
        msg: String,
    ) -> ExecutionResult {
        let result = user.call(
            PendingContractTx::new(
                &self.contract_account_id,
                "ft_transfer_call",
                json!({ "receiver_id": receiver_id, "amount": U128(amount), "msg": msg }),
                false,
            ),
            1,
            DEFAULT_GAS,
        );
        println!("ft_transfer_call: {:#?}", result);
        result
    }

    pub fn ft_balance_of(&self, user: &UserAccount, account_id: &str) -> u128 {
        let result = user.view(PendingContractTx::new(
            &self.contract_account_id,
            "ft_balance_of",
            json!({ "account_id": account_id }),
            true,
        ));
        let balance: U128 = result.unwrap_json();
        balance.0
    }

    pub fn freeze(&self, user: &UserAccount, account_id: &str) -> ExecutionResult {
        user.call(
            PendingContractTx::new(
                &self.contract_account_id,
                "freeze",
                json!({ "account_id": account_id }),
                false,
            ),
            0,
            DEFAULT_GAS,
        )
    }

    pub fn unfreeze(&self, user: &UserAccount, account_id: &str) -> ExecutionResult {
        user.call(
            PendingContractTx::new(
                &self.contract_account_id,
                "unfreeze",
                json!({ "account_id": account_id }),
                false,
            ),
            0,
            DEFAULT_GAS,
        )
    }
}
