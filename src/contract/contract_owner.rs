//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    errors::asserts::OPERATOR_ID_MUST_NOT_BE_CONTRACT_ID,
    events::OperatorChanged,
    interface::ContractOwner,
    near::log,
};
use near_sdk::{env, json_types::ValidAccountId, near_bindgen};

#[near_bindgen]
impl ContractOwner for StakingPoolsContract {
    fn owner_id(&self) -> AccountId {
        self.owner_id.clone()
    }

    fn set_operator_id(&mut self, account_id: ValidAccountId) {
        self.assert_predecessor_is_owner();
        let operator_id: AccountId = account_id.into();
        assert_ne!(
            operator_id,
            env::current_account_id(),
            "{}",
            OPERATOR_ID_MUST_NOT_BE_CONTRACT_ID
        );
        self.operator_id = operator_id;
        log(OperatorChanged {
            operator_id: self.operator_id.clone(),
        });
    }
}
