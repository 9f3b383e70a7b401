use near_sdk::json_types::ValidAccountId;
use near_sdk::AccountId;

pub trait ContractOwner {
    fn owner_id(&self) -> AccountId;

    /// ## Panics
    /// - if the predecessor account is not the owner account
    /// - if the operator account ID is the contract account ID
    fn set_operator_id(&mut self, account_id: ValidAccountId);
}
