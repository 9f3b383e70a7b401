//! NEP-141 fungible token mock used for integration testing. It stands in for both the pool asset
//! tokens and the claim tokens.
//!
//! - anyone can mint
//! - transfers to frozen accounts fail, which is used to simulate failed releases

use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LookupMap, LookupSet};
use near_sdk::json_types::{ValidAccountId, U128};
use near_sdk::{
    env, ext_contract, near_bindgen, AccountId, PanicOnDefault, PromiseOrValue, PromiseResult,
};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: near_sdk::wee_alloc::WeeAlloc = near_sdk::wee_alloc::WeeAlloc::INIT;

const TGAS: u64 = 1_000_000_000_000;
const RESOLVE_TRANSFER_GAS: u64 = 10 * TGAS;

const ACCOUNT_FROZEN: &str = "receiver account is frozen";
const INSUFFICIENT_FUNDS: &str = "sender does not have enough funds";

#[ext_contract(ext_token_receiver)]
pub trait ExtTokenReceiver {
    fn ft_on_transfer(&mut self, sender_id: AccountId, amount: U128, msg: String) -> U128;
}

#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn ft_resolve_transfer_call(
        &mut self,
        sender_id: AccountId,
        receiver_id: AccountId,
        amount: U128,
    ) -> U128;
}

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct FungibleTokenMock {
    balances: LookupMap<AccountId, u128>,
    frozen: LookupSet<AccountId>,
    total_supply: u128,
}

#[near_bindgen]
impl FungibleTokenMock {
    #[init]
    pub fn new() -> Self {
        Self {
            balances: LookupMap::new(vec![1]),
            frozen: LookupSet::new(vec![2]),
            total_supply: 0,
        }
    }

    pub fn ft_total_supply(&self) -> U128 {
        self.total_supply.into()
    }

    pub fn ft_balance_of(&self, account_id: ValidAccountId) -> U128 {
        self.balance(account_id.as_ref()).into()
    }

    #[payable]
    pub fn mint(&mut self, account_id: ValidAccountId, amount: U128) {
        self.deposit(account_id.as_ref(), amount.0);
        self.total_supply += amount.0;
    }

    /// burns from the predecessor's balance
    #[payable]
    pub fn burn(&mut self, amount: U128) {
        self.withdraw(&env::predecessor_account_id(), amount.0);
        self.total_supply -= amount.0;
    }

    #[payable]
    #[allow(unused_variables)]
    pub fn ft_transfer(&mut self, receiver_id: ValidAccountId, amount: U128, memo: Option<String>) {
        self.transfer(
            &env::predecessor_account_id(),
            receiver_id.as_ref(),
            amount.0,
        );
    }

    #[payable]
    #[allow(unused_variables)]
    pub fn ft_transfer_call(
        &mut self,
        receiver_id: ValidAccountId,
        amount: U128,
        memo: Option<String>,
        msg: String,
    ) -> PromiseOrValue<U128> {
        let sender_id = env::predecessor_account_id();
        let receiver_id: AccountId = receiver_id.into();
        self.transfer(&sender_id, &receiver_id, amount.0);
        let gas = env::prepaid_gas() - env::used_gas() - RESOLVE_TRANSFER_GAS - 5 * TGAS;
        ext_token_receiver::ft_on_transfer(sender_id.clone(), amount, msg, &receiver_id, 0, gas)
            .then(ext_self::ft_resolve_transfer_call(
                sender_id,
                receiver_id,
                amount,
                &env::current_account_id(),
                0,
                RESOLVE_TRANSFER_GAS,
            ))
            .into()
    }

    /// Refunds the unused amount to the sender. If the receiver failed, then the full amount is
    /// refunded.
    ///
    /// Returns the amount that was used by the receiver.
    #[private]
    pub fn ft_resolve_transfer_call(
        &mut self,
        sender_id: AccountId,
        receiver_id: AccountId,
        amount: U128,
    ) -> U128 {
        let unused = match env::promise_result(0) {
            PromiseResult::Successful(result) => near_sdk::serde_json::from_slice::<U128>(&result)
                .map_or(amount.0, |unused| unused.0.min(amount.0)),
            _ => amount.0,
        };
        let refund = unused.min(self.balance(&receiver_id));
        if refund > 0 {
            self.withdraw(&receiver_id, refund);
            self.deposit(&sender_id, refund);
        }
        (amount.0 - refund).into()
    }

    /// transfers to frozen accounts fail
    pub fn freeze(&mut self, account_id: ValidAccountId) {
        self.frozen.insert(account_id.as_ref());
    }

    pub fn unfreeze(&mut self, account_id: ValidAccountId) {
        self.frozen.remove(account_id.as_ref());
    }
}

impl FungibleTokenMock {
    fn balance(&self, account_id: &str) -> u128 {
        self.balances.get(&account_id.to_string()).unwrap_or(0)
    }

    fn deposit(&mut self, account_id: &str, amount: u128) {
        let balance = self.balance(account_id) + amount;
        self.balances.insert(&account_id.to_string(), &balance);
    }

    fn withdraw(&mut self, account_id: &str, amount: u128) {
        let balance = self.balance(account_id);
        assert!(balance >= amount, INSUFFICIENT_FUNDS);
        self.balances
            .insert(&account_id.to_string(), &(balance - amount));
    }

    fn transfer(&mut self, sender_id: &str, receiver_id: &str, amount: u128) {
        assert!(
            !self.frozen.contains(&receiver_id.to_string()),
            ACCOUNT_FROZEN
        );
        self.withdraw(sender_id, amount);
        self.deposit(receiver_id, amount);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use near_sdk::{testing_env, MockedBlockchain, VMContext};
    use std::convert::TryFrom;

    fn new_context(predecessor_account_id: &str) -> VMContext {
        VMContext {
            current_account_id: "usdb.near".to_string(),
            signer_account_id: predecessor_account_id.to_string(),
            signer_account_pk: vec![0, 1, 2],
            predecessor_account_id: predecessor_account_id.to_string(),
            input: vec![],
            epoch_height: 0,
            block_index: 0,
            block_timestamp: 0,
            account_balance: 10u128.pow(24),
            account_locked_balance: 0,
            storage_usage: 10u64.pow(6),
            attached_deposit: 1,
            prepaid_gas: 10u64.pow(18),
            random_seed: vec![0, 1, 2],
            is_view: false,
            output_data_receivers: vec![],
        }
    }

    fn account(account_id: &str) -> ValidAccountId {
        ValidAccountId::try_from(account_id).unwrap()
    }

    #[test]
    fn mint_transfer_burn() {
        testing_env!(new_context("alice.near"));
        let mut contract = FungibleTokenMock::new();
        contract.mint(account("alice.near"), 100.into());
        contract.ft_transfer(account("bob.near"), 40.into(), None);
        assert_eq!(contract.ft_balance_of(account("alice.near")).0, 60);
        assert_eq!(contract.ft_balance_of(account("bob.near")).0, 40);

        contract.burn(10.into());
        assert_eq!(contract.ft_balance_of(account("alice.near")).0, 50);
        assert_eq!(contract.ft_total_supply().0, 90);
    }

    #[test]
    #[should_panic(expected = "receiver account is frozen")]
    fn transfer_to_frozen_account() {
        testing_env!(new_context("alice.near"));
        let mut contract = FungibleTokenMock::new();
        contract.mint(account("alice.near"), 100.into());
        contract.freeze(account("bob.near"));
        contract.ft_transfer(account("bob.near"), 40.into(), None);
    }

    #[test]
    fn unfrozen_account_can_receive_transfers() {
        testing_env!(new_context("alice.near"));
        let mut contract = FungibleTokenMock::new();
        contract.mint(account("alice.near"), 100.into());
        contract.freeze(account("bob.near"));
        contract.unfreeze(account("bob.near"));
        contract.ft_transfer(account("bob.near"), 40.into(), None);
        assert_eq!(contract.ft_balance_of(account("bob.near")).0, 40);
    }

    #[test]
    #[should_panic(expected = "sender does not have enough funds")]
    fn transfer_more_than_balance() {
        testing_env!(new_context("alice.near"));
        let mut contract = FungibleTokenMock::new();
        contract.mint(account("alice.near"), 100.into());
        contract.ft_transfer(account("bob.near"), 101.into(), None);
    }
}
