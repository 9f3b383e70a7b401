//! Yield source mock used for integration testing.
//!
//! Yield is funded explicitly:
//! - NEAR yield is funded by attaching a deposit to [YieldSource::fund_native_yield]
//! - token yield is credited via [YieldSource::credit_token_yield] - the tokens must be transferred
//!   to this contract's account on the token contract separately
//!
//! Claimed yield is pushed to the claiming account:
//! - NEAR is attached to a `deposit_yield` call
//! - tokens are sent via `ft_transfer_call` with a `"Yield"` message

use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::LookupMap;
use near_sdk::json_types::U128;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{
    env, ext_contract, near_bindgen, AccountId, PanicOnDefault, Promise, PromiseOrValue,
};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: near_sdk::wee_alloc::WeeAlloc = near_sdk::wee_alloc::WeeAlloc::INIT;

/// JSON compatible with the staking pools contract's asset ID
#[derive(
    BorshDeserialize, BorshSerialize, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash,
)]
#[serde(crate = "near_sdk::serde")]
pub enum AssetId {
    Native,
    Token(AccountId),
}

#[ext_contract(ext_fungible_token)]
pub trait ExtFungibleToken {
    fn ft_transfer_call(
        &mut self,
        receiver_id: AccountId,
        amount: U128,
        memo: Option<String>,
        msg: String,
    ) -> U128;
}

#[ext_contract(ext_yield_receiver)]
pub trait ExtYieldReceiver {
    fn deposit_yield(&mut self) -> U128;
}

const TGAS: u64 = 1_000_000_000_000;
const DEPOSIT_YIELD_GAS: u64 = 20 * TGAS;
const FT_TRANSFER_CALL_GAS: u64 = 50 * TGAS;
const YIELD_MSG: &str = "\"Yield\"";

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct YieldSource {
    claimable: LookupMap<AssetId, u128>,
}

#[near_bindgen]
impl YieldSource {
    #[init]
    pub fn new() -> Self {
        Self {
            claimable: LookupMap::new(vec![1]),
        }
    }

    pub fn claimable_yield(&self, asset: AssetId) -> U128 {
        self.claimable.get(&asset).unwrap_or(0).into()
    }

    /// Pushes all claimable yield for the asset to the predecessor account. Resolves to the amount
    /// that the receiver accepted.
    pub fn claim_yield(&mut self, asset: AssetId) -> PromiseOrValue<U128> {
        let amount = self.claimable.remove(&asset).unwrap_or(0);
        if amount == 0 {
            return PromiseOrValue::Value(0.into());
        }
        let receiver_id = env::predecessor_account_id();
        let promise: Promise = match &asset {
            AssetId::Native => {
                ext_yield_receiver::deposit_yield(&receiver_id, amount, DEPOSIT_YIELD_GAS)
            }
            AssetId::Token(token_id) => ext_fungible_token::ft_transfer_call(
                receiver_id,
                amount.into(),
                None,
                YIELD_MSG.to_string(),
                token_id,
                1,
                FT_TRANSFER_CALL_GAS,
            ),
        };
        promise.into()
    }

    #[payable]
    pub fn fund_native_yield(&mut self) -> U128 {
        assert!(env::attached_deposit() > 0, "deposit is required");
        self.credit(AssetId::Native, env::attached_deposit())
    }

    pub fn credit_token_yield(&mut self, token_id: AccountId, amount: U128) -> U128 {
        self.credit(AssetId::Token(token_id), amount.0)
    }
}

impl YieldSource {
    fn credit(&mut self, asset: AssetId, amount: u128) -> U128 {
        let balance = self.claimable.get(&asset).unwrap_or(0) + amount;
        self.claimable.insert(&asset, &balance);
        balance.into()
    }
}
