//! shared unit test fixture: a contract with 3 pools
//! - flexible NEAR pool
//! - 1 year NEAR pool
//! - 1 year USDB pool
//!
//! and 2 emission pools: NEAR and USDB
//!
//! ALICE and BOB have prepaid storage. CAROL has not.

use crate::{
    core::Hash,
    domain::{AssetId, PoolId, PositionIndex, TokenAmount, SECS_PER_YEAR},
    interface::{self, AccountStorage, FungibleTokenReceiver, Operator, StakingPools, TransferMessage},
    near::YOCTO,
    test_utils::near::new_context,
    StakingPoolsContract,
};
use near_sdk::{json_types::ValidAccountId, serde_json, testing_env, MockedBlockchain, VMContext};
use std::convert::TryFrom;

pub const OWNER: &str = "owner.near";
pub const OPERATOR: &str = "operator.near";
pub const TREASURY: &str = "treasury.near";
pub const YIELD_SOURCE: &str = "yield.near";
pub const NATIVE_CLAIM_TOKEN: &str = "stnear.near";
pub const USDB: &str = "usdb.near";
pub const USDB_CLAIM_TOKEN: &str = "stusdb.near";

pub const ALICE: &str = "alice.near";
pub const BOB: &str = "bob.near";
pub const CAROL: &str = "carol.near";

/// storage balance prepaid by ALICE and BOB
pub const STORAGE_DEPOSIT: u128 = YOCTO;

const NANOS_PER_SEC: u64 = 1_000_000_000;

pub struct TestContext {
    pub contract: StakingPoolsContract,
    pub context: VMContext,
    pub flexible_pool: PoolId,
    pub locked_pool: PoolId,
    pub usdb_pool: PoolId,
    pub emission_pool: PoolId,
    pub usdb_emission_pool: PoolId,
}

pub fn valid_account_id(account_id: &str) -> ValidAccountId {
    ValidAccountId::try_from(account_id).unwrap()
}

pub fn usdb() -> AssetId {
    AssetId::Token(USDB.to_string())
}

impl TestContext {
    pub fn new() -> Self {
        let mut context = new_context(OWNER);
        testing_env!(context.clone());
        let mut contract = StakingPoolsContract::new(valid_account_id(OPERATOR), None);

        context.predecessor_account_id = OPERATOR.to_string();
        testing_env!(context.clone());
        contract.set_treasury(valid_account_id(TREASURY));
        contract.set_yield_source(valid_account_id(YIELD_SOURCE));
        contract.register_asset_group(AssetId::Native, valid_account_id(NATIVE_CLAIM_TOKEN));
        contract.register_asset_group(usdb(), valid_account_id(USDB_CLAIM_TOKEN));
        let flexible_pool = contract
            .create_pool(0.into(), 1.into(), AssetId::Native)
            .into();
        let locked_pool = contract
            .create_pool(SECS_PER_YEAR.into(), 2.into(), AssetId::Native)
            .into();
        let usdb_pool = contract
            .create_pool(SECS_PER_YEAR.into(), 2.into(), usdb())
            .into();
        let emission_pool = contract
            .create_emission_pool(1.into(), AssetId::Native)
            .into();
        let usdb_emission_pool = contract.create_emission_pool(1.into(), usdb()).into();

        for account_id in &[ALICE, BOB] {
            contract
                .storage_balances
                .insert(&Hash::from(*account_id), &TokenAmount(STORAGE_DEPOSIT));
        }

        Self {
            contract,
            context,
            flexible_pool,
            locked_pool,
            usdb_pool,
            emission_pool,
            usdb_emission_pool,
        }
    }

    /// sets up the env for a call from `predecessor` with the attached deposit
    pub fn call(&mut self, predecessor: &str, attached_deposit: u128) {
        self.context.predecessor_account_id = predecessor.to_string();
        self.context.signer_account_id = predecessor.to_string();
        self.context.attached_deposit = attached_deposit;
        testing_env!(self.context.clone());
    }

    pub fn set_block_time(&mut self, secs: u64) {
        self.context.block_timestamp = secs * NANOS_PER_SEC;
        self.context.block_index += 1;
        testing_env!(self.context.clone());
    }

    /// opens the position directly on the ledger, i.e., as if the deposit was already received
    pub fn stake_native(
        &mut self,
        pool_id: PoolId,
        account_id: &str,
        amount: u128,
    ) -> PositionIndex {
        self.call(account_id, 0);
        self.contract
            .open_position(pool_id, &account_id.to_string(), TokenAmount(amount))
    }

    /// stakes via `ft_on_transfer` invoked by the USDB token contract
    pub fn stake_tokens(
        &mut self,
        pool_id: PoolId,
        account_id: &str,
        amount: u128,
    ) -> PositionIndex {
        self.call(USDB, 0);
        let msg = serde_json::to_string(&TransferMessage::Stake {
            pool_id: pool_id.into(),
        })
        .unwrap();
        self.contract
            .ft_on_transfer(valid_account_id(account_id), amount.into(), msg);
        PositionIndex(self.contract.load_pool(pool_id).position_count() - 1)
    }

    /// applies a harvest as if it was received from the yield source
    pub fn harvest(&mut self, asset: &AssetId, amount: u128) {
        self.call(YIELD_SOURCE, 0);
        self.contract.apply_harvest(asset, TokenAmount(amount));
    }

    pub fn position(&self, pool_id: PoolId, index: PositionIndex) -> interface::Position {
        self.contract
            .get_position(pool_id.into(), index.into())
            .unwrap()
    }

    pub fn active_positions(&self, pool_id: PoolId, account_id: &str) -> u32 {
        self.contract
            .active_positions(pool_id.into(), valid_account_id(account_id))
    }

    pub fn storage_balance(&self, account_id: &str) -> u128 {
        self.contract
            .storage_balance_of(valid_account_id(account_id))
            .value()
    }
}
