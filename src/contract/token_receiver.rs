//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    contract::ledger::PositionExit,
    domain::{AssetId, PoolId, PositionIndex, TokenAmount},
    errors::{
        asserts::PREDECESSOR_MUST_BE_YIELD_SOURCE,
        pool_errors::{INVALID_TRANSFER_MESSAGE, TOKEN_NOT_ACCEPTED},
        treasury_errors::YIELD_SOURCE_NOT_SET,
    },
    events::RepaidWith,
    interface::{ext_claim_token, FungibleTokenReceiver, TransferMessage},
    near::ONE_YOCTO,
};
use near_sdk::{
    env, json_types::ValidAccountId, json_types::U128, near_bindgen, serde_json, Promise,
    PromiseOrValue,
};

#[near_bindgen]
impl FungibleTokenReceiver for StakingPoolsContract {
    fn ft_on_transfer(
        &mut self,
        sender_id: ValidAccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        let message: TransferMessage =
            serde_json::from_str(&msg).expect(INVALID_TRANSFER_MESSAGE);
        let token_id = env::predecessor_account_id();
        let sender_id: AccountId = sender_id.into();
        let amount: TokenAmount = amount.0.into();

        let unused = match message {
            TransferMessage::Stake { pool_id } => {
                self.stake_tokens(pool_id.into(), &token_id, &sender_id, amount);
                TokenAmount(0)
            }
            TransferMessage::Repay {
                pool_id,
                position_index,
            } => self.repay_with_tokens(
                pool_id.into(),
                position_index.into(),
                &token_id,
                &sender_id,
                amount,
            ),
            TransferMessage::StakeEmission { pool_id } => {
                let pool_id: PoolId = pool_id.into();
                assert!(
                    self.load_emission_pool(pool_id).asset().token_id() == Some(&token_id),
                    TOKEN_NOT_ACCEPTED
                );
                self.stake_into_emission_pool(pool_id, &sender_id, amount);
                TokenAmount(0)
            }
            TransferMessage::Yield => {
                self.receive_token_yield(token_id, &sender_id, amount);
                TokenAmount(0)
            }
        };
        PromiseOrValue::Value(unused.value().into())
    }
}

impl StakingPoolsContract {
    fn stake_tokens(
        &mut self,
        pool_id: PoolId,
        token_id: &AccountId,
        account_id: &AccountId,
        amount: TokenAmount,
    ) -> PositionIndex {
        let pool = self.load_pool(pool_id);
        assert!(
            pool.asset().token_id() == Some(token_id),
            TOKEN_NOT_ACCEPTED
        );
        self.open_position(pool_id, account_id, amount)
    }

    /// Token yield must be sent by the yield source. The token is harvested into its asset group.
    fn receive_token_yield(
        &mut self,
        token_id: AccountId,
        sender_id: &AccountId,
        amount: TokenAmount,
    ) {
        let yield_source_id = self.yield_source_id.as_ref().expect(YIELD_SOURCE_NOT_SET);
        assert_eq!(
            sender_id, yield_source_id,
            "{}",
            PREDECESSOR_MUST_BE_YIELD_SOURCE
        );
        let asset = AssetId::Token(token_id);
        self.load_asset_group(&asset);
        self.apply_harvest(&asset, amount);
    }

    /// The token determines how the position is repaid:
    /// - the pool's asset token : the payment is credited to the asset group's reserve
    /// - the asset group's claim token : the debt is disposed of, see [Self::dispose_claim_tokens]
    ///
    /// The deposit is released to the owner. Returns the overpayment, which the token contract
    /// refunds to the sender.
    fn repay_with_tokens(
        &mut self,
        pool_id: PoolId,
        position_index: PositionIndex,
        token_id: &AccountId,
        account_id: &AccountId,
        amount: TokenAmount,
    ) -> TokenAmount {
        let pool = self.load_pool(pool_id);
        let repaid_with = if pool.asset().token_id() == Some(token_id) {
            RepaidWith::PrincipalToken
        } else if self.pool_asset_group(&pool).claim_token_id() == token_id {
            RepaidWith::ClaimToken
        } else {
            panic!(TOKEN_NOT_ACCEPTED)
        };

        let exit = self.repay_position(pool_id, position_index, account_id, amount, repaid_with);
        if repaid_with == RepaidWith::ClaimToken {
            self.dispose_claim_tokens(&exit);
        }
        if !exit.released.is_zero() {
            self.transfer_asset(account_id, &exit.asset, exit.released);
        }
        exit.refund
    }

    /// Claim tokens that were used to repay debt are forwarded to the treasury. If no treasury is
    /// configured, then they are burned.
    fn dispose_claim_tokens(&self, exit: &PositionExit) -> Option<Promise> {
        if exit.debt.is_zero() {
            return None;
        }
        let gas_config = self.config.gas_config().claim_token();
        let promise = match self.treasury_id.as_ref() {
            Some(treasury_id) => ext_claim_token::ft_transfer(
                treasury_id.clone(),
                exit.debt.value().into(),
                None,
                &exit.claim_token_id,
                ONE_YOCTO.into(),
                gas_config.ft_transfer().value(),
            ),
            None => ext_claim_token::burn(
                exit.debt.value().into(),
                &exit.claim_token_id,
                ONE_YOCTO.into(),
                gas_config.burn().value(),
            ),
        };
        Some(promise)
    }
}
