use crate::interface::{PoolId, PositionIndex};
use near_sdk::json_types::{ValidAccountId, U128};
#[allow(unused_imports)]
use near_sdk::AccountId;
use near_sdk::{
    ext_contract,
    serde::{Deserialize, Serialize},
    PromiseOrValue,
};

/// NEP-141 receiver
pub trait FungibleTokenReceiver {
    /// Receives tokens that were sent via `ft_transfer_call`. The predecessor account is the token
    /// contract.
    ///
    /// The transfer `msg` must be a JSON encoded [TransferMessage]:
    /// - `Stake` : the predecessor must be the pool's asset token
    /// - `Repay` : the predecessor must either be the pool's asset token, i.e., repay with principal
    ///   token, or the asset group's claim token, i.e., repay with claim token
    /// - `StakeEmission` : the predecessor must be the emission pool's asset token
    /// - `Yield` : the sender must be the yield source
    ///
    /// Returns the amount of unused tokens, which are refunded to the sender by the token contract.
    ///
    /// ## Panics
    /// - if the message is invalid
    /// - if the token is not accepted for the pool
    /// - see [crate::interface::StakingService]
    fn ft_on_transfer(
        &mut self,
        sender_id: ValidAccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum TransferMessage {
    Stake {
        pool_id: PoolId,
    },
    Repay {
        pool_id: PoolId,
        position_index: PositionIndex,
    },
    StakeEmission {
        pool_id: PoolId,
    },
    /// harvested yield delivered by the yield source
    Yield,
}

/// the underlying asset's NEP-141 token contract
#[ext_contract(ext_fungible_token)]
pub trait ExtFungibleToken {
    /// requires 1 yoctoNEAR attached
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);
}

/// Claim token contract - NEP-141 with privileged mint and burn. The ledger account must be
/// whitelisted as minter on the claim token contract.
#[ext_contract(ext_claim_token)]
pub trait ExtClaimToken {
    fn mint(&mut self, account_id: AccountId, amount: U128);

    /// burns the amount from the predecessor's balance
    fn burn(&mut self, amount: U128);

    /// requires 1 yoctoNEAR attached
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);
}
