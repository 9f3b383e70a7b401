use crate::domain::{Position, RewardPerUnit, TokenAmount};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    AccountId,
};

/// All pools that share the same underlying asset share one reward accumulator.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct AssetGroup {
    /// claim token contract that is minted 1:1 against staked principal
    claim_token_id: AccountId,
    /// sum of the effective principal of all active positions across all pools for the asset
    total_principal: TokenAmount,
    acc_reward_per_unit: RewardPerUnit,
    /// yield that was distributed through the accumulator
    total_harvested: TokenAmount,
    /// yield that has been settled into positions
    total_credited: TokenAmount,
    /// yield that arrived while there was no principal staked
    escrowed: TokenAmount,
    /// asset balance that is owned by the treasury, i.e., harvested yield and repaid debt
    reserve: TokenAmount,
}

/// what happened to a harvested amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HarvestOutcome {
    Distributed,
    /// there was no principal to distribute over
    Escrowed,
    Ignored,
}

impl AssetGroup {
    pub fn new(claim_token_id: AccountId) -> Self {
        Self {
            claim_token_id,
            total_principal: TokenAmount::default(),
            acc_reward_per_unit: RewardPerUnit::default(),
            total_harvested: TokenAmount::default(),
            total_credited: TokenAmount::default(),
            escrowed: TokenAmount::default(),
            reserve: TokenAmount::default(),
        }
    }

    pub fn claim_token_id(&self) -> &AccountId {
        &self.claim_token_id
    }

    pub fn total_principal(&self) -> TokenAmount {
        self.total_principal
    }

    pub fn acc_reward_per_unit(&self) -> RewardPerUnit {
        self.acc_reward_per_unit
    }

    pub fn total_harvested(&self) -> TokenAmount {
        self.total_harvested
    }

    pub fn total_credited(&self) -> TokenAmount {
        self.total_credited
    }

    pub fn escrowed(&self) -> TokenAmount {
        self.escrowed
    }

    pub fn reserve(&self) -> TokenAmount {
        self.reserve
    }

    /// Folds newly realized yield into the accumulator.
    ///
    /// If no principal is staked, then the amount is escrowed into the reserve and the accumulator
    /// is left untouched - positions opened later never receive yield that was realized before
    /// they existed.
    pub fn harvest(&mut self, amount: TokenAmount) -> HarvestOutcome {
        if amount.is_zero() {
            return HarvestOutcome::Ignored;
        }
        self.reserve += amount;
        if self.total_principal.is_zero() {
            self.escrowed += amount;
            return HarvestOutcome::Escrowed;
        }
        self.acc_reward_per_unit
            .increment(amount, self.total_principal);
        self.total_harvested += amount;
        HarvestOutcome::Distributed
    }

    /// credits the position with the yield accrued since it last settled
    /// - must be called before the position principal changes and before the position is closed
    pub fn settle(&mut self, position: &mut Position) -> TokenAmount {
        let credited = position.settle(self.acc_reward_per_unit);
        self.total_credited += credited;
        credited
    }

    /// yield that the position would be credited if it were settled now
    pub fn pending_yield(&self, position: &Position) -> TokenAmount {
        if position.is_closed() {
            return TokenAmount(0);
        }
        self.acc_reward_per_unit
            .accrued(position.principal(), position.settlement_baseline())
    }

    pub fn add_principal(&mut self, amount: TokenAmount) {
        self.total_principal += amount;
    }

    pub fn remove_principal(&mut self, amount: TokenAmount) {
        self.total_principal -= amount;
    }

    /// repaid debt is owned by the treasury
    pub fn credit_reserve(&mut self, amount: TokenAmount) {
        self.reserve += amount;
    }

    /// zeroes out the reserve and returns the amount that was withdrawn
    pub fn withdraw_reserve(&mut self) -> TokenAmount {
        let reserve = self.reserve;
        self.reserve = TokenAmount(0);
        self.escrowed = TokenAmount(0);
        reserve
    }
}
