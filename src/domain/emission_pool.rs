use crate::{
    core::U256,
    domain::{AssetId, PoolId, Timestamp, TokenAmount, SECS_PER_YEAR},
    errors::illegal_state::ARITHMETIC_OVERFLOW,
};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// Non-lock pool that emits claim tokens over time instead of sharing harvested yield.
///
/// Each account holds a single stake per pool. The stake emits 1 claim token per staked unit per
/// year, and can be unstaked at any time.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct EmissionPool {
    id: PoolId,
    asset: AssetId,
    /// opaque to the ledger - consumed by off-chain points tracking
    points_weight: u64,
    created_at: Timestamp,
    active_stakers: u64,
    total_staked: TokenAmount,
    total_emitted: TokenAmount,
}

impl EmissionPool {
    pub fn new(id: PoolId, asset: AssetId, points_weight: u64, created_at: Timestamp) -> Self {
        Self {
            id,
            asset,
            points_weight,
            created_at,
            active_stakers: 0,
            total_staked: TokenAmount::default(),
            total_emitted: TokenAmount::default(),
        }
    }

    pub fn id(&self) -> PoolId {
        self.id
    }

    pub fn asset(&self) -> &AssetId {
        &self.asset
    }

    pub fn points_weight(&self) -> u64 {
        self.points_weight
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn active_stakers(&self) -> u64 {
        self.active_stakers
    }

    pub fn total_staked(&self) -> TokenAmount {
        self.total_staked
    }

    pub fn total_emitted(&self) -> TokenAmount {
        self.total_emitted
    }

    pub(crate) fn stake(&mut self, position: &mut EmissionPosition, amount: TokenAmount) {
        if position.amount.is_zero() {
            self.active_stakers += 1;
        }
        position.amount += amount;
        self.total_staked += amount;
    }

    /// returns the amount that was unstaked
    pub(crate) fn unstake(&mut self, position: &mut EmissionPosition) -> TokenAmount {
        let amount = position.amount;
        if !amount.is_zero() {
            self.active_stakers -= 1;
            self.total_staked -= amount;
            position.amount = TokenAmount(0);
        }
        amount
    }

    /// returns the pending emission that was claimed, which is reset to zero
    pub(crate) fn claim(&mut self, position: &mut EmissionPosition) -> TokenAmount {
        let claimed = position.pending;
        position.pending = TokenAmount(0);
        position.total_claimed += claimed;
        self.total_emitted += claimed;
        claimed
    }
}

/// an account's stake in an [EmissionPool]
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct EmissionPosition {
    amount: TokenAmount,
    /// emission that has accrued but has not been claimed
    pending: TokenAmount,
    last_accrual: Timestamp,
    total_claimed: TokenAmount,
}

impl EmissionPosition {
    pub fn new(now: Timestamp) -> Self {
        Self {
            amount: TokenAmount::default(),
            pending: TokenAmount::default(),
            last_accrual: now,
            total_claimed: TokenAmount::default(),
        }
    }

    pub fn amount(&self) -> TokenAmount {
        self.amount
    }

    pub fn last_accrual(&self) -> Timestamp {
        self.last_accrual
    }

    pub fn total_claimed(&self) -> TokenAmount {
        self.total_claimed
    }

    /// pending emission including what has accrued since the last accrual
    pub fn pending(&self, now: Timestamp) -> TokenAmount {
        self.pending + self.emission_since_last_accrual(now)
    }

    /// Adds the emission since the last accrual to the pending emission. Must be applied before
    /// the staked amount changes.
    pub(crate) fn accrue(&mut self, now: Timestamp) {
        self.pending = self.pending(now);
        if now > self.last_accrual {
            self.last_accrual = now;
        }
    }

    /// `amount * elapsed / SECS_PER_YEAR`, rounded down
    fn emission_since_last_accrual(&self, now: Timestamp) -> TokenAmount {
        let elapsed = now.elapsed_since(self.last_accrual);
        if elapsed.is_zero() || self.amount.is_zero() {
            return TokenAmount(0);
        }
        let emission = U256::from(self.amount.value()) * U256::from(elapsed.value())
            / U256::from(SECS_PER_YEAR);
        assert!(emission.bits() <= 128, ARITHMETIC_OVERFLOW);
        emission.low_u128().into()
    }
}
