use crate::domain::{AssetId, Duration, PositionIndex, Timestamp, TokenAmount};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct PoolId(pub u64);

impl From<u64> for PoolId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl PoolId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Pool {
    id: PoolId,
    asset: AssetId,
    /// zero for flexible pools
    lock_duration: Duration,
    /// opaque to the ledger - consumed by off-chain points tracking
    points_weight: u64,
    created_at: Timestamp,
    /// number of positions ever opened in the pool, i.e., the next position index
    position_count: u64,
    /// number of distinct accounts with at least 1 active position
    active_stakers: u64,
    total_principal: TokenAmount,
    /// underlying asset currently held for active positions
    total_deposits: TokenAmount,
}

impl Pool {
    pub fn new(
        id: PoolId,
        asset: AssetId,
        lock_duration: Duration,
        points_weight: u64,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            asset,
            lock_duration,
            points_weight,
            created_at,
            position_count: 0,
            active_stakers: 0,
            total_principal: TokenAmount::default(),
            total_deposits: TokenAmount::default(),
        }
    }

    pub fn id(&self) -> PoolId {
        self.id
    }

    pub fn asset(&self) -> &AssetId {
        &self.asset
    }

    pub fn lock_duration(&self) -> Duration {
        self.lock_duration
    }

    pub fn is_flexible(&self) -> bool {
        self.lock_duration.is_zero()
    }

    pub fn points_weight(&self) -> u64 {
        self.points_weight
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn position_count(&self) -> u64 {
        self.position_count
    }

    pub fn active_stakers(&self) -> u64 {
        self.active_stakers
    }

    pub fn total_principal(&self) -> TokenAmount {
        self.total_principal
    }

    pub fn total_deposits(&self) -> TokenAmount {
        self.total_deposits
    }

    /// allocates the next position index and books the deposit
    pub(crate) fn open_position(&mut self, amount: TokenAmount) -> PositionIndex {
        let index = PositionIndex(self.position_count);
        self.position_count += 1;
        self.total_principal += amount;
        self.total_deposits += amount;
        index
    }

    pub(crate) fn add_principal(&mut self, amount: TokenAmount) {
        self.total_principal += amount;
    }

    pub(crate) fn close_position(&mut self, principal: TokenAmount, deposit: TokenAmount) {
        self.total_principal -= principal;
        self.total_deposits -= deposit;
    }

    pub(crate) fn increment_active_stakers(&mut self) {
        self.active_stakers += 1;
    }

    pub(crate) fn decrement_active_stakers(&mut self) {
        self.active_stakers -= 1;
    }
}
