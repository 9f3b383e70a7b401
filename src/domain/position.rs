use crate::domain::{Duration, PoolId, RewardPerUnit, Timestamp, TokenAmount};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    AccountId,
};

/// position index within its pool - indices are stable because positions are never removed
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct PositionIndex(pub u64);

impl From<u64> for PositionIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl PositionIndex {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// storage key for a position
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct PositionKey {
    pub pool_id: PoolId,
    pub index: PositionIndex,
}

impl PositionKey {
    pub fn new(pool_id: PoolId, index: PositionIndex) -> Self {
        Self { pool_id, index }
    }
}

#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq,
)]
#[serde(crate = "near_sdk::serde")]
pub enum PositionStatus {
    Active,
    /// terminal
    Closed,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Position {
    owner: AccountId,
    /// amount of the underlying asset that was deposited - this is what is released on exit
    deposit: TokenAmount,
    /// effective principal that is backed by claim tokens - drives the reward share and the debt
    principal: TokenAmount,
    staked_at: Timestamp,
    unlock_time: Timestamp,
    settlement_baseline: RewardPerUnit,
    /// running total of the yield that has been settled into the position
    credited: TokenAmount,
    status: PositionStatus,
}

impl Position {
    pub fn new(
        owner: AccountId,
        amount: TokenAmount,
        staked_at: Timestamp,
        lock_duration: Duration,
        settlement_baseline: RewardPerUnit,
    ) -> Self {
        Self {
            owner,
            deposit: amount,
            principal: amount,
            staked_at,
            unlock_time: staked_at + lock_duration,
            settlement_baseline,
            credited: TokenAmount(0),
            status: PositionStatus::Active,
        }
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    pub fn deposit(&self) -> TokenAmount {
        self.deposit
    }

    pub fn principal(&self) -> TokenAmount {
        self.principal
    }

    pub fn staked_at(&self) -> Timestamp {
        self.staked_at
    }

    pub fn unlock_time(&self) -> Timestamp {
        self.unlock_time
    }

    pub fn settlement_baseline(&self) -> RewardPerUnit {
        self.settlement_baseline
    }

    pub fn credited(&self) -> TokenAmount {
        self.credited
    }

    pub fn status(&self) -> PositionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == PositionStatus::Active
    }

    pub fn is_closed(&self) -> bool {
        self.status == PositionStatus::Closed
    }

    pub fn is_unlocked(&self, now: Timestamp) -> bool {
        now >= self.unlock_time
    }

    /// principal that is not yet covered by credited yield, clamped at zero
    pub fn debt(&self) -> TokenAmount {
        self.principal.saturating_sub(self.credited)
    }

    /// total lock span, measured from the original stake time, if the lock were extended
    pub fn lock_span_with(&self, extra_duration: Duration) -> Duration {
        (self.unlock_time + extra_duration).elapsed_since(self.staked_at)
    }

    /// credits the yield accrued since the last settlement and advances the baseline to `acc`
    pub(crate) fn settle(&mut self, acc: RewardPerUnit) -> TokenAmount {
        let credited = acc.accrued(self.principal, self.settlement_baseline);
        self.credited += credited;
        self.settlement_baseline = acc;
        credited
    }

    /// stacks a fresh claim on top of the existing one, i.e., the principal doubles
    /// - the position must be settled beforehand
    ///
    /// returns the principal that was added
    pub(crate) fn extend(&mut self, extra_duration: Duration) -> TokenAmount {
        let added = self.principal;
        self.principal += added;
        self.unlock_time = self.unlock_time + extra_duration;
        added
    }

    /// the position must be settled beforehand
    pub(crate) fn close(&mut self) {
        self.status = PositionStatus::Closed;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domain::{SECS_PER_YEAR, MAX_LOCK_DURATION};
    use crate::near::YOCTO;

    fn position(amount: u128, lock_duration: u64) -> Position {
        Position::new(
            "alice.near".to_string(),
            TokenAmount(amount),
            Timestamp(1000),
            Duration(lock_duration),
            RewardPerUnit::default(),
        )
    }

    #[test]
    fn new_position() {
        let position = position(YOCTO, SECS_PER_YEAR);
        assert!(position.is_active());
        assert_eq!(position.deposit(), TokenAmount(YOCTO));
        assert_eq!(position.principal(), TokenAmount(YOCTO));
        assert_eq!(position.unlock_time(), Timestamp(1000 + SECS_PER_YEAR));
        assert_eq!(position.debt(), TokenAmount(YOCTO));
        assert!(!position.is_unlocked(Timestamp(1000 + SECS_PER_YEAR - 1)));
        assert!(position.is_unlocked(Timestamp(1000 + SECS_PER_YEAR)));
    }

    #[test]
    fn flexible_position_is_unlocked_immediately() {
        let position = position(YOCTO, 0);
        assert!(position.is_unlocked(Timestamp(1000)));
    }

    #[test]
    fn debt_is_clamped_when_credited_exceeds_principal() {
        let mut position = position(YOCTO, 0);
        let mut acc = RewardPerUnit::default();
        acc.increment(TokenAmount(3 * YOCTO), TokenAmount(YOCTO));
        assert_eq!(position.settle(acc), TokenAmount(3 * YOCTO));
        assert!(position.credited() > position.principal());
        assert_eq!(position.debt(), TokenAmount(0));
    }

    #[test]
    fn extend_doubles_principal_but_not_deposit() {
        let mut position = position(YOCTO, SECS_PER_YEAR);
        assert_eq!(position.extend(Duration(SECS_PER_YEAR)), TokenAmount(YOCTO));
        assert_eq!(position.principal(), TokenAmount(2 * YOCTO));
        assert_eq!(position.deposit(), TokenAmount(YOCTO));
        assert_eq!(position.unlock_time(), Timestamp(1000 + 2 * SECS_PER_YEAR));
        assert_eq!(position.lock_span_with(Duration(0)), Duration(2 * SECS_PER_YEAR));
    }

    #[test]
    fn lock_span_with() {
        let position = position(YOCTO, SECS_PER_YEAR);
        assert_eq!(
            position.lock_span_with(Duration(9 * SECS_PER_YEAR)),
            MAX_LOCK_DURATION
        );
        assert!(position.lock_span_with(Duration(9 * SECS_PER_YEAR + 1)) > MAX_LOCK_DURATION);
    }
}
