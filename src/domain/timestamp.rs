use crate::{errors::illegal_state::ARITHMETIC_OVERFLOW, near};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use std::ops::Add;

pub const SECS_PER_DAY: u64 = 24 * 60 * 60;

pub const SECS_PER_YEAR: u64 = 365 * SECS_PER_DAY;

/// total lock span, measured from the original stake time, that a position may ever reach
pub const MAX_LOCK_DURATION: Duration = Duration(10 * SECS_PER_YEAR);

/// unix time in seconds
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// depends on NEAR runtime env
    pub fn now() -> Self {
        Self(near::block_timestamp_secs())
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// returns zero if `earlier` is after self
    pub fn elapsed_since(&self, earlier: Timestamp) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Self::Output {
        Timestamp(self.0.checked_add(rhs.0).expect(ARITHMETIC_OVERFLOW))
    }
}

/// time span in seconds
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct Duration(pub u64);

impl Duration {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Duration {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::near::new_context;
    use near_sdk::{testing_env, MockedBlockchain};

    #[test]
    fn now_is_block_timestamp_in_secs() {
        let mut context = new_context("alice.near");
        context.block_timestamp = 1_700_000_000_123_456_789;
        testing_env!(context);
        assert_eq!(Timestamp::now(), Timestamp(1_700_000_000));
    }

    #[test]
    fn elapsed_since_never_goes_negative() {
        let now = Timestamp(100);
        assert_eq!(now.elapsed_since(Timestamp(40)), Duration(60));
        assert_eq!(now.elapsed_since(Timestamp(400)), Duration(0));
    }
}
