use crate::{
    core::Hash,
    domain::{PoolId, PositionIndex},
};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// storage key for an account's positions within a pool
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub struct StakerKey {
    pub pool_id: PoolId,
    pub account_hash: Hash,
}

impl StakerKey {
    /// depends on NEAR runtime env
    pub fn new(pool_id: PoolId, account_id: &str) -> Self {
        Self {
            pool_id,
            account_hash: Hash::from(account_id),
        }
    }
}

/// the positions that an account has opened within a pool
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Default)]
pub struct StakerPositions {
    /// append only
    position_indices: Vec<PositionIndex>,
    active_positions: u32,
}

impl StakerPositions {
    pub fn position_indices(&self) -> &[PositionIndex] {
        &self.position_indices
    }

    pub fn active_positions(&self) -> u32 {
        self.active_positions
    }

    /// returns true if this is the account's first active position in the pool
    pub(crate) fn add(&mut self, index: PositionIndex) -> bool {
        self.position_indices.push(index);
        self.active_positions += 1;
        self.active_positions == 1
    }

    /// returns true if the account no longer has any active positions in the pool
    pub(crate) fn close(&mut self) -> bool {
        self.active_positions -= 1;
        self.active_positions == 0
    }
}
