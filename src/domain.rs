//! defines the internal domain model used to implement the business logic
//!
//! NOTE: the domain model is separate from the interface model. That being said, the interface model
//! closely mirrors the domain model.

mod asset_group;
mod asset_id;
mod emission_pool;
mod gas;
mod pool;
mod position;
mod reward_per_unit;
mod staker_positions;
mod timestamp;
mod token_amount;

pub use asset_group::{AssetGroup, HarvestOutcome};
pub use asset_id::AssetId;
pub use emission_pool::{EmissionPool, EmissionPosition};
pub use gas::{Gas, TGAS};
pub use pool::{Pool, PoolId};
pub use position::{Position, PositionIndex, PositionKey, PositionStatus};
pub use reward_per_unit::{RewardPerUnit, SCALE};
pub use staker_positions::{StakerKey, StakerPositions};
pub use timestamp::{Duration, Timestamp, MAX_LOCK_DURATION, SECS_PER_DAY, SECS_PER_YEAR};
pub use token_amount::TokenAmount;
