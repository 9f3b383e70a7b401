//! This module is used to centralize NEAR SDK Collection IDs to ensure duplicates are not defined
//!
//! Each NEAR SDK persistent collection must be defined with a unique ID, which is used to store the
//! collection in the TRIE. Each of the IDs defined below should only be referenced once within the
//! project.

pub const ASSET_GROUPS_KEY_PREFIX: [u8; 1] = [0];
pub const POOLS_KEY_PREFIX: [u8; 1] = [1];
pub const POSITIONS_KEY_PREFIX: [u8; 1] = [2];
pub const STAKERS_KEY_PREFIX: [u8; 1] = [3];
pub const PENDING_RELEASES_KEY_PREFIX: [u8; 1] = [4];
pub const STORAGE_BALANCES_KEY_PREFIX: [u8; 1] = [5];
pub const EMISSION_POOLS_KEY_PREFIX: [u8; 1] = [6];
pub const EMISSION_POSITIONS_KEY_PREFIX: [u8; 1] = [7];
