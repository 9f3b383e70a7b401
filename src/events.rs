//! events that are logged via [crate::near::log]

use crate::domain::{AssetId, PoolId, PositionIndex, Timestamp, TokenAmount};
use near_sdk::AccountId;

#[derive(Debug)]
pub struct AssetGroupRegistered<'a> {
    pub asset: &'a AssetId,
    pub claim_token_id: &'a str,
}

#[derive(Debug)]
pub struct PoolCreated<'a> {
    pub pool_id: PoolId,
    pub asset: &'a AssetId,
    pub lock_duration: u64,
    pub points_weight: u64,
}

#[derive(Debug)]
pub struct Staked<'a> {
    pub pool_id: PoolId,
    pub position_index: PositionIndex,
    pub account_id: &'a str,
    pub amount: TokenAmount,
    pub unlock_time: Timestamp,
}

#[derive(Debug)]
pub struct PositionExtended<'a> {
    pub pool_id: PoolId,
    pub position_index: PositionIndex,
    pub account_id: &'a str,
    pub credited: TokenAmount,
    pub claim_tokens_minted: TokenAmount,
    pub principal: TokenAmount,
    pub unlock_time: Timestamp,
}

#[derive(Debug)]
pub struct Unstaked<'a> {
    pub pool_id: PoolId,
    pub position_index: PositionIndex,
    pub account_id: &'a str,
    pub credited: TokenAmount,
    pub released: TokenAmount,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepaidWith {
    PrincipalToken,
    ClaimToken,
}

#[derive(Debug)]
pub struct Repaid<'a> {
    pub pool_id: PoolId,
    pub position_index: PositionIndex,
    pub account_id: &'a str,
    pub repaid_with: RepaidWith,
    pub credited: TokenAmount,
    pub debt: TokenAmount,
    pub refund: TokenAmount,
    pub released: TokenAmount,
}

#[derive(Debug)]
pub struct YieldHarvested<'a> {
    pub asset: &'a AssetId,
    pub amount: TokenAmount,
    /// true if the amount was escrowed because no principal was staked
    pub escrowed: bool,
}

#[derive(Debug)]
pub struct ReserveSwept<'a> {
    pub asset: &'a AssetId,
    pub treasury_id: &'a str,
    pub amount: TokenAmount,
}

#[derive(Debug)]
pub struct AssetTransferFailed<'a> {
    pub account_id: &'a str,
    pub asset: &'a AssetId,
    pub amount: TokenAmount,
}

#[derive(Debug)]
pub struct OperatorChanged {
    pub operator_id: AccountId,
}

#[derive(Debug)]
pub struct StorageDeposited<'a> {
    pub account_id: &'a str,
    pub amount: TokenAmount,
    pub balance: TokenAmount,
}

#[derive(Debug)]
pub struct StorageFeeCharged<'a> {
    pub account_id: &'a str,
    pub fee: TokenAmount,
}

#[derive(Debug)]
pub struct EmissionPoolCreated<'a> {
    pub pool_id: PoolId,
    pub asset: &'a AssetId,
    pub points_weight: u64,
}

#[derive(Debug)]
pub struct EmissionStaked<'a> {
    pub pool_id: PoolId,
    pub account_id: &'a str,
    pub amount: TokenAmount,
    pub total: TokenAmount,
}

#[derive(Debug)]
pub struct EmissionClaimed<'a> {
    pub pool_id: PoolId,
    pub account_id: &'a str,
    pub amount: TokenAmount,
}

#[derive(Debug)]
pub struct EmissionUnstaked<'a> {
    pub pool_id: PoolId,
    pub account_id: &'a str,
    pub released: TokenAmount,
    pub claimed: TokenAmount,
}

#[derive(Debug)]
pub struct YieldClaimed<'a> {
    pub asset: &'a AssetId,
    pub delivered: TokenAmount,
}
