use crate::domain::AssetId;
use crate::interface::{Duration, PoolId, PositionIndex};
use near_sdk::Promise;

/// Position lifecycle operations.
///
/// Token pools receive stakes and principal token repayments via NEP-141 `ft_transfer_call` -
/// see [crate::interface::FungibleTokenReceiver]. Claim token repayments are always made via
/// `ft_transfer_call` on the claim token contract.
pub trait StakingService {
    /// Stakes the attached deposit into the pool and mints the same amount of claim tokens to the
    /// predecessor account.
    ///
    /// Returns the new position's index within the pool.
    ///
    /// The storage used by the position is paid for from the account's storage balance - see
    /// [crate::interface::AccountStorage].
    ///
    /// ## Panics
    /// - if no deposit is attached
    /// - if the pool does not exist
    /// - if the pool's asset is not NEAR
    /// - if the account's storage balance does not cover the storage fee
    ///
    /// #[payable]
    fn stake(&mut self, pool_id: PoolId) -> PositionIndex;

    /// Extends the position's lock by `extra_duration` seconds. The position's principal is doubled
    /// and claim tokens equal to the current principal are minted to the owner.
    ///
    /// ## Panics
    /// - if the pool is flexible
    /// - if `extra_duration` is less than the pool's lock duration
    /// - if the predecessor account does not own the position
    /// - if the position is closed
    /// - if the total lock span measured from the stake time would exceed 10 years
    fn extend(&mut self, pool_id: PoolId, position_index: PositionIndex, extra_duration: Duration);

    /// Closes an unlocked position and releases the deposit back to the owner.
    ///
    /// ## Panics
    /// - if the predecessor account does not own the position
    /// - if the position is closed
    /// - if the position is still locked
    fn unstake(&mut self, pool_id: PoolId, position_index: PositionIndex) -> Promise;

    /// Early exit for NEAR pools: the attached deposit pays the position's debt. The deposit plus
    /// any overpayment is transferred back to the owner.
    ///
    /// ## Panics
    /// - if the predecessor account does not own the position
    /// - if the position is closed
    /// - if the attached deposit is less than the position's debt
    /// - if the pool's asset is not NEAR
    ///
    /// #[payable]
    fn repay_with_principal_token(
        &mut self,
        pool_id: PoolId,
        position_index: PositionIndex,
    ) -> Promise;

    /// Retries a token transfer that previously failed.
    ///
    /// ## Panics
    /// - if there is nothing pending for the predecessor account
    fn withdraw_pending_release(&mut self, asset: AssetId) -> Promise;
}
