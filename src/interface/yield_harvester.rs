use crate::domain::AssetId;
use crate::interface::TokenAmount;
use near_sdk::Promise;

pub trait YieldHarvester {
    /// Requests the yield source to deliver the realized yield for the asset. The yield is
    /// distributed pro-rata over the principal that is staked at the time it is received:
    /// - NEAR yield is delivered via [YieldHarvester::deposit_yield]
    /// - token yield is delivered via `ft_transfer_call` with [crate::interface::TransferMessage::Yield]
    ///
    /// Only yield that is actually received is distributed. If no principal is staked, then the
    /// yield is escrowed into the asset group's reserve.
    ///
    /// The promise resolves to the amount that the yield source delivered.
    ///
    /// ## Panics
    /// - if the asset group is not registered
    /// - if the yield source is not configured
    fn harvest(&mut self, asset: AssetId) -> Promise;

    /// returns the yield that is currently claimable from the yield source for the asset
    fn claimable_yield(&self, asset: AssetId) -> Promise;

    /// Receives NEAR yield that is attached by the yield source.
    ///
    /// Returns the amount that was received.
    ///
    /// ## Panics
    /// - if the predecessor is not the yield source
    ///
    /// #[payable]
    fn deposit_yield(&mut self) -> TokenAmount;
}
