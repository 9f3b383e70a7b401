use crate::domain::AssetId;
use near_sdk::{ext_contract, json_types::U128};

/// External yield source adapter, e.g., a rebasing token or a native yield vault.
#[ext_contract(ext_yield_source)]
pub trait ExtYieldSource {
    /// yield that is currently claimable for the asset
    fn claimable_yield(&self, asset: AssetId) -> U128;

    /// Delivers the claimable yield for the asset to the predecessor account and resolves to the
    /// amount that was delivered:
    /// - NEAR is attached to a `deposit_yield` call
    /// - tokens are transferred via `ft_transfer_call` with a `"Yield"` message
    fn claim_yield(&mut self, asset: AssetId) -> U128;
}
