use crate::interface::TokenAmount;
use near_sdk::json_types::ValidAccountId;

/// Accounts prepay for the contract storage that their positions use.
///
/// Every position that is opened is charged the storage it actually consumes, priced at the
/// configured storage cost per byte. Storage fees are not refunded, because closed positions are
/// retained.
pub trait AccountStorage {
    /// Credits the attached deposit to the account's storage balance. If `account_id` is not
    /// specified, then the predecessor account is credited.
    ///
    /// The first deposit for an account pays for its storage balance record.
    ///
    /// Returns the account's storage balance.
    ///
    /// ## Panics
    /// - if no deposit is attached
    /// - if the first deposit does not cover the storage balance record
    ///
    /// #[payable]
    fn storage_deposit(&mut self, account_id: Option<ValidAccountId>) -> TokenAmount;

    /// Withdraws the specified amount from the predecessor's storage balance. If the amount is not
    /// specified, then the full balance is withdrawn.
    ///
    /// Returns the account's remaining storage balance.
    ///
    /// ## Panics
    /// - if exactly 1 yoctoNEAR is not attached
    /// - if the account has no storage balance
    /// - if the amount exceeds the storage balance
    ///
    /// #[payable]
    fn storage_withdraw(&mut self, amount: Option<TokenAmount>) -> TokenAmount;

    fn storage_balance_of(&self, account_id: ValidAccountId) -> TokenAmount;
}
