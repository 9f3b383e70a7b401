//required in order for near_bindgen macro to work outside of lib.rs
use crate::*;
use crate::{
    core::Hash,
    errors::{
        asserts::ATTACHED_DEPOSIT_IS_REQUIRED,
        storage_errors::{
            ACCOUNT_NOT_REGISTERED, INSUFFICIENT_STORAGE_BALANCE, INSUFFICIENT_STORAGE_DEPOSIT,
            STORAGE_WITHDRAWAL_EXCEEDS_BALANCE,
        },
    },
    events::{StorageDeposited, StorageFeeCharged},
    interface::{self, AccountStorage},
    near::{assert_yocto_near_attached, log, ONE_YOCTO},
};
use near_sdk::{env, json_types::ValidAccountId, near_bindgen, Promise, StorageUsage};

#[near_bindgen]
impl AccountStorage for StakingPoolsContract {
    #[payable]
    fn storage_deposit(&mut self, account_id: Option<ValidAccountId>) -> interface::TokenAmount {
        assert!(env::attached_deposit() > 0, ATTACHED_DEPOSIT_IS_REQUIRED);
        let account_id: AccountId =
            account_id.map_or_else(env::predecessor_account_id, Into::into);
        let key = Hash::from(account_id.as_str());
        let deposit = TokenAmount(env::attached_deposit());

        let balance = match self.storage_balances.get(&key) {
            Some(balance) => balance + deposit,
            None => {
                let initial_storage_usage = env::storage_usage();
                self.storage_balances.insert(&key, &deposit);
                let fee = self.storage_fee(initial_storage_usage);
                assert!(deposit > fee, INSUFFICIENT_STORAGE_DEPOSIT);
                deposit - fee
            }
        };
        self.storage_balances.insert(&key, &balance);
        log(StorageDeposited {
            account_id: &account_id,
            amount: deposit,
            balance,
        });
        balance.into()
    }

    #[payable]
    fn storage_withdraw(&mut self, amount: Option<interface::TokenAmount>) -> interface::TokenAmount {
        assert_yocto_near_attached();
        let account_id = env::predecessor_account_id();
        let key = Hash::from(account_id.as_str());
        let balance = self.storage_balances.get(&key).expect(ACCOUNT_NOT_REGISTERED);
        let amount: TokenAmount = amount.map_or(balance, Into::into);
        assert!(amount <= balance, STORAGE_WITHDRAWAL_EXCEEDS_BALANCE);

        let balance = balance - amount;
        self.storage_balances.insert(&key, &balance);
        // the attached yoctoNEAR is returned with the withdrawal
        Promise::new(account_id).transfer((amount + ONE_YOCTO).value());
        balance.into()
    }

    fn storage_balance_of(&self, account_id: ValidAccountId) -> interface::TokenAmount {
        self.storage_balances
            .get(&Hash::from(account_id.as_ref().as_str()))
            .unwrap_or_default()
            .into()
    }
}

impl StakingPoolsContract {
    /// cost of the storage that was allocated since `initial_storage_usage`
    fn storage_fee(&self, initial_storage_usage: StorageUsage) -> TokenAmount {
        let storage_usage = env::storage_usage().saturating_sub(initial_storage_usage);
        TokenAmount(storage_usage as u128 * self.config.storage_cost_per_byte().value())
    }

    /// Debits the cost of the storage allocated since `initial_storage_usage` from the account's
    /// storage balance.
    ///
    /// ## Panics
    /// if the account's storage balance does not cover the fee
    pub(crate) fn charge_storage_fee(
        &mut self,
        account_id: &str,
        initial_storage_usage: StorageUsage,
    ) -> TokenAmount {
        let fee = self.storage_fee(initial_storage_usage);
        if fee.is_zero() {
            return fee;
        }
        let key = Hash::from(account_id);
        let balance = self.storage_balances.get(&key).unwrap_or_default();
        assert!(balance >= fee, INSUFFICIENT_STORAGE_BALANCE);
        self.storage_balances.insert(&key, &(balance - fee));
        log(StorageFeeCharged { account_id, fee });
        fee
    }
}
