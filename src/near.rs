pub mod storage_keys;

use crate::{domain::TokenAmount, errors::asserts};
use near_sdk::{env, PromiseResult};
use std::fmt::Debug;

/// YOCTO = 10^24
pub const YOCTO: u128 = 1_000_000_000_000_000_000_000_000;

/// Used to indicate that no deposit is being attached to a cross contract func call
pub const NO_DEPOSIT: TokenAmount = TokenAmount(0);

/// NEP-141 `ft_transfer` requires exactly 1 yoctoNEAR to be attached
pub const ONE_YOCTO: TokenAmount = TokenAmount(1);

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// asserts that predecessor account is the contract itself - used to enforce that callbacks
/// should only be called internally - even though they are exposed on the public contract interface
pub fn assert_predecessor_is_self() {
    if env::predecessor_account_id() != env::current_account_id() {
        panic!(asserts::PREDECESSOR_MUST_BE_SELF)
    }
}

/// NEP-145 style: sensitive calls require exactly 1 yoctoNEAR to be attached, which requires a
/// full access key signature
pub fn assert_yocto_near_attached() {
    assert_eq!(
        env::attached_deposit(),
        ONE_YOCTO.value(),
        "{}",
        asserts::EXACTLY_ONE_YOCTO_REQUIRED
    )
}

pub fn is_promise_result_success(result: PromiseResult) -> bool {
    match result {
        PromiseResult::Successful(_) => true,
        _ => false,
    }
}

/// block timestamp truncated to seconds
pub fn block_timestamp_secs() -> u64 {
    env::block_timestamp() / NANOS_PER_SEC
}

/// wrapper around `near_sdk::env::log()` which supports structured logging
pub fn log<T: Debug>(event: T) {
    env::log(format!("{:#?}", event).as_bytes());
}
