//! centralizes all error messages

pub mod asserts {
    pub const PREDECESSOR_MUST_BE_SELF: &str = "contract call is only allowed internally";
    pub const PREDECESSOR_MUST_BE_OPERATOR: &str =
        "contract call is only allowed by an operator account";
    pub const OPERATOR_ID_MUST_NOT_BE_CONTRACT_ID: &str =
        "operator account ID must not be the contract account ID";
    pub const PREDECESSOR_MUST_BE_OWNER: &str =
        "contract call is only allowed by the contract owner";
    pub const PREDECESSOR_MUST_BE_YIELD_SOURCE: &str =
        "contract call is only allowed by the yield source";
    pub const ATTACHED_DEPOSIT_IS_REQUIRED: &str = "attached deposit is required";
    pub const EXACTLY_ONE_YOCTO_REQUIRED: &str = "exactly 1 yoctoNEAR must be attached";
}

/// position lifecycle error taxonomy
pub mod staking_errors {
    pub const INVALID_AMOUNT: &str = "InvalidAmount : amount must be greater than zero";

    pub const NOT_OWNER: &str = "NotOwner : caller does not own the position";

    pub const POSITION_CLOSED: &str = "PositionClosed : position is already closed";

    pub const EXTENSION_TOO_SHORT: &str =
        "InvalidAmount : extra lock duration must be at least the pool lock duration";

    pub const FLEXIBLE_POSITION_NOT_EXTENDABLE: &str =
        "InvalidAmount : positions in flexible pools cannot be extended";

    pub const INVALID_POSITION: &str = "InvalidPosition : position does not exist";

    pub const STILL_LOCKED: &str = "StillLocked : position is still locked";

    pub const INSUFFICIENT_PAYMENT: &str =
        "InsufficientPayment : payment does not cover the position debt";

    pub const DURATION_EXCEEDED: &str =
        "DurationExceeded : lock span would exceed the max lock duration";

    pub const DIVISION_HAZARD: &str =
        "DivisionHazard : yield cannot be distributed over zero principal";
}

/// emission pool errors
pub mod emission_errors {
    pub const NO_STAKING: &str = "NoStaking : account has no stake in the pool";

    pub const EMISSION_POOL_NOT_FOUND: &str = "emission pool does not exist";
}

pub mod storage_errors {
    pub const INSUFFICIENT_STORAGE_BALANCE: &str =
        "InsufficientStorageBalance : storage balance does not cover the storage fee - use storage_deposit to top it up";

    pub const INSUFFICIENT_STORAGE_DEPOSIT: &str =
        "InsufficientStorageBalance : attached deposit does not cover the storage balance record";

    pub const STORAGE_WITHDRAWAL_EXCEEDS_BALANCE: &str =
        "withdrawal amount exceeds the storage balance";

    pub const ACCOUNT_NOT_REGISTERED: &str = "account has no storage balance";
}

pub mod pool_errors {
    pub const POOL_NOT_FOUND: &str = "InvalidPosition : pool does not exist";

    pub const ASSET_NOT_REGISTERED: &str = "asset group is not registered";

    pub const ASSET_ALREADY_REGISTERED: &str = "asset group is already registered";

    pub const NATIVE_PAYMENT_NOT_ACCEPTED: &str =
        "pool asset is a fungible token - payments must be made via ft_transfer_call";

    pub const TOKEN_NOT_ACCEPTED: &str = "token is not accepted by the pool";

    pub const INVALID_TRANSFER_MESSAGE: &str = "invalid transfer message";
}

pub mod treasury_errors {
    pub const TREASURY_NOT_SET: &str = "treasury account is not set";

    pub const YIELD_SOURCE_NOT_SET: &str = "yield source account is not set";

    pub const NO_PENDING_RELEASE: &str = "there are no pending releases for the account";
}

pub mod yield_source_failures {
    pub const CLAIM_YIELD_FAILURE: &str = "failed to claim yield from the yield source";

    pub const INVALID_CLAIMED_AMOUNT: &str = "yield source returned an invalid claimed amount";
}

pub mod illegal_state {
    pub const ARITHMETIC_OVERFLOW: &str = "ILLEGAL STATE : arithmetic overflow";

    pub const ARITHMETIC_UNDERFLOW: &str = "ILLEGAL STATE : arithmetic underflow";

    pub const ASSET_GROUP_SHOULD_EXIST: &str = "ILLEGAL STATE : asset group should exist";

    pub const STAKER_POSITIONS_SHOULD_EXIST: &str =
        "ILLEGAL STATE : staker positions should exist";
}
