//! Position ledger.
//!
//! Every operation settles the position against its asset group's accumulator before the
//! position's principal changes or the position is closed. State is only written after all
//! checks have passed - any panic aborts the whole transition.

use crate::{
    domain::{
        AssetGroup, AssetId, Duration, Pool, PoolId, Position, PositionIndex, PositionKey,
        StakerKey, Timestamp, TokenAmount, MAX_LOCK_DURATION,
    },
    errors::{
        illegal_state::STAKER_POSITIONS_SHOULD_EXIST,
        staking_errors::{
            DURATION_EXCEEDED, EXTENSION_TOO_SHORT, FLEXIBLE_POSITION_NOT_EXTENDABLE,
            INSUFFICIENT_PAYMENT, INVALID_AMOUNT, NOT_OWNER, POSITION_CLOSED, STILL_LOCKED,
        },
    },
    events::{self, RepaidWith},
    interface::ext_claim_token,
    near::{log, NO_DEPOSIT},
    StakingPoolsContract,
};
use near_sdk::{env, AccountId, Promise};

/// the outcome of closing a position
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PositionExit {
    pub asset: AssetId,
    pub claim_token_id: AccountId,
    /// yield credited by the final settlement
    pub credited: TokenAmount,
    pub debt: TokenAmount,
    /// payment in excess of the debt
    pub refund: TokenAmount,
    /// deposit that is released to the owner
    pub released: TokenAmount,
}

impl StakingPoolsContract {
    /// Opens a new position for `account_id` in the pool and mints `amount` claim tokens to the
    /// account. The asset must already have been received by the contract.
    ///
    /// The storage used by the new position is paid for from the account's storage balance.
    ///
    /// ## Panics
    /// - if `amount` is zero
    /// - if the pool does not exist
    /// - if the account's storage balance does not cover the storage fee
    pub(crate) fn open_position(
        &mut self,
        pool_id: PoolId,
        account_id: &AccountId,
        amount: TokenAmount,
    ) -> PositionIndex {
        assert!(!amount.is_zero(), INVALID_AMOUNT);
        let initial_storage_usage = env::storage_usage();
        let mut pool = self.load_pool(pool_id);
        let mut group = self.pool_asset_group(&pool);

        let index = pool.open_position(amount);
        // the baseline is the current accumulator value, thus yield harvested before the position
        // was opened is never attributed to it
        let position = Position::new(
            account_id.clone(),
            amount,
            Timestamp::now(),
            pool.lock_duration(),
            group.acc_reward_per_unit(),
        );
        group.add_principal(amount);

        let staker_key = StakerKey::new(pool_id, account_id);
        let mut staker_positions = self.stakers.get(&staker_key).unwrap_or_default();
        if staker_positions.add(index) {
            pool.increment_active_stakers();
        }

        self.stakers.insert(&staker_key, &staker_positions);
        self.save_position(&PositionKey::new(pool_id, index), &position);
        self.save_pool(&pool);
        self.save_asset_group(pool.asset(), &group);
        self.charge_storage_fee(account_id, initial_storage_usage);

        self.mint_claim_tokens(&group, account_id, amount);
        log(events::Staked {
            pool_id,
            position_index: index,
            account_id,
            amount,
            unlock_time: position.unlock_time(),
        });
        index
    }

    /// Extends the lock and doubles the position's principal. Claim tokens equal to the principal
    /// before the extension are minted to the owner.
    ///
    /// ## Panics
    /// - if the pool is flexible
    /// - if `extra_duration` is less than the pool's lock duration
    /// - if the position does not exist
    /// - if `account_id` does not own the position
    /// - if the position is closed
    /// - if the lock span measured from the stake time would exceed [MAX_LOCK_DURATION]
    pub(crate) fn extend_position(
        &mut self,
        pool_id: PoolId,
        index: PositionIndex,
        account_id: &AccountId,
        extra_duration: Duration,
    ) {
        let mut pool = self.load_pool(pool_id);
        assert!(!pool.is_flexible(), FLEXIBLE_POSITION_NOT_EXTENDABLE);
        // every extension mints a full principal of claim tokens
        assert!(extra_duration >= pool.lock_duration(), EXTENSION_TOO_SHORT);
        let key = PositionKey::new(pool_id, index);
        let mut position = self.load_owned_active_position(&key, account_id);
        assert!(
            position.lock_span_with(extra_duration) <= MAX_LOCK_DURATION,
            DURATION_EXCEEDED
        );

        let mut group = self.pool_asset_group(&pool);
        let credited = group.settle(&mut position);
        let added = position.extend(extra_duration);
        group.add_principal(added);
        pool.add_principal(added);

        self.save_position(&key, &position);
        self.save_pool(&pool);
        self.save_asset_group(pool.asset(), &group);

        self.mint_claim_tokens(&group, account_id, added);
        log(events::PositionExtended {
            pool_id,
            position_index: index,
            account_id,
            credited,
            claim_tokens_minted: added,
            principal: position.principal(),
            unlock_time: position.unlock_time(),
        });
    }

    /// Closes an unlocked position. Yield credited to the position is not paid out - it remains in
    /// the asset group's reserve.
    ///
    /// The caller is responsible for transferring [PositionExit::released] to the owner.
    ///
    /// ## Panics
    /// - if the position does not exist
    /// - if `account_id` does not own the position
    /// - if the position is closed
    /// - if the position is still locked
    pub(crate) fn unstake_position(
        &mut self,
        pool_id: PoolId,
        index: PositionIndex,
        account_id: &AccountId,
    ) -> PositionExit {
        let mut pool = self.load_pool(pool_id);
        let key = PositionKey::new(pool_id, index);
        let mut position = self.load_owned_active_position(&key, account_id);
        assert!(position.is_unlocked(Timestamp::now()), STILL_LOCKED);

        let mut group = self.pool_asset_group(&pool);
        let credited = group.settle(&mut position);
        let exit = PositionExit {
            asset: pool.asset().clone(),
            claim_token_id: group.claim_token_id().clone(),
            credited,
            debt: TokenAmount(0),
            refund: TokenAmount(0),
            released: position.deposit(),
        };
        self.close_position(&key, &mut position, &mut pool, &mut group);

        log(events::Unstaked {
            pool_id,
            position_index: index,
            account_id,
            credited,
            released: exit.released,
        });
        exit
    }

    /// Early exit regardless of the lock state. The debt is the principal that is not yet covered
    /// by credited yield.
    /// - principal token payments are credited to the asset group's reserve
    /// - claim token payments are disposed of by the caller
    ///
    /// The caller is responsible for transferring [PositionExit::refund] and
    /// [PositionExit::released] to the owner.
    ///
    /// ## Panics
    /// - if the position does not exist
    /// - if `account_id` does not own the position
    /// - if the position is closed
    /// - if `payment` is less than the debt
    pub(crate) fn repay_position(
        &mut self,
        pool_id: PoolId,
        index: PositionIndex,
        account_id: &AccountId,
        payment: TokenAmount,
        repaid_with: RepaidWith,
    ) -> PositionExit {
        let mut pool = self.load_pool(pool_id);
        let key = PositionKey::new(pool_id, index);
        let mut position = self.load_owned_active_position(&key, account_id);

        let mut group = self.pool_asset_group(&pool);
        let credited = group.settle(&mut position);
        let debt = position.debt();
        assert!(payment >= debt, INSUFFICIENT_PAYMENT);
        if repaid_with == RepaidWith::PrincipalToken {
            group.credit_reserve(debt);
        }

        let exit = PositionExit {
            asset: pool.asset().clone(),
            claim_token_id: group.claim_token_id().clone(),
            credited,
            debt,
            refund: payment - debt,
            released: position.deposit(),
        };
        self.close_position(&key, &mut position, &mut pool, &mut group);

        log(events::Repaid {
            pool_id,
            position_index: index,
            account_id,
            repaid_with,
            credited,
            debt,
            refund: exit.refund,
            released: exit.released,
        });
        exit
    }

    fn load_owned_active_position(&self, key: &PositionKey, account_id: &str) -> Position {
        let position = self.load_position(key);
        assert!(position.owner() == account_id, NOT_OWNER);
        assert!(position.is_active(), POSITION_CLOSED);
        position
    }

    /// the position must be settled beforehand
    fn close_position(
        &mut self,
        key: &PositionKey,
        position: &mut Position,
        pool: &mut Pool,
        group: &mut AssetGroup,
    ) {
        position.close();
        group.remove_principal(position.principal());
        pool.close_position(position.principal(), position.deposit());

        let staker_key = StakerKey::new(key.pool_id, position.owner());
        let mut staker_positions = self
            .stakers
            .get(&staker_key)
            .expect(STAKER_POSITIONS_SHOULD_EXIST);
        if staker_positions.close() {
            pool.decrement_active_stakers();
        }

        self.stakers.insert(&staker_key, &staker_positions);
        self.save_position(key, position);
        self.save_pool(pool);
        self.save_asset_group(pool.asset(), group);
    }

    pub(crate) fn mint_claim_tokens(
        &self,
        group: &AssetGroup,
        account_id: &AccountId,
        amount: TokenAmount,
    ) -> Promise {
        ext_claim_token::mint(
            account_id.clone(),
            amount.value().into(),
            group.claim_token_id(),
            NO_DEPOSIT.into(),
            self.config.gas_config().claim_token().mint().value(),
        )
    }
}
