use crate::{
    core::U256,
    domain::TokenAmount,
    errors::{
        illegal_state::{ARITHMETIC_OVERFLOW, ARITHMETIC_UNDERFLOW},
        staking_errors::DIVISION_HAZARD,
    },
    near::YOCTO,
};
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use std::fmt::{self, Display, Formatter};
use std::io::Write;

/// fixed point scale applied to the accumulated yield per unit of principal
pub const SCALE: u128 = YOCTO;

/// Cumulative yield distributed per unit of staked principal, scaled by [SCALE].
///
/// The value is monotonically non-decreasing. Every division truncates, thus the yield that is
/// attributed to positions can never exceed the yield that was harvested.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct RewardPerUnit(pub U256);

impl RewardPerUnit {
    pub fn value(&self) -> U256 {
        self.0
    }

    /// distributes `amount` pro-rata over `total_principal`
    /// - `self += amount * SCALE / total_principal`
    ///
    /// ## Panics
    /// - if `total_principal` is zero
    pub fn increment(&mut self, amount: TokenAmount, total_principal: TokenAmount) {
        assert!(!total_principal.is_zero(), DIVISION_HAZARD);
        let delta = U256::from(amount.value()) * U256::from(SCALE)
            / U256::from(total_principal.value());
        self.0 = self.0.checked_add(delta).expect(ARITHMETIC_OVERFLOW);
    }

    /// yield accrued by `principal` since the accumulator stood at `baseline`, rounded down
    ///
    /// ## Panics
    /// - if `baseline` is ahead of the accumulator
    /// - if the accrued amount does not fit into 128 bits
    pub fn accrued(&self, principal: TokenAmount, baseline: RewardPerUnit) -> TokenAmount {
        let delta = self.0.checked_sub(baseline.0).expect(ARITHMETIC_UNDERFLOW);
        if delta.is_zero() || principal.is_zero() {
            return TokenAmount(0);
        }
        let accrued = U256::from(principal.value())
            .checked_mul(delta)
            .expect(ARITHMETIC_OVERFLOW)
            / U256::from(SCALE);
        assert!(accrued.bits() <= 128, ARITHMETIC_OVERFLOW);
        accrued.low_u128().into()
    }
}

impl From<U256> for RewardPerUnit {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Display for RewardPerUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// stored as 4 little endian u64 limbs
impl BorshSerialize for RewardPerUnit {
    fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let U256(limbs) = self.0;
        for limb in limbs.iter() {
            limb.serialize(writer)?;
        }
        Ok(())
    }
}

impl BorshDeserialize for RewardPerUnit {
    fn deserialize(buf: &mut &[u8]) -> std::io::Result<Self> {
        let mut limbs = [0u64; 4];
        for limb in limbs.iter_mut() {
            *limb = u64::deserialize(buf)?;
        }
        Ok(Self(U256(limbs)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn increment_distributes_pro_rata() {
        let mut acc = RewardPerUnit::default();
        acc.increment(TokenAmount(YOCTO / 2), TokenAmount(2 * YOCTO));
        assert_eq!(acc.value(), U256::from(YOCTO / 4));
        assert_eq!(
            acc.accrued(TokenAmount(YOCTO), RewardPerUnit::default()),
            TokenAmount(YOCTO / 4)
        );
    }

    #[test]
    fn accrued_rounds_down() {
        let mut acc = RewardPerUnit::default();
        // 1 unit over 3 units of principal
        acc.increment(TokenAmount(1), TokenAmount(3));
        assert_eq!(
            acc.accrued(TokenAmount(1), RewardPerUnit::default()),
            TokenAmount(0)
        );
        assert_eq!(
            acc.accrued(TokenAmount(3), RewardPerUnit::default()),
            TokenAmount(0)
        );
        assert_eq!(
            acc.accrued(TokenAmount(6), RewardPerUnit::default()),
            TokenAmount(1)
        );
    }

    #[test]
    fn accrued_from_current_baseline_is_zero() {
        let mut acc = RewardPerUnit::default();
        acc.increment(TokenAmount(YOCTO), TokenAmount(YOCTO));
        assert_eq!(acc.accrued(TokenAmount(YOCTO), acc), TokenAmount(0));
    }

    #[test]
    #[should_panic(expected = "DivisionHazard")]
    fn increment_with_zero_principal_panics() {
        let mut acc = RewardPerUnit::default();
        acc.increment(TokenAmount(YOCTO), TokenAmount(0));
    }

    #[test]
    fn borsh_encoding_preserves_value() {
        let mut acc = RewardPerUnit::default();
        acc.increment(TokenAmount(u128::MAX), TokenAmount(1));
        let bytes = acc.try_to_vec().unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(RewardPerUnit::try_from_slice(&bytes).unwrap(), acc);
    }

    #[quickcheck]
    fn accumulator_is_non_decreasing(harvests: Vec<(u64, u64)>) -> bool {
        let mut acc = RewardPerUnit::default();
        harvests
            .into_iter()
            .filter(|(_, total_principal)| *total_principal > 0)
            .all(|(amount, total_principal)| {
                let before = acc;
                acc.increment(TokenAmount(amount as u128), TokenAmount(total_principal as u128));
                acc >= before
            })
    }

    #[quickcheck]
    fn distributed_yield_never_exceeds_harvested_yield(
        principals: Vec<u64>,
        harvests: Vec<u64>,
    ) -> TestResult {
        let principals: Vec<u128> = principals
            .into_iter()
            .filter(|principal| *principal > 0)
            .map(|principal| principal as u128)
            .collect();
        if principals.is_empty() {
            return TestResult::discard();
        }
        let total_principal = TokenAmount(principals.iter().sum());

        let mut acc = RewardPerUnit::default();
        let mut total_harvested = 0u128;
        for amount in harvests {
            acc.increment(TokenAmount(amount as u128), total_principal);
            total_harvested += amount as u128;
        }

        let total_accrued: u128 = principals
            .iter()
            .map(|principal| {
                acc.accrued(TokenAmount(*principal), RewardPerUnit::default())
                    .value()
            })
            .sum();
        TestResult::from_bool(total_accrued <= total_harvested)
    }
}
