use crate::errors::illegal_state::{ARITHMETIC_OVERFLOW, ARITHMETIC_UNDERFLOW};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// amount of the underlying asset or of its claim token expressed in the smallest unit
/// - for the native asset the unit is yoctoNEAR
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct TokenAmount(pub u128);

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl TokenAmount {
    pub fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// clamps at zero
    pub fn saturating_sub(self, rhs: TokenAmount) -> TokenAmount {
        TokenAmount(self.0.saturating_sub(rhs.0))
    }
}

impl From<TokenAmount> for u128 {
    fn from(value: TokenAmount) -> Self {
        value.0
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// ## Panics
/// on overflow
impl Add for TokenAmount {
    type Output = TokenAmount;

    fn add(self, rhs: TokenAmount) -> Self::Output {
        TokenAmount(self.0.checked_add(rhs.0).expect(ARITHMETIC_OVERFLOW))
    }
}

impl AddAssign for TokenAmount {
    fn add_assign(&mut self, rhs: TokenAmount) {
        *self = *self + rhs;
    }
}

/// ## Panics
/// on underflow
impl Sub for TokenAmount {
    type Output = TokenAmount;

    fn sub(self, rhs: TokenAmount) -> Self::Output {
        TokenAmount(self.0.checked_sub(rhs.0).expect(ARITHMETIC_UNDERFLOW))
    }
}

impl SubAssign for TokenAmount {
    fn sub_assign(&mut self, rhs: TokenAmount) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn saturating_sub_clamps_at_zero() {
        assert_eq!(
            TokenAmount(5).saturating_sub(TokenAmount(10)),
            TokenAmount(0)
        );
        assert_eq!(TokenAmount(10).saturating_sub(TokenAmount(4)), TokenAmount(6));
    }

    #[test]
    #[should_panic(expected = "ILLEGAL STATE : arithmetic underflow")]
    fn sub_underflow_panics() {
        let _ = TokenAmount(1) - TokenAmount(2);
    }

    #[test]
    #[should_panic(expected = "ILLEGAL STATE : arithmetic overflow")]
    fn add_overflow_panics() {
        let mut amount = TokenAmount(u128::MAX);
        amount += TokenAmount(1);
    }
}
