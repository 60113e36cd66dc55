// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{
    error::BignumError,
    macros::impl_binary_ops,
    magnitude::Magnitude,
    radix::Radix,
    utils::{strip_leading_zeros, sub_shifted},
    view::MagnitudeView,
};
use num_traits::{One, Zero};

impl<R: Radix> Magnitude<R> {
    /// Floor quotient and remainder in one pass.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), BignumError> {
        if rhs.is_zero() {
            return Err(BignumError::DivisionByZero);
        }
        let mut remainder = self.clone();
        let quotient = remainder.long_divide(rhs.view());

        Ok((quotient, remainder))
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, BignumError> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// `self - (self / rhs) * rhs`.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, BignumError> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }

    pub fn try_div_assign(&mut self, rhs: MagnitudeView<'_, R>) -> Result<(), BignumError> {
        if rhs.is_zero() {
            return Err(BignumError::DivisionByZero);
        }
        *self = self.long_divide(rhs);

        Ok(())
    }

    pub fn try_rem_assign(&mut self, rhs: MagnitudeView<'_, R>) -> Result<(), BignumError> {
        if rhs.is_zero() {
            return Err(BignumError::DivisionByZero);
        }
        self.long_divide(rhs);

        Ok(())
    }

    /// Long division, most-significant quotient digit first. `self` is reduced
    /// to the remainder in place and the quotient is returned.
    ///
    /// Each quotient digit is assembled from the coefficients of the doubling
    /// table, largest first: whenever `coef * divisor`, shifted into position,
    /// still fits under what is left, it is subtracted and `coef` is added to
    /// the digit.
    fn long_divide(&mut self, divisor: MagnitudeView<'_, R>) -> Self {
        debug_assert!(!divisor.is_zero(), "long division by zero");

        if self.len() < divisor.len() {
            return Self::zero();
        }

        let table = doubling_table(divisor);
        tracing::trace!(
            dividend_digits = self.len(),
            divisor_digits = divisor.len(),
            multiples = table.len(),
            "long division"
        );

        let top = self.len() - divisor.len();
        let mut quotient = vec![R::Digit::zero(); top + 1];

        for shift in (0..=top).rev() {
            for (multiple, coef) in &table {
                // the remainder may already be shorter than `shift`
                let window = self.view_range(shift.min(self.len()), self.len());
                if multiple.view() <= window {
                    quotient[shift] = quotient[shift] + *coef;
                    sub_shifted(self.digits_mut(), shift, multiple.digits(), R::BASE);
                }
            }
        }

        strip_leading_zeros(&mut quotient);
        Self::from_canonical(quotient)
    }

    #[track_caller]
    #[inline]
    fn div_assign_impl(&mut self, rhs: &Self) {
        if let Err(err) = self.try_div_assign(rhs.view()) {
            panic!("{err}");
        }
    }

    #[track_caller]
    #[inline]
    fn rem_assign_impl(&mut self, rhs: &Self) {
        if let Err(err) = self.try_rem_assign(rhs.view()) {
            panic!("{err}");
        }
    }
}

/// `(divisor * 2^k, 2^k)` for every `2^k < BASE`, largest first.
///
/// Rebuilt on every division; it holds `log2(BASE)` entries of at most
/// `divisor.len() + 1` digits each.
fn doubling_table<R: Radix>(divisor: MagnitudeView<'_, R>) -> Vec<(Magnitude<R>, R::Digit)> {
    let mut table = Vec::new();
    let mut multiple = Magnitude::from(divisor);
    let mut coef = R::Digit::one();

    while coef < R::BASE {
        let doubled = &multiple + &multiple;
        table.push((multiple, coef));
        multiple = doubled;
        coef = coef + coef;
    }

    table.reverse();
    table
}

impl_binary_ops! {
    Magnitude,
    Div::div, DivAssign::div_assign => div_assign_impl;
    Rem::rem, RemAssign::rem_assign => rem_assign_impl;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radix::{Billion, Decimal, Word};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    type Dec = Magnitude<Decimal>;

    fn assert_matches_native(a: u128, b: u128) {
        let (q, r) = Dec::from(a).div_rem(&Dec::from(b)).unwrap();
        assert_eq!((q.get::<u128>(), r.get::<u128>()), (a / b, a % b), "{a} / {b} in base 10");

        let (q, r) = Magnitude::<Billion>::from(a).div_rem(&Magnitude::from(b)).unwrap();
        assert_eq!((q.get::<u128>(), r.get::<u128>()), (a / b, a % b), "{a} / {b} in base 1e9");

        let (q, r) = Magnitude::<Word>::from(a).div_rem(&Magnitude::from(b)).unwrap();
        assert_eq!((q.get::<u128>(), r.get::<u128>()), (a / b, a % b), "{a} / {b} in base 2^32");
    }

    #[test]
    fn scenario_123_by_45() {
        let x = Dec::from(123u32);
        let y = Dec::from(45u32);

        assert_eq!((&x / &y).get::<u32>(), 2);
        assert_eq!((&x % &y).get::<u32>(), 33);
        assert_eq!(x.div_rem(&y), Ok((Dec::from(2u32), Dec::from(33u32))));
    }

    #[test]
    fn short_dividend_gives_zero_quotient() {
        let (q, r) = Dec::from(45u32).div_rem(&Dec::from(123u32)).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, Dec::from(45u32));

        let (q, r) = Dec::zero().div_rem(&Dec::from(7u32)).unwrap();
        assert!(q.is_zero());
        assert!(r.is_zero());
    }

    #[test]
    fn exact_division_empties_the_remainder_early() {
        // remainder hits zero while higher shifts still have multiples left
        assert_eq!(Dec::from(200u32).div_rem(&Dec::from(10u32)), Ok((Dec::from(20u32), Dec::zero())));
        assert_eq!(Dec::from(9000u32).div_rem(&Dec::from(1000u32)), Ok((Dec::from(9u32), Dec::zero())));
    }

    #[test]
    fn division_by_zero_is_reported() {
        for x in [Dec::zero(), Dec::one(), Dec::from(123_456u32)] {
            assert_eq!(x.checked_div(&Dec::zero()), Err(BignumError::DivisionByZero));
            assert_eq!(x.checked_rem(&Dec::zero()), Err(BignumError::DivisionByZero));

            let mut y = x.clone();
            assert_eq!(y.try_div_assign(Dec::zero().view()), Err(BignumError::DivisionByZero));
            assert_eq!(y.try_rem_assign(Dec::zero().view()), Err(BignumError::DivisionByZero));
            assert_eq!(y, x);
        }
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_operator_panics_on_zero() {
        let _ = Dec::from(5u32) / Dec::zero();
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn remainder_operator_panics_on_zero() {
        let mut x = Dec::zero();
        x %= Dec::zero();
    }

    #[test]
    fn matches_native_division_at_edges() {
        let edges = [0, 1, 2, 9, 10, 11, 99, 100, 1_000_000_007, u128::from(u64::MAX), u128::MAX];
        for &a in &edges {
            for &b in edges.iter().filter(|&&b| b != 0) {
                assert_matches_native(a, b);
            }
        }
    }

    proptest! {
        #[test]
        fn matches_native_division(a in any::<u128>(), b in 1..=u128::MAX) {
            assert_matches_native(a, b);
        }

        #[test]
        fn matches_native_division_by_short_divisor(a in any::<u128>(), b in 1u128..1_000_000) {
            assert_matches_native(a, b);
        }
    }

    #[test]
    fn quotient_times_divisor_plus_remainder() {
        let a = Dec::from(u128::MAX) * Dec::from(u128::MAX) + Dec::from(12_345u32);
        let b = Dec::from(98_765_432_123_456_789u64);
        let (q, r) = a.div_rem(&b).unwrap();

        assert!(r < b);
        assert_eq!(&q * &b + &r, a);
    }

    #[test]
    fn doubling_table_covers_every_digit() {
        let divisor = Dec::from(7u32);
        let table = doubling_table(divisor.view());
        let coefs: Vec<u32> = table.iter().map(|(_, c)| *c).collect();
        assert_eq!(coefs, vec![8, 4, 2, 1]);
        assert_eq!(table[0].0, Dec::from(56u32));
    }
}
