// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{radix::Digit, signed::Sign};
use ::uint::construct_uint;

// scuffed doc comment because the macro codegens the beginning of it
construct_uint! {
    /// with 256-bits of precision, consisting of four 64-bit words.
    pub struct U256(4);
}

impl U256 {
    #[inline]
    pub fn wrapping_add(&self, other: U256) -> U256 {
        let (result, _) = self.overflowing_add(other);

        result
    }

    #[inline]
    pub fn wrapping_mul(&self, other: U256) -> U256 {
        let (result, _) = self.overflowing_mul(other);

        result
    }
}

/// A fixed-width integer that bignums are built from and extracted into.
///
/// Extraction is unchecked: [`NativeInt::mul_add_wrapping`] and
/// [`NativeInt::neg_wrapping`] wrap modulo the type's width, so a value that
/// does not fit comes back truncated rather than as an error.
pub trait NativeInt: Copy {
    const ZERO: Self;

    fn sign(self) -> Sign;

    /// Digits of `|self|` in `base`, least-significant first, no top zeros.
    fn abs_digits<D: Digit>(self, base: D) -> Vec<D>;

    /// `self * base + digit`, wrapping.
    fn mul_add_wrapping(self, base: u128, digit: u128) -> Self;

    fn neg_wrapping(self) -> Self;
}

fn u128_digits<D: Digit>(mut value: u128, base: D) -> Vec<D> {
    let base = base.widen();
    let mut digits = Vec::new();
    while value != 0 {
        digits.push(D::narrow(value % base));
        value /= base;
    }
    digits
}

macro_rules! impl_native_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl NativeInt for $t {
                const ZERO: Self = 0;

                #[inline]
                fn sign(self) -> Sign {
                    if self == 0 { Sign::Zero } else { Sign::Positive }
                }

                #[inline]
                fn abs_digits<D: Digit>(self, base: D) -> Vec<D> {
                    u128_digits(self as u128, base)
                }

                #[inline]
                fn mul_add_wrapping(self, base: u128, digit: u128) -> Self {
                    self.wrapping_mul(base as $t).wrapping_add(digit as $t)
                }

                #[inline]
                fn neg_wrapping(self) -> Self {
                    self.wrapping_neg()
                }
            }
        )*
    };
}

macro_rules! impl_native_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl NativeInt for $t {
                const ZERO: Self = 0;

                #[inline]
                fn sign(self) -> Sign {
                    match self.cmp(&0) {
                        core::cmp::Ordering::Less => Sign::Negative,
                        core::cmp::Ordering::Equal => Sign::Zero,
                        core::cmp::Ordering::Greater => Sign::Positive,
                    }
                }

                #[inline]
                fn abs_digits<D: Digit>(self, base: D) -> Vec<D> {
                    u128_digits(self.unsigned_abs() as u128, base)
                }

                #[inline]
                fn mul_add_wrapping(self, base: u128, digit: u128) -> Self {
                    self.wrapping_mul(base as $t).wrapping_add(digit as $t)
                }

                #[inline]
                fn neg_wrapping(self) -> Self {
                    self.wrapping_neg()
                }
            }
        )*
    };
}

impl_native_unsigned!(u8, u16, u32, u64, u128, usize);
impl_native_signed!(i8, i16, i32, i64, i128, isize);

impl NativeInt for U256 {
    const ZERO: Self = U256::zero();

    #[inline]
    fn sign(self) -> Sign {
        if self.is_zero() { Sign::Zero } else { Sign::Positive }
    }

    fn abs_digits<D: Digit>(self, base: D) -> Vec<D> {
        let base_wide = U256::from(base.widen());
        let mut value = self;
        let mut digits = Vec::new();
        while !value.is_zero() {
            let (quotient, remainder) = value.div_mod(base_wide);
            digits.push(D::narrow(remainder.low_u128()));
            value = quotient;
        }
        digits
    }

    #[inline]
    fn mul_add_wrapping(self, base: u128, digit: u128) -> Self {
        self.wrapping_mul(U256::from(base)).wrapping_add(U256::from(digit))
    }

    /// Two's-complement negation modulo 2^256.
    #[inline]
    fn neg_wrapping(self) -> Self {
        (!self).wrapping_add(U256::one())
    }
}
